use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Copy text to the clipboard, reporting success as a boolean.
///
/// Tries the native clipboard first; when no provider is available (common
/// over SSH or in minimal environments) falls back to the OSC 52 escape
/// sequence, which asks the terminal emulator itself to store the text.
/// Never returns an error to the caller.
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(text).is_ok() {
                return true;
            }
            tracing::warn!("native clipboard rejected the text, trying OSC 52");
            copy_via_osc52(text)
        }
        Err(err) => {
            tracing::warn!("no native clipboard available ({}), trying OSC 52", err);
            copy_via_osc52(text)
        }
    }
}

fn copy_via_osc52(text: &str) -> bool {
    let payload = STANDARD.encode(text);
    let sequence = format!("\x1b]52;c;{payload}\x07");
    let mut stdout = std::io::stdout();
    stdout
        .write_all(sequence.as_bytes())
        .and_then(|_| stdout.flush())
        .is_ok()
}
