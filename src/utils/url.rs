use url::Url;

/// Prepend the default scheme when the string does not already carry one.
/// Example: "example.com" -> "https://example.com"
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Whether the string is an acceptable URL after scheme normalization.
/// Never panics; anything the parser rejects (or that has no host) is false.
pub fn is_valid_url(raw: &str) -> bool {
    match Url::parse(&normalize_url(raw)) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}

/// Extract the domain from a URL string.
/// Returns the raw input unchanged when it cannot be parsed, so callers
/// always have something to display.
/// Example: "https://github.com/foo/bar" -> "github.com"
pub fn extract_domain(raw: &str) -> String {
    Url::parse(&normalize_url(raw))
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| raw.to_string())
}
