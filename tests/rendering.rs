use ratatui::buffer::Buffer;
use ratatui::{Terminal, backend::TestBackend};
use tui_nekli_app::config::AppConfig;
use tui_nekli_app::internal::models::UrlRecord;
use tui_nekli_app::internal::notification::Notification;
use tui_nekli_app::internal::ui::app::{App, ViewMode};
use tui_nekli_app::internal::ui::view;

fn buffer_text(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in buffer.area.top()..buffer.area.bottom() {
        for x in buffer.area.left()..buffer.area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

fn draw(app: &mut App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| view::render(app, f)).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_empty_form_render() {
    let mut app = App::new(AppConfig::default());
    let text = draw(&mut app);

    assert!(text.contains("Encurte sua URL"));
    assert!(text.contains("Cole sua URL acima"));
    assert!(text.contains("http://localhost:5000"));
}

#[test]
fn test_form_shows_short_url_result() {
    let mut app = App::new(AppConfig::default());
    app.short_url = Some("http://localhost:5000/abc123".to_string());
    let text = draw(&mut app);

    assert!(text.contains("http://localhost:5000/abc123"));
    assert!(text.contains("copiar"));
}

#[test]
fn test_form_shows_loading_state() {
    let mut app = App::new(AppConfig::default());
    app.loading = true;
    let text = draw(&mut app);

    assert!(text.contains("Encurtando..."));
}

#[test]
fn test_listing_render_formats_records() {
    let mut app = App::new(AppConfig::default());
    app.view_mode = ViewMode::Listing;
    app.records = vec![UrlRecord {
        original_url: "https://news.ycombinator.com/item?id=123".to_string(),
        short_code: "abc123".to_string(),
        short_url: "http://localhost:5000/abc123".to_string(),
        created_at: Some("2026-08-24T14:03:27.511908".to_string()),
        clicks: 7,
    }];
    app.total_urls = 1;
    let text = draw(&mut app);

    assert!(text.contains("abc123"));
    assert!(text.contains("news.ycombinator.com"));
    assert!(text.contains("7 cliques"));
    assert!(text.contains("24/08/2026 14:03"));
}

#[test]
fn test_error_notification_overlay() {
    let mut app = App::new(AppConfig::default());
    app.notification = Some(Notification::error("Por favor, insira uma URL válida"));
    let text = draw(&mut app);

    assert!(text.contains("Erro"));
    assert!(text.contains("Por favor, insira uma URL válida"));
}
