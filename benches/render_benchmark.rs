use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ratatui::{Terminal, backend::TestBackend};
use tui_nekli_app::config::AppConfig;
use tui_nekli_app::internal::ui::app::App;
use tui_nekli_app::internal::ui::view::{self, ellipsize};
use tui_nekli_app::utils::url::is_valid_url;

fn benchmark_url_utils(c: &mut Criterion) {
    let long_url = format!("https://example.com/{}", "a".repeat(500));
    c.bench_function("is_valid_url long", |b| {
        b.iter(|| is_valid_url(black_box(&long_url)))
    });

    let long_text = "https://news.ycombinator.com/item?id=123456789".repeat(20);
    c.bench_function("ellipsize long", |b| {
        b.iter(|| ellipsize(black_box(&long_text), black_box(40)))
    });
}

fn benchmark_render(c: &mut Criterion) {
    c.bench_function("render form frame", |b| {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new(AppConfig::default());
        app.short_url = Some("http://localhost:5000/abc123".to_string());
        b.iter(|| {
            terminal.draw(|f| view::render(&mut app, f)).unwrap();
        })
    });
}

criterion_group!(benches, benchmark_url_utils, benchmark_render);
criterion_main!(benches);
