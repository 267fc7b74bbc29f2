use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use crate::internal::ui::app::{App, InputMode, ViewMode};
use crate::utils;

/// Truncate a string to `max_width` display columns, ending with an
/// ellipsis when anything was cut. Counts chars, which is good enough for
/// URLs.
pub fn ellipsize(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let truncated: String = text.chars().take(max_width - 1).collect();
    format!("{truncated}…")
}

/// Top-level render entry point, called once per frame.
pub fn render(app: &mut App, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_top_bar(app, f, chunks[0]);

    match app.view_mode {
        ViewMode::Shorten => render_form(app, f, chunks[1]),
        ViewMode::Listing => render_listing(app, f, chunks[1]),
        ViewMode::Stats => render_stats(app, f, chunks[1]),
    }

    render_status_bar(app, f, chunks[2]);

    if app.notification.is_some() {
        render_notification(app, f);
    }
}

fn render_top_bar(app: &App, f: &mut Frame, area: Rect) {
    let text = format!(
        "{} — NEKLI v{} | {}",
        app.view_mode, app.app_version, app.config.api.base_url
    );
    let p = Paragraph::new(text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(p, area);
}

fn render_form(app: &App, f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    // Input field. Shows a block cursor while editing; while a request is
    // in flight the field is visually disabled.
    let input_title = if app.loading {
        " Encurtando... "
    } else {
        " Encurte sua URL "
    };
    let display_text = if app.input_mode == InputMode::Editing && !app.loading {
        format!("{}█", app.url_input)
    } else {
        app.url_input.clone()
    };
    let input_style = if app.loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let border_style = if app.input_mode == InputMode::Editing && !app.loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(display_text).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(input_title),
    );
    f.render_widget(input, chunks[0]);

    // Result panel: keeps showing the last short URL until replaced.
    let result_lines = match &app.short_url {
        Some(short_url) => vec![
            Line::from(Span::styled(
                short_url.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Esc e depois y: copiar | o: abrir no navegador",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Cole sua URL acima e pressione Enter",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    let result = Paragraph::new(result_lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" URL encurtada "),
    );
    f.render_widget(result, chunks[1]);
}

fn render_listing(app: &mut App, f: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(30) as usize;
    let items: Vec<ListItem> = app
        .records
        .iter()
        .map(|record| {
            let domain = utils::url::extract_domain(&record.original_url);
            let created = record
                .created_at
                .as_deref()
                .map(utils::datetime::format_created_at)
                .unwrap_or_else(|| "—".to_string());
            let content = Line::from(vec![
                Span::styled(
                    format!("{:<8} ", record.short_code),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!("{:<30} ", ellipsize(&domain, width.max(10)))),
                Span::styled(
                    format!("{:>5} cliques | {}", record.clicks, created),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(content)
        })
        .collect();

    let title = if app.list_loading {
        " URLs encurtadas (carregando...) ".to_string()
    } else {
        format!(" URLs encurtadas ({} de {}) ", app.records.len(), app.total_urls)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_stats(app: &App, f: &mut Frame, area: Rect) {
    let text = if app.stats_loading {
        "Carregando...".to_string()
    } else if let Some(stats) = &app.stats {
        let created = stats
            .created_at
            .as_deref()
            .map(utils::datetime::format_created_at)
            .unwrap_or_else(|| "—".to_string());
        format!(
            "Código: {}\nURL curta: {}\nURL original: {}\nCriada em: {}\nCliques: {}",
            stats.short_code, stats.short_url, stats.original_url, created, stats.clicks
        )
    } else {
        "Sem dados.".to_string()
    };

    let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Estatísticas "),
    );
    f.render_widget(p, area);
}

fn render_status_bar(app: &App, f: &mut Frame, area: Rect) {
    let status = if app.input_mode == InputMode::Editing {
        "Enter: Encurtar | Esc: Sair do campo".to_string()
    } else {
        match app.view_mode {
            ViewMode::Shorten => {
                "i: Editar | Enter: Encurtar | y: Copiar | o: Abrir | l: URLs | h: Status | q: Sair"
                    .to_string()
            }
            ViewMode::Listing => {
                let mut s =
                    "j/k: Navegar | Enter: Estatísticas | h: Status | Esc/q: Voltar".to_string();
                if app.config.enable_dev_clear {
                    s.push_str(" | X: Limpar tudo");
                }
                s
            }
            ViewMode::Stats => "Esc/q: Voltar".to_string(),
        }
    };

    let p = Paragraph::new(status).style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_widget(p, area);
}

fn render_notification(app: &App, f: &mut Frame) {
    if let Some(notification) = &app.notification {
        let area = f.area();

        let popup_width = (notification.message.chars().count() as u16 + 4).min(area.width.saturating_sub(4));
        let popup_height = 3;
        let popup_x = (area.width.saturating_sub(popup_width)) / 2;
        let popup_y = area.height.saturating_sub(popup_height + 1);
        let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

        let (title, color) = if notification.is_error() {
            (" Erro ", Color::Red)
        } else {
            (" Ok ", Color::Green)
        };

        let popup = Paragraph::new(notification.message.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title),
            );

        f.render_widget(Clear, popup_area);
        f.render_widget(popup, popup_area);
    }
}
