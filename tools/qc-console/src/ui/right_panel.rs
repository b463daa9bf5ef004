//! Right panel: breadcrumbs and the active page.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::App;

/// Render the right panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let crumbs = app.breadcrumbs();
    let title = crumbs
        .last()
        .map(|crumb| format!(" {} ", crumb.label))
        .unwrap_or_else(|| format!(" {} ", app.active_route()));

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(inner);

    let mut trail = Vec::new();
    for (i, crumb) in crumbs.iter().enumerate() {
        if i > 0 {
            trail.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = if i + 1 == crumbs.len() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        trail.push(Span::styled(crumb.label.clone(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(trail)), chunks[0]);

    let page = app
        .active_page()
        .map(|page| page.as_str().to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Route: "),
            Span::styled(app.active_route().to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Page:  "),
            Span::styled(page, Style::default().fg(Color::Green)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "Visible pages",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(app.routes().iter().map(|entry| {
        Line::from(vec![
            Span::raw(format!("  {:<24}", entry.path)),
            Span::styled(entry.page.as_str().to_string(), Style::default().fg(Color::DarkGray)),
        ])
    }));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[1]);
}
