//! Left panel: filtered menu + session summary.
//!
//! ```text
//! ┌──────────────────────────┐
//! │ MENU                     │
//! │   首页                   │
//! │ ▾ 系统管理               │
//! │     角色管理             │
//! ├──────────────────────────┤
//! │ SESSION                  │
//! │ Status: signed in        │
//! │ Permissions: 3           │
//! └──────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::domain::{App, RowKind};

/// Render the left panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Menu
            Constraint::Length(6), // Session
        ])
        .split(area);

    render_menu(frame, chunks[0], app);
    render_session(frame, chunks[1], app);
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected();
    let items: Vec<ListItem> = app
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let marker = match row.kind {
                RowKind::Branch { expanded: true } => "▾ ",
                RowKind::Branch { expanded: false } => "▸ ",
                RowKind::Leaf => "  ",
            };
            let indent = "  ".repeat(row.depth);

            let label_style = if row.key == app.active_route() {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if matches!(row.kind, RowKind::Branch { .. }) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };

            let line_style = if i == selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::raw(indent),
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(row.label, label_style),
            ]))
            .style(line_style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" MENU ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}

fn render_session(frame: &mut Frame, area: Rect, app: &App) {
    let status_color = match app.session_label.as_str() {
        "signed in" | "demo" => Color::Green,
        "token stored" => Color::Yellow,
        _ => Color::Red,
    };

    let text = vec![
        Line::from(vec![
            Span::raw("Status: "),
            Span::styled(app.session_label.clone(), Style::default().fg(status_color)),
        ]),
        Line::from(vec![
            Span::raw("Permissions: "),
            Span::styled(
                app.permissions().len().to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Pages: "),
            Span::styled(
                app.routes().len().to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" SESSION ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
