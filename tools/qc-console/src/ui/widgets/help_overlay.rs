//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEYS: [(&str, &str); 8] = [
    ("  ↑/↓    ", "Move through the menu"),
    ("  Enter  ", "Open a group or page"),
    ("  H      ", "Back to the landing page"),
    ("  R      ", "Reload permissions"),
    ("  L      ", "Sign out"),
    ("  Q/Esc  ", "Quit"),
    ("  ?      ", "Toggle this help"),
    ("  ▸ / ▾  ", "Closed / open group"),
];

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, popup_area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "QC-CONSOLE HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Keys",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    help_text.extend(KEYS.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(*key, Style::default().fg(Color::Yellow)),
            Span::raw(*action),
        ])
    }));
    help_text.extend([
        Line::raw(""),
        Line::raw("Only pages granted to the session are listed."),
        Line::raw("The landing page is always available."),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
