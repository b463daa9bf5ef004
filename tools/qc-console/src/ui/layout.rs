//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  QC-CONSOLE v0.1.0  signed in          [R]efresh [Q]uit [?]Help │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  MENU                  │  Breadcrumbs                           │
//! │  ...                   │  Active page                           │
//! ├────────────────────────┤                                        │
//! │  SESSION               │                                        │
//! └────────────────────────┴────────────────────────────────────────┘
//! │  [↑↓] Navigate   [Enter] Open   [H] Home   [L] Sign out          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AppState};

use super::{left_panel, right_panel, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_body(frame, chunks[1], app);
    render_footer(frame, chunks[2]);

    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " QC-CONSOLE ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("v{} ", crate::VERSION),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("[{}] ", app.session_label),
            Style::default().fg(Color::Green),
        ),
    ];

    // Errors take precedence over the refresh time
    let status = if let Some(err) = &app.error_message {
        Span::styled(format!(" ⚠ {} ", err), Style::default().fg(Color::Red))
    } else if let Some(time) = app.last_refresh {
        Span::styled(
            format!(" Last refresh: {} ", time.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(" Not refreshed ", Style::default().fg(Color::DarkGray))
    };

    let hints = vec![
        Span::styled("[R]", Style::default().fg(Color::Yellow)),
        Span::raw("efresh "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw("Help "),
    ];

    let used: usize = spans.iter().map(|s| s.width()).sum::<usize>()
        + status.width()
        + hints.iter().map(|s| s.width()).sum::<usize>();
    let padding = (area.width as usize).saturating_sub(used + 2);

    spans.push(status);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // Menu + session
            Constraint::Min(40),    // Page
        ])
        .split(area);

    left_panel::render(frame, chunks[0], app);
    right_panel::render(frame, chunks[1], app);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let keybinds = vec![
        Span::styled("[↑↓]", Style::default().fg(Color::Yellow)),
        Span::raw(" Navigate  "),
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Open  "),
        Span::styled("[H]", Style::default().fg(Color::Yellow)),
        Span::raw(" Home  "),
        Span::styled("[R]", Style::default().fg(Color::Yellow)),
        Span::raw(" Refresh  "),
        Span::styled("[L]", Style::default().fg(Color::Yellow)),
        Span::raw(" Sign out  "),
    ];

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use qc_navigation::MenuTree;
    use ratatui::{backend::TestBackend, Terminal};
    use shared_types::PermissionSet;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_active_page() {
        let app = App::new(
            MenuTree::console_default(),
            PermissionSet::from([5]),
            "/system/setting",
        );
        let text = screen(&app);
        assert!(text.contains("QC-CONSOLE"));
        assert!(text.contains("/system/setting"));
        assert!(text.contains("Setting"));
    }

    #[test]
    fn test_renders_error_and_help() {
        let mut app = App::new(MenuTree::console_default(), PermissionSet::new(), "/data");
        assert!(screen(&app).contains("No access to /data"));

        app.handle_key('?');
        assert!(screen(&app).contains("QC-CONSOLE HELP"));
    }
}
