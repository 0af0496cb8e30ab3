//! Dashboard header component
//!
//! Renders the title, the Safe being shown and the catalog status

use super::super::state::DashboardState;
use super::super::utils::spinner;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn format_uptime(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Render header with title and catalog status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let title_text = format!("SAFE CONNECTORS v{}", env!("CARGO_PKG_VERSION"));
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let routes = state.widget().routes();
    let status = if state.is_loading() {
        Span::styled(
            format!(
                "{} Loading connectors (fetch {})",
                spinner(state.tick),
                state.requested_generation()
            ),
            Style::default().fg(Color::LightYellow),
        )
    } else {
        Span::styled("Up to date", Style::default().fg(Color::LightGreen))
    };
    let info = Line::from(vec![
        Span::styled(routes.base_path.clone(), Style::default().fg(Color::White)),
        Span::styled(
            format!("  chain {}  ", routes.chain_id),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{} {}  ", state.environment, state.catalog_source),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("up {}  ", format_uptime(state.start_time.elapsed().as_secs())),
            Style::default().fg(Color::DarkGray),
        ),
        status,
    ]);
    f.render_widget(
        Paragraph::new(info).alignment(Alignment::Center),
        header_chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "00:00:00");
        assert_eq!(format_uptime(3725), "01:02:05");
    }
}
