//! Dashboard footer component
//!
//! Renders key hints and the last clipboard contents

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const KEY_HINTS: &str =
    "[←↑↓→] Move | [Enter] Open | [S] Share | [P] Pin | [D] Remove | [R] Refresh | [Q] Quit";

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = vec![Line::from(Span::styled(
        KEY_HINTS,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(copied) = state.clipboard_contents() {
        lines.push(Line::from(vec![
            Span::styled("Clipboard: ", Style::default().fg(Color::DarkGray)),
            Span::styled(copied, Style::default().fg(Color::Gray)),
        ]));
    }

    let footer = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(footer, area);
}
