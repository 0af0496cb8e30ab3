//! Connector grid component
//!
//! Draws the widget layout as rows of cards: skeletons while loading,
//! connector cards, and the explore cell.

use super::super::state::DashboardState;
use super::super::utils::truncate;
use crate::consts::cli_consts::CARD_HEIGHT;
use crate::view::widget::grid_columns;
use crate::view::{CardAction, CardView, GridCell, ImageSource, LoadedCard};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the connector grid.
pub fn render_connectors(f: &mut Frame, area: Rect, state: &DashboardState) {
    let layout = state.layout();
    let columns = grid_columns(area.width);
    let rows: Vec<&[GridCell]> = layout.cells.chunks(columns).collect();

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            rows.iter()
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (row_index, (row, row_area)) in rows.iter().zip(row_areas.iter()).enumerate() {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (column, (cell, cell_area)) in row.iter().zip(cell_areas.iter()).enumerate() {
            let index = row_index * columns + column;
            let selected = index == state.selected();
            render_cell(f, *cell_area, cell, selected, state.tick);
        }
    }
}

fn cell_block(title: String, selected: bool) -> Block<'static> {
    let border_color = if selected { Color::LightYellow } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border_color))
}

fn render_cell(f: &mut Frame, area: Rect, cell: &GridCell, selected: bool, tick: usize) {
    match cell {
        GridCell::Skeleton | GridCell::Card(CardView::Skeleton { .. }) => {
            render_skeleton(f, area, selected, tick)
        }
        GridCell::Card(view) => {
            if let (Some(card), Some(image)) = (view.card(), view.image()) {
                render_card(f, area, card, image, selected);
            }
        }
        GridCell::Explore { link } => render_explore(f, area, link, selected),
    }
}

fn render_skeleton(f: &mut Frame, area: Rect, selected: bool, tick: usize) {
    // Shimmer: the bar widths shift with the tick.
    let width = area.width.saturating_sub(4) as usize;
    let shade = if tick % 2 == 0 { '░' } else { '▒' };
    let bar = |percent: usize| shade.to_string().repeat(width * percent / 100);
    let lines = vec![
        Line::from(bar(40)),
        Line::from(bar(90)),
        Line::from(bar(70)),
    ];
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .block(cell_block(String::new(), selected));
    f.render_widget(paragraph, area);
}

fn render_card(f: &mut Frame, area: Rect, card: &LoadedCard, image: ImageSource, selected: bool) {
    let inner_width = area.width.saturating_sub(4) as usize;
    let mut title = card.title().to_string();
    if card.pinned {
        title = format!("★ {}", title);
    }

    let logo = match image {
        ImageSource::Fallback(asset) => Span::styled(
            format!("[fallback] {}", asset),
            Style::default().fg(Color::DarkGray),
        ),
        ImageSource::Remote(url) => Span::styled(
            format!("{}: {}", card.logo_alt(), url),
            Style::default().fg(Color::Gray),
        ),
    };

    let mut markers = Vec::new();
    if card.record.is_custom() {
        markers.push(Span::styled("[custom] ", Style::default().fg(Color::Magenta)));
    }
    if card.record.is_disabled() {
        markers.push(Span::styled("[disabled] ", Style::default().fg(Color::Red)));
    }
    if card.navigation.is_none() && !card.record.is_disabled() {
        markers.push(Span::styled("[no link] ", Style::default().fg(Color::DarkGray)));
    }

    let actions: Vec<Span> = card
        .actions
        .iter()
        .map(|action| {
            let key = match action {
                CardAction::Share => "S",
                CardAction::Pin | CardAction::Unpin => "P",
                CardAction::Remove => "D",
            };
            Span::styled(
                format!("[{}] {} ", key, action),
                Style::default().fg(Color::Cyan),
            )
        })
        .collect();

    let lines = vec![
        Line::from(logo),
        Line::from(Span::styled(
            truncate(card.record.short_description(), inner_width),
            Style::default().fg(Color::White),
        )),
        Line::from(markers),
        Line::from(actions),
    ];

    let title_style = if card.record.is_disabled() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    };
    let block = cell_block(truncate(&title, inner_width), selected).title_style(title_style);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_explore(f: &mut Frame, area: Rect, link: &str, selected: bool) {
    let lines = vec![
        Line::from(Span::styled(
            "Explore Connectors",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(link.to_string(), Style::default().fg(Color::Gray))),
    ];
    f.render_widget(
        Paragraph::new(lines).block(cell_block("+".to_string(), selected)),
        area,
    );
}
