//! Headless mode execution
//!
//! One catalog fetch, then either a printout of the dashboard grid or a
//! single card action.

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::EventType;
use crate::ui::dashboard::DashboardState;
use crate::view::{CardAction, CardView, GridCell};
use crate::{print_cmd_error, print_cmd_info, print_cmd_success};
use std::error::Error;

/// Card actions available from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessAction {
    /// Pin or unpin, whichever applies.
    TogglePin,
    Share,
}

/// Fetches the catalog once into `state`, echoing worker events.
async fn fetch_once(
    session: &mut SessionData,
    state: &mut DashboardState,
) -> Result<(), Box<dyn Error>> {
    let generation = state.request_refresh();
    session.refresh_sender.send(generation).await?;

    loop {
        tokio::select! {
            event = session.event_receiver.recv() => match event {
                Some(event) => {
                    if event.should_display() {
                        println!("{}", event);
                    }
                    let done = event
                        .catalog
                        .as_ref()
                        .is_some_and(|update| update.generation == generation);
                    state.add_event(event);
                    if done {
                        break;
                    }
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    state.update();
    Ok(())
}

/// One line per grid cell, in display order.
pub fn describe_layout(state: &DashboardState) -> Vec<String> {
    state
        .layout()
        .cells
        .iter()
        .enumerate()
        .map(|(index, cell)| format!("{}. {}", index + 1, describe_cell(cell)))
        .collect()
}

fn describe_cell(cell: &GridCell) -> String {
    match cell {
        GridCell::Skeleton | GridCell::Card(CardView::Skeleton { .. }) => "(loading)".to_string(),
        GridCell::Explore { link } => format!("Explore Connectors -> {}", link),
        GridCell::Card(view) => {
            let Some(card) = view.card() else {
                return "(loading)".to_string();
            };
            let mut line = format!("{} ({})", card.title(), card.record.id());
            if card.pinned {
                line.push_str(" [pinned]");
            }
            if card.record.is_custom() {
                line.push_str(" [custom]");
            }
            if card.record.is_disabled() {
                line.push_str(" [disabled]");
            }
            if matches!(view, CardView::Fallback(_)) {
                line.push_str(" [fallback]");
            }
            if let Some(link) = &card.navigation {
                line.push_str(&format!(" -> {}", link));
            }
            line
        }
    }
}

/// Prints the dashboard grid after one catalog fetch.
pub async fn run_headless_mode(
    mut session: SessionData,
    mut state: DashboardState,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.catalog_source);

    let fetched = fetch_once(&mut session, &mut state).await;
    if fetched.is_ok() {
        for line in describe_layout(&state) {
            println!("{}", line);
        }
    }

    print_session_shutdown();
    session.shutdown().await;
    fetched?;
    print_session_exit_success();
    Ok(())
}

/// Applies `action` to connector `id` after one catalog fetch.
pub async fn run_headless_action(
    mut session: SessionData,
    mut state: DashboardState,
    id: &str,
    action: HeadlessAction,
) -> Result<(), Box<dyn Error>> {
    let fetched = fetch_once(&mut session, &mut state).await;
    session.shutdown().await;
    fetched?;

    let Some(view) = state.find_card(id) else {
        print_cmd_error!("Unknown connector", &format!("No connector with id {}", id));
        return Err(format!("unknown connector {}", id).into());
    };
    let card_action = match action {
        HeadlessAction::Share => CardAction::Share,
        HeadlessAction::TogglePin if view.card().is_some_and(|card| card.pinned) => {
            CardAction::Unpin
        }
        HeadlessAction::TogglePin => CardAction::Pin,
    };

    let logged_before = state.activity_logs.len();
    let result = state.apply_action_on(&view, card_action);
    for event in state.activity_logs.iter().skip(logged_before) {
        if event.event_type == EventType::Success && event.should_display() {
            print_cmd_info!("Dashboard", "{}", event.msg);
        }
    }

    match result {
        Ok(_) => {
            if action == HeadlessAction::Share {
                if let Some(link) = state.clipboard_contents() {
                    println!("{}", link);
                }
            }
            print_cmd_success!("Done", "{} {}", card_action, id);
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Action failed", &e.to_string());
            Err(e.into())
        }
    }
}
