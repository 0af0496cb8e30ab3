//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events and keys

use super::state::DashboardState;

use crate::dispatch::{DispatchError, DispatchOutcome};
use crate::events::{Event as WorkerEvent, EventType, FetchGeneration, FetchOutcome};
use crate::logging::LogLevel;
use crate::view::card::image_loadable;
use crate::view::{CardAction, CardView, GridCell};

use crossterm::event::KeyCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{action} is not available for {id}")]
    Unavailable { action: CardAction, id: String },

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// What the UI loop has to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    /// A new catalog fetch was requested for this generation.
    Refresh(FetchGeneration),
    Quit,
}

impl DashboardState {
    /// Update the dashboard state with new tick and queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
        }

        self.clamp_selection();
    }

    /// Starts a new fetch generation. Results of older generations are ignored
    /// from now on.
    pub fn request_refresh(&mut self) -> FetchGeneration {
        let generation = self.requested_generation().next();
        self.set_requested_generation(generation);
        self.set_loading(true);
        generation
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        let Some(update) = &event.catalog else {
            return;
        };
        if update.generation != self.requested_generation() {
            self.add_to_activity_log(WorkerEvent::fetcher_with_level(
                format!(
                    "Discarding stale fetch {} (waiting for {})",
                    update.generation,
                    self.requested_generation()
                ),
                EventType::Refresh,
                LogLevel::Debug,
            ));
            return;
        }

        match &update.outcome {
            FetchOutcome::Loaded(connectors) => {
                for record in connectors {
                    if let Some(url) = record.image() {
                        if !image_loadable(url) {
                            self.mark_image_failed(record.id());
                        }
                    }
                }
                self.set_remote(connectors.clone());
            }
            // Custom connectors and the explore cell still render.
            FetchOutcome::Failed => self.set_remote(Vec::new()),
        }
        self.set_loading(false);
    }

    /// Handles a key press on the dashboard.
    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-(self.columns() as isize)),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(self.columns() as isize),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('s') => self.apply_action(CardAction::Share),
            KeyCode::Char('p') => {
                let pinned = matches!(
                    self.selected_cell(),
                    Some(GridCell::Card(view)) if view.card().is_some_and(|card| card.pinned)
                );
                let action = if pinned {
                    CardAction::Unpin
                } else {
                    CardAction::Pin
                };
                self.apply_action(action);
            }
            KeyCode::Char('d') => self.apply_action(CardAction::Remove),
            KeyCode::Char('r') => return KeyOutcome::Refresh(self.request_refresh()),
            _ => {}
        }
        KeyOutcome::Handled
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.layout().len();
        if len == 0 {
            return;
        }
        let target = self.selected() as isize + delta;
        self.set_selected(target.clamp(0, len as isize - 1) as usize);
    }

    fn clamp_selection(&mut self) {
        let len = self.layout().len();
        if self.selected() >= len {
            self.set_selected(len.saturating_sub(1));
        }
    }

    fn open_selected(&mut self) {
        let event = match self.selected_cell() {
            Some(GridCell::Explore { link }) => WorkerEvent::dashboard_with_level(
                format!("Opening {}", link),
                EventType::Success,
                LogLevel::Info,
            ),
            Some(GridCell::Card(view)) => match view.navigation() {
                Some(link) => WorkerEvent::dashboard_with_level(
                    format!("Opening {}", link),
                    EventType::Success,
                    LogLevel::Info,
                ),
                None => WorkerEvent::dashboard_with_level(
                    format!("{} has nowhere to open", view.id()),
                    EventType::Waiting,
                    LogLevel::Debug,
                ),
            },
            Some(GridCell::Skeleton) | None => return,
        };
        self.add_to_activity_log(event);
    }

    /// Triggers `action` on the selected card and applies its commands.
    pub fn apply_action(&mut self, action: CardAction) {
        if let Some(GridCell::Card(view)) = self.selected_cell() {
            // Failures are already in the activity log.
            let _ = self.apply_action_on(&view, action);
        }
    }

    /// Triggers `action` on `view` and applies the resulting commands.
    /// Outcomes, failures and notifications all land in the activity log.
    pub fn apply_action_on(
        &mut self,
        view: &CardView,
        action: CardAction,
    ) -> Result<Vec<DispatchOutcome>, ActionError> {
        let commands = view
            .card()
            .and_then(|card| card.trigger(action, self.widget().routes()));
        let Some(commands) = commands else {
            let error = ActionError::Unavailable {
                action,
                id: view.id().to_string(),
            };
            self.add_to_activity_log(WorkerEvent::dashboard_with_level(
                error.to_string(),
                EventType::Waiting,
                LogLevel::Debug,
            ));
            return Err(error);
        };

        let result = self.dispatcher_mut().dispatch_all(commands);
        match &result {
            Ok(outcomes) => {
                for outcome in outcomes {
                    if let Some(event) = Self::outcome_event(outcome) {
                        self.add_to_activity_log(event);
                    }
                }
            }
            Err(e) => {
                self.add_to_activity_log(WorkerEvent::store_with_level(
                    format!("{} failed for {}: {}", action, view.id(), e),
                    EventType::Error,
                    LogLevel::Error,
                ));
            }
        }
        self.drain_notifications();
        result.map_err(ActionError::from)
    }

    fn outcome_event(outcome: &DispatchOutcome) -> Option<WorkerEvent> {
        let msg = match outcome {
            DispatchOutcome::Pinned(id) => format!("Pinned {}", id),
            DispatchOutcome::Unpinned(id) => format!("Unpinned {}", id),
            DispatchOutcome::Removed(id) => format!("Removed custom connector {}", id),
            DispatchOutcome::Copied(text) => format!("Copied {}", text),
            // Surfaced through the notification queue.
            DispatchOutcome::Notified(_) => return None,
        };
        Some(WorkerEvent::store_with_level(
            msg,
            EventType::Success,
            LogLevel::Debug,
        ))
    }

    fn drain_notifications(&mut self) {
        for kind in self.notifications().drain() {
            self.add_to_activity_log(WorkerEvent::dashboard_with_level(
                kind.message().to_string(),
                EventType::Success,
                LogLevel::Info,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::ConnectorRecord;
    use crate::ui::dashboard::test_support::test_state;

    fn record(id: &str) -> ConnectorRecord {
        ConnectorRecord::new(id, id.to_uppercase())
            .unwrap()
            .with_image("https://img.example/logo.png")
            .with_connect_url(format!("https://{}.example", id))
    }

    fn card_ids(state: &DashboardState) -> Vec<String> {
        state
            .layout()
            .cells
            .iter()
            .filter_map(|cell| match cell {
                GridCell::Card(view) => Some(view.id().to_string()),
                _ => None,
            })
            .collect()
    }

    fn load(state: &mut DashboardState, records: Vec<ConnectorRecord>) -> FetchGeneration {
        let generation = state.request_refresh();
        state.add_event(WorkerEvent::catalog_loaded(generation, records));
        state.update();
        generation
    }

    #[test]
    fn test_starts_loading_with_skeletons() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 4);
        assert!(state.is_loading());
        assert_eq!(state.layout().cells, vec![GridCell::Skeleton; 4]);
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir, 6);
        let first = state.request_refresh();
        let second = state.request_refresh();

        state.add_event(WorkerEvent::catalog_loaded(first, vec![record("old")]));
        state.update();
        assert!(state.is_loading());
        assert!(card_ids(&state).is_empty());

        state.add_event(WorkerEvent::catalog_loaded(second, vec![record("new")]));
        state.update();
        assert!(!state.is_loading());
        assert_eq!(card_ids(&state), vec!["new".to_string()]);
    }

    #[test]
    fn test_failed_fetch_keeps_custom_connectors() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir, 6);
        state
            .dispatcher_mut()
            .add_custom(record("mine").with_custom(true))
            .unwrap();

        let generation = state.request_refresh();
        state.add_event(WorkerEvent::catalog_failed(
            generation,
            "boom".to_string(),
            LogLevel::Error,
        ));
        state.update();

        assert!(!state.is_loading());
        assert_eq!(card_ids(&state), vec!["mine".to_string()]);
        assert!(matches!(
            state.layout().cells.last(),
            Some(GridCell::Explore { .. })
        ));
    }

    #[test]
    fn test_pin_key_moves_card_first_and_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir, 6);
        load(&mut state, vec![record("a"), record("b")]);

        assert_eq!(state.handle_key(KeyCode::Right), KeyOutcome::Handled);
        state.handle_key(KeyCode::Char('p'));

        assert_eq!(card_ids(&state), vec!["b".to_string(), "a".to_string()]);
        assert!(state
            .activity_logs
            .iter()
            .any(|event| event.msg == "Connector pinned to the dashboard"));

        // Unpinning goes through the same key.
        state.set_selected(0);
        state.handle_key(KeyCode::Char('p'));
        assert_eq!(card_ids(&state), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_share_key_copies_link() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir, 6);
        load(&mut state, vec![record("a")]);

        state.handle_key(KeyCode::Char('s'));
        let copied = state.clipboard_contents().unwrap();
        assert!(copied.starts_with("https://app.example/share/safe-app?appUrl="));
        assert!(state
            .activity_logs
            .iter()
            .any(|event| event.msg == "Safe App URL copied to clipboard!"));
    }

    #[test]
    fn test_remove_is_unavailable_for_catalog_connectors() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir, 6);
        load(&mut state, vec![record("a")]);

        state.handle_key(KeyCode::Char('d'));
        assert_eq!(card_ids(&state), vec!["a".to_string()]);
    }

    #[test]
    fn test_image_failure_is_sticky() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir, 6);
        load(&mut state, vec![record("a").with_image("not a url")]);
        assert!(matches!(
            state.layout().cells[0],
            GridCell::Card(CardView::Fallback(_))
        ));

        // A later fetch with a good URL does not bring the logo back.
        load(&mut state, vec![record("a")]);
        assert!(state.failed_images().contains("a"));
        assert!(matches!(
            state.layout().cells[0],
            GridCell::Card(CardView::Fallback(_))
        ));
    }

    #[test]
    fn test_selection_is_clamped_and_refresh_bumps_generation() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir, 3);
        let generation = load(&mut state, vec![record("a"), record("b")]);

        state.set_columns(2);
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Down);
        assert_eq!(state.selected(), 2);
        assert!(matches!(state.selected_cell(), Some(GridCell::Explore { .. })));

        assert_eq!(
            state.handle_key(KeyCode::Char('r')),
            KeyOutcome::Refresh(generation.next())
        );
        assert!(state.is_loading());
        assert_eq!(state.handle_key(KeyCode::Char('q')), KeyOutcome::Quit);
    }

    #[test]
    fn test_find_card_outside_the_grid() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir, 2);
        load(&mut state, vec![record("a"), record("b"), record("c")]);

        assert_eq!(card_ids(&state), vec!["a".to_string()]);
        let view = state.find_card("c").unwrap();
        let outcomes = state.apply_action_on(&view, CardAction::Pin).unwrap();
        assert_eq!(outcomes, vec![DispatchOutcome::Pinned("c".to_string())]);
        assert_eq!(card_ids(&state), vec!["c".to_string()]);
        assert!(state.find_card("missing").is_none());
    }

    #[test]
    fn test_unavailable_action_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir, 6);
        load(&mut state, vec![record("a")]);

        let view = state.find_card("a").unwrap();
        let result = state.apply_action_on(&view, CardAction::Remove);
        assert!(matches!(result, Err(ActionError::Unavailable { .. })));
    }

    #[test]
    fn test_enter_logs_navigation() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir, 6);
        load(&mut state, vec![record("a")]);

        state.handle_key(KeyCode::Enter);
        let last = state.activity_logs.back().unwrap();
        assert_eq!(
            last.msg,
            "Opening /eth:0xSafe/connectors?appUrl=https%3A%2F%2Fa.example"
        );
    }
}
