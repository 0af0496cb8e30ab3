//! Modular dashboard implementation
//!
//! Split into logical modules for better maintainability

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::DashboardState;
pub use updaters::{ActionError, KeyOutcome};

#[cfg(test)]
pub(crate) mod test_support {
    use super::DashboardState;
    use crate::clipboard::MemoryClipboard;
    use crate::connector::ConnectorStore;
    use crate::dispatch::CommandDispatcher;
    use crate::environment::Environment;
    use crate::notifications::SharedNotificationQueue;
    use crate::routes::SessionRoutes;
    use crate::ui::app::UIConfig;
    use crate::view::DashboardWidget;
    use std::time::Instant;
    use tempfile::TempDir;

    /// A dashboard with an empty store under `dir`.
    pub(crate) fn test_state(dir: &TempDir, size: usize) -> DashboardState {
        let notifications = SharedNotificationQueue::new();
        let dispatcher = CommandDispatcher::new(
            ConnectorStore::new(),
            dir.path().join("connectors.json"),
            Box::new(MemoryClipboard::new()),
            Box::new(notifications.clone()),
        );
        let routes = SessionRoutes::new("eth", "0xSafe", "https://app.example", "1");
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            DashboardWidget::new(size, routes),
            dispatcher,
            notifications,
            "test".to_string(),
            UIConfig::new(false),
        )
    }
}
