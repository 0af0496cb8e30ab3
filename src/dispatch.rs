//! Applies card commands to the connector store and its collaborators.

use crate::clipboard::Clipboard;
use crate::connector::store::{ConnectorStore, StoreError};
use crate::notifications::{NotificationKind, Notifier};
use crate::view::CardCommand;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a dispatched command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Pinned(String),
    Unpinned(String),
    Removed(String),
    Copied(String),
    Notified(NotificationKind),
}

/// Owns the canonical connector store. Every local state change goes through
/// [`CommandDispatcher::dispatch`].
pub struct CommandDispatcher {
    store: ConnectorStore,
    store_path: PathBuf,
    clipboard: Box<dyn Clipboard>,
    notifier: Box<dyn Notifier>,
}

impl CommandDispatcher {
    pub fn new(
        store: ConnectorStore,
        store_path: PathBuf,
        clipboard: Box<dyn Clipboard>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            store_path,
            clipboard,
            notifier,
        }
    }

    /// Read-only snapshot for reconciliation.
    pub fn store(&self) -> &ConnectorStore {
        &self.store
    }

    pub fn clipboard_contents(&self) -> Option<String> {
        self.clipboard.contents()
    }

    /// Applies one command. Store changes are persisted before they become
    /// visible, and notifications follow a successful save.
    pub fn dispatch(&mut self, command: CardCommand) -> Result<DispatchOutcome, DispatchError> {
        match command {
            CardCommand::TogglePin(record) => {
                let pinned = self.commit(|store| store.toggle_pin(&record))?;
                let kind = if pinned {
                    NotificationKind::ConnectorPinned
                } else {
                    NotificationKind::ConnectorUnpinned
                };
                self.notifier.emit_notification(kind);
                let id = record.id().to_string();
                Ok(if pinned {
                    DispatchOutcome::Pinned(id)
                } else {
                    DispatchOutcome::Unpinned(id)
                })
            }
            CardCommand::RemoveCustomConnector(record) => {
                self.commit(|store| store.remove_custom(&record))?;
                self.notifier
                    .emit_notification(NotificationKind::CustomConnectorRemoved);
                Ok(DispatchOutcome::Removed(record.id().to_string()))
            }
            CardCommand::CopyToClipboard(text) => {
                self.clipboard.copy_to_clipboard(&text);
                Ok(DispatchOutcome::Copied(text))
            }
            CardCommand::Notify(kind) => {
                self.notifier.emit_notification(kind);
                Ok(DispatchOutcome::Notified(kind))
            }
        }
    }

    /// Applies commands in order, stopping at the first failure.
    pub fn dispatch_all(
        &mut self,
        commands: Vec<CardCommand>,
    ) -> Result<Vec<DispatchOutcome>, DispatchError> {
        commands
            .into_iter()
            .map(|command| self.dispatch(command))
            .collect()
    }

    /// Adds a user-defined connector and persists the store.
    pub fn add_custom(&mut self, record: crate::connector::ConnectorRecord) -> Result<(), DispatchError> {
        self.commit(|store| store.add_custom(record))
    }

    /// Applies `change` to a copy of the store and keeps it only once it is
    /// on disk, so a failed save leaves memory and disk agreeing.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut ConnectorStore) -> Result<T, StoreError>,
    ) -> Result<T, DispatchError> {
        let mut next = self.store.clone();
        let value = change(&mut next)?;
        next.save(&self.store_path).map_err(StoreError::Io)?;
        self.store = next;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{MemoryClipboard, MockClipboard};
    use crate::connector::ConnectorRecord;
    use crate::notifications::{MockNotifier, NotificationQueue};
    use mockall::predicate::eq;
    use tempfile::tempdir;

    fn record(id: &str) -> ConnectorRecord {
        ConnectorRecord::new(id, id).unwrap()
    }

    #[test]
    fn test_toggle_pin_persists_and_notifies() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("connectors.json");

        let mut notifier = MockNotifier::new();
        notifier
            .expect_emit_notification()
            .with(eq(NotificationKind::ConnectorPinned))
            .times(1)
            .return_const(());

        let mut dispatcher = CommandDispatcher::new(
            ConnectorStore::new(),
            path.clone(),
            Box::new(MemoryClipboard::new()),
            Box::new(notifier),
        );
        let outcome = dispatcher
            .dispatch(CardCommand::TogglePin(record("fitbit")))
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Pinned("fitbit".to_string()));
        let on_disk = ConnectorStore::load_from_file(&path).unwrap();
        assert!(on_disk.is_pinned("fitbit"));
    }

    #[test]
    fn test_share_commands_copy_then_notify() {
        let dir = tempdir().unwrap();
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_copy_to_clipboard()
            .with(eq("https://share.example"))
            .times(1)
            .return_const(());
        let mut notifier = MockNotifier::new();
        notifier
            .expect_emit_notification()
            .with(eq(NotificationKind::ShareUrlCopied))
            .times(1)
            .return_const(());

        let mut dispatcher = CommandDispatcher::new(
            ConnectorStore::new(),
            dir.path().join("connectors.json"),
            Box::new(clipboard),
            Box::new(notifier),
        );
        let outcomes = dispatcher
            .dispatch_all(vec![
                CardCommand::CopyToClipboard("https://share.example".to_string()),
                CardCommand::Notify(NotificationKind::ShareUrlCopied),
            ])
            .unwrap();
        assert_eq!(outcomes.len(), 2);
        // Sharing never writes the store.
        assert!(!dir.path().join("connectors.json").exists());
    }

    #[test]
    fn test_remove_custom_updates_store() {
        let dir = tempdir().unwrap();
        let mut dispatcher = CommandDispatcher::new(
            ConnectorStore::new(),
            dir.path().join("connectors.json"),
            Box::new(MemoryClipboard::new()),
            Box::new(NotificationQueue::new()),
        );
        dispatcher.add_custom(record("mine")).unwrap();
        let stored = dispatcher.store().custom_connectors()[0].clone();

        let outcome = dispatcher
            .dispatch(CardCommand::RemoveCustomConnector(stored))
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Removed("mine".to_string()));
        assert!(dispatcher.store().custom_connectors().is_empty());
    }

    #[test]
    fn test_rejected_command_leaves_store_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("connectors.json");
        let mut notifier = MockNotifier::new();
        notifier.expect_emit_notification().times(0);

        let mut dispatcher = CommandDispatcher::new(
            ConnectorStore::new(),
            path.clone(),
            Box::new(MemoryClipboard::new()),
            Box::new(notifier),
        );
        let result = dispatcher.dispatch(CardCommand::TogglePin(record("old").with_disabled(true)));

        assert!(matches!(result, Err(DispatchError::Store(StoreError::Disabled(_)))));
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_save_keeps_previous_state() {
        let dir = tempdir().unwrap();
        // A regular file where the store's parent directory should be.
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();
        let path = blocker.join("connectors.json");

        let mut seeded = ConnectorStore::new();
        seeded.add_custom(record("mine")).unwrap();
        let custom = seeded.custom_connectors()[0].clone();

        let mut notifier = MockNotifier::new();
        notifier.expect_emit_notification().times(0);
        let mut dispatcher = CommandDispatcher::new(
            seeded,
            path,
            Box::new(MemoryClipboard::new()),
            Box::new(notifier),
        );

        let pin = dispatcher.dispatch(CardCommand::TogglePin(record("a")));
        assert!(matches!(pin, Err(DispatchError::Store(StoreError::Io(_)))));
        assert!(!dispatcher.store().is_pinned("a"));

        let remove = dispatcher.dispatch(CardCommand::RemoveCustomConnector(custom));
        assert!(matches!(remove, Err(DispatchError::Store(StoreError::Io(_)))));
        assert_eq!(dispatcher.store().custom_connectors().len(), 1);

        assert!(dispatcher.add_custom(record("other")).is_err());
        assert_eq!(dispatcher.store().custom_connectors().len(), 1);
    }
}
