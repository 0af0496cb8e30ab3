//! User-facing notifications emitted by card actions.

use crate::consts::cli_consts::notifications;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum NotificationKind {
    ShareUrlCopied,
    ConnectorPinned,
    ConnectorUnpinned,
    CustomConnectorRemoved,
}

impl NotificationKind {
    pub fn message(&self) -> &'static str {
        match self {
            NotificationKind::ShareUrlCopied => notifications::SHARE_URL_COPIED,
            NotificationKind::ConnectorPinned => notifications::CONNECTOR_PINNED,
            NotificationKind::ConnectorUnpinned => notifications::CONNECTOR_UNPINNED,
            NotificationKind::CustomConnectorRemoved => notifications::CUSTOM_CONNECTOR_REMOVED,
        }
    }
}

#[cfg_attr(test, automock)]
pub trait Notifier: Send {
    fn emit_notification(&mut self, kind: NotificationKind);
}

/// Notifications waiting to be shown by the UI loop.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<NotificationKind>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<NotificationKind> {
        self.pending.drain(..).collect()
    }
}

impl Notifier for NotificationQueue {
    fn emit_notification(&mut self, kind: NotificationKind) {
        self.pending.push_back(kind);
    }
}

/// A [`NotificationQueue`] shared between the dispatcher, which emits, and
/// the dashboard, which drains.
#[derive(Debug, Default, Clone)]
pub struct SharedNotificationQueue {
    inner: Arc<Mutex<NotificationQueue>>,
}

impl SharedNotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<NotificationKind> {
        match self.inner.lock() {
            Ok(mut queue) => queue.drain(),
            Err(poisoned) => poisoned.into_inner().drain(),
        }
    }
}

impl Notifier for SharedNotificationQueue {
    fn emit_notification(&mut self, kind: NotificationKind) {
        match self.inner.lock() {
            Ok(mut queue) => queue.emit_notification(kind),
            Err(poisoned) => poisoned.into_inner().emit_notification(kind),
        }
    }
}
