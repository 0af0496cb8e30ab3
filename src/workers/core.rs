//! Core worker utilities

use crate::events::{Event, EventType, FetchGeneration};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_fetch_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::fetcher_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_catalog_failed(
        &self,
        generation: FetchGeneration,
        message: String,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::catalog_failed(generation, message, log_level))
            .await;
    }
}
