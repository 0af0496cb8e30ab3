//! Event System
//!
//! Types and implementations for worker events and logging

use crate::connector::ConnectorRecord;
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that fetches the connector catalog.
    CatalogFetcher,
    /// The dashboard itself: user actions and navigation.
    Dashboard,
    /// The local pin/custom connector store.
    Store,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
    StateChange,
}

/// Tag attached to every catalog fetch request and to its result.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FetchGeneration(pub u64);

impl FetchGeneration {
    pub fn next(self) -> Self {
        FetchGeneration(self.0 + 1)
    }
}

impl Display for FetchGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<ConnectorRecord>),
    Failed,
}

/// Result of one catalog fetch generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogUpdate {
    pub generation: FetchGeneration,
    pub outcome: FetchOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Catalog payload for fetch completion events
    pub catalog: Option<CatalogUpdate>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            catalog: None,
        }
    }

    pub fn catalog_loaded(generation: FetchGeneration, connectors: Vec<ConnectorRecord>) -> Self {
        let msg = format!(
            "Fetched {} connectors (fetch {})",
            connectors.len(),
            generation
        );
        Self {
            catalog: Some(CatalogUpdate {
                generation,
                outcome: FetchOutcome::Loaded(connectors),
            }),
            ..Self::new(Worker::CatalogFetcher, msg, EventType::Success, LogLevel::Info)
        }
    }

    pub fn catalog_failed(generation: FetchGeneration, msg: String, log_level: LogLevel) -> Self {
        Self {
            catalog: Some(CatalogUpdate {
                generation,
                outcome: FetchOutcome::Failed,
            }),
            ..Self::new(Worker::CatalogFetcher, msg, EventType::Error, log_level)
        }
    }

    pub fn fetcher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::CatalogFetcher, msg, event_type, log_level)
    }

    pub fn dashboard_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Dashboard, msg, event_type, log_level)
    }

    pub fn store_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Store, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // StateChange events should be handled separately (not displayed in logs)
        if self.event_type == EventType::StateChange {
            return false;
        }
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loaded_carries_payload() {
        let record = ConnectorRecord::new("a", "A").unwrap();
        let event = Event::catalog_loaded(FetchGeneration(3), vec![record.clone()]);

        assert_eq!(event.worker, Worker::CatalogFetcher);
        assert_eq!(event.msg, "Fetched 1 connectors (fetch #3)");
        assert_eq!(
            event.catalog,
            Some(CatalogUpdate {
                generation: FetchGeneration(3),
                outcome: FetchOutcome::Loaded(vec![record]),
            })
        );
    }

    #[test]
    fn test_state_change_events_are_hidden() {
        let event =
            Event::dashboard_with_level("x".to_string(), EventType::StateChange, LogLevel::Error);
        assert!(!event.should_display());
        let event = Event::store_with_level("x".to_string(), EventType::Success, LogLevel::Debug);
        assert!(event.should_display());
    }

    #[test]
    fn test_generation_increments() {
        assert_eq!(FetchGeneration::default().next(), FetchGeneration(1));
    }
}
