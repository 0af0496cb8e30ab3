//! Catalog fetching with network retry logic

use super::core::EventSender;
use crate::catalog::{Catalog, CatalogListing};
use crate::catalog::error::CatalogError;
use crate::consts::cli_consts::catalog_fetching;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType, FetchGeneration};
use crate::logging::LogLevel;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::sleep;

/// Fetches the connector catalog whenever a new generation is requested.
///
/// Every result is tagged with the generation that asked for it, so the
/// dashboard can drop answers to requests it has already superseded.
pub struct CatalogFetcher {
    catalog: Box<dyn Catalog>,
    event_sender: EventSender,
    classifier: ErrorClassifier,
    max_retries: u32,
    initial_backoff: Duration,
}

impl CatalogFetcher {
    pub fn new(catalog: Box<dyn Catalog>, event_sender: EventSender) -> Self {
        Self {
            catalog,
            event_sender,
            classifier: ErrorClassifier::new(),
            max_retries: catalog_fetching::MAX_RETRIES,
            initial_backoff: catalog_fetching::initial_backoff(),
        }
    }

    /// Overrides the first retry delay. Later retries double it.
    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    /// Serves refresh requests until shutdown or until every sender is gone.
    pub async fn run(
        mut self,
        mut refresh_rx: mpsc::Receiver<FetchGeneration>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                request = refresh_rx.recv() => match request {
                    Some(generation) => {
                        tokio::select! {
                            _ = shutdown.recv() => break,
                            _ = self.fetch_generation(generation) => {}
                        }
                    }
                    None => break,
                },
            }
        }
    }

    /// Fetches once for `generation`, retrying transient failures, and
    /// reports the result as a catalog event.
    pub async fn fetch_generation(&mut self, generation: FetchGeneration) {
        self.event_sender
            .send_fetch_event(
                format!(
                    "Fetching connectors from {} (fetch {})",
                    self.catalog.source(),
                    generation
                ),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;

        match self.fetch_with_retry(generation).await {
            Ok(listing) => {
                for reason in &listing.skipped {
                    self.event_sender
                        .send_fetch_event(
                            format!("Skipped catalog entry (fetch {}): {}", generation, reason),
                            EventType::Error,
                            LogLevel::Warn,
                        )
                        .await;
                }
                self.event_sender
                    .send_event(Event::catalog_loaded(generation, listing.connectors))
                    .await;
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.event_sender
                    .send_catalog_failed(
                        generation,
                        format!("Failed to fetch connectors (fetch {}): {}", generation, e),
                        log_level,
                    )
                    .await;
            }
        }
    }

    async fn fetch_with_retry(
        &self,
        generation: FetchGeneration,
    ) -> Result<CatalogListing, CatalogError> {
        let mut attempts = 0;
        let mut backoff = self.initial_backoff;
        loop {
            match self.catalog.fetch_connectors().await {
                Ok(listing) => return Ok(listing),
                Err(e) => {
                    attempts += 1;
                    if attempts >= self.max_retries || !self.classifier.is_retryable(&e) {
                        return Err(e);
                    }
                    self.event_sender
                        .send_fetch_event(
                            format!(
                                "Fetch {} attempt {} failed, retrying in {}ms: {}",
                                generation,
                                attempts,
                                backoff.as_millis(),
                                e
                            ),
                            EventType::Waiting,
                            LogLevel::Debug,
                        )
                        .await;
                    sleep(backoff).await;
                    backoff *= 2;
                }
            }
        }
    }
}
