//! Session setup and initialization

use crate::catalog::Catalog;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, REFRESH_QUEUE_SIZE};
use crate::events::{Event, FetchGeneration};
use crate::workers::CatalogFetcher;
use crate::workers::core::EventSender;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Requests catalog fetches from the fetch worker
    pub refresh_sender: mpsc::Sender<FetchGeneration>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Where the catalog comes from, for display
    pub catalog_source: String,
}

/// Starts the catalog fetch worker and wires its channels.
///
/// No fetch happens until the caller sends a generation on
/// `refresh_sender`.
pub fn setup_session(catalog: Box<dyn Catalog>) -> SessionData {
    let catalog_source = catalog.source();
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (refresh_sender, refresh_receiver) = mpsc::channel::<FetchGeneration>(REFRESH_QUEUE_SIZE);

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let fetcher = CatalogFetcher::new(catalog, EventSender::new(event_sender));
    let handle = tokio::spawn(fetcher.run(refresh_receiver, shutdown_sender.subscribe()));

    SessionData {
        event_receiver,
        refresh_sender,
        join_handles: vec![handle],
        shutdown_sender,
        catalog_source,
    }
}

impl SessionData {
    /// Signals shutdown and waits for every worker.
    pub async fn shutdown(self) {
        let _ = self.shutdown_sender.send(());
        drop(self.refresh_sender);
        for handle in self.join_handles {
            let _ = handle.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;
    use crate::connector::ConnectorRecord;

    #[tokio::test]
    async fn test_session_fetches_on_request() {
        let mut catalog = MockCatalog::new();
        catalog.expect_source().return_const("mock".to_string());
        catalog
            .expect_fetch_connectors()
            .times(1)
            .returning(|| Ok(vec![ConnectorRecord::new("a", "A").unwrap()].into()));

        let mut session = setup_session(Box::new(catalog));
        assert_eq!(session.catalog_source, "mock");
        session.refresh_sender.send(FetchGeneration(1)).await.unwrap();

        let mut generation = None;
        while let Some(event) = session.event_receiver.recv().await {
            if let Some(update) = event.catalog {
                generation = Some(update.generation);
                break;
            }
        }
        assert_eq!(generation, Some(FetchGeneration(1)));
        session.shutdown().await;
    }
}
