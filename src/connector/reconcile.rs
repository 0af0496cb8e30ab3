//! Connector list reconciliation
//!
//! Merges the remote catalog with the locally stored custom connectors and
//! pin state into the ordered list the dashboard displays.

use super::{ConnectorRecord, FetchStatus};
use std::collections::HashSet;

/// Builds the ordered, deduplicated list of connectors to display.
///
/// * Returns nothing while `is_loading`; callers draw skeleton placeholders instead.
/// * Remote entries with [`FetchStatus::Error`] are treated as absent.
/// * Remote entries win over custom entries sharing their id.
/// * Pinned entries come first, each group keeping its relative order.
/// * The result is truncated to `limit`, so pinned entries are dropped only
///   when there are more of them than `limit`.
pub fn reconcile(
    remote: &[ConnectorRecord],
    pinned_ids: &HashSet<String>,
    custom_connectors: &[ConnectorRecord],
    is_loading: bool,
    limit: usize,
) -> Vec<ConnectorRecord> {
    if is_loading || limit == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let combined: Vec<&ConnectorRecord> = remote
        .iter()
        .filter(|record| record.fetch_status() != FetchStatus::Error)
        .chain(custom_connectors.iter())
        .filter(|record| seen.insert(record.id()))
        .collect();

    let (pinned, unpinned): (Vec<&ConnectorRecord>, Vec<&ConnectorRecord>) = combined
        .into_iter()
        .partition(|record| pinned_ids.contains(record.id()));

    pinned
        .into_iter()
        .chain(unpinned)
        .take(limit)
        .cloned()
        .collect()
}
