use proptest::prelude::*;
use safe_connectors::connector::{ConnectorRecord, FetchStatus, reconcile};
use std::collections::HashSet;

fn remote_strategy() -> impl Strategy<Value = Vec<ConnectorRecord>> {
    proptest::collection::vec((0..12u8, prop::bool::weighted(0.15)), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, errored)| {
                let status = if errored {
                    FetchStatus::Error
                } else {
                    FetchStatus::Success
                };
                ConnectorRecord::new(format!("c{}", id), format!("Remote {}", id))
                    .unwrap()
                    .with_fetch_status(status)
            })
            .collect()
    })
}

fn custom_strategy() -> impl Strategy<Value = Vec<ConnectorRecord>> {
    proptest::collection::vec(0..12u8, 0..6).prop_map(|ids| {
        ids.into_iter()
            .map(|id| {
                ConnectorRecord::new(format!("c{}", id), format!("Custom {}", id))
                    .unwrap()
                    .with_custom(true)
            })
            .collect()
    })
}

fn pinned_strategy() -> impl Strategy<Value = HashSet<String>> {
    proptest::collection::hash_set((0..12u8).prop_map(|id| format!("c{}", id)), 0..8)
}

/// Ids that survive merging: healthy remote entries plus custom ones.
fn available_ids(remote: &[ConnectorRecord], custom: &[ConnectorRecord]) -> HashSet<String> {
    remote
        .iter()
        .filter(|record| record.fetch_status() != FetchStatus::Error)
        .chain(custom.iter())
        .map(|record| record.id().to_string())
        .collect()
}

proptest! {
    #[test]
    fn prop_reconcile_is_deterministic(
        remote in remote_strategy(),
        custom in custom_strategy(),
        pinned in pinned_strategy(),
        limit in 0..16usize,
    ) {
        let first = reconcile(&remote, &pinned, &custom, false, limit);
        let second = reconcile(&remote, &pinned, &custom, false, limit);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_pinned_entries_come_first(
        remote in remote_strategy(),
        custom in custom_strategy(),
        pinned in pinned_strategy(),
        limit in 0..16usize,
    ) {
        let output = reconcile(&remote, &pinned, &custom, false, limit);
        let first_unpinned = output.iter().position(|record| !pinned.contains(record.id()));
        if let Some(boundary) = first_unpinned {
            prop_assert!(output[boundary..].iter().all(|record| !pinned.contains(record.id())));
        }
    }

    #[test]
    fn prop_ids_are_unique_and_remote_wins(
        remote in remote_strategy(),
        custom in custom_strategy(),
        pinned in pinned_strategy(),
    ) {
        let output = reconcile(&remote, &pinned, &custom, false, usize::MAX);
        let mut seen = HashSet::new();
        for record in &output {
            prop_assert!(seen.insert(record.id().to_string()));
            let healthy_remote = remote
                .iter()
                .any(|r| r.id() == record.id() && r.fetch_status() != FetchStatus::Error);
            if healthy_remote {
                prop_assert!(!record.is_custom());
            }
        }
    }

    #[test]
    fn prop_truncation_keeps_pinned_entries(
        remote in remote_strategy(),
        custom in custom_strategy(),
        pinned in pinned_strategy(),
        limit in 0..16usize,
    ) {
        let output = reconcile(&remote, &pinned, &custom, false, limit);
        prop_assert!(output.len() <= limit);

        let available = available_ids(&remote, &custom);
        let pinned_available: HashSet<&String> = pinned.intersection(&available).collect();
        if pinned_available.len() <= limit {
            let output_ids: HashSet<String> =
                output.iter().map(|record| record.id().to_string()).collect();
            for id in pinned_available {
                prop_assert!(output_ids.contains(id));
            }
        }
    }

    #[test]
    fn prop_loading_returns_nothing(
        remote in remote_strategy(),
        custom in custom_strategy(),
        pinned in pinned_strategy(),
        limit in 0..16usize,
    ) {
        prop_assert!(reconcile(&remote, &pinned, &custom, true, limit).is_empty());
    }
}

#[test]
fn example_scenario_orders_pinned_remote_then_custom() {
    let remote = vec![
        ConnectorRecord::new("a", "A").unwrap(),
        ConnectorRecord::new("b", "B").unwrap(),
    ];
    let custom = vec![ConnectorRecord::new("c", "C").unwrap().with_custom(true)];
    let pinned = HashSet::from(["b".to_string()]);

    let ids = |limit| -> Vec<String> {
        reconcile(&remote, &pinned, &custom, false, limit)
            .iter()
            .map(|record| record.id().to_string())
            .collect()
    };
    assert_eq!(ids(3), vec!["b", "a", "c"]);
    assert_eq!(ids(1), vec!["b"]);
}
