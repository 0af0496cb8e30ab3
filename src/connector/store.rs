//! Persisted local connector state
//!
//! Holds the pinned connector ids and the connectors the user added by hand.
//! This is the only place that state is mutated.

use super::ConnectorRecord;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connector {0} is disabled and cannot be pinned")]
    Disabled(String),

    #[error("Custom connector {0} cannot be pinned")]
    PinCustom(String),

    #[error("Connector {0} is not a custom connector")]
    NotCustom(String),

    #[error("No custom connector with id {0}")]
    UnknownCustom(String),

    #[error("A custom connector with id {0} already exists")]
    DuplicateCustom(String),

    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectorStore {
    /// Pinned connector ids, in the order they were pinned.
    #[serde(default)]
    pinned: Vec<String>,
    /// Connectors added locally by the user.
    #[serde(default)]
    custom: Vec<ConnectorRecord>,
}

impl ConnectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let store: ConnectorStore = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(store.normalized())
    }

    /// Loads the store, or starts empty when no file exists yet.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the store to a JSON file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)?;
        debug!("Saved connector store to {}", path.display());
        Ok(())
    }

    /// Deletes the store file if it exists.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Snapshot of the pinned ids for reconciliation.
    pub fn pinned_ids(&self) -> HashSet<String> {
        self.pinned.iter().cloned().collect()
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.pinned.iter().any(|pinned| pinned == id)
    }

    pub fn custom_connectors(&self) -> &[ConnectorRecord] {
        &self.custom
    }

    /// Flips the pin state of `record` and returns whether it is now pinned.
    pub fn toggle_pin(&mut self, record: &ConnectorRecord) -> Result<bool, StoreError> {
        if record.is_disabled() {
            return Err(StoreError::Disabled(record.id().to_string()));
        }
        if record.is_custom() {
            return Err(StoreError::PinCustom(record.id().to_string()));
        }
        if self.is_pinned(record.id()) {
            self.pinned.retain(|id| id != record.id());
            debug!("Unpinned connector {}", record.id());
            Ok(false)
        } else {
            self.pinned.push(record.id().to_string());
            debug!("Pinned connector {}", record.id());
            Ok(true)
        }
    }

    /// Adds a user-defined connector. The stored copy is always flagged custom.
    pub fn add_custom(&mut self, record: ConnectorRecord) -> Result<(), StoreError> {
        if self.custom.iter().any(|c| c.id() == record.id()) {
            return Err(StoreError::DuplicateCustom(record.id().to_string()));
        }
        self.custom.push(record.with_custom(true));
        Ok(())
    }

    /// Removes a user-defined connector along with any pin on its id.
    pub fn remove_custom(&mut self, record: &ConnectorRecord) -> Result<(), StoreError> {
        if !record.is_custom() {
            return Err(StoreError::NotCustom(record.id().to_string()));
        }
        let before = self.custom.len();
        self.custom.retain(|c| c.id() != record.id());
        if self.custom.len() == before {
            return Err(StoreError::UnknownCustom(record.id().to_string()));
        }
        self.pinned.retain(|id| id != record.id());
        debug!("Removed custom connector {}", record.id());
        Ok(())
    }

    /// Drops duplicate pins and forces the custom flag on hand-edited files.
    fn normalized(self) -> Self {
        let mut seen = HashSet::new();
        let pinned = self
            .pinned
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        let custom = self.custom.into_iter().map(|c| c.with_custom(true)).collect();
        Self { pinned, custom }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn catalog_entry(id: &str) -> ConnectorRecord {
        ConnectorRecord::new(id, id).unwrap()
    }

    #[test]
    // Toggling twice returns the connector to its original state.
    fn test_toggle_pin_round_trip() {
        let mut store = ConnectorStore::new();
        let fitbit = catalog_entry("fitbit");

        assert!(store.toggle_pin(&fitbit).unwrap());
        assert!(store.is_pinned("fitbit"));
        assert!(!store.toggle_pin(&fitbit).unwrap());
        assert!(store.pinned_ids().is_empty());
    }

    #[test]
    fn test_disabled_and_custom_connectors_cannot_be_pinned() {
        let mut store = ConnectorStore::new();
        let disabled = catalog_entry("old").with_disabled(true);
        let custom = catalog_entry("mine").with_custom(true);

        assert!(matches!(store.toggle_pin(&disabled), Err(StoreError::Disabled(_))));
        assert!(matches!(store.toggle_pin(&custom), Err(StoreError::PinCustom(_))));
        assert!(store.pinned_ids().is_empty());
    }

    #[test]
    fn test_add_custom_forces_flag_and_rejects_duplicates() {
        let mut store = ConnectorStore::new();
        store.add_custom(catalog_entry("mine")).unwrap();

        assert!(store.custom_connectors()[0].is_custom());
        assert!(matches!(
            store.add_custom(catalog_entry("mine")),
            Err(StoreError::DuplicateCustom(_))
        ));
    }

    #[test]
    fn test_remove_custom_clears_pin() {
        let mut store = ConnectorStore {
            pinned: vec!["mine".to_string()],
            custom: vec![catalog_entry("mine").with_custom(true)],
        };
        let record = store.custom_connectors()[0].clone();
        store.remove_custom(&record).unwrap();

        assert!(store.custom_connectors().is_empty());
        assert!(!store.is_pinned("mine"));
    }

    #[test]
    fn test_remove_rejects_catalog_and_unknown_connectors() {
        let mut store = ConnectorStore::new();
        assert!(matches!(
            store.remove_custom(&catalog_entry("fitbit")),
            Err(StoreError::NotCustom(_))
        ));
        assert!(matches!(
            store.remove_custom(&catalog_entry("ghost").with_custom(true)),
            Err(StoreError::UnknownCustom(_))
        ));
    }

    #[test]
    // Loading a saved store should return the same store.
    fn test_load_recovers_saved_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("connectors.json");

        let mut store = ConnectorStore::new();
        store.toggle_pin(&catalog_entry("fitbit")).unwrap();
        store
            .add_custom(catalog_entry("mine").with_connect_url("https://mine.example"))
            .unwrap();
        store.save(&path).unwrap();

        let loaded = ConnectorStore::load_from_file(&path).unwrap();
        assert_eq!(store, loaded);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let store = ConnectorStore::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(store, ConnectorStore::default());
    }

    #[test]
    fn test_load_normalizes_hand_edited_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("connectors.json");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            r#"{{"pinned":["a","a","b"],"custom":[{{"id":"c","displayName":"C"}}]}}"#
        )
        .unwrap();

        let store = ConnectorStore::load_from_file(&path).unwrap();
        assert_eq!(store.pinned, vec!["a".to_string(), "b".to_string()]);
        assert!(store.custom_connectors()[0].is_custom());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("connectors.json");
        fs::write(&path, "invalid json").unwrap();
        assert!(ConnectorStore::load_from_file(&path).is_err());
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("connectors.json");
        ConnectorStore::new().save(&path).unwrap();
        ConnectorStore::clear(&path).unwrap();
        assert!(!path.exists());
        // Clearing twice is fine.
        ConnectorStore::clear(&path).unwrap();
    }
}
