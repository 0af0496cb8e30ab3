//! Connector catalog wire format
//!
//! The catalog answers either with a bare array of connectors or with
//! `{ "connectors": [...] }`. Ids arrive as numbers or strings.

use crate::connector::{ConnectorError, ConnectorRecord, FetchStatus};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    List(Vec<Value>),
    Wrapped { connectors: Vec<Value> },
}

#[derive(Debug, Deserialize)]
pub struct WireConnectInstructions {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireConnector {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub connect_instructions: Option<WireConnectInstructions>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub fetch_status: Option<FetchStatus>,
}

/// Records from one catalog body, plus why any entries were left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogListing {
    pub connectors: Vec<ConnectorRecord>,
    pub skipped: Vec<String>,
}

impl From<Vec<ConnectorRecord>> for CatalogListing {
    fn from(connectors: Vec<ConnectorRecord>) -> Self {
        Self {
            connectors,
            skipped: Vec::new(),
        }
    }
}

/// Ids arrive as non-negative numbers or non-blank strings.
fn id_from_value(id: Option<Value>) -> Result<String, String> {
    match id {
        None | Some(Value::Null) => Err("missing id".to_string()),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(|n| n.to_string())
            .ok_or_else(|| format!("unusable id {}", n)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(format!("unusable id {}", other)),
    }
}

impl CatalogResponse {
    /// Converts entry by entry. A bad entry is skipped and never fails the
    /// whole listing.
    pub fn into_listing(self) -> CatalogListing {
        let entries = match self {
            CatalogResponse::List(list) => list,
            CatalogResponse::Wrapped { connectors } => connectors,
        };
        let mut listing = CatalogListing::default();
        for (index, entry) in entries.into_iter().enumerate() {
            let converted = serde_json::from_value::<WireConnector>(entry)
                .map_err(|e| e.to_string())
                .and_then(|wire| wire.into_record());
            match converted {
                Ok(record) => listing.connectors.push(record),
                Err(reason) => listing
                    .skipped
                    .push(format!("entry {}: {}", index, reason)),
            }
        }
        listing
    }
}

impl WireConnector {
    fn into_record(self) -> Result<ConnectorRecord, String> {
        let id = id_from_value(self.id)?;
        let display_name = self
            .display_name
            .filter(|name| !name.is_empty())
            .or(self.name)
            .unwrap_or_default();
        let mut record = ConnectorRecord::new(id, display_name)
            .map_err(|e: ConnectorError| e.to_string())?
            .with_short_description(self.short_description.unwrap_or_default())
            .with_fetch_status(self.fetch_status.unwrap_or(FetchStatus::Success))
            .with_disabled(!self.enabled.unwrap_or(true));
        if let Some(image) = self.image {
            record = record.with_image(image);
        }
        if let Some(instructions) = self.connect_instructions {
            record = record.with_connect_url(instructions.url);
        }
        Ok(record)
    }
}

/// Parses a catalog body. Only a body that is not a connector list at all
/// is an error.
pub fn parse_catalog(body: &[u8]) -> Result<CatalogListing, serde_json::Error> {
    let response: CatalogResponse = serde_json::from_slice(body)?;
    Ok(response.into_listing())
}
