//! API connector records
//!
//! A connector is a third-party app or data source listed on the dashboard.
//! Records are immutable values: every change produces a new record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod reconcile;
pub mod store;

pub use reconcile::reconcile;
pub use store::ConnectorStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConnectorError {
    /// Every connector needs a non-blank id to be tracked by pin and custom state.
    #[error("Connector id must not be empty")]
    EmptyId,
}

/// Where a connector's data currently stands.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchStatus {
    Loading,
    #[default]
    Success,
    Error,
}

/// Deep-link target used to open a connector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectInstructions {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConnectorRecord", rename_all = "camelCase")]
pub struct ConnectorRecord {
    id: String,
    display_name: String,
    short_description: String,
    image: Option<String>,
    connect_instructions: Option<ConnectInstructions>,
    fetch_status: FetchStatus,
    custom: bool,
    disabled: bool,
}

/// Unvalidated shape used when reading records from disk.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConnectorRecord {
    id: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    short_description: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    connect_instructions: Option<ConnectInstructions>,
    #[serde(default)]
    fetch_status: FetchStatus,
    #[serde(default)]
    custom: bool,
    #[serde(default)]
    disabled: bool,
}

impl TryFrom<RawConnectorRecord> for ConnectorRecord {
    type Error = ConnectorError;

    fn try_from(raw: RawConnectorRecord) -> Result<Self, Self::Error> {
        let record = ConnectorRecord::new(raw.id, raw.display_name)?
            .with_short_description(raw.short_description)
            .with_fetch_status(raw.fetch_status)
            .with_custom(raw.custom)
            .with_disabled(raw.disabled);
        let record = match raw.image {
            Some(image) => record.with_image(image),
            None => record,
        };
        Ok(match raw.connect_instructions {
            Some(instructions) => record.with_connect_url(instructions.url),
            None => record,
        })
    }
}

impl ConnectorRecord {
    /// Creates a successfully fetched, non-custom, enabled connector.
    ///
    /// # Errors
    /// Returns [`ConnectorError::EmptyId`] when `id` is blank.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Result<Self, ConnectorError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConnectorError::EmptyId);
        }
        Ok(Self {
            id,
            display_name: display_name.into(),
            short_description: String::new(),
            image: None,
            connect_instructions: None,
            fetch_status: FetchStatus::Success,
            custom: false,
            disabled: false,
        })
    }

    /// Placeholder for a connector whose metadata is still being fetched.
    pub fn loading(id: impl Into<String>) -> Result<Self, ConnectorError> {
        Ok(Self::new(id, "")?.with_fetch_status(FetchStatus::Loading))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn connect_instructions(&self) -> Option<&ConnectInstructions> {
        self.connect_instructions.as_ref()
    }

    /// The deep-link URL, if the connector can be opened at all.
    pub fn connect_url(&self) -> Option<&str> {
        self.connect_instructions.as_ref().map(|i| i.url.as_str())
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.fetch_status
    }

    pub fn is_loading(&self) -> bool {
        self.fetch_status == FetchStatus::Loading
    }

    pub fn is_custom(&self) -> bool {
        self.custom
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn with_display_name(self, display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..self
        }
    }

    pub fn with_short_description(self, short_description: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            ..self
        }
    }

    /// Sets the logo URL. A blank URL clears it.
    pub fn with_image(self, image: impl Into<String>) -> Self {
        let image = image.into();
        Self {
            image: (!image.trim().is_empty()).then_some(image),
            ..self
        }
    }

    /// Sets the deep-link URL. A blank URL removes the connect instructions.
    pub fn with_connect_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            connect_instructions: (!url.trim().is_empty()).then_some(ConnectInstructions { url }),
            ..self
        }
    }

    pub fn without_connect_instructions(self) -> Self {
        Self {
            connect_instructions: None,
            ..self
        }
    }

    pub fn with_fetch_status(self, fetch_status: FetchStatus) -> Self {
        Self {
            fetch_status,
            ..self
        }
    }

    pub fn with_custom(self, custom: bool) -> Self {
        Self { custom, ..self }
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        Self { disabled, ..self }
    }
}
