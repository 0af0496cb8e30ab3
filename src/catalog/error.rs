//! Error handling for the catalog module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog body was not valid connector JSON.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// A local catalog file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl CatalogError {
    pub async fn from_response(response: reqwest::Response) -> CatalogError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        CatalogError::Http { status, message }
    }
}
