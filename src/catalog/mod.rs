//! Remote connector catalog
//!
//! The dashboard only needs one operation from the catalog: the current list
//! of connectors. It is a trait so the fetch worker can run against the HTTP
//! client, a local file, or a mock.

use crate::catalog::error::CatalogError;

pub(crate) mod client;
pub use client::CatalogClient;
pub mod error;
pub mod file;
pub use file::FileCatalog;
pub mod wire;
pub use wire::CatalogListing;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Human-readable origin of the catalog, for logs.
    fn source(&self) -> String;

    /// Fetches every connector the catalog currently lists, along with the
    /// entries that could not be used.
    async fn fetch_connectors(&self) -> Result<CatalogListing, CatalogError>;
}
