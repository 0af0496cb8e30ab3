//! Catalog backed by a local JSON file in the catalog wire format.

use crate::catalog::{Catalog, CatalogListing};
use crate::catalog::error::CatalogError;
use crate::catalog::wire::parse_catalog;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl Catalog for FileCatalog {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_connectors(&self) -> Result<CatalogListing, CatalogError> {
        let body = tokio::fs::read(&self.path).await?;
        Ok(parse_catalog(&body)?)
    }
}
