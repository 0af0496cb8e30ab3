//! Connector Catalog Client
//!
//! Fetches the connector list over HTTP.

use crate::catalog::{Catalog, CatalogListing};
use crate::catalog::error::CatalogError;
use crate::catalog::wire::parse_catalog;
use crate::consts::cli_consts::catalog_fetching;
use crate::environment::Environment;
use log::debug;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("safe-connectors/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    environment: Environment,
    api_token: String,
}

impl CatalogClient {
    pub fn new(environment: Environment, api_token: impl Into<String>) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(catalog_fetching::request_timeout())
                .timeout(catalog_fetching::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
            api_token: api_token.into(),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.catalog_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, CatalogError> {
        if !response.status().is_success() {
            return Err(CatalogError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Catalog for CatalogClient {
    fn source(&self) -> String {
        self.build_url(catalog_fetching::CONNECTORS_ENDPOINT)
    }

    async fn fetch_connectors(&self) -> Result<CatalogListing, CatalogError> {
        let url = self.build_url(catalog_fetching::CONNECTORS_ENDPOINT);
        debug!("Fetching connector catalog from {}", url);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        Ok(parse_catalog(&body)?)
    }
}
