//! Links into the Safe web app for the current session.

use crate::config::Config;
use crate::consts::cli_consts::{CONNECTORS_SEGMENT, GENERIC_CONNECTORS_ROUTE, SHARE_LANDING_PAGE};
use crate::environment::Environment;

/// Route context of the Safe the dashboard is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRoutes {
    /// Path of the connectors view for this Safe, e.g. `/eth:0xabc/connectors`.
    pub base_path: String,
    /// Origin of the web app that share links open.
    pub origin: String,
    /// Chain the Safe lives on.
    pub chain_id: String,
}

impl SessionRoutes {
    pub fn new(short_name: &str, safe_address: &str, origin: impl Into<String>, chain_id: impl Into<String>) -> Self {
        Self {
            base_path: format!("/{}:{}/{}", short_name, safe_address, CONNECTORS_SEGMENT),
            origin: origin.into(),
            chain_id: chain_id.into(),
        }
    }

    pub fn from_config(config: &Config, environment: Environment) -> Self {
        Self::new(
            &config.short_name,
            &config.safe_address,
            environment.app_origin(),
            config.chain_id.clone(),
        )
    }

    /// Link that opens `connect_url` inside the connectors view.
    pub fn open_link(&self, connect_url: &str) -> String {
        format!("{}?appUrl={}", self.base_path, urlencoding::encode(connect_url))
    }

    /// Public link that lands on the shared connector for this chain.
    pub fn share_link(&self, connect_url: &str) -> String {
        format!(
            "{}{}?appUrl={}&chainId={}",
            self.origin.trim_end_matches('/'),
            SHARE_LANDING_PAGE,
            urlencoding::encode(connect_url),
            urlencoding::encode(&self.chain_id)
        )
    }

    /// Route listing every connector.
    pub fn explore_link(&self) -> &'static str {
        GENERIC_CONNECTORS_ROUTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> SessionRoutes {
        SessionRoutes::new("eth", "0xAbC", "https://app.example/", "1")
    }

    #[test]
    fn test_base_path() {
        assert_eq!(routes().base_path, "/eth:0xAbC/connectors");
    }

    #[test]
    fn test_open_link_encodes_connect_url() {
        assert_eq!(
            routes().open_link("https://fitbit.com/oauth?x=1&y=2"),
            "/eth:0xAbC/connectors?appUrl=https%3A%2F%2Ffitbit.com%2Foauth%3Fx%3D1%26y%3D2"
        );
    }

    #[test]
    fn test_share_link_carries_chain() {
        assert_eq!(
            routes().share_link("https://a.example"),
            "https://app.example/share/safe-app?appUrl=https%3A%2F%2Fa.example&chainId=1"
        );
    }

    #[test]
    fn test_from_config_uses_environment_origin() {
        let config = Config::default();
        let routes = SessionRoutes::from_config(&config, Environment::Local);
        assert_eq!(routes.origin, "http://localhost:3000");
        assert_eq!(routes.chain_id, config.chain_id);
    }
}
