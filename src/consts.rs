pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the connectors
    //! dashboard, organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size between the fetch worker and the UI loop
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Pending refresh requests the fetch worker will buffer
    pub const REFRESH_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // DASHBOARD LAYOUT
    // =============================================================================

    /// Default number of grid cells in the connectors widget (explore cell included).
    pub const DEFAULT_DASHBOARD_SIZE: usize = 6;

    /// Terminal width (columns) under which the grid collapses to one column.
    pub const SCREEN_SM_COLS: u16 = 80;

    /// Terminal width (columns) under which the grid uses two columns.
    pub const SCREEN_MD_COLS: u16 = 120;

    /// Height of a single connector card, borders included.
    pub const CARD_HEIGHT: u16 = 7;

    /// Logo used once a connector image fails to load.
    pub const FALLBACK_CONNECTOR_LOGO: &str = "assets/icons/apps.svg";

    // =============================================================================
    // ROUTES
    // =============================================================================

    /// Route listing every available connector.
    pub const GENERIC_CONNECTORS_ROUTE: &str = "/connectors";

    /// Landing page that opens a shared connector link.
    pub const SHARE_LANDING_PAGE: &str = "/share/safe-app";

    /// Path segment of the connectors view under a Safe address.
    pub const CONNECTORS_SEGMENT: &str = "connectors";

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Catalog fetching retry configuration
    pub mod catalog_fetching {
        use std::time::Duration;

        /// Connector list endpoint, relative to the catalog base URL
        pub const CONNECTORS_ENDPOINT: &str = "api/v3/connectors/list";

        /// Initial delay before retrying a failed catalog fetch (milliseconds)
        pub const INITIAL_BACKOFF_MS: u64 = 500;

        /// Maximum number of retry attempts for a single fetch generation
        pub const MAX_RETRIES: u32 = 3;

        /// Connect and request timeout for the catalog client (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get initial backoff duration
        pub const fn initial_backoff() -> Duration {
            Duration::from_millis(INITIAL_BACKOFF_MS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // NOTIFICATIONS
    // =============================================================================

    pub mod notifications {
        pub const SHARE_URL_COPIED: &str = "Safe App URL copied to clipboard!";
        pub const CONNECTOR_PINNED: &str = "Connector pinned to the dashboard";
        pub const CONNECTOR_UNPINNED: &str = "Connector unpinned from the dashboard";
        pub const CUSTOM_CONNECTOR_REMOVED: &str = "Custom connector removed";
    }
}
