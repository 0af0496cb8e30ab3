//! Background workers feeding the dashboard

pub mod core;
pub mod fetcher;

pub use fetcher::CatalogFetcher;
