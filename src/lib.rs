//! Safe API connectors dashboard
//!
//! Merges the remote connector catalog with locally pinned and custom
//! connectors, and renders the result as a fixed-size card grid.

pub mod catalog;
pub mod cli_messages;
pub mod clipboard;
pub mod config;
pub mod connector;
pub mod consts;
pub mod dispatch;
pub mod environment;
pub mod error_classifier;
pub mod events;
pub mod logging;
pub mod models;
pub mod notifications;
pub mod routes;
pub mod session;
pub mod ui;
pub mod view;
pub mod workers;
