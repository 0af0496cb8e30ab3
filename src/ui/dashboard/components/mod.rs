//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod connectors;
pub mod footer;
pub mod header;
pub mod logs;
