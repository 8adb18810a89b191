//! Resources domain module.
//!
//! This module handles all resource-related functionality for the MCP
//! server. Resources are static markdown documents loaded from a flat
//! directory at startup and exposed under synthesized `resource://<name>`
//! uris.
//!
//! ## Architecture
//!
//! - `loader.rs` - Startup directory scan (auto-creates a missing root)
//! - `service.rs` - Resource service for listing and reading
//!
//! The store is populated exactly once, before the server accepts requests,
//! and never mutated afterward.

mod error;
mod loader;
mod service;

pub use error::ResourceError;
pub use loader::{RESOURCE_EXTENSION, RESOURCE_MIME_TYPE, load_resources};
pub use service::{ResourceEntry, ResourceService};
