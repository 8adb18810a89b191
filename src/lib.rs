//! Template MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing a
//! catalog of reusable prompt templates and static markdown resources, both
//! loaded from the filesystem once at startup.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the server handler, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **prompts**: Template store, placeholder renderer, prompt service
//!   - **resources**: Resource store and service
//!
//! # Example
//!
//! ```rust,no_run
//! use template_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Attach the stdio transport...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
