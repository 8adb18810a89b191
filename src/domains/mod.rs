//! Business logic organized by bounded contexts.
//!
//! Each domain owns its error type, its startup loader, and the service
//! consumed by the MCP server handler.

pub mod prompts;
pub mod resources;
