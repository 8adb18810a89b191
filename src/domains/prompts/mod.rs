//! Prompts domain module.
//!
//! This module handles all prompt-related functionality for the MCP server.
//! Prompts are text templates loaded from a directory tree at startup: one
//! subdirectory per category, each holding a `config.yaml` describing the
//! template and a `template.md` with the placeholder-bearing body.
//!
//! ## Architecture
//!
//! - `templates.rs` - Template types and the `{{ name }}` renderer
//! - `loader.rs` - Startup directory scan (partial-failure tolerant)
//! - `service.rs` - Prompt service for listing and rendering
//!
//! The store is populated exactly once, before the server accepts requests,
//! and never mutated afterward.

mod error;
mod loader;
mod service;
pub mod templates;

pub use error::PromptError;
pub use loader::{CONFIG_FILE, TEMPLATE_FILE, load_templates};
pub use service::PromptService;
pub use templates::{Template, TemplateArgument, TemplateConfig, TemplateMetadata};
