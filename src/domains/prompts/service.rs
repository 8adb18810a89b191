//! Prompt service implementation.
//!
//! The PromptService owns the template store: a map populated once from the
//! templates directory at construction time and read-only afterward. It
//! handles prompt listing and argument substitution for the MCP handlers.

use rmcp::model::{GetPromptResult, Prompt, PromptArgument, PromptMessage, PromptMessageRole};
use std::collections::{BTreeMap, HashMap};
use tracing::info;

use super::error::PromptError;
use super::loader::load_templates;
use super::templates::{Template, render};
use crate::core::config::PromptsConfig;

/// Service for listing templates and rendering prompts from them.
pub struct PromptService {
    /// Template store. Key: category name, populated once at startup.
    templates: BTreeMap<String, Template>,
}

impl PromptService {
    /// Create a new PromptService, scanning the configured templates
    /// directory once.
    pub fn new(config: &PromptsConfig) -> Self {
        info!(
            "Loading templates from {}",
            config.templates_dir.display()
        );
        let templates = load_templates(&config.templates_dir);
        info!("Loaded {} template categories", templates.len());

        Self { templates }
    }

    /// Build a service directly from an already-loaded store.
    pub fn from_templates(templates: BTreeMap<String, Template>) -> Self {
        Self { templates }
    }

    /// Look up a template by category name.
    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// List all available prompts, in lexicographic category order.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.templates
            .iter()
            .map(|(name, template)| Prompt {
                name: name.clone(),
                title: None,
                description: Some(template.config.description.clone()),
                arguments: Some(
                    template
                        .config
                        .arguments
                        .iter()
                        .map(|arg| PromptArgument {
                            name: arg.name.clone(),
                            title: None,
                            description: Some(arg.description.clone()),
                            required: Some(arg.required),
                        })
                        .collect(),
                ),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with placeholder tokens substituted.
    ///
    /// Omitted arguments are treated as an empty map; tokens without a
    /// matching argument stay in the output verbatim.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| PromptError::unknown(name))?;

        let arguments = arguments.unwrap_or_default();
        let text = render(&template.body, &arguments);

        Ok(GetPromptResult {
            description: Some(template.config.description.clone()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}
