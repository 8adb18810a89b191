//! Template types and the placeholder renderer.
//!
//! A template is the pair of a parsed `config.yaml` and the raw text of
//! `template.md`. Rendering substitutes `{{ name }}` placeholder tokens
//! with caller-supplied argument values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::PromptError;

/// Parsed per-category configuration (`config.yaml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Human-readable description of the template.
    pub description: String,

    /// Template version string.
    pub version: String,

    /// The arguments this template accepts, in declaration order.
    pub arguments: Vec<TemplateArgument>,

    /// Free-form authoring metadata.
    pub metadata: TemplateMetadata,
}

/// A single declared template argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateArgument {
    /// Placeholder name as it appears inside `{{ name }}` tokens.
    pub name: String,

    /// What the argument is for.
    pub description: String,

    /// Whether callers are expected to supply this argument.
    pub required: bool,
}

/// Authoring metadata carried alongside a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateMetadata {
    /// Classification tags.
    pub tags: Vec<String>,

    /// Guidance on when to use the template.
    pub suggested_use: String,

    /// Expected output format of the rendered prompt.
    pub output_format: String,
}

impl TemplateConfig {
    /// Validate the parsed configuration beyond what the typed parse
    /// already guarantees.
    ///
    /// A failure here excludes the owning category from the store, the
    /// same as a parse failure.
    pub fn validate(&self) -> Result<(), PromptError> {
        if self.description.trim().is_empty() {
            return Err(PromptError::validation("description must not be empty"));
        }

        let mut seen = Vec::with_capacity(self.arguments.len());
        for arg in &self.arguments {
            if arg.name.trim().is_empty() {
                return Err(PromptError::validation("argument name must not be empty"));
            }
            if seen.contains(&arg.name.as_str()) {
                return Err(PromptError::validation(format!(
                    "duplicate argument name: {}",
                    arg.name
                )));
            }
            seen.push(arg.name.as_str());
        }

        Ok(())
    }
}

/// A loaded template: configuration plus the raw body text.
#[derive(Debug, Clone)]
pub struct Template {
    /// Parsed configuration.
    pub config: TemplateConfig,

    /// Raw template text containing zero or more `{{ name }}` tokens.
    pub body: String,
}

/// Substitute `{{ name }}` placeholder tokens in `body` with argument values.
///
/// A single left-to-right pass over `body`: each `{{ name }}` token (literal
/// double braces, one interior space on each side, name matched verbatim and
/// case-sensitively) whose name is present in `arguments` is replaced by the
/// argument value; tokens with no matching key are emitted unchanged. Keys
/// with no matching token are ignored. Substituted values are never
/// re-scanned, so a value that itself looks like a placeholder stays as-is.
pub fn render(body: &str, arguments: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(open) = rest.find("{{ ") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 3..];

        let token = after
            .find(" }}")
            .and_then(|close| arguments.get(&after[..close]).map(|value| (value, close)));

        match token {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 3..];
            }
            None => {
                // Not a substitutable token. Emit the braces and resume
                // scanning right after them so later tokens are still found.
                out.push_str("{{");
                rest = &rest[open + 2..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let result = render("Summarize {{ topic }}", &args(&[("topic", "cats")]));
        assert_eq!(result, "Summarize cats");
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let result = render("{{ a }}, {{ a }}", &args(&[("a", "x")]));
        assert_eq!(result, "x, x");
    }

    #[test]
    fn test_unmatched_token_left_intact() {
        let result = render("{{ a }} and {{ b }}", &args(&[("a", "x")]));
        assert_eq!(result, "x and {{ b }}");
    }

    #[test]
    fn test_no_recursive_substitution() {
        let result = render("{{ a }}", &args(&[("a", "{{ b }}")]));
        assert_eq!(result, "{{ b }}");
    }

    #[test]
    fn test_value_resembling_other_key_not_expanded() {
        // Both keys supplied; the substituted value must still not be
        // re-scanned, whatever the map iteration order.
        let result = render("{{ a }}", &args(&[("a", "{{ b }}"), ("b", "boom")]));
        assert_eq!(result, "{{ b }}");
    }

    #[test]
    fn test_extra_keys_ignored() {
        let result = render("plain text", &args(&[("unused", "x")]));
        assert_eq!(result, "plain text");
    }

    #[test]
    fn test_spacing_must_match_exactly() {
        let result = render("{{topic}} {{  topic }}", &args(&[("topic", "cats")]));
        assert_eq!(result, "{{topic}} {{  topic }}");
    }

    #[test]
    fn test_case_sensitive_names() {
        let result = render("{{ Topic }}", &args(&[("topic", "cats")]));
        assert_eq!(result, "{{ Topic }}");
    }

    #[test]
    fn test_deterministic() {
        let arguments = args(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let body = "{{ a }} {{ b }} {{ c }} {{ d }}";
        let first = render(body, &arguments);
        let second = render(body, &arguments);
        assert_eq!(first, "1 2 3 {{ d }}");
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_rejects_empty_description() {
        let config = TemplateConfig {
            description: "  ".to_string(),
            version: "1.0".to_string(),
            arguments: vec![],
            metadata: TemplateMetadata {
                tags: vec![],
                suggested_use: String::new(),
                output_format: String::new(),
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_argument() {
        let arg = TemplateArgument {
            name: "topic".to_string(),
            description: "The topic".to_string(),
            required: true,
        };
        let config = TemplateConfig {
            description: "A template".to_string(),
            version: "1.0".to_string(),
            arguments: vec![arg.clone(), arg],
            metadata: TemplateMetadata {
                tags: vec![],
                suggested_use: String::new(),
                output_format: String::new(),
            },
        };
        assert!(config.validate().is_err());
    }
}
