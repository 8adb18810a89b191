//! Template store loader.
//!
//! Scans the templates root once at startup. Each immediate subdirectory is
//! a category holding a `config.yaml` and a `template.md`; a category that
//! fails to load is logged and skipped without aborting the rest of the
//! scan.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, error, warn};

use super::error::PromptError;
use super::templates::{Template, TemplateConfig};

/// Well-known config filename inside each category directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Well-known template filename inside each category directory.
pub const TEMPLATE_FILE: &str = "template.md";

/// Load every category under `root` into a sorted map.
///
/// Keys are category directory names; iteration order is lexicographic so
/// listings are reproducible across platforms. A missing or unreadable root
/// yields an empty map, not an error.
pub fn load_templates(root: &Path) -> BTreeMap<String, Template> {
    let mut templates = BTreeMap::new();

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to read templates directory {}: {}", root.display(), e);
            return templates;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let category = entry.file_name().to_string_lossy().into_owned();

        match load_category(&path) {
            Ok(template) => {
                debug!("Loaded template category: {}", category);
                templates.insert(category, template);
            }
            Err(e) => {
                warn!("Skipping template category {}: {}", category, e);
            }
        }
    }

    templates
}

/// Load a single category directory.
fn load_category(dir: &Path) -> Result<Template, PromptError> {
    let config_path = dir.join(CONFIG_FILE);
    let config_text =
        fs::read_to_string(&config_path).map_err(|e| PromptError::read(&config_path, e))?;
    let config: TemplateConfig =
        serde_yaml::from_str(&config_text).map_err(|e| PromptError::config(&config_path, e))?;
    config.validate()?;

    let body_path = dir.join(TEMPLATE_FILE);
    let body = fs::read_to_string(&body_path).map_err(|e| PromptError::read(&body_path, e))?;

    Ok(Template { config, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID_CONFIG: &str = r#"
description: Summarize a piece of text
version: "1.0"
arguments:
  - name: topic
    description: What to summarize
    required: true
metadata:
  tags: [summary]
  suggested_use: Condensing long documents
  output_format: markdown
"#;

    fn write_category(root: &Path, name: &str, config: &str, body: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), config).unwrap();
        fs::write(dir.join(TEMPLATE_FILE), body).unwrap();
    }

    #[test]
    fn test_loads_valid_categories() {
        let root = TempDir::new().unwrap();
        write_category(root.path(), "summarize", VALID_CONFIG, "Summarize {{ topic }}");
        write_category(root.path(), "explain", VALID_CONFIG, "Explain {{ topic }}");

        let templates = load_templates(root.path());
        assert_eq!(templates.len(), 2);
        assert_eq!(
            templates["summarize"].body,
            "Summarize {{ topic }}"
        );
        assert_eq!(
            templates["summarize"].config.description,
            "Summarize a piece of text"
        );
    }

    #[test]
    fn test_invalid_categories_skipped_valid_ones_kept() {
        let root = TempDir::new().unwrap();
        write_category(root.path(), "good_a", VALID_CONFIG, "A {{ topic }}");
        write_category(root.path(), "good_b", VALID_CONFIG, "B {{ topic }}");

        // Malformed YAML.
        write_category(root.path(), "bad_yaml", "description: [unclosed", "body");

        // Missing required config fields.
        write_category(root.path(), "bad_fields", "description: only this", "body");

        // Missing template file.
        let dir = root.path().join("bad_missing_template");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), VALID_CONFIG).unwrap();

        let templates = load_templates(root.path());
        assert_eq!(templates.len(), 2);
        assert!(templates.contains_key("good_a"));
        assert!(templates.contains_key("good_b"));
        assert!(!templates.contains_key("bad_yaml"));
        assert!(!templates.contains_key("bad_fields"));
        assert!(!templates.contains_key("bad_missing_template"));
    }

    #[test]
    fn test_missing_root_yields_empty_store() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("does-not-exist");
        let templates = load_templates(&missing);
        assert!(templates.is_empty());
    }

    #[test]
    fn test_plain_files_in_root_ignored() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("stray.md"), "not a category").unwrap();
        write_category(root.path(), "summarize", VALID_CONFIG, "Summarize {{ topic }}");

        let templates = load_templates(root.path());
        assert_eq!(templates.len(), 1);
    }

    #[test]
    fn test_iteration_order_is_lexicographic() {
        let root = TempDir::new().unwrap();
        write_category(root.path(), "zebra", VALID_CONFIG, "z");
        write_category(root.path(), "alpha", VALID_CONFIG, "a");
        write_category(root.path(), "mango", VALID_CONFIG, "m");

        let templates = load_templates(root.path());
        let keys: Vec<_> = templates.keys().cloned().collect();
        assert_eq!(keys, vec!["alpha", "mango", "zebra"]);
    }
}
