//! Resource store loader.
//!
//! Scans a flat directory of markdown documents once at startup. The
//! directory is created if absent; files with other extensions are ignored.

use rmcp::model::{AnnotateAble, RawResource};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, error, warn};

use super::error::ResourceError;
use super::service::ResourceEntry;

/// Recognized document extension.
pub const RESOURCE_EXTENSION: &str = "md";

/// Mime type reported for every resource document.
pub const RESOURCE_MIME_TYPE: &str = "text/markdown";

/// Load every markdown document under `root` into a sorted map keyed by the
/// synthesized `resource://<name>` uri.
///
/// A missing root is created and yields an empty store; an unreadable root
/// is logged and also yields an empty store.
pub fn load_resources(root: &Path) -> BTreeMap<String, ResourceEntry> {
    let mut resources = BTreeMap::new();

    if !root.exists() {
        if let Err(e) = fs::create_dir_all(root) {
            error!(
                "Failed to create resources directory {}: {}",
                root.display(),
                e
            );
            return resources;
        }
    }

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to read resources directory {}: {}", root.display(), e);
            return resources;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(RESOURCE_EXTENSION)
        {
            continue;
        }

        match load_document(&path) {
            Ok((uri, entry)) => {
                debug!("Loaded resource: {}", uri);
                resources.insert(uri, entry);
            }
            Err(e) => {
                warn!("Skipping resource {}: {}", path.display(), e);
            }
        }
    }

    resources
}

/// Load a single document, deriving its name, uri, and description.
fn load_document(path: &Path) -> Result<(String, ResourceEntry), ResourceError> {
    let content = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let uri = format!("resource://{name}");

    let mut raw = RawResource::new(uri.as_str(), name.as_str());
    raw.description = Some(describe(&content, &name));
    raw.mime_type = Some(RESOURCE_MIME_TYPE.to_string());

    Ok((
        uri,
        ResourceEntry {
            resource: raw.no_annotation(),
            content,
        },
    ))
}

/// Derive a description from the document's first line.
///
/// A first line starting with `#` yields that heading with one marker
/// stripped and surrounding whitespace trimmed; anything else (or an empty
/// heading) falls back to `Resource: <name>`.
fn describe(content: &str, name: &str) -> String {
    let first = content.lines().next().unwrap_or("");
    if let Some(rest) = first.strip_prefix('#') {
        let heading = rest.trim();
        if !heading.is_empty() {
            return heading.to_string();
        }
    }
    format!("Resource: {name}")
}
