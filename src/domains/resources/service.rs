//! Resource service implementation.
//!
//! The ResourceService owns the resource store: a map populated once from
//! the resources directory at construction time and read-only afterward. It
//! handles resource listing and read requests for the MCP handlers.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use tracing::info;

use super::error::ResourceError;
use super::loader::load_resources;
use crate::core::config::ResourcesConfig;

/// An entry in the resource store.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata as reported to clients.
    pub resource: Resource,

    /// The document text served on read.
    pub content: String,
}

/// Service for listing and reading static resource documents.
pub struct ResourceService {
    /// Resource store. Key: `resource://<name>` uri, populated once at
    /// startup.
    resources: BTreeMap<String, ResourceEntry>,
}

impl ResourceService {
    /// Create a new ResourceService, scanning the configured resources
    /// directory once.
    pub fn new(config: &ResourcesConfig) -> Self {
        info!(
            "Loading resources from {}",
            config.resources_dir.display()
        );
        let resources = load_resources(&config.resources_dir);
        info!("Loaded {} resources", resources.len());

        Self { resources }
    }

    /// Build a service directly from an already-loaded store.
    pub fn from_resources(resources: BTreeMap<String, ResourceEntry>) -> Self {
        Self { resources }
    }

    /// List all available resources, in lexicographic uri order.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by uri.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(&entry.content, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::{AnnotateAble, RawResource};

    fn fixture_service() -> ResourceService {
        let mut raw = RawResource::new("resource://setup", "setup");
        raw.description = Some("Setup Guide".to_string());
        raw.mime_type = Some("text/markdown".to_string());

        let mut resources = BTreeMap::new();
        resources.insert(
            "resource://setup".to_string(),
            ResourceEntry {
                resource: raw.no_annotation(),
                content: "# Setup Guide\n\nSteps...".to_string(),
            },
        );
        ResourceService::from_resources(resources)
    }

    #[tokio::test]
    async fn test_list_resources() {
        let service = fixture_service();
        let resources = service.list_resources().await;

        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.uri, "resource://setup");
        assert_eq!(resources[0].raw.name, "setup");
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let service = fixture_service();

        let result = service.read_resource("resource://setup").await.unwrap();
        assert_eq!(result.contents.len(), 1);
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = fixture_service();

        let err = service
            .read_resource("resource://missing")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Resource not found: resource://missing");
    }
}
