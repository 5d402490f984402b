//! Resource service implementation.
//!
//! The ResourceService lists resources and resolves read requests against
//! the catalog snapshot it is handed. Fixed URIs win over templates, so
//! `crisis://catalog/locations` is never treated as a location named
//! "locations".

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use tracing::{debug, info};

use super::definitions::ResourceContext;
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};

/// Render function for a fixed-URI resource.
pub type RenderFn = fn(ResourceContext<'_>) -> Result<String, ResourceError>;

/// Render function for a templated resource: `(value, uri, ctx)`.
pub type TemplateRenderFn = fn(&str, &str, ResourceContext<'_>) -> Result<String, ResourceError>;

/// An entry in the resource registry.
#[derive(Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    pub render: RenderFn,
}

/// A registered resource template.
#[derive(Clone)]
pub struct TemplateEntry {
    pub template: ResourceTemplate,

    /// Literal URI prefix preceding the template variable.
    pub prefix: &'static str,

    pub render: TemplateRenderFn,
}

impl std::fmt::Debug for ResourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceEntry")
            .field("uri", &self.resource.raw.uri)
            .finish()
    }
}

impl std::fmt::Debug for TemplateEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEntry")
            .field("uri_template", &self.template.raw.uri_template)
            .finish()
    }
}

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Listing order.
    order: Vec<String>,

    /// Key: resource URI.
    resources: HashMap<String, ResourceEntry>,

    templates: Vec<TemplateEntry>,
}

impl ResourceService {
    pub fn new() -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            order: Vec::new(),
            resources: HashMap::new(),
            templates: get_all_resource_templates(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource. A second registration for a URI replaces the first.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        let uri = entry.resource.raw.uri.to_string();
        debug!("Registering resource: {}", uri);
        if !self.resources.contains_key(&uri) {
            self.order.push(uri.clone());
        }
        self.resources.insert(uri, entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.order
            .iter()
            .filter_map(|uri| self.resources.get(uri))
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates
            .iter()
            .map(|entry| entry.template.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(
        &self,
        uri: &str,
        ctx: ResourceContext<'_>,
    ) -> Result<ReadResourceResult, ResourceError> {
        let text = if let Some(entry) = self.resources.get(uri) {
            (entry.render)(ctx)?
        } else {
            let (entry, value) = self
                .templates
                .iter()
                .find_map(|entry| uri.strip_prefix(entry.prefix).map(|value| (entry, value)))
                .ok_or_else(|| ResourceError::not_found(uri))?;

            if value.is_empty() || value.contains('/') {
                return Err(ResourceError::invalid_uri(uri));
            }
            (entry.render)(value, uri, ctx)?
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::catalog::StaticCatalog;
    use rmcp::model::ResourceContents;

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_list_resources_in_order() {
        let service = ResourceService::new();
        let resources = service.list_resources().await;
        let uris: Vec<_> = resources.iter().map(|r| r.raw.uri.as_str()).collect();
        assert_eq!(
            uris,
            vec!["crisis://catalog/locations", "crisis://server/info"]
        );
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_fixed_resource_wins_over_template() {
        let service = ResourceService::new();
        let catalog = StaticCatalog::builtin();
        let config = Config::default();
        let result = service
            .read_resource(
                "crisis://catalog/locations",
                ResourceContext::new(&catalog, &config),
            )
            .await
            .unwrap();
        assert!(text_of(&result).starts_with('['));
    }

    #[tokio::test]
    async fn test_read_template_resource() {
        let service = ResourceService::new();
        let catalog = StaticCatalog::builtin();
        let config = Config::default();
        let result = service
            .read_resource(
                "crisis://catalog/Boston",
                ResourceContext::new(&catalog, &config),
            )
            .await
            .unwrap();
        assert!(text_of(&result).contains("\"location\": \"Boston\""));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new();
        let catalog = StaticCatalog::builtin();
        let config = Config::default();
        let ctx = ResourceContext::new(&catalog, &config);

        let result = service.read_resource("mcp://server/nonexistent", ctx).await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));

        let result = service.read_resource("crisis://catalog/", ctx).await;
        assert!(matches!(result, Err(ResourceError::InvalidUri(_))));
    }
}
