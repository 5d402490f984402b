//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate};

use super::definitions::{
    LocationFeedsTemplate, LocationsResource, ResourceDefinition, ResourceTemplateDefinition,
    ServerInfoResource,
};
use super::service::{ResourceEntry, TemplateEntry};

fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        render: R::render,
    }
}

fn build_template<T: ResourceTemplateDefinition>() -> TemplateEntry {
    TemplateEntry {
        template: RawResourceTemplate {
            uri_template: T::URI_TEMPLATE.to_string(),
            name: T::NAME.to_string(),
            title: Some(T::TITLE.to_string()),
            description: Some(T::DESCRIPTION.to_string()),
            mime_type: Some(T::MIME_TYPE.to_string()),
        }
        .no_annotation(),
        prefix: T::PREFIX,
        render: T::render,
    }
}

/// Get all fixed-URI resources, in listing order.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<LocationsResource>(),
        build_resource::<ServerInfoResource>(),
    ]
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<TemplateEntry> {
    vec![build_template::<LocationFeedsTemplate>()]
}

/// Get the list of all fixed resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![LocationsResource::URI, ServerInfoResource::URI]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 2);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert_eq!(uris, resource_uris());
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(
            templates[0].template.raw.uri_template,
            "crisis://catalog/{location}"
        );
        assert!(templates[0]
            .template
            .raw
            .uri_template
            .starts_with(templates[0].prefix));
    }
}
