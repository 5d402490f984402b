//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and a
//! render function over the current catalog snapshot.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement `ResourceDefinition` (or `ResourceTemplateDefinition`)
//! 3. Export it here
//! 4. Register in `registry.rs`

mod location_feeds;
mod locations;
mod server_info;

pub use location_feeds::LocationFeedsTemplate;
pub use locations::LocationsResource;
pub use server_info::ServerInfoResource;

use super::error::ResourceError;
use crate::core::config::Config;
use crate::domains::catalog::CatalogSource;

/// What a resource may read while rendering.
#[derive(Clone, Copy)]
pub struct ResourceContext<'a> {
    pub catalog: &'a dyn CatalogSource,
    pub config: &'a Config,
}

impl<'a> ResourceContext<'a> {
    pub fn new(catalog: &'a dyn CatalogSource, config: &'a Config) -> Self {
        Self { catalog, config }
    }
}

/// Trait for fixed-URI resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Render the resource body.
    fn render(ctx: ResourceContext<'_>) -> Result<String, ResourceError>;
}

/// Trait for parameterized resources addressed by a URI template.
///
/// Only single-variable templates of the form `prefix{var}` are supported.
pub trait ResourceTemplateDefinition {
    /// RFC 6570 template, e.g. `crisis://catalog/{location}`.
    const URI_TEMPLATE: &'static str;

    /// Literal part of the template before the variable.
    const PREFIX: &'static str;

    const NAME: &'static str;
    const TITLE: &'static str;
    const DESCRIPTION: &'static str;
    const MIME_TYPE: &'static str;

    /// Render the resource for the variable extracted from the URI.
    fn render(value: &str, uri: &str, ctx: ResourceContext<'_>) -> Result<String, ResourceError>;
}
