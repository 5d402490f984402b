//! Server info resource definition.

use super::{ResourceContext, ResourceDefinition};
use crate::domains::resources::ResourceError;

/// Server name, version and where the catalog came from.
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "crisis://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Information about this crisis response server";
    const MIME_TYPE: &'static str = "application/json";

    fn render(ctx: ResourceContext<'_>) -> Result<String, ResourceError> {
        let catalog_origin = match &ctx.config.catalog.path {
            Some(path) => path.display().to_string(),
            None => "builtin".to_string(),
        };

        let info = serde_json::json!({
            "server": ctx.config.server.name,
            "version": ctx.config.server.version,
            "catalog": catalog_origin,
            "locations": ctx.catalog.locations().len(),
            "weather_fallback": ctx.config.catalog.weather_fallback,
        });

        Ok(serde_json::to_string_pretty(&info)?)
    }
}
