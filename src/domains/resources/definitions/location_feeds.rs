//! Per-location feed dump, addressed by template.

use serde_json::{Map, Value};

use super::{ResourceContext, ResourceTemplateDefinition};
use crate::domains::catalog::FeedKind;
use crate::domains::resources::ResourceError;

/// All feeds recorded for one location.
pub struct LocationFeedsTemplate;

impl ResourceTemplateDefinition for LocationFeedsTemplate {
    const URI_TEMPLATE: &'static str = "crisis://catalog/{location}";
    const PREFIX: &'static str = "crisis://catalog/";
    const NAME: &'static str = "Location Feeds";
    const TITLE: &'static str = "Crisis Data for a Location";
    const DESCRIPTION: &'static str =
        "Risk zones, roads, water gauges, shelters, hospitals and weather for one location";
    const MIME_TYPE: &'static str = "application/json";

    fn render(
        location: &str,
        uri: &str,
        ctx: ResourceContext<'_>,
    ) -> Result<String, ResourceError> {
        let mut feeds = Map::new();
        for kind in FeedKind::ALL {
            if let Some(record) = ctx.catalog.lookup(kind, location) {
                feeds.insert(kind.as_str().to_string(), serde_json::to_value(record)?);
            }
        }

        if feeds.is_empty() {
            return Err(ResourceError::not_found(uri));
        }

        let body = serde_json::json!({
            "location": location,
            "feeds": Value::Object(feeds),
        });
        Ok(serde_json::to_string_pretty(&body)?)
    }
}
