//! Known locations resource.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{ResourceContext, ResourceDefinition};
use crate::domains::catalog::FeedKind;
use crate::domains::resources::ResourceError;

/// Every location in the catalog with the number of records per feed.
pub struct LocationsResource;

#[derive(Debug, Serialize)]
struct LocationSummary {
    location: String,
    feeds: BTreeMap<&'static str, usize>,
}

impl ResourceDefinition for LocationsResource {
    const URI: &'static str = "crisis://catalog/locations";
    const NAME: &'static str = "Catalog Locations";
    const DESCRIPTION: &'static str =
        "Locations with crisis data and the number of records in each feed";
    const MIME_TYPE: &'static str = "application/json";

    fn render(ctx: ResourceContext<'_>) -> Result<String, ResourceError> {
        let summaries: Vec<LocationSummary> = ctx
            .catalog
            .locations()
            .into_iter()
            .map(|location| {
                let feeds = FeedKind::ALL
                    .iter()
                    .map(|&kind| {
                        let count = ctx
                            .catalog
                            .lookup(kind, &location)
                            .map_or(0, |record| record.len());
                        (kind.as_str(), count)
                    })
                    .collect();
                LocationSummary { location, feeds }
            })
            .collect();

        Ok(serde_json::to_string_pretty(&summaries)?)
    }
}
