//! Catalog domain module.
//!
//! The catalog holds the static feed tables every tool reads from: risk
//! zones, road status, water gauges, shelters, hospitals and weather, each
//! keyed by a location name.
//!
//! ## Architecture
//!
//! - `model.rs` - Feed record types
//! - `source.rs` - `CatalogSource` lookup trait and typed accessors
//! - `builtin.rs` - `StaticCatalog` with the built-in tables and JSON loading
//! - `shared.rs` - Swappable snapshot handle used by the server
//! - `error.rs` - Catalog loading errors
//!
//! An unknown location is never an error: lookups return `None` and the
//! typed accessors degrade to empty slices.

mod builtin;
mod error;
pub mod model;
mod shared;
mod source;

pub use builtin::StaticCatalog;
pub use error::CatalogError;
pub use model::{
    Hospital, LocationFeeds, RiskZoneSet, RoadSegment, Shelter, WaterGauge, WeatherSnapshot,
};
pub use shared::SharedCatalog;
pub use source::{CatalogExt, CatalogSource, FeedKind, FeedRecord};
