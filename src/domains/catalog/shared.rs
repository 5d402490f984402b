//! Swappable catalog snapshot handle.
//!
//! Calls clone the current `Arc` out of the lock and work on that snapshot
//! for their whole duration, so a `swap` never changes data under an
//! in-flight call.

use std::sync::{Arc, RwLock};

use tracing::info;

use super::source::CatalogSource;

/// Shared, atomically replaceable reference to the active catalog.
#[derive(Clone)]
pub struct SharedCatalog {
    current: Arc<RwLock<Arc<dyn CatalogSource>>>,
}

impl SharedCatalog {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self::from_arc(Arc::new(source))
    }

    pub fn from_arc(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            current: Arc::new(RwLock::new(source)),
        }
    }

    /// The catalog as of now. Later swaps do not affect the returned value.
    pub fn snapshot(&self) -> Arc<dyn CatalogSource> {
        // The guarded value is a plain Arc; a poisoned lock still holds a valid one.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Replace the catalog for all subsequent snapshots.
    pub fn swap(&self, source: impl CatalogSource + 'static) {
        let source: Arc<dyn CatalogSource> = Arc::new(source);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = source;
        info!("Catalog snapshot replaced");
    }
}

impl std::fmt::Debug for SharedCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCatalog")
            .field("locations", &self.snapshot().locations())
            .finish()
    }
}
