use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state
///
/// Holds only the static catalog; it is seeded once and never mutated, so
/// requests can be served concurrently without coordination.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates application state with the seeded catalog
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(Catalog::new()),
        }
    }
}
