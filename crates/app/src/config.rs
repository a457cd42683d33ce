//! Start-up configuration for the orchestrator.

use serde::{Deserialize, Serialize};

use stockroom_inventory::{CategoryFilter, SortDirection};

/// Initial view settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quantity sort direction shown first (descending unless configured).
    pub sort: SortDirection,
    /// Category filter applied on start; empty means all categories.
    pub filter: CategoryFilter,
}

impl AppConfig {
    pub fn new(sort: SortDirection, filter: Option<String>) -> Self {
        Self {
            sort,
            filter: CategoryFilter::from(filter),
        }
    }
}
