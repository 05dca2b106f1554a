use serde::{Deserialize, Serialize};

use crate::model::vo::{Catalog, PricingConfig};

/// Global capacity figures shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    /// Number of instances the platform offers.
    pub max_active_instances: u64,
    /// Storage the platform offers, in TB.
    pub max_total_storage: u64,
}

/// Everything the order form needs to price and validate an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    #[serde(flatten)]
    pub pricing: PricingConfig,
    #[serde(rename = "ramOptions")]
    pub ram_options: Catalog,
    #[serde(flatten)]
    pub capacity: Capacity,
}
