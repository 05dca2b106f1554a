use async_trait::async_trait;

use crate::model::vo::{Capacity, Catalog, PricingConfig};

/// Source of the pricing configuration and RAM catalog.
///
/// Every call returns a snapshot that stays valid for the request that asked for it.
#[async_trait]
pub trait SpecificationRepo: Send + Sync {
    async fn get_pricing_config(&self) -> anyhow::Result<PricingConfig>;
    async fn get_catalog(&self) -> anyhow::Result<Catalog>;
    async fn get_capacity(&self) -> anyhow::Result<Capacity>;
}
