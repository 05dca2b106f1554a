use async_trait::async_trait;
use domain_order::{
    model::vo::{Capacity, Catalog, PricingConfig},
    repository::SpecificationRepo,
};
use typed_builder::TypedBuilder;

/// Pricing and catalog fixed at startup from the application config.
#[derive(TypedBuilder)]
pub struct ConfigSpecificationRepo {
    pricing: PricingConfig,
    catalog: Catalog,
    capacity: Capacity,
}

#[async_trait]
impl SpecificationRepo for ConfigSpecificationRepo {
    async fn get_pricing_config(&self) -> anyhow::Result<PricingConfig> {
        Ok(self.pricing.clone())
    }

    async fn get_catalog(&self) -> anyhow::Result<Catalog> {
        Ok(self.catalog.clone())
    }

    async fn get_capacity(&self) -> anyhow::Result<Capacity> {
        Ok(self.capacity)
    }
}
