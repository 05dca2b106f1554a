use async_trait::async_trait;

use crate::model::vo::{ResourceUsage, Specification};

#[async_trait]
pub trait SpecificationService: Send + Sync {
    /// Pricing configuration, RAM options and capacity.
    async fn get_specification(&self) -> anyhow::Result<Specification>;

    /// Resources taken by all orders.
    async fn get_resource_usage(&self) -> anyhow::Result<ResourceUsage>;
}
