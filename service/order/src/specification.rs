use std::sync::Arc;

use async_trait::async_trait;
use domain_order::{
    model::vo::{ResourceUsage, Specification},
    repository::{OrderRepo, SpecificationRepo},
    service::SpecificationService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct SpecificationServiceImpl {
    order_repo: Arc<dyn OrderRepo>,
    specification_repo: Arc<dyn SpecificationRepo>,
}

#[async_trait]
impl SpecificationService for SpecificationServiceImpl {
    async fn get_specification(&self) -> anyhow::Result<Specification> {
        Ok(Specification {
            pricing: self.specification_repo.get_pricing_config().await?,
            ram_options: self.specification_repo.get_catalog().await?,
            capacity: self.specification_repo.get_capacity().await?,
        })
    }

    async fn get_resource_usage(&self) -> anyhow::Result<ResourceUsage> {
        let capacity = self.specification_repo.get_capacity().await?;
        let orders = self.order_repo.get_all().await?;
        Ok(ResourceUsage::tally(&orders, &capacity))
    }
}
