use std::sync::Arc;

use domain_order::{
    model::vo::Catalog,
    repository::{OrderRepo, SpecificationRepo},
    service::{OrderService, SpecificationService},
};
use service_order::{OrderServiceImpl, SpecificationServiceImpl};

use crate::{
    config::AppConfig,
    infrastructure::repository::{ConfigSpecificationRepo, MemoryOrderRepo},
};

/// Services shared by every worker of the web server.
#[derive(Clone)]
pub struct ServiceProvider {
    pub order_service: Arc<dyn OrderService>,
    pub specification_service: Arc<dyn SpecificationService>,
}

impl ServiceProvider {
    pub fn new(config: &AppConfig) -> Self {
        let order_repo: Arc<dyn OrderRepo> = Arc::new(MemoryOrderRepo::default());
        let specification_repo: Arc<dyn SpecificationRepo> = Arc::new(
            ConfigSpecificationRepo::builder()
                .pricing(config.pricing.clone())
                .catalog(Catalog::new(config.ram_classes.clone()))
                .capacity(config.capacity)
                .build(),
        );

        Self {
            order_service: Arc::new(
                OrderServiceImpl::builder()
                    .order_repo(order_repo.clone())
                    .specification_repo(specification_repo.clone())
                    .build(),
            ),
            specification_service: Arc::new(
                SpecificationServiceImpl::builder()
                    .order_repo(order_repo)
                    .specification_repo(specification_repo)
                    .build(),
            ),
        }
    }
}
