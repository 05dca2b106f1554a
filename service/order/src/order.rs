use std::sync::Arc;

use async_trait::async_trait;
use domain_order::{
    exception::{OrderException, OrderResult},
    model::{
        entity::Order,
        vo::{
            CandidateOrder, Catalog, CostBreakdown, OrderView, PricingConfig, Quote, UserInfo,
            ValidationResult,
        },
    },
    repository::{OrderRepo, SpecificationRepo},
    service::OrderService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct OrderServiceImpl {
    order_repo: Arc<dyn OrderRepo>,
    specification_repo: Arc<dyn SpecificationRepo>,
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    async fn quote(&self, command: CandidateOrder) -> OrderResult<Quote> {
        let (config, catalog) = self.load_pricing().await?;
        let class = catalog.resolve(command.type_ram_id)?;
        Ok(Quote {
            validation: ValidationResult::check(&command, class, &config),
            cost: CostBreakdown::compute(&command, class, &config),
        })
    }

    async fn create(&self, user: &UserInfo, command: CandidateOrder) -> OrderResult<OrderView> {
        let (config, catalog) = self.load_pricing().await?;
        let class = catalog.resolve(command.type_ram_id).inspect_err(|e| {
            tracing::warn!("Order from user {} rejected: {e}", user.id);
        })?;

        let result = ValidationResult::check(&command, class, &config);
        if !result.is_admissible() {
            tracing::warn!(
                "Order from user {} rejected, storage: {} TB (min {}), transfer: {} GB (min {}).",
                user.id,
                command.storage_tb,
                result.min_storage_tb,
                command.transfer_gb,
                result.min_transfer_gb
            );
            return Err(OrderException::ValidationFailed { result });
        }

        let order = Order::accepted(user.id, &command, class);
        let cost = CostBreakdown::compute(&command, class, &config);
        self.order_repo.insert(&order).await?;
        tracing::info!(
            "User {} ordered {} with {} TB and {} GB, {} per month.",
            user.id,
            order.ram_label,
            order.storage_tb,
            order.transfer_gb,
            cost.total
        );
        Ok(OrderView { order, cost })
    }

    async fn list(&self, user: &UserInfo) -> OrderResult<Vec<OrderView>> {
        let (config, catalog) = self.load_pricing().await?;
        let mut orders = self.order_repo.get_all_by_owner(user.id).await?;
        orders.sort_by(|a, b| b.created_time.cmp(&a.created_time));

        Ok(orders
            .into_iter()
            .map(|order| {
                if order.ram_fee.is_none() && catalog.resolve_by_label(&order.ram_label).is_none() {
                    tracing::warn!(
                        "Order {} refers to unknown RAM label \"{}\", pricing RAM at zero.",
                        order.id,
                        order.ram_label
                    );
                }
                let cost = CostBreakdown::for_order(&order, &catalog, &config);
                OrderView { order, cost }
            })
            .collect())
    }

    async fn delete(&self, user: &UserInfo, order_id: Uuid) -> OrderResult<()> {
        if !user.totp_verified {
            return Err(OrderException::StepUpRequired);
        }
        match self.order_repo.get_by_id(order_id).await? {
            Some(order) if order.owner_id == user.id => {}
            _ => return Err(OrderException::OrderNotFound { id: order_id }),
        }
        self.order_repo.delete_by_id(order_id).await?;
        tracing::info!("User {} deleted order {order_id}.", user.id);
        Ok(())
    }
}

impl OrderServiceImpl {
    /// Load the pricing snapshot for one request and check it before use.
    async fn load_pricing(&self) -> OrderResult<(PricingConfig, Catalog)> {
        let config = self.specification_repo.get_pricing_config().await?;
        config.ensure_consistent().inspect_err(|e| tracing::error!("{e}"))?;
        let catalog = self.specification_repo.get_catalog().await?;
        if catalog.is_empty() {
            tracing::error!("No RAM class is configured.");
            return Err(OrderException::EmptyCatalog);
        }
        catalog.ensure_consistent().inspect_err(|e| tracing::error!("{e}"))?;
        Ok((config, catalog))
    }
}
