use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::{
    model::{
        entity::Order,
        vo::{Capacity, Catalog, PricingConfig},
    },
    repository::{OrderRepo, SpecificationRepo},
};

mock! {
    pub OrderRepo {}
    #[async_trait]
    impl OrderRepo for OrderRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Order>>;
        async fn get_all_by_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Order>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Order>>;
        async fn insert(&self, entity: &Order) -> anyhow::Result<Uuid>;
        async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()>;
    }
}

mock! {
    pub SpecificationRepo {}
    #[async_trait]
    impl SpecificationRepo for SpecificationRepo {
        async fn get_pricing_config(&self) -> anyhow::Result<PricingConfig>;
        async fn get_catalog(&self) -> anyhow::Result<Catalog>;
        async fn get_capacity(&self) -> anyhow::Result<Capacity>;
    }
}
