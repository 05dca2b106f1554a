use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Order;

#[async_trait]
pub trait OrderRepo: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Order>>;
    /// All orders of an owner, in no particular order.
    async fn get_all_by_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Order>>;
    async fn get_all(&self) -> anyhow::Result<Vec<Order>>;
    async fn insert(&self, entity: &Order) -> anyhow::Result<Uuid>;
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()>;
}
