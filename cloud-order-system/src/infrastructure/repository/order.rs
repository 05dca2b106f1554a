use async_trait::async_trait;
use dashmap::DashMap;
use domain_order::{model::entity::Order, repository::OrderRepo};
use uuid::Uuid;

/// Orders kept in process memory, lost on restart.
#[derive(Default)]
pub struct MemoryOrderRepo {
    orders: DashMap<Uuid, Order>,
}

#[async_trait]
impl OrderRepo for MemoryOrderRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Order>> {
        Ok(self.orders.get(&id).map(|el| el.value().clone()))
    }

    async fn get_all_by_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Order>> {
        Ok(self
            .orders
            .iter()
            .filter(|el| el.owner_id == owner_id)
            .map(|el| el.value().clone())
            .collect())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Order>> {
        Ok(self.orders.iter().map(|el| el.value().clone()).collect())
    }

    async fn insert(&self, entity: &Order) -> anyhow::Result<Uuid> {
        if self.orders.contains_key(&entity.id) {
            anyhow::bail!("Order with id: {} already exists.", entity.id);
        }
        self.orders.insert(entity.id, entity.clone());
        Ok(entity.id)
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()> {
        self.orders
            .remove(&id)
            .map(|_| ())
            .ok_or(anyhow::anyhow!("No order with id: {id}."))
    }
}
