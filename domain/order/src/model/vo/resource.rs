use serde::{Deserialize, Serialize};

use crate::model::{entity::Order, vo::Capacity};

/// Resources taken by all orders on the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsage {
    /// Active instances, one per order.
    pub instances: u64,
    /// Ordered storage, in TB.
    pub total_storage: u64,
    pub free_instances: u64,
    pub free_storage: u64,
}

impl ResourceUsage {
    /// Sum up `orders` against `capacity`. Free figures stop at zero.
    pub fn tally<'a>(orders: impl IntoIterator<Item = &'a Order>, capacity: &Capacity) -> Self {
        let (instances, total_storage) = orders
            .into_iter()
            .fold((0u64, 0u64), |(count, storage), order| {
                (count + 1, storage + u64::from(order.storage_tb))
            });
        Self {
            instances,
            total_storage,
            free_instances: capacity.max_active_instances.saturating_sub(instances),
            free_storage: capacity.max_total_storage.saturating_sub(total_storage),
        }
    }
}
