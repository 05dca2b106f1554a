use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{entity::RamClass, vo::CandidateOrder};

/// A persisted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub owner_id: Uuid,
    /// RAM class id at creation time. `None` on records that only kept the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_class_id: Option<u32>,
    pub ram_label: String,
    /// RAM fee at creation time. `None` on records that only kept the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_fee: Option<Decimal>,
    pub storage_tb: u32,
    pub transfer_gb: u64,
    pub created_time: DateTime<Utc>,
}

impl Order {
    /// Build the order to persist from an accepted candidate, snapshotting the class.
    pub fn accepted(owner_id: Uuid, candidate: &CandidateOrder, class: &RamClass) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            ram_class_id: Some(class.id),
            ram_label: class.label.to_owned(),
            ram_fee: Some(class.fee),
            storage_tb: candidate.storage_tb,
            transfer_gb: candidate.transfer_gb,
            created_time: Utc::now(),
        }
    }
}
