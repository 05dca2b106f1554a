use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{
    entity::{Order, RamClass},
    vo::{CandidateOrder, Catalog, PricingConfig, ValidationResult},
};

/// Itemized monthly cost of an order, at full precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub ram: Decimal,
    pub storage: Decimal,
    pub transfer: Decimal,
    pub total: Decimal,
}

impl CostBreakdown {
    /// Cost of a candidate order with its resolved class.
    ///
    /// `config` must satisfy [`PricingConfig::ensure_consistent`].
    pub fn compute(order: &CandidateOrder, class: &RamClass, config: &PricingConfig) -> Self {
        Self::itemize(class.fee, order.storage_tb, order.transfer_gb, config)
    }

    /// Cost of a persisted order.
    ///
    /// Uses the fee recorded with the order. Records without one are matched by label
    /// against the current catalog and get a zero RAM cost when the label is gone.
    pub fn for_order(order: &Order, catalog: &Catalog, config: &PricingConfig) -> Self {
        let ram = order
            .ram_fee
            .or_else(|| catalog.resolve_by_label(&order.ram_label).map(|class| class.fee))
            .unwrap_or(Decimal::ZERO);
        Self::itemize(ram, order.storage_tb, order.transfer_gb, config)
    }

    fn itemize(ram: Decimal, storage_tb: u32, transfer_gb: u64, config: &PricingConfig) -> Self {
        let storage = config.storage_cost(storage_tb);
        let transfer = config.transfer_cost(transfer_gb);
        Self {
            ram,
            storage,
            transfer,
            total: ram + storage + transfer,
        }
    }
}

/// Live estimate for the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub validation: ValidationResult,
    pub cost: CostBreakdown,
}

/// A persisted order with its cost re-derived from the config in effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub cost: CostBreakdown,
}
