use serde::{Deserialize, Serialize};

use crate::model::{
    entity::RamClass,
    vo::{CandidateOrder, Catalog, PricingConfig},
};

/// Outcome of checking a candidate order against its floors.
///
/// Both fields are always evaluated so every offending input can be reported at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub storage_valid: bool,
    pub transfer_valid: bool,
    /// Storage floor that was applied, in TB.
    pub min_storage_tb: u32,
    /// Transfer floor that was applied, in GB.
    pub min_transfer_gb: u64,
}

impl ValidationResult {
    /// Check `order` against the storage floor of `class` and the transfer floor of `config`.
    ///
    /// Storage can never go below 1 TB whatever the class asks for.
    pub fn check(order: &CandidateOrder, class: &RamClass, config: &PricingConfig) -> Self {
        let min_storage_tb = Catalog::min_storage_for(class).max(1);
        let min_transfer_gb = config.min_order_transfer;
        Self {
            storage_valid: order.storage_tb >= min_storage_tb,
            transfer_valid: order.transfer_gb >= min_transfer_gb,
            min_storage_tb,
            min_transfer_gb,
        }
    }

    pub fn is_admissible(&self) -> bool {
        self.storage_valid && self.transfer_valid
    }

    /// Field level messages for every failed check, keyed by request field name.
    pub fn messages(&self) -> Vec<(&'static str, String)> {
        let mut messages = vec![];
        if !self.storage_valid {
            messages.push((
                "storage_tb",
                format!("Value too low. Min required: {} TB.", self.min_storage_tb),
            ));
        }
        if !self.transfer_valid {
            messages.push((
                "transfer_gb",
                format!("Value too low. Min required: {} GB.", self.min_transfer_gb),
            ));
        }
        messages
    }
}
