//! RAM class catalog lookups.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    exception::{OrderException, OrderResult},
    model::{entity::RamClass, vo::PricingConfig},
};

/// Ordered list of RAM classes as loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<RamClass>);

impl Catalog {
    pub fn new(classes: Vec<RamClass>) -> Self {
        Self(classes)
    }

    pub fn classes(&self) -> &[RamClass] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every fee lies within `0..=PricingConfig::MAX_AMOUNT`.
    pub fn ensure_consistent(&self) -> OrderResult<()> {
        match self
            .0
            .iter()
            .find(|class| class.fee < Decimal::ZERO || class.fee > PricingConfig::MAX_AMOUNT)
        {
            Some(class) => Err(OrderException::InvalidConfig {
                reason: format!("fee of RAM class {} is out of range: {}", class.id, class.fee),
            }),
            None => Ok(()),
        }
    }

    /// Find the class with the given id. No fallback is substituted.
    pub fn resolve(&self, id: u32) -> OrderResult<&RamClass> {
        self.0
            .iter()
            .find(|class| class.id == id)
            .ok_or(OrderException::RamClassNotFound { id })
    }

    /// The preselected class of a fresh order form: the first one as loaded.
    pub fn default_class(&self) -> Option<&RamClass> {
        self.0.first()
    }

    /// Find a class by its display label.
    ///
    /// Only for orders that were persisted with a label and nothing else.
    pub fn resolve_by_label(&self, label: &str) -> Option<&RamClass> {
        self.0.iter().find(|class| class.label == label)
    }

    /// Storage floor of a class, in TB.
    pub fn min_storage_for(class: &RamClass) -> u32 {
        class.min_storage_tb
    }
}

impl From<Vec<RamClass>> for Catalog {
    fn from(classes: Vec<RamClass>) -> Self {
        Self(classes)
    }
}
