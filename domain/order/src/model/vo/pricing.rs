//! Global pricing configuration and the banded transfer tariff.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::exception::{OrderException, OrderResult};

/// Storage rate and transfer tiers in effect.
///
/// Transfer is billed in three bands split at `transfer_limit_1` and
/// `transfer_limit_2`. Every GB is charged at the rate of the band it falls in,
/// boundaries belong to the lower band.
///
/// Amounts go over the wire as JSON numbers, the order form computes with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Price of one TB of storage per month.
    #[serde(with = "rust_decimal::serde::float")]
    pub storage_price_per_tb: Decimal,
    /// First breakpoint in GB. Transfer up to here costs `transfer_cost_1` flat.
    pub transfer_limit_1: u64,
    /// Second breakpoint in GB.
    pub transfer_limit_2: u64,
    /// Flat cost of the first band.
    #[serde(with = "rust_decimal::serde::float")]
    pub transfer_cost_1: Decimal,
    /// Base per-GB rate the band factors apply to.
    #[serde(with = "rust_decimal::serde::float")]
    pub transfer_rate_base: Decimal,
    /// Factor for GB in `(limit1, limit2]`.
    #[serde(with = "rust_decimal::serde::float")]
    pub transfer_factor2: Decimal,
    /// Factor for GB beyond `limit2`.
    #[serde(with = "rust_decimal::serde::float")]
    pub transfer_factor3: Decimal,
    /// Smallest transfer an order may carry, in GB.
    pub min_order_transfer: u64,
}

impl PricingConfig {
    /// Upper bound of every unit price: storage per TB, the flat first band,
    /// both band rates and a class fee.
    ///
    /// With it, the cost of any `u64` transfer and `u32` storage stays inside
    /// the range of `Decimal`.
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

    /// Check the preconditions [`PricingConfig::transfer_cost`] relies on.
    pub fn ensure_consistent(&self) -> OrderResult<()> {
        if self.transfer_limit_1 > self.transfer_limit_2 {
            return Err(OrderException::InvalidConfig {
                reason: format!(
                    "transfer_limit_1 ({}) is greater than transfer_limit_2 ({})",
                    self.transfer_limit_1, self.transfer_limit_2
                ),
            });
        }
        let amounts = [
            ("storage_price_per_tb", self.storage_price_per_tb),
            ("transfer_cost_1", self.transfer_cost_1),
            ("transfer_rate_base", self.transfer_rate_base),
            ("transfer_factor2", self.transfer_factor2),
            ("transfer_factor3", self.transfer_factor3),
        ];
        if let Some((name, value)) = amounts.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(OrderException::InvalidConfig {
                reason: format!("{name} is negative: {value}"),
            });
        }
        let rates = [
            ("storage_price_per_tb", Some(self.storage_price_per_tb)),
            ("transfer_cost_1", Some(self.transfer_cost_1)),
            ("band 2 rate", self.transfer_rate_base.checked_mul(self.transfer_factor2)),
            ("band 3 rate", self.transfer_rate_base.checked_mul(self.transfer_factor3)),
        ];
        for (name, value) in rates {
            match value {
                Some(value) if value <= Self::MAX_AMOUNT => {}
                _ => {
                    return Err(OrderException::InvalidConfig {
                        reason: format!("{name} exceeds {}", Self::MAX_AMOUNT),
                    })
                }
            }
        }
        Ok(())
    }

    /// Marginal price of one GB in the second band.
    pub fn band2_rate(&self) -> Decimal {
        self.transfer_rate_base * self.transfer_factor2
    }

    /// Marginal price of one GB in the third band.
    pub fn band3_rate(&self) -> Decimal {
        self.transfer_rate_base * self.transfer_factor3
    }

    /// Monthly cost of `transfer_gb` GB of data transfer.
    ///
    /// Requires a configuration accepted by [`PricingConfig::ensure_consistent`],
    /// which keeps the result finite for every `transfer_gb`.
    pub fn transfer_cost(&self, transfer_gb: u64) -> Decimal {
        debug_assert!(self.transfer_limit_1 <= self.transfer_limit_2);
        let (limit1, limit2) = (self.transfer_limit_1, self.transfer_limit_2);

        if transfer_gb <= limit1 {
            self.transfer_cost_1
        } else if transfer_gb <= limit2 {
            self.transfer_cost_1 + Decimal::from(transfer_gb - limit1) * self.band2_rate()
        } else {
            self.transfer_cost_1
                + Decimal::from(limit2 - limit1) * self.band2_rate()
                + Decimal::from(transfer_gb - limit2) * self.band3_rate()
        }
    }

    /// Monthly cost of `storage_tb` TB of storage.
    pub fn storage_cost(&self, storage_tb: u32) -> Decimal {
        Decimal::from(storage_tb) * self.storage_price_per_tb
    }
}
