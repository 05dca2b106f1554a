use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A compute tier of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamClass {
    /// Stable catalog id.
    pub id: u32,
    /// Display label, e.g. "32 GB RAM".
    #[serde(rename = "ram_label")]
    pub label: String,
    /// Monthly fee, a JSON number on the wire.
    #[serde(rename = "m_fee", with = "rust_decimal::serde::float")]
    pub fee: Decimal,
    /// Minimum storage an order of this class must carry, in TB.
    #[serde(rename = "min_stor_req")]
    pub min_storage_tb: u32,
}
