use serde::{Deserialize, Serialize};

/// An order being entered or submitted, not yet accepted.
///
/// Doubles as the request body of both the live quote and the final submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateOrder {
    /// Selected RAM class id.
    pub type_ram_id: u32,
    /// Storage in TB.
    pub storage_tb: u32,
    /// Monthly data transfer in GB.
    pub transfer_gb: u64,
}
