use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity handed over by the authentication gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub name: String,
    /// Set once the session completed the TOTP step-up.
    pub totp_verified: bool,
}
