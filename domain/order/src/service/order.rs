//! Order service.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::OrderResult,
    model::vo::{CandidateOrder, OrderView, Quote, UserInfo},
};

/// Order service.
///
/// Validation runs here again for every submission, whatever the client already checked.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Price and validate a candidate without persisting it.
    async fn quote(&self, command: CandidateOrder) -> OrderResult<Quote>;

    /// Validate and persist an order for `user`.
    async fn create(&self, user: &UserInfo, command: CandidateOrder) -> OrderResult<OrderView>;

    /// Orders of `user`, newest first, with their costs.
    async fn list(&self, user: &UserInfo) -> OrderResult<Vec<OrderView>>;

    /// Delete an order of `user`. Needs a completed TOTP step-up.
    async fn delete(&self, user: &UserInfo, order_id: Uuid) -> OrderResult<()>;
}
