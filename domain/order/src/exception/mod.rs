use thiserror::Error;
use uuid::Uuid;

use crate::model::vo::ValidationResult;

pub type OrderResult<T> = Result<T, OrderException>;

#[derive(Error, Debug)]
pub enum OrderException {
    #[error("There is no RAM class with id: {id}.")]
    RamClassNotFound { id: u32 },

    #[error("The RAM class catalog is empty.")]
    EmptyCatalog,

    #[error("Pricing configuration is invalid: {reason}.")]
    InvalidConfig { reason: String },

    #[error(
        "Order rejected, storage valid: {}, transfer valid: {}.",
        .result.storage_valid,
        .result.transfer_valid
    )]
    ValidationFailed { result: ValidationResult },

    #[error("There is no order with id: {id}.")]
    OrderNotFound { id: Uuid },

    #[error("Two-factor authentication is required for this operation.")]
    StepUpRequired,

    #[error("Order internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for OrderException {
    fn from(e: anyhow::Error) -> Self {
        OrderException::InternalError { source: e }
    }
}
