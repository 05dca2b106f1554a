use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use domain_order::exception::OrderException;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Order(#[from] OrderException),

    #[error("Not authenticated: {0}.")]
    Unauthenticated(&'static str),

    #[error("Malformed id: {0}.")]
    MalformedId(String),

    #[error("Malformed request body: {0}.")]
    MalformedPayload(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        use OrderException::*;
        match self {
            ApiError::Order(e) => match e {
                RamClassNotFound { .. } | OrderNotFound { .. } => StatusCode::NOT_FOUND,
                ValidationFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                StepUpRequired => StatusCode::UNAUTHORIZED,
                EmptyCatalog | InvalidConfig { .. } | InternalError { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::MalformedId(_) | ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            ApiError::Order(OrderException::ValidationFailed { result }) => {
                let errors = result
                    .messages()
                    .into_iter()
                    .map(|(field, msg)| json!({ "field": field, "msg": msg }))
                    .collect::<Vec<_>>();
                json!({ "error": self.to_string(), "errors": errors })
            }
            _ if status.is_server_error() => {
                tracing::error!("{self:?}");
                json!({ "error": "Internal server error" })
            }
            _ => json!({ "error": self.to_string() }),
        };
        HttpResponse::build(status).json(body)
    }
}
