mod error;
mod identity;
pub mod order;
pub mod specification;

use actix_web::web;
use uuid::Uuid;

use crate::infrastructure::ServiceProvider;

#[rustfmt::skip]
pub use {
    error::{ApiError, ApiResult},
    identity::Identity,
};

/// Register every route under `/api` together with the services they need.
pub fn configure(cfg: &mut web::ServiceConfig, sp: &ServiceProvider) {
    let json = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::MalformedPayload(err.to_string()).into());
    cfg.app_data(json)
        .app_data(web::Data::from(sp.order_service.clone()))
        .app_data(web::Data::from(sp.specification_service.clone()))
        .service(
            web::scope("/api")
                .service(specification::get_specifications)
                .service(specification::get_resources)
                .service(order::get_orders)
                .service(order::quote_order)
                .service(order::create_order)
                .service(order::delete_order),
        );
}

pub fn extract_uuid(s: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(s).map_err(|_| ApiError::MalformedId(s.to_owned()))
}
