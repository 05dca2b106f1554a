use actix_web::{delete, get, post, web, HttpResponse};
use domain_order::{
    model::vo::{CandidateOrder, OrderView, Quote},
    service::OrderService,
};
use serde_json::json;

use super::{extract_uuid, ApiResult, Identity};

/// Orders of the current user.
#[get("/orders")]
pub async fn get_orders(
    Identity(user): Identity,
    service: web::Data<dyn OrderService>,
) -> ApiResult<web::Json<Vec<OrderView>>> {
    Ok(web::Json(service.list(&user).await?))
}

/// Live estimate while the order form is edited.
#[post("/orders/quote")]
pub async fn quote_order(
    service: web::Data<dyn OrderService>,
    data: web::Json<CandidateOrder>,
) -> ApiResult<web::Json<Quote>> {
    Ok(web::Json(service.quote(data.into_inner()).await?))
}

#[post("/orders")]
pub async fn create_order(
    Identity(user): Identity,
    service: web::Data<dyn OrderService>,
    data: web::Json<CandidateOrder>,
) -> ApiResult<HttpResponse> {
    let view = service.create(&user, data.into_inner()).await?;
    Ok(HttpResponse::Created().json(view))
}

/// Delete an order, the session must have passed the TOTP step-up.
#[delete("/orders/{id}")]
pub async fn delete_order(
    Identity(user): Identity,
    service: web::Data<dyn OrderService>,
    id: web::Path<String>,
) -> ApiResult<web::Json<serde_json::Value>> {
    let id = extract_uuid(&id)?;
    service.delete(&user, id).await?;
    Ok(web::Json(json!({ "id": id })))
}
