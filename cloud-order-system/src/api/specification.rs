use actix_web::{get, web};
use domain_order::{
    model::vo::{ResourceUsage, Specification},
    service::SpecificationService,
};

use super::{ApiResult, Identity};

/// Pricing configuration, RAM options and capacity.
#[get("/specifications")]
pub async fn get_specifications(
    service: web::Data<dyn SpecificationService>,
) -> ApiResult<web::Json<Specification>> {
    Ok(web::Json(service.get_specification().await?))
}

/// Resources taken on the whole platform.
#[get("/resources")]
pub async fn get_resources(
    _identity: Identity,
    service: web::Data<dyn SpecificationService>,
) -> ApiResult<web::Json<ResourceUsage>> {
    Ok(web::Json(service.get_resource_usage().await?))
}
