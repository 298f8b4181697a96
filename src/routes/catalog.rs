use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::service::ServiceCategory;
use crate::services::checkout_service::CheckoutService;

/*
    /api/catalog/categories/{category}/frequencies
*/
pub async fn get_frequencies(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();
    let category: ServiceCategory = serde_json::from_value(serde_json::Value::String(name.clone()))
        .map_err(|_| ApiError::NotFound(format!("Category '{}'", name)))?;

    Ok(HttpResponse::Ok().json(CheckoutService::allowed_frequencies(category)))
}
