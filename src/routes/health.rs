use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::config::AppConfig;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
}

/*
    /health
*/
pub async fn health_check(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        environment: config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
