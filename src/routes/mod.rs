use actix_web::{error::JsonPayloadError, web, HttpRequest};
use log::warn;

use crate::error::ApiError;

pub mod catalog;
pub mod health;
pub mod pricing;
pub mod subscription;
pub mod validation;

/// Registers every route. Callers provide `web::Data<AppConfig>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api")
            .service(
                web::scope("/pricing")
                    .route("/quote", web::post().to(pricing::quote))
                    .route("/discounts/{duration}", web::get().to(pricing::discount))
                    .route("/totals", web::post().to(pricing::totals)),
            )
            .service(
                web::scope("/validation")
                    .route(
                        "/configuration",
                        web::post().to(validation::validate_configuration),
                    )
                    .route(
                        "/subscription",
                        web::post().to(validation::validate_subscription),
                    ),
            )
            .service(
                web::scope("/subscriptions")
                    .route("/summary", web::post().to(subscription::summary))
                    .route("/billing-cycle", web::post().to(subscription::billing_cycle)),
            )
            .route(
                "/catalog/categories/{category}/frequencies",
                web::get().to(catalog::get_frequencies),
            ),
    );
}

/// JSON body settings: size limit plus `{ "error": ... }` bodies for payloads that don't parse
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: JsonPayloadError, req: &HttpRequest| {
            warn!("Rejected body for {}: {}", req.path(), err);
            ApiError::BadRequest(err.to_string()).into()
        })
}
