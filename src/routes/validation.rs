use actix_web::{web, HttpResponse, Responder};
use log::warn;

use crate::models::quote::ConfigurationRequest;
use crate::models::subscription::Subscription;
use crate::services::validation_service::ValidationService;

/*
    /api/validation/configuration
*/
pub async fn validate_configuration(input: web::Json<ConfigurationRequest>) -> impl Responder {
    let input = input.into_inner();
    let result =
        ValidationService::validate_service_configuration(&input.configuration, &input.service, input.mode);

    if !result.is_valid {
        warn!(
            "Rejected configuration for service {}: {:?}",
            input.service.id,
            result.errors.iter().map(|error| error.kind).collect::<Vec<_>>()
        );
    }

    HttpResponse::Ok().json(result)
}

/*
    /api/validation/subscription
*/
pub async fn validate_subscription(input: web::Json<Subscription>) -> impl Responder {
    let input = input.into_inner();
    let result =
        ValidationService::validate_subscription(&input.services, input.billing_cycle, input.duration);

    if !result.is_valid {
        warn!(
            "Rejected subscription with {} services: {:?}",
            input.services.len(),
            result.errors.iter().map(|error| error.kind).collect::<Vec<_>>()
        );
    }

    HttpResponse::Ok().json(result)
}
