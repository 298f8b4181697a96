use actix_web::{web, HttpResponse, Responder};

use crate::models::quote::{BillingCycleRequest, BillingCycleResponse};
use crate::models::subscription::Subscription;
use crate::services::checkout_service::CheckoutService;

/*
    /api/subscriptions/summary
*/
pub async fn summary(input: web::Json<Subscription>) -> impl Responder {
    HttpResponse::Ok().json(CheckoutService::summarize(&input))
}

/*
    /api/subscriptions/billing-cycle
*/
pub async fn billing_cycle(input: web::Json<BillingCycleRequest>) -> impl Responder {
    let input = input.into_inner();

    HttpResponse::Ok().json(BillingCycleResponse {
        requested: input.billing_cycle,
        effective: CheckoutService::effective_billing_cycle(&input.services, input.billing_cycle),
        available: CheckoutService::available_billing_cycles(&input.services),
    })
}
