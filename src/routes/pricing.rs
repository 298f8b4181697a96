use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use log::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::quote::{
    ConfigurationRequest, DiscountResponse, QuoteResponse, TotalsRequest, TotalsResponse,
};
use crate::services::discount_service::DiscountSchedule;
use crate::services::pricing_service::PricingService;

/*
    /api/pricing/quote
*/
pub async fn quote(input: web::Json<ConfigurationRequest>) -> impl Responder {
    let input = input.into_inner();
    let price = PricingService::compute_price(&input.service, &input.configuration, input.mode);

    info!(
        "Quoted {} for service {} ({:?})",
        price, input.service.id, input.mode
    );

    HttpResponse::Ok().json(QuoteResponse {
        quote_id: Uuid::new_v4(),
        service_id: input.service.id,
        mode: input.mode,
        price,
        quoted_at: Utc::now(),
    })
}

/*
    /api/pricing/discounts/{duration}
*/
pub async fn discount(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let raw = path.into_inner();
    let duration: u32 = raw.parse().map_err(|_| {
        ApiError::BadRequest(format!("Duration must be a whole number of months, got '{}'", raw))
    })?;

    Ok(HttpResponse::Ok().json(DiscountResponse {
        duration,
        percentage: DiscountSchedule::discount_percentage(duration),
        next_tier: DiscountSchedule::next_tier(duration).map(Into::into),
    }))
}

/*
    /api/pricing/totals
*/
pub async fn totals(input: web::Json<TotalsRequest>) -> Result<HttpResponse, ApiError> {
    let TotalsRequest {
        monthly_total,
        duration,
    } = input.into_inner();

    if monthly_total < 0 {
        return Err(ApiError::BadRequest(
            "Monthly total cannot be negative".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(TotalsResponse {
        monthly_total,
        duration,
        percentage: DiscountSchedule::discount_percentage(duration),
        discount_amount: DiscountSchedule::discount_amount(monthly_total, duration),
        gross_total: DiscountSchedule::gross_total(monthly_total, duration),
        final_total: DiscountSchedule::final_total(monthly_total, duration),
    }))
}
