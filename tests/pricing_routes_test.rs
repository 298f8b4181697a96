mod common;

use actix_web::test;
use serde_json::json;

use common::{
    cleaning_configuration, cleaning_service, create_app, laundry_configuration,
    laundry_service, pest_configuration, pest_service,
};

#[actix_rt::test]
async fn test_quote_one_off_cleaning() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/quote")
        .set_json(&json!({
            "service": cleaning_service(),
            "configuration": cleaning_configuration(
                json!({ "bedroom": 2, "kitchen": 1 }),
                Some("opt-deep"),
                &[],
            ),
            "mode": "oneOff"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    // (2 * 3000 + 4000) * 2.5
    assert_eq!(body["price"], 25000);
    assert_eq!(body["serviceId"], "svc-cleaning");
    assert_eq!(body["mode"], "oneOff");
    assert!(body["quoteId"].is_string());
    assert!(body["quotedAt"].is_string());
}

#[actix_rt::test]
async fn test_quote_subscription_cleaning_uses_days() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/quote")
        .set_json(&json!({
            "service": cleaning_service(),
            "configuration": cleaning_configuration(
                json!({ "bedroom": 1 }),
                None,
                &["monday", "thursday"],
            ),
            "mode": "subscription"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["price"], 25980);
}

#[actix_rt::test]
async fn test_quote_defaults_to_one_off() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/quote")
        .set_json(&json!({
            "service": laundry_service(),
            "configuration": laundry_configuration(3, Some("opt-wash-iron"))
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["mode"], "oneOff");
    assert_eq!(body["price"], 7500);
}

#[actix_rt::test]
async fn test_quote_pest_control_multipliers() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/quote")
        .set_json(&json!({
            "service": pest_service(),
            "configuration": pest_configuration("high", "commercial")
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["price"], 22500);
}

#[actix_rt::test]
async fn test_quote_ignores_client_price() {
    let app = test::init_service(create_app()).await;

    let mut configuration = laundry_configuration(2, None);
    configuration["price"] = json!(1);

    let req = test::TestRequest::post()
        .uri("/api/pricing/quote")
        .set_json(&json!({ "service": laundry_service(), "configuration": configuration }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["price"], 4000);
}

#[actix_rt::test]
async fn test_quote_rejects_unknown_severity() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/quote")
        .set_json(&json!({
            "service": pest_service(),
            "configuration": pest_configuration("apocalyptic", "residential")
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn test_discount_tiers() {
    let app = test::init_service(create_app()).await;

    for (duration, percentage) in [(2, 0), (3, 10), (6, 20), (11, 20), (12, 30)] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/pricing/discounts/{}", duration))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["percentage"], percentage, "duration {}", duration);
    }
}

#[actix_rt::test]
async fn test_discount_reports_next_tier() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/pricing/discounts/4")
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["nextTier"]["duration"], 6);
    assert_eq!(body["nextTier"]["percentage"], 20);

    let req = test::TestRequest::get()
        .uri("/api/pricing/discounts/24")
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["nextTier"].is_null());
}

#[actix_rt::test]
async fn test_discount_rejects_non_numeric_duration() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/pricing/discounts/forever")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_totals_for_six_months() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/totals")
        .set_json(&json!({ "monthlyTotal": 10000, "duration": 6 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["percentage"], 20);
    assert_eq!(body["discountAmount"], 12000);
    assert_eq!(body["grossTotal"], 60000);
    assert_eq!(body["finalTotal"], 48000);
}

#[actix_rt::test]
async fn test_totals_rejects_negative_amount() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/totals")
        .set_json(&json!({ "monthlyTotal": -500, "duration": 3 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Monthly total cannot be negative");
}

#[actix_rt::test]
async fn test_quote_with_huge_unit_price_is_capped() {
    let app = test::init_service(create_app()).await;

    let mut service = laundry_service();
    service["price"] = json!(4_611_686_018_427_387_904_i64);

    let req = test::TestRequest::post()
        .uri("/api/pricing/quote")
        .set_json(&json!({
            "service": service,
            "configuration": laundry_configuration(3, None),
            "mode": "oneOff"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["price"], i64::MAX);
}

#[actix_rt::test]
async fn test_totals_with_huge_monthly_total_do_not_wrap() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/totals")
        .set_json(&json!({ "monthlyTotal": i64::MAX / 2, "duration": 3 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["grossTotal"], i64::MAX);
    assert!(body["finalTotal"].as_i64().unwrap() > 0);
}
