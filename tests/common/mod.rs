#![allow(dead_code)]

use actix_web::{web, App};
use serde_json::{json, Value};

use homeservices_api::config::AppConfig;
use homeservices_api::routes;

pub fn create_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = AppConfig {
        environment: "test".to_string(),
        ..AppConfig::default()
    };

    App::new()
        .app_data(routes::json_config(config.json_limit_bytes))
        .app_data(web::Data::new(config))
        .configure(routes::configure)
}

pub fn cleaning_service() -> Value {
    json!({
        "id": "svc-cleaning",
        "name": "Home Cleaning",
        "category": "cleaning",
        "price": 0,
        "options": [
            { "id": "opt-standard", "label": "Standard Cleaning", "price": 0, "identifier": "standard" },
            { "id": "opt-deep", "label": "Deep Cleaning", "price": 0, "identifier": "deep" },
            { "id": "opt-post", "label": "Post Construction", "price": 0, "identifier": "postConstruction" }
        ],
        "roomPrices": {
            "bedroom": 3000,
            "livingRoom": 3500,
            "kitchen": 4000,
            "bathroom": 2500
        }
    })
}

pub fn laundry_service() -> Value {
    json!({
        "id": "svc-laundry",
        "name": "Laundry Pickup",
        "category": "laundry",
        "price": 2000,
        "options": [
            { "id": "opt-wash-iron", "label": "Wash & Iron", "price": 2500 }
        ]
    })
}

pub fn pest_service() -> Value {
    json!({
        "id": "svc-pest",
        "name": "Pest Control",
        "category": "pestControl",
        "price": 8000,
        "options": [
            { "id": "opt-fumigation", "label": "Fumigation", "price": 10000 }
        ]
    })
}

pub fn cooking_service() -> Value {
    json!({
        "id": "svc-cooking",
        "name": "Home Chef",
        "category": "cooking",
        "price": 15000
    })
}

pub fn cleaning_configuration(rooms: Value, option: Option<&str>, days: &[&str]) -> Value {
    json!({
        "serviceId": "svc-cleaning",
        "category": "cleaning",
        "selectedOption": option,
        "frequency": "weekly",
        "scheduledDays": days,
        "preferredTimeSlot": "morning",
        "details": { "kind": "cleaning", "propertyType": "flat", "rooms": rooms }
    })
}

pub fn laundry_configuration(bags: u32, option: Option<&str>) -> Value {
    json!({
        "serviceId": "svc-laundry",
        "category": "laundry",
        "selectedOption": option,
        "frequency": "weekly",
        "scheduledDays": ["saturday"],
        "details": { "kind": "laundry", "bags": bags, "laundryType": "washAndIron" }
    })
}

pub fn pest_configuration(severity: &str, treatment_type: &str) -> Value {
    json!({
        "serviceId": "svc-pest",
        "category": "pestControl",
        "selectedOption": "opt-fumigation",
        "frequency": "quarterly",
        "scheduledDays": ["monday"],
        "details": {
            "kind": "pestControl",
            "severity": severity,
            "treatmentType": treatment_type,
            "areas": ["kitchen", "store"]
        }
    })
}

pub fn configured(service: Value, configuration: Value) -> Value {
    json!({ "service": service, "configuration": configuration })
}

pub fn error_kinds(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|error| error["kind"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
