use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::configuration::ServiceConfiguration;
use crate::models::service::{Money, Service, ServiceCategory};
use crate::models::subscription::{BillingCycle, ConfiguredService, PricingMode};
use crate::models::validation::ValidationResult;

/// One service with its configuration, as posted by the booking and subscription forms
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRequest {
    pub service: Service,
    pub configuration: ServiceConfiguration,
    #[serde(default)]
    pub mode: PricingMode,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub service_id: String,
    pub mode: PricingMode,
    pub price: Money,
    pub quoted_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountTier {
    pub duration: u32,
    pub percentage: u8,
}

impl From<(u32, u8)> for DiscountTier {
    fn from((duration, percentage): (u32, u8)) -> Self {
        Self {
            duration,
            percentage,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResponse {
    pub duration: u32,
    pub percentage: u8,
    pub next_tier: Option<DiscountTier>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TotalsRequest {
    pub monthly_total: Money,
    pub duration: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TotalsResponse {
    pub monthly_total: Money,
    pub duration: u32,
    pub percentage: u8,
    pub discount_amount: Money,
    pub gross_total: Money,
    pub final_total: Money,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BillingCycleRequest {
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub services: Vec<ConfiguredService>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BillingCycleResponse {
    pub requested: BillingCycle,
    pub effective: BillingCycle,
    pub available: Vec<BillingCycle>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub service_id: String,
    pub name: String,
    pub category: ServiceCategory,
    /// Cooking and errands are charged a flat monthly rate
    pub flat_rate: bool,
    pub monthly_price: Money,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub billing_cycle: BillingCycle,
    pub duration: u32,
    pub line_items: Vec<LineItem>,
    pub monthly_total: Money,
    /// Charged every billing cycle
    pub billing_amount: Money,
    pub discount_percentage: u8,
    pub discount_amount: Money,
    pub gross_total: Money,
    pub final_total: Money,
    pub next_tier: Option<DiscountTier>,
    pub validation: ValidationResult,
    pub generated_at: DateTime<Utc>,
}
