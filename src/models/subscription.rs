use serde::{Deserialize, Serialize};

use crate::models::configuration::ServiceConfiguration;
use crate::models::service::{Service, ServiceCategory};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BillingCycle {
    Weekly,
    Monthly,
    Quarterly,
}

/// Whether a price is for a single visit or a monthly recurring charge.
/// Chosen by the caller, never inferred from the configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PricingMode {
    #[default]
    OneOff,
    Subscription,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguredService {
    pub service: Service,
    pub configuration: ServiceConfiguration,
}

impl ConfiguredService {
    pub fn service_id(&self) -> &str {
        &self.service.id
    }

    pub fn category(&self) -> ServiceCategory {
        self.service.category
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub billing_cycle: BillingCycle,
    /// Commitment in months
    pub duration: u32,
    #[serde(default)]
    pub services: Vec<ConfiguredService>,
}
