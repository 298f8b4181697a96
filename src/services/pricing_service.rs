use log::debug;

use crate::models::configuration::{
    CategoryDetails, PropertyType, ServiceConfiguration, Severity, TreatmentType,
};
use crate::models::service::{Money, Service, ServiceCategory, ServiceOption};
use crate::models::subscription::PricingMode;

/// Average number of weeks in a month, used to turn weekly visits into a monthly charge
pub const WEEKS_PER_MONTH: f64 = 4.33;

pub const DUPLEX_MULTIPLIER: f64 = 1.5;

pub struct PricingService;

impl PricingService {
    /// Price of one configured service in whole Naira.
    ///
    /// Never fails: details that are missing or belong to another category are
    /// priced with the category defaults. Rejecting them is the validator's job.
    pub fn compute_price(
        service: &Service,
        configuration: &ServiceConfiguration,
        mode: PricingMode,
    ) -> Money {
        let option = Self::selected_option(service, configuration);

        let price = match configuration.details_for(service.category) {
            CategoryDetails::Cleaning {
                property_type,
                rooms,
            } => {
                let room_total = rooms
                    .iter()
                    .map(|(room, quantity)| {
                        service.room_price(*room).saturating_mul(*quantity as Money)
                    })
                    .fold(0, Money::saturating_add);

                let mut subtotal = room_total as f64 * Self::cleaning_type_multiplier(option);
                if property_type == PropertyType::Duplex {
                    subtotal *= DUPLEX_MULTIPLIER;
                }

                match mode {
                    PricingMode::OneOff => round_money(subtotal),
                    PricingMode::Subscription => round_money(
                        subtotal * configuration.scheduled_days.len() as f64 * WEEKS_PER_MONTH,
                    ),
                }
            }
            CategoryDetails::Laundry { bags, .. } => {
                Self::unit_price(service, option).saturating_mul(bags as Money)
            }
            CategoryDetails::PestControl {
                severity,
                treatment_type,
                ..
            } => round_money(
                Self::unit_price(service, option) as f64
                    * Self::severity_multiplier(severity)
                    * Self::treatment_multiplier(treatment_type),
            ),
            // Flat price, no per-meal scaling
            CategoryDetails::Cooking { .. } | CategoryDetails::Errands => service.price,
        };

        let price = price.max(0);
        debug!(
            "Priced {} ({:?}, {:?}) at {}",
            service.id, service.category, mode, price
        );
        price
    }

    /// Selected option price, or the service base price when nothing is selected
    pub fn unit_price(service: &Service, option: Option<&ServiceOption>) -> Money {
        option.map(|option| option.price).unwrap_or(service.price)
    }

    /// Resolves the configuration's selected option against the catalog entry.
    /// Ids the service doesn't carry resolve to `None`.
    pub fn selected_option<'a>(
        service: &'a Service,
        configuration: &ServiceConfiguration,
    ) -> Option<&'a ServiceOption> {
        configuration
            .selected_option
            .as_deref()
            .and_then(|option_id| service.find_option(option_id))
    }

    pub fn cleaning_type_multiplier(option: Option<&ServiceOption>) -> f64 {
        let Some(option) = option else {
            return 1.0;
        };

        let key = [
            option.identifier.as_deref(),
            Some(option.id.as_str()),
            Some(option.label.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(normalize_key)
        .find(|key| !key.is_empty())
        .unwrap_or_default();

        match key.as_str() {
            "standard" => 1.0,
            "deep" => 2.5,
            "postconstruction" => 4.0,
            "moveinmoveout" => 2.5,
            _ => 1.0,
        }
    }

    pub fn severity_multiplier(severity: Severity) -> f64 {
        match severity {
            Severity::Low => 1.0,
            Severity::Medium => 1.2,
            Severity::High => 1.5,
        }
    }

    pub fn treatment_multiplier(treatment_type: TreatmentType) -> f64 {
        match treatment_type {
            TreatmentType::Residential => 1.0,
            TreatmentType::Commercial => 1.5,
        }
    }

    /// Sum of monthly prices for a set of services, each recomputed in subscription mode
    pub fn monthly_total<'a, I>(services: I) -> Money
    where
        I: IntoIterator<Item = (&'a Service, &'a ServiceConfiguration)>,
    {
        services
            .into_iter()
            .map(|(service, configuration)| {
                Self::compute_price(service, configuration, PricingMode::Subscription)
            })
            .fold(0, Money::saturating_add)
    }

    pub fn is_flat_rate(category: ServiceCategory) -> bool {
        matches!(category, ServiceCategory::Cooking | ServiceCategory::Errands)
    }
}

/// Rounds half away from zero, which is half-up for the non-negative amounts priced here.
/// The float to int cast saturates, so amounts past `Money::MAX` clamp instead of wrapping.
fn round_money(amount: f64) -> Money {
    amount.round() as Money
}

/// "Post-Construction", "post_construction" and "postConstruction" all map to "postconstruction"
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
