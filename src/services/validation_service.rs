use std::collections::HashSet;

use log::debug;

use crate::models::configuration::{CategoryDetails, ServiceConfiguration};
use crate::models::service::{Service, ServiceCategory};
use crate::models::subscription::{BillingCycle, ConfiguredService, PricingMode};
use crate::models::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// Checks configurations and subscriptions against the booking rules.
/// Problems are returned as values; nothing here fails or panics on bad input.
pub struct ValidationService;

impl ValidationService {
    /// Validates one configuration on its own.
    ///
    /// `context` tells whether the configuration belongs to a subscription, in
    /// which case a recurring schedule and a category-compatible frequency are
    /// required. One-off bookings need neither.
    pub fn validate_service_configuration(
        configuration: &ServiceConfiguration,
        service: &Service,
        context: PricingMode,
    ) -> ValidationResult {
        let mut errors = Vec::new();
        let service_id = service.id.as_str();

        if configuration.service_id != service.id {
            errors.push(ValidationError::for_service(
                ValidationErrorKind::ServiceMismatch,
                service_id,
                format!(
                    "Configuration is for service '{}' but was submitted with '{}'",
                    configuration.service_id, service.id
                ),
            ));
        }

        let details_category = configuration.details.as_ref().map(CategoryDetails::category);
        if configuration.category != service.category
            || details_category.is_some_and(|category| category != service.category)
        {
            errors.push(ValidationError::for_service(
                ValidationErrorKind::CategoryMismatch,
                service_id,
                format!(
                    "{} is a {} service but the configuration describes {}",
                    service.name,
                    service.category.label(),
                    details_category.unwrap_or(configuration.category).label()
                ),
            ));
        }

        if let Some(option_id) = &configuration.selected_option {
            if service.find_option(option_id).is_none() {
                errors.push(ValidationError::for_service(
                    ValidationErrorKind::UnknownOption,
                    service_id,
                    format!("Option '{}' is not offered by {}", option_id, service.name),
                ));
            }
        }

        match configuration.details_for(service.category) {
            CategoryDetails::Cleaning { rooms, .. } => {
                if rooms.values().all(|quantity| *quantity == 0) {
                    errors.push(ValidationError::for_service(
                        ValidationErrorKind::MissingRoomSelection,
                        service_id,
                        "At least one room required",
                    ));
                }
            }
            CategoryDetails::Laundry { bags, .. } => {
                if bags < 1 {
                    errors.push(ValidationError::for_service(
                        ValidationErrorKind::InvalidBagCount,
                        service_id,
                        "At least one laundry bag required",
                    ));
                }
            }
            // Severity and treatment type can only hold known values once
            // deserialized, and an empty area list is allowed.
            CategoryDetails::PestControl { .. } => {}
            CategoryDetails::Cooking { meals, .. } => {
                if context == PricingMode::Subscription {
                    for meal in meals.iter().filter(|meal| meal.count > 0) {
                        if !configuration.scheduled_days.contains(&meal.day) {
                            errors.push(ValidationError::for_service(
                                ValidationErrorKind::MealDayNotScheduled,
                                service_id,
                                format!("Meals requested for {:?}, which is not a scheduled day", meal.day),
                            ));
                        }
                    }
                }
            }
            CategoryDetails::Errands => {}
        }

        if context == PricingMode::Subscription {
            if configuration.scheduled_days.is_empty() {
                errors.push(ValidationError::for_service(
                    ValidationErrorKind::MissingScheduledDays,
                    service_id,
                    "Pick at least one day for recurring visits",
                ));
            }

            if !service
                .category
                .allowed_frequencies()
                .contains(&configuration.frequency)
            {
                errors.push(ValidationError::for_service(
                    ValidationErrorKind::InvalidFrequencyForCategory,
                    service_id,
                    format!(
                        "{:?} is not an available frequency for {}",
                        configuration.frequency,
                        service.category.label()
                    ),
                ));
            }
        }

        ValidationResult::from_errors(errors)
    }

    /// Validates a whole subscription at checkout, including every entry's own configuration
    pub fn validate_subscription(
        services: &[ConfiguredService],
        billing_cycle: BillingCycle,
        duration: u32,
    ) -> ValidationResult {
        let mut errors = Vec::new();

        if services.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyServiceList,
                "Add at least one service to continue",
            ));
        }

        if duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                "Duration must be at least one month",
            ));
        }

        let has_pest_control = services
            .iter()
            .any(|entry| entry.category() == ServiceCategory::PestControl);
        let others: Vec<&ConfiguredService> = services
            .iter()
            .filter(|entry| entry.category() != ServiceCategory::PestControl)
            .collect();

        if has_pest_control {
            for entry in &others {
                errors.push(ValidationError::for_service(
                    ValidationErrorKind::ConflictingServiceCategories,
                    entry.service_id(),
                    format!(
                        "{} cannot be combined with pest control in one subscription",
                        entry.service.name
                    ),
                ));
            }
        }

        if billing_cycle == BillingCycle::Quarterly {
            for entry in &others {
                errors.push(ValidationError::for_service(
                    ValidationErrorKind::InvalidBillingCycleForCategory,
                    entry.service_id(),
                    format!(
                        "Quarterly billing is only available for pest control, not {}",
                        entry.category().label()
                    ),
                ));
            }
        } else if has_pest_control && others.is_empty() {
            for entry in services {
                errors.push(ValidationError::for_service(
                    ValidationErrorKind::InvalidBillingCycleForCategory,
                    entry.service_id(),
                    format!("Pest control is billed quarterly, not {:?}", billing_cycle),
                ));
            }
        }

        let mut seen = HashSet::new();
        for entry in services {
            if !seen.insert(entry.service_id()) {
                errors.push(ValidationError::for_service(
                    ValidationErrorKind::DuplicateService,
                    entry.service_id(),
                    format!("{} was added more than once", entry.service.name),
                ));
            }
        }

        for entry in services {
            let result = Self::validate_service_configuration(
                &entry.configuration,
                &entry.service,
                PricingMode::Subscription,
            );
            errors.extend(result.errors);
        }

        let result = ValidationResult::from_errors(errors);
        debug!(
            "Validated subscription of {} services ({:?}, {} months): {} errors",
            services.len(),
            billing_cycle,
            duration,
            result.errors.len()
        );
        result
    }
}
