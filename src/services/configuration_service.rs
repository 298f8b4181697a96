use std::collections::BTreeSet;

use crate::models::configuration::{
    CategoryDetails, Frequency, LaundryItems, MealCount, PropertyType, ServiceConfiguration,
    Severity, TimeSlot, TreatmentType, Weekday,
};
use crate::models::service::{RoomType, Service};
use crate::models::subscription::PricingMode;
use crate::services::pricing_service::PricingService;

/// Starting configuration for a service when a customer first picks it.
pub fn default_configuration(service: &Service, mode: PricingMode) -> ServiceConfiguration {
    let scheduled_days = match mode {
        PricingMode::OneOff => BTreeSet::new(),
        PricingMode::Subscription => BTreeSet::from([Weekday::Monday]),
    };

    let mut configuration = ServiceConfiguration {
        service_id: service.id.clone(),
        category: service.category,
        selected_option: None,
        frequency: service.category.allowed_frequencies()[0],
        scheduled_days,
        preferred_time_slot: TimeSlot::Morning,
        details: Some(CategoryDetails::default_for(service.category)),
        price: 0,
    };
    configuration.price = PricingService::compute_price(service, &configuration, mode);
    configuration
}

/// Applies form edits to a configuration and re-prices it after every change,
/// so a configuration coming out of the editor never carries a stale price.
pub struct ConfigurationEditor<'a> {
    service: &'a Service,
    mode: PricingMode,
    configuration: ServiceConfiguration,
}

impl<'a> ConfigurationEditor<'a> {
    pub fn new(service: &'a Service, configuration: ServiceConfiguration, mode: PricingMode) -> Self {
        let mut editor = Self {
            service,
            mode,
            configuration,
        };
        editor.reprice();
        editor
    }

    pub fn configuration(&self) -> &ServiceConfiguration {
        &self.configuration
    }

    pub fn finish(self) -> ServiceConfiguration {
        self.configuration
    }

    pub fn select_option(&mut self, option_id: Option<String>) -> &mut Self {
        self.configuration.selected_option = option_id;
        self.reprice()
    }

    pub fn set_frequency(&mut self, frequency: Frequency) -> &mut Self {
        self.configuration.frequency = frequency;
        self.reprice()
    }

    /// Adds the day if missing, removes it otherwise
    pub fn toggle_day(&mut self, day: Weekday) -> &mut Self {
        if !self.configuration.scheduled_days.remove(&day) {
            self.configuration.scheduled_days.insert(day);
        }
        self.reprice()
    }

    pub fn set_days<I: IntoIterator<Item = Weekday>>(&mut self, days: I) -> &mut Self {
        self.configuration.scheduled_days = days.into_iter().collect();
        self.reprice()
    }

    pub fn set_time_slot(&mut self, time_slot: TimeSlot) -> &mut Self {
        self.configuration.preferred_time_slot = time_slot;
        self
    }

    pub fn increment_room(&mut self, room: RoomType) -> &mut Self {
        if let CategoryDetails::Cleaning { rooms, .. } = self.details_mut() {
            let quantity = rooms.entry(room).or_insert(0);
            *quantity = quantity.saturating_add(1);
        }
        self.reprice()
    }

    /// Stops at zero
    pub fn decrement_room(&mut self, room: RoomType) -> &mut Self {
        if let CategoryDetails::Cleaning { rooms, .. } = self.details_mut() {
            let quantity = rooms.entry(room).or_insert(0);
            *quantity = quantity.saturating_sub(1);
        }
        self.reprice()
    }

    pub fn set_property_type(&mut self, value: PropertyType) -> &mut Self {
        if let CategoryDetails::Cleaning { property_type, .. } = self.details_mut() {
            *property_type = value;
        }
        self.reprice()
    }

    pub fn set_bags(&mut self, value: u32) -> &mut Self {
        if let CategoryDetails::Laundry { bags, .. } = self.details_mut() {
            *bags = value;
        }
        self.reprice()
    }

    pub fn set_laundry_items(&mut self, value: LaundryItems) -> &mut Self {
        if let CategoryDetails::Laundry { items, .. } = self.details_mut() {
            *items = value;
        }
        self.reprice()
    }

    pub fn set_severity(&mut self, value: Severity) -> &mut Self {
        if let CategoryDetails::PestControl { severity, .. } = self.details_mut() {
            *severity = value;
        }
        self.reprice()
    }

    pub fn set_treatment_type(&mut self, value: TreatmentType) -> &mut Self {
        if let CategoryDetails::PestControl { treatment_type, .. } = self.details_mut() {
            *treatment_type = value;
        }
        self.reprice()
    }

    pub fn set_meals(&mut self, value: Vec<MealCount>) -> &mut Self {
        if let CategoryDetails::Cooking { meals, .. } = self.details_mut() {
            *meals = value;
        }
        self.reprice()
    }

    /// Details of the service's category, replacing missing or foreign ones with defaults
    fn details_mut(&mut self) -> &mut CategoryDetails {
        let details = self.configuration.details_for(self.service.category);
        self.configuration.details.insert(details)
    }

    fn reprice(&mut self) -> &mut Self {
        self.configuration.price =
            PricingService::compute_price(self.service, &self.configuration, self.mode);
        self
    }
}
