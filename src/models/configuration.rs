use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::service::{Money, RoomType, ServiceCategory};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimeSlot {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    #[default]
    Flat,
    Duplex,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum LaundryType {
    #[default]
    WashAndFold,
    WashAndIron,
    DryClean,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TreatmentType {
    #[default]
    Residential,
    Commercial,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum MealType {
    #[default]
    Basic,
    Standard,
    Premium,
}

/// Optional per-item breakdown of a laundry pickup
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LaundryItems {
    pub shirts: u32,
    pub trousers: u32,
    pub dresses: u32,
    pub bedsheets: u32,
    pub others: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MealCount {
    pub day: Weekday,
    pub count: u32,
}

/// Category-specific part of a configuration. Exactly one shape per category.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CategoryDetails {
    Cleaning {
        #[serde(default)]
        property_type: PropertyType,
        #[serde(default)]
        rooms: BTreeMap<RoomType, u32>,
    },
    Laundry {
        bags: u32,
        #[serde(default)]
        items: LaundryItems,
        #[serde(default)]
        laundry_type: LaundryType,
    },
    PestControl {
        #[serde(default)]
        severity: Severity,
        #[serde(default)]
        treatment_type: TreatmentType,
        #[serde(default)]
        areas: Vec<String>,
    },
    Cooking {
        #[serde(default)]
        meal_type: MealType,
        #[serde(default)]
        meals: Vec<MealCount>,
    },
    Errands,
}

impl CategoryDetails {
    /// What a freshly opened form starts with for the category
    pub fn default_for(category: ServiceCategory) -> Self {
        match category {
            ServiceCategory::Cleaning => CategoryDetails::Cleaning {
                property_type: PropertyType::Flat,
                rooms: BTreeMap::new(),
            },
            ServiceCategory::Laundry => CategoryDetails::Laundry {
                bags: 1,
                items: LaundryItems::default(),
                laundry_type: LaundryType::WashAndFold,
            },
            ServiceCategory::PestControl => CategoryDetails::PestControl {
                severity: Severity::Low,
                treatment_type: TreatmentType::Residential,
                areas: Vec::new(),
            },
            ServiceCategory::Cooking => CategoryDetails::Cooking {
                meal_type: MealType::Basic,
                meals: Vec::new(),
            },
            ServiceCategory::Errands => CategoryDetails::Errands,
        }
    }

    pub fn category(&self) -> ServiceCategory {
        match self {
            CategoryDetails::Cleaning { .. } => ServiceCategory::Cleaning,
            CategoryDetails::Laundry { .. } => ServiceCategory::Laundry,
            CategoryDetails::PestControl { .. } => ServiceCategory::PestControl,
            CategoryDetails::Cooking { .. } => ServiceCategory::Cooking,
            CategoryDetails::Errands => ServiceCategory::Errands,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfiguration {
    pub service_id: String,
    pub category: ServiceCategory,
    #[serde(default)]
    pub selected_option: Option<String>,
    pub frequency: Frequency,
    #[serde(default)]
    pub scheduled_days: BTreeSet<Weekday>,
    #[serde(default)]
    pub preferred_time_slot: TimeSlot,
    /// Missing details mean "use the category defaults"
    #[serde(default)]
    pub details: Option<CategoryDetails>,
    /// Output of the price calculator, never trusted from input
    #[serde(default)]
    pub price: Money,
}

impl ServiceConfiguration {
    /// Details to price and validate `category` with. Falls back to the
    /// category defaults when none were sent or they belong to another category.
    pub fn details_for(&self, category: ServiceCategory) -> CategoryDetails {
        match &self.details {
            Some(details) if details.category() == category => details.clone(),
            _ => CategoryDetails::default_for(category),
        }
    }
}
