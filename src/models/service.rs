use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::configuration::Frequency;

/// Whole Naira. The marketplace never bills in kobo.
pub type Money = i64;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum ServiceCategory {
    Cleaning,
    Laundry,
    PestControl,
    Cooking,
    Errands,
}

impl ServiceCategory {
    /// Frequencies a customer may pick for this category inside a subscription
    pub fn allowed_frequencies(&self) -> &'static [Frequency] {
        match self {
            ServiceCategory::Cleaning | ServiceCategory::Laundry | ServiceCategory::Errands => {
                &[Frequency::Weekly, Frequency::BiWeekly, Frequency::Monthly]
            }
            ServiceCategory::Cooking => &[Frequency::Weekly, Frequency::BiWeekly],
            ServiceCategory::PestControl => &[Frequency::Quarterly],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Cleaning => "Cleaning",
            ServiceCategory::Laundry => "Laundry",
            ServiceCategory::PestControl => "Pest Control",
            ServiceCategory::Cooking => "Cooking",
            ServiceCategory::Errands => "Errands",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum RoomType {
    Bedroom,
    LivingRoom,
    Kitchen,
    Bathroom,
    Balcony,
    Study,
    Outdoor,
    Other,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOption {
    pub id: String,
    pub label: String,
    pub price: Money,
    /// Category-specific key, e.g. the cleaning type ("deep", "postConstruction")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Catalog entry. Owned by the catalog, only ever read here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub category: ServiceCategory,
    pub price: Money,
    #[serde(default)]
    pub options: Vec<ServiceOption>,
    /// Per-room prices, only meaningful for cleaning
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub room_prices: BTreeMap<RoomType, Money>,
}

impl Service {
    pub fn find_option(&self, option_id: &str) -> Option<&ServiceOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    pub fn room_price(&self, room: RoomType) -> Money {
        self.room_prices.get(&room).copied().unwrap_or(0)
    }
}
