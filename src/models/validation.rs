use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ValidationErrorKind {
    ServiceMismatch,
    CategoryMismatch,
    UnknownOption,
    MissingRoomSelection,
    InvalidBagCount,
    MissingScheduledDays,
    InvalidFrequencyForCategory,
    MealDayNotScheduled,
    EmptyServiceList,
    InvalidDuration,
    InvalidBillingCycleForCategory,
    ConflictingServiceCategories,
    DuplicateService,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            service_id: None,
        }
    }

    pub fn for_service(
        kind: ValidationErrorKind,
        service_id: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            service_id: Some(service_id.to_string()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn has(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|error| error.kind == kind)
    }
}
