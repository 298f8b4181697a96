pub mod checkout_service;
pub mod configuration_service;
pub mod discount_service;
pub mod pricing_service;
pub mod validation_service;
