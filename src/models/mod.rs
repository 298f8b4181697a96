pub mod configuration;
pub mod quote;
pub mod service;
pub mod subscription;
pub mod validation;
