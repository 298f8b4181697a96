use std::env;

use actix_cors::Cors;

use crate::error::ApiError;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const JSON_LIMIT_BYTES: usize = 256 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Origin allowed by CORS. Any origin when unset.
    pub allowed_origin: Option<String>,
    pub json_limit_bytes: usize,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            allowed_origin: None,
            json_limit_bytes: JSON_LIMIT_BYTES,
            environment: "development".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads HOST, PORT, ALLOWED_ORIGIN, JSON_LIMIT_BYTES and RUST_ENV, falling
    /// back to defaults for anything unset
    pub fn from_env() -> Result<Self, ApiError> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ApiError::Config(format!("PORT must be a port number, got '{}'", value)))?,
            Err(_) => defaults.port,
        };

        let json_limit_bytes = match env::var("JSON_LIMIT_BYTES") {
            Ok(value) => value.parse().map_err(|_| {
                ApiError::Config(format!("JSON_LIMIT_BYTES must be a byte count, got '{}'", value))
            })?,
            Err(_) => defaults.json_limit_bytes,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            json_limit_bytes,
            environment: env::var("RUST_ENV").unwrap_or(defaults.environment),
        })
    }

    pub fn cors(&self) -> Cors {
        let cors = match &self.allowed_origin {
            Some(origin) => Cors::default().allowed_origin(origin),
            None => Cors::default().allow_any_origin(),
        };

        cors.allow_any_method().allow_any_header().max_age(3600)
    }
}
