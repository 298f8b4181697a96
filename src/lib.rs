//! Pricing and booking rules for the home-services marketplace.
//!
//! The `services` modules are plain functions over value types and can be used
//! directly; `routes` exposes the same rules over HTTP for the web front end,
//! the admin tools and direct API submissions.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
