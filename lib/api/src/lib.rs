//! # ddix API
//!
//! JSON REST surface over the prediction dispatcher:
//!
//! - `GET /` - health: model and data state
//! - `GET /drugs` - known drug names in load order
//! - `POST /predict` - score a drug pair

pub mod config;
pub mod rest;

pub use config::{validate_origin, AllowedOrigins, ApiConfig, DEFAULT_ALLOWED_ORIGINS};
pub use rest::RestApi;
