//! # Carpark Billing Service
//!
//! Prices parking sessions: given entry and exit timestamps it picks the
//! cheapest applicable rate from a fixed set of time-window pricing rules
//! and returns the resulting billing record over a small REST API.
//!
//! ## Architecture
//!
//! - **domain**: Core business entities and the pricing rules
//! - **interfaces**: REST API with Swagger documentation
//! - **config**: TOML configuration
//! - **shared**: Cross-cutting concerns (graceful shutdown)

pub mod config;
pub mod domain;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export the core billing types for easy access
pub use domain::{Billing, DomainError, DomainResult, Session};

// Re-export API router
pub use interfaces::http::create_api_router;
