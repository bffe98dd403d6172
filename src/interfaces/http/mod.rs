//! HTTP REST API
//!
//! - `common`: error envelope shared by every endpoint
//! - `handlers`: request handlers (billing, health, metrics)
//! - `middleware`: request-id correlation and HTTP metrics
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use router::create_api_router;
