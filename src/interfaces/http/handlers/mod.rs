//! HTTP API handlers

pub mod billing;
pub mod health;
pub mod metrics;
