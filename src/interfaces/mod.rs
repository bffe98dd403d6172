//! Transport adapters in front of the billing core.

pub mod http;
