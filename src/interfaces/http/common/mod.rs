//! Plumbing shared by every HTTP handler.

pub mod error;

pub use error::{ApiError, ErrorResponse, REQUIRED_FIELDS_MESSAGE};
