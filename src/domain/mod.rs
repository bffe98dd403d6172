pub mod billing;
pub mod error;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use billing::{Billing, CURRENCY};
pub use error::{DomainError, DomainResult};
pub use session::Session;
pub use strategy::BillingStrategy;
