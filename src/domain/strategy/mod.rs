//! Pricing rules for a parking session.
//!
//! Each rule decides for itself whether it applies to a session and what it
//! would charge. The selector in `Session::calculate_billing` evaluates the
//! rules in a fixed order and picks the cheapest applicable one, so a rule
//! never needs to know about its competitors.

mod early_bird;
mod night_rate;
mod standard_rate;
mod weekend_rate;

pub use early_bird::EarlyBird;
pub use night_rate::NightRate;
pub use standard_rate::StandardRate;
pub use weekend_rate::WeekendRate;

use chrono::NaiveTime;
use rust_decimal::Decimal;

/// A single pricing rule.
///
/// `calculate_cost` is only meaningful when `is_applicable` returned true;
/// callers must check applicability first.
pub trait BillingStrategy {
    /// Display name of the rate, carried onto the billing record.
    fn name(&self) -> &'static str;

    /// Rate category. Defaults to the rate name until the product defines
    /// separate categories.
    fn rate_type(&self) -> &'static str {
        self.name()
    }

    /// Whether this rule prices the session at all.
    fn is_applicable(&self) -> bool;

    /// The amount this rule would charge for the session.
    fn calculate_cost(&self) -> Decimal;
}

/// Compile-time time-of-day constant. Panics at compile time on invalid
/// components, so runtime callers never see the failure arm.
const fn tod(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(time) => time,
        None => panic!("time-of-day components out of range"),
    }
}
