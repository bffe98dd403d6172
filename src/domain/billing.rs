//! Billing record produced by the rate selector.

use rust_decimal::Decimal;

/// Currency every billing amount is denominated in.
pub const CURRENCY: &str = "AUD";

/// The priced outcome of one parking session.
///
/// Produced by the rate selector (`Session::calculate_billing`) and treated
/// as immutable from there on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Billing {
    /// Amount owed for the session.
    pub cost: Decimal,
    /// Always [`CURRENCY`].
    pub currency: String,
    /// Display name of the rate that won the selection.
    pub rate_name: String,
    /// Rate category; mirrors the name until the product grows categories.
    pub rate_type: String,
}

impl Billing {
    /// Builds a billing record denominated in the fixed service currency.
    pub fn new(cost: Decimal, rate_name: impl Into<String>, rate_type: impl Into<String>) -> Self {
        Self {
            cost,
            currency: CURRENCY.to_string(),
            rate_name: rate_name.into(),
            rate_type: rate_type.into(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
