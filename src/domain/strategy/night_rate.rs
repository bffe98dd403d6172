//! Night Rate flat rate for overnight weekday sessions.

use chrono::{Datelike, Duration, NaiveTime, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::session::Session;

use super::{tod, BillingStrategy};

const FLAT_RATE: Decimal = dec!(6.5);

const ENTRY_FROM: NaiveTime = tod(18, 0);
const EXIT_FROM: NaiveTime = tod(15, 30);
const EXIT_UNTIL: NaiveTime = tod(23, 30);

/// Only the entry day has to be a weekday; an overnight Friday session
/// exiting on Saturday still qualifies.
const ENTRY_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

const MAX_STAY_HOURS: i64 = 24;

/// Flat $6.50 for entering on a weekday at 18:00 or later and leaving
/// between 15:30-23:30, capped at a 24 hour stay.
pub struct NightRate<'a> {
    session: &'a Session,
}

impl<'a> NightRate<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl BillingStrategy for NightRate<'_> {
    fn name(&self) -> &'static str {
        "Night Rate"
    }

    fn is_applicable(&self) -> bool {
        if self.session.entry_date_time.time() < ENTRY_FROM {
            return false;
        }
        if !ENTRY_DAYS.contains(&self.session.entry_date_time.weekday()) {
            return false;
        }

        let exit = self.session.exit_date_time.time();
        if exit < EXIT_FROM || exit > EXIT_UNTIL {
            return false;
        }

        self.session.duration() <= Duration::hours(MAX_STAY_HOURS)
    }

    fn calculate_cost(&self) -> Decimal {
        FLAT_RATE
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
