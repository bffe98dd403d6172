//! Early Bird flat rate for commuter sessions.

use chrono::{Duration, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::session::Session;

use super::{tod, BillingStrategy};

const FLAT_RATE: Decimal = dec!(13);

const ENTRY_FROM: NaiveTime = tod(6, 0);
const ENTRY_UNTIL: NaiveTime = tod(9, 0);
const EXIT_FROM: NaiveTime = tod(15, 30);
const EXIT_UNTIL: NaiveTime = tod(23, 30);

/// The advertised entry/exit windows only constrain the time of day, so
/// without a cap a week-long stay could ride the flat rate.
const MAX_STAY_HOURS: i64 = 24;

/// Flat $13 for entering between 06:00-09:00 and leaving between
/// 15:30-23:30, capped at a 24 hour stay. All window edges are inclusive.
pub struct EarlyBird<'a> {
    session: &'a Session,
}

impl<'a> EarlyBird<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl BillingStrategy for EarlyBird<'_> {
    fn name(&self) -> &'static str {
        "Early Bird"
    }

    fn is_applicable(&self) -> bool {
        let entry = self.session.entry_date_time.time();
        if entry < ENTRY_FROM || entry > ENTRY_UNTIL {
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
