//! Weekend flat rate.

use chrono::{Datelike, Duration, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::session::Session;

use super::BillingStrategy;

const FLAT_RATE: Decimal = dec!(10);

const WEEKEND_DAYS: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// Two days covers the longest stay that can start and end on the same
/// weekend.
const MAX_STAY_HOURS: i64 = 48;

/// Flat $10 for sessions that both enter and exit on a Saturday or Sunday,
/// capped at a 48 hour stay. Time of day is not constrained.
pub struct WeekendRate<'a> {
    session: &'a Session,
}

impl<'a> WeekendRate<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl BillingStrategy for WeekendRate<'_> {
    fn name(&self) -> &'static str {
        "Weekend Rate"
    }

    fn is_applicable(&self) -> bool {
        if !WEEKEND_DAYS.contains(&self.session.entry_date_time.weekday()) {
            return false;
        }
        if !WEEKEND_DAYS.contains(&self.session.exit_date_time.weekday()) {
            return false;
        }

        self.session.duration() <= Duration::hours(MAX_STAY_HOURS)
    }

    fn calculate_cost(&self) -> Decimal {
        FLAT_RATE
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn sample_session(entry: NaiveDateTime, exit: NaiveDateTime) -> Session {
        Session::new(entry, exit)
    }

    #[test]
    fn applies_to_a_saturday_through_sunday_stay() {
        let session = sample_session(dt(2020, 9, 5, 6, 0), dt(2020, 9, 6, 23, 0));
        let rate = WeekendRate::new(&session);

        assert!(rate.is_applicable());
        assert_eq!(rate.calculate_cost(), dec!(10));
    }

    #[test]
    fn rejects_a_weekday_entry() {
        // Friday evening into Saturday.
        let session = sample_session(dt(2020, 9, 4, 21, 0), dt(2020, 9, 5, 16, 0));

        assert!(!WeekendRate::new(&session).is_applicable());
    }

    #[test]
    fn rejects_a_weekday_exit() {
        // Sunday into Monday morning.
        let session = sample_session(dt(2020, 9, 6, 20, 0), dt(2020, 9, 7, 8, 0));

        assert!(!WeekendRate::new(&session).is_applicable());
    }

    #[test]
    fn rejects_a_stay_spanning_two_weekends() {
        // Saturday to the following Saturday: both days qualify, but the
        // stay runs a full week.
        let session = sample_session(dt(2020, 9, 5, 23, 30), dt(2020, 9, 12, 23, 30));

        assert!(!WeekendRate::new(&session).is_applicable());
    }
}
