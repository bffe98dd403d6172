//! Standard hourly/daily rate. Applies to every session.

use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::session::Session;

use super::BillingStrategy;

const DAILY_RATE: Decimal = dec!(20);
const TWO_TO_THREE_HOURS: Decimal = dec!(15);
const ONE_TO_TWO_HOURS: Decimal = dec!(10);
const UNDER_ONE_HOUR: Decimal = dec!(5);

/// Fallback rate: tiered flat fees up to three hours, then a per-day charge.
/// Always applicable, and listed last so it only wins when it is strictly
/// cheapest.
pub struct StandardRate<'a> {
    session: &'a Session,
}

impl<'a> StandardRate<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl BillingStrategy for StandardRate<'_> {
    fn name(&self) -> &'static str {
        "Standard Rate"
    }

    fn is_applicable(&self) -> bool {
        true
    }

    fn calculate_cost(&self) -> Decimal {
        let duration = self.session.duration();

        if duration >= Duration::hours(3) {
            // Whole elapsed days plus the started one, and one more when
            // the wall clock wraps past the entry time of day.
            let mut days = duration.num_days() + 1;
            if self.session.entry_date_time.time() > self.session.exit_date_time.time() {
                days += 1;
            }
            return Decimal::from(days) * DAILY_RATE;
        }

        if duration >= Duration::hours(2) {
            return TWO_TO_THREE_HOURS;
        }
        if duration >= Duration::hours(1) {
            return ONE_TO_TWO_HOURS;
        }
        UNDER_ONE_HOUR
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

    fn cost(entry: NaiveDateTime, exit: NaiveDateTime) -> Decimal {
        let session = Session::new(entry, exit);
        let rate = StandardRate::new(&session);
        assert!(rate.is_applicable());
        rate.calculate_cost()
    }

    #[test]
    fn short_stays_use_the_flat_tiers() {
        let entry = dt(2020, 9, 2, 10, 0);

        assert_eq!(cost(entry, dt(2020, 9, 2, 10, 59)), dec!(5));
        assert_eq!(cost(entry, dt(2020, 9, 2, 11, 0)), dec!(10));
        assert_eq!(cost(entry, dt(2020, 9, 2, 11, 59)), dec!(10));
        assert_eq!(cost(entry, dt(2020, 9, 2, 12, 0)), dec!(15));
        assert_eq!(cost(entry, dt(2020, 9, 2, 12, 59)), dec!(15));
    }

    #[test]
    fn three_hours_starts_the_daily_charge() {
        assert_eq!(cost(dt(2020, 9, 2, 10, 0), dt(2020, 9, 2, 13, 0)), dec!(20));
    }

    #[test]
    fn each_elapsed_day_adds_a_daily_charge() {
        let entry = dt(2020, 9, 5, 23, 30);

        // Six days, 23 hours and 59 minutes: the clock wraps past the
        // entry time, so eight days are charged.
        assert_eq!(cost(entry, dt(2020, 9, 12, 23, 29)), dec!(160));
        // Exactly seven days.
        assert_eq!(cost(entry, dt(2020, 9, 12, 23, 30)), dec!(160));
        // Seven days and a minute.
        assert_eq!(cost(entry, dt(2020, 9, 12, 23, 31)), dec!(160));
        // Seven days and two hours, wrapping past the entry time again.
        assert_eq!(cost(entry, dt(2020, 9, 13, 1, 29)), dec!(180));
    }

    #[test]
    fn zero_and_negative_durations_fall_into_the_cheapest_tier() {
        let entry = dt(2020, 9, 2, 10, 0);

        assert_eq!(cost(entry, entry), dec!(5));
        assert_eq!(cost(entry, dt(2020, 9, 2, 8, 0)), dec!(5));
    }
}
