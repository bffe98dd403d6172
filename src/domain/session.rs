//! Parking session entity and rate selection.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::domain::billing::Billing;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::strategy::{BillingStrategy, EarlyBird, NightRate, StandardRate, WeekendRate};

/// Sessions must start and end strictly after this date.
const MINIMUM_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2020, 1, 1) {
    Some(date) => date,
    None => panic!("minimum date components out of range"),
};

/// How the minimum date is rendered inside validation messages.
const DATE_FORMAT: &str = "%Y/%m/%d";

/// One parking stay, from barrier in to barrier out.
///
/// Timestamps are local wall-clock values; the pricing rules reason about
/// the time of day and weekday as the driver saw them, so no timezone
/// conversion is applied anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub entry_date_time: NaiveDateTime,
    pub exit_date_time: NaiveDateTime,
}

impl Session {
    pub fn new(entry_date_time: NaiveDateTime, exit_date_time: NaiveDateTime) -> Self {
        Self {
            entry_date_time,
            exit_date_time,
        }
    }

    /// Checks both timestamps against the minimum supported date.
    ///
    /// Only the calendar date is compared: any time of day on the minimum
    /// date itself is still rejected. The entry timestamp is checked first,
    /// so when both are out of range the error names `entryDateTime`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.entry_date_time.date() <= MINIMUM_DATE {
            return Err(DomainError::Validation {
                field: "entryDateTime",
                minimum: MINIMUM_DATE.format(DATE_FORMAT).to_string(),
            });
        }
        if self.exit_date_time.date() <= MINIMUM_DATE {
            return Err(DomainError::Validation {
                field: "exitDateTime",
                minimum: MINIMUM_DATE.format(DATE_FORMAT).to_string(),
            });
        }
        Ok(())
    }

    /// Signed length of the stay. Negative when the exit precedes the
    /// entry; the pricing rules deal with that rather than clamping here.
    pub fn duration(&self) -> Duration {
        self.exit_date_time - self.entry_date_time
    }

    /// Prices the session: evaluates every rate, keeps the applicable ones
    /// and returns the cheapest as a [`Billing`] record.
    ///
    /// The rate list is ordered and the sort is stable, so on a cost tie
    /// the earlier-listed rate wins. Standard Rate sits last for that
    /// reason: as the catch-all it should only win outright.
    pub fn calculate_billing(&self) -> DomainResult<Billing> {
        let strategies: Vec<Box<dyn BillingStrategy + '_>> = vec![
            Box::new(EarlyBird::new(self)),
            Box::new(NightRate::new(self)),
            Box::new(WeekendRate::new(self)),
            Box::new(StandardRate::new(self)),
        ];

        let mut applicable: Vec<_> = strategies
            .into_iter()
            .filter(|strategy| strategy.is_applicable())
            .collect();
        applicable.sort_by_key(|strategy| strategy.calculate_cost());

        let winner = applicable.first().ok_or(DomainError::NoApplicableRate)?;

        Ok(Billing::new(
            winner.calculate_cost(),
            winner.name(),
            winner.rate_type(),
        ))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
