use std::sync::Arc;

use chrono::{NaiveDate, Utc};

/// Source of the evaluation date used for company-age checks.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the current UTC date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a single date, for reproducible audits and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Company age in years, using 365.25-day years.
pub(crate) fn company_age_years(incorporation_date: NaiveDate, today: NaiveDate) -> f64 {
    let days = today.signed_duration_since(incorporation_date).num_days();
    days as f64 / 365.25
}
