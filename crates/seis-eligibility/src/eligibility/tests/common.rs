use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::eligibility::clock::FixedClock;
use crate::eligibility::domain::{CompanyFacts, FundingRoundFacts, Scheme};
use crate::eligibility::evaluation::EligibilityChecker;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date")
}

pub(super) fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

pub(super) fn checker() -> EligibilityChecker<FixedClock> {
    EligibilityChecker::with_clock(FixedClock::new(today()))
}

/// Year-old startup comfortably inside every SEIS threshold.
pub(super) fn seed_company() -> CompanyFacts {
    CompanyFacts {
        incorporation_date: days_ago(365),
        gross_assets: Some(Decimal::from(50_000)),
        employees: Some(3),
        previous_seis_rounds: None,
        previous_eis_rounds: None,
        is_parent_company: Some(false),
        has_subsidiaries: Some(false),
        trading_activity: Some("B2B payroll software".to_string()),
        sic_codes: vec!["58290".to_string()],
    }
}

/// Nine-year-old software company; only the knowledge-intensive limits admit it.
pub(super) fn growth_company() -> CompanyFacts {
    CompanyFacts {
        incorporation_date: days_ago(9 * 365 + 2),
        gross_assets: Some(Decimal::from(4_000_000)),
        employees: Some(100),
        previous_seis_rounds: Some(1),
        previous_eis_rounds: Some(1),
        is_parent_company: Some(false),
        has_subsidiaries: Some(false),
        trading_activity: None,
        sic_codes: vec!["6201".to_string()],
    }
}

pub(super) fn round(scheme: Scheme, amount: i64) -> FundingRoundFacts {
    FundingRoundFacts::new(scheme, Decimal::from(amount))
}

pub(super) fn raw_round(scheme: &str, amount: i64) -> FundingRoundFacts {
    FundingRoundFacts {
        scheme: scheme.to_string(),
        amount_to_raise: Decimal::from(amount),
        use_of_funds: None,
        first_time_applicant: None,
    }
}
