use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Company facts gathered from intake and the registry lookup.
///
/// Optional fields are "unknown" rather than zero: a check that needs a missing
/// value records a manual-verification note instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyFacts {
    pub incorporation_date: NaiveDate,
    pub gross_assets: Option<Decimal>,
    pub employees: Option<u32>,
    pub previous_seis_rounds: Option<u32>,
    pub previous_eis_rounds: Option<u32>,
    pub is_parent_company: Option<bool>,
    pub has_subsidiaries: Option<bool>,
    pub trading_activity: Option<String>,
    #[serde(default)]
    pub sic_codes: Vec<String>,
}

impl CompanyFacts {
    /// Facts for a company where only the incorporation date is known.
    pub fn incorporated_on(incorporation_date: NaiveDate) -> Self {
        Self {
            incorporation_date,
            gross_assets: None,
            employees: None,
            previous_seis_rounds: None,
            previous_eis_rounds: None,
            is_parent_company: None,
            has_subsidiaries: None,
            trading_activity: None,
            sic_codes: Vec::new(),
        }
    }

    pub fn part_of_group(&self) -> bool {
        self.is_parent_company == Some(true) || self.has_subsidiaries == Some(true)
    }
}

/// Facts about the round being raised.
///
/// `scheme` is kept as the raw code captured by the form; it is parsed when the
/// round is evaluated so an unknown code surfaces as [`EligibilityError::InvalidScheme`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingRoundFacts {
    pub scheme: String,
    pub amount_to_raise: Decimal,
    pub use_of_funds: Option<String>,
    pub first_time_applicant: Option<bool>,
}

impl FundingRoundFacts {
    pub fn new(scheme: Scheme, amount_to_raise: Decimal) -> Self {
        Self {
            scheme: scheme.code().to_string(),
            amount_to_raise,
            use_of_funds: None,
            first_time_applicant: None,
        }
    }

    pub fn scheme(&self) -> Result<Scheme, EligibilityError> {
        self.scheme.parse()
    }
}

/// Tax-advantaged scheme selector for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scheme {
    Seis,
    Eis,
    Both,
}

impl Scheme {
    pub const fn code(self) -> &'static str {
        match self {
            Scheme::Seis => "SEIS",
            Scheme::Eis => "EIS",
            Scheme::Both => "BOTH",
        }
    }

    pub(crate) const fn includes_seis(self) -> bool {
        matches!(self, Scheme::Seis | Scheme::Both)
    }

    pub(crate) const fn includes_eis(self) -> bool {
        matches!(self, Scheme::Eis | Scheme::Both)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Scheme {
    type Err = EligibilityError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "SEIS" => Ok(Scheme::Seis),
            "EIS" => Ok(Scheme::Eis),
            "BOTH" => Ok(Scheme::Both),
            _ => Err(EligibilityError::InvalidScheme {
                scheme: raw.to_string(),
            }),
        }
    }
}

/// Input errors that prevent an evaluation from running at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    #[error("invalid scheme '{scheme}': expected SEIS, EIS or BOTH")]
    InvalidScheme { scheme: String },
}

/// Overall outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityResult {
    Eligible,
    PossiblyEligible,
    NotEligible,
}

impl EligibilityResult {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityResult::Eligible => "eligible",
            EligibilityResult::PossiblyEligible => "possibly_eligible",
            EligibilityResult::NotEligible => "not_eligible",
        }
    }
}

/// Observed or threshold value attached to a criterion check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckValue {
    Amount(Decimal),
    Years(f64),
    Count(u32),
    Flag(bool),
    Text(String),
}

impl fmt::Display for CheckValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckValue::Amount(amount) => f.write_str(&format_gbp(*amount)),
            CheckValue::Years(years) => write!(f, "{years:.2} years"),
            CheckValue::Count(count) => write!(f, "{count}"),
            CheckValue::Flag(flag) => write!(f, "{}", if *flag { "yes" } else { "no" }),
            CheckValue::Text(text) => f.write_str(text),
        }
    }
}

/// Single rule evaluation retained for the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionCheck {
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<CheckValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<CheckValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CriterionCheck {
    pub fn evaluated(passed: bool) -> Self {
        Self {
            passed,
            value: None,
            threshold: None,
            notes: None,
        }
    }

    pub fn with_value(mut self, value: CheckValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_threshold(mut self, threshold: CheckValue) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Result of an evaluation together with the rules that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub result: EligibilityResult,
    pub reasons: Vec<String>,
    pub checks_performed: BTreeMap<String, CriterionCheck>,
}

impl EligibilityVerdict {
    pub fn check(&self, name: &str) -> Option<&CriterionCheck> {
        self.checks_performed.get(name)
    }

    pub fn summary(&self) -> String {
        match self.result {
            EligibilityResult::Eligible => "eligible".to_string(),
            EligibilityResult::PossiblyEligible if self.reasons.is_empty() => {
                "possibly eligible, pending manual verification".to_string()
            }
            EligibilityResult::PossiblyEligible => {
                format!("possibly eligible: {}", self.reasons.join("; "))
            }
            EligibilityResult::NotEligible => {
                format!("not eligible: {}", self.reasons.join("; "))
            }
        }
    }
}

/// Render an amount the way HMRC limits are quoted, e.g. `£150,000`.
pub fn format_gbp(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{sign}£{grouped}.{fraction:0<2}"),
        None => format!("{sign}£{grouped}"),
    }
}
