use chrono::NaiveDate;

use super::super::clock::company_age_years;
use super::super::domain::{
    format_gbp, CheckValue, CompanyFacts, CriterionCheck, EligibilityVerdict, FundingRoundFacts,
};
use super::limits::SeisLimits;
use super::verdict::{VerdictBuilder, MANUAL_VERIFICATION};

pub(crate) const COMPANY_AGE: &str = "company_age";
pub(crate) const GROSS_ASSETS: &str = "gross_assets";
pub(crate) const EMPLOYEE_COUNT: &str = "employee_count";
pub(crate) const INVESTMENT_AMOUNT: &str = "investment_amount";
pub(crate) const PREVIOUS_SEIS: &str = "previous_seis";
pub(crate) const GROUP_STRUCTURE: &str = "group_structure";
pub(crate) const TRADING_ACTIVITY: &str = "trading_activity";

/// Apply every SEIS rule; none of them short-circuits the others.
pub(crate) fn check_seis(
    company: &CompanyFacts,
    round: &FundingRoundFacts,
    today: NaiveDate,
    limits: &SeisLimits,
) -> EligibilityVerdict {
    let mut verdict = VerdictBuilder::new();

    let age = company_age_years(company.incorporation_date, today);
    let age_limit = f64::from(limits.max_company_age_years);
    let age_ok = age < age_limit;
    verdict.record(
        COMPANY_AGE,
        CriterionCheck::evaluated(age_ok)
            .with_value(CheckValue::Years(age))
            .with_threshold(CheckValue::Years(age_limit)),
    );
    if !age_ok {
        verdict.block(format!(
            "Company is too old for SEIS (must be less than {} years)",
            limits.max_company_age_years
        ));
    }

    let assets_threshold = CheckValue::Amount(limits.max_gross_assets);
    match company.gross_assets {
        Some(assets) => {
            let assets_ok = assets <= limits.max_gross_assets;
            verdict.record(
                GROSS_ASSETS,
                CriterionCheck::evaluated(assets_ok)
                    .with_value(CheckValue::Amount(assets))
                    .with_threshold(assets_threshold),
            );
            if !assets_ok {
                verdict.block(format!(
                    "Gross assets exceed {} limit for SEIS",
                    format_gbp(limits.max_gross_assets)
                ));
            }
        }
        None => {
            verdict.record(
                GROSS_ASSETS,
                CriterionCheck::evaluated(true)
                    .with_threshold(assets_threshold)
                    .with_notes(format!("Gross assets not provided; {MANUAL_VERIFICATION}")),
            );
            verdict.needs_verification();
        }
    }

    let employee_threshold = CheckValue::Count(limits.max_employees);
    match company.employees {
        Some(employees) => {
            let employees_ok = employees <= limits.max_employees;
            verdict.record(
                EMPLOYEE_COUNT,
                CriterionCheck::evaluated(employees_ok)
                    .with_value(CheckValue::Count(employees))
                    .with_threshold(employee_threshold),
            );
            if !employees_ok {
                verdict.block(format!(
                    "Too many employees for SEIS (must be {} or fewer)",
                    limits.max_employees
                ));
            }
        }
        None => {
            verdict.record(
                EMPLOYEE_COUNT,
                CriterionCheck::evaluated(true)
                    .with_threshold(employee_threshold)
                    .with_notes(format!("Employee count not provided; {MANUAL_VERIFICATION}")),
            );
            verdict.needs_verification();
        }
    }

    let amount_ok = round.amount_to_raise <= limits.max_investment;
    verdict.record(
        INVESTMENT_AMOUNT,
        CriterionCheck::evaluated(amount_ok)
            .with_value(CheckValue::Amount(round.amount_to_raise))
            .with_threshold(CheckValue::Amount(limits.max_investment)),
    );
    if !amount_ok {
        verdict.block(format!(
            "Investment amount exceeds {} SEIS limit",
            format_gbp(limits.max_investment)
        ));
    }

    let previous_rounds = company.previous_seis_rounds.unwrap_or(0);
    let first_seis = previous_rounds == 0;
    verdict.record(
        PREVIOUS_SEIS,
        CriterionCheck::evaluated(first_seis)
            .with_value(CheckValue::Count(previous_rounds))
            .with_threshold(CheckValue::Count(0)),
    );
    if !first_seis {
        verdict.block("Company has already received SEIS funding");
    }

    let in_group = company.part_of_group();
    verdict.record(
        GROUP_STRUCTURE,
        CriterionCheck::evaluated(!in_group).with_value(CheckValue::Flag(in_group)),
    );
    if in_group {
        verdict.block("SEIS companies cannot have subsidiaries or be subsidiaries");
    }

    verdict.record(TRADING_ACTIVITY, trading_activity_check(company));
    verdict.needs_verification();

    verdict.finish()
}

/// Qualifying-trade review is never automated.
pub(crate) fn trading_activity_check(company: &CompanyFacts) -> CriterionCheck {
    let check = CriterionCheck::evaluated(true).with_notes(format!(
        "Qualifying trade must be confirmed against HMRC excluded activities; {MANUAL_VERIFICATION}"
    ));
    match company.trading_activity.as_deref().map(str::trim) {
        Some(activity) if !activity.is_empty() => {
            check.with_value(CheckValue::Text(activity.to_string()))
        }
        _ => check,
    }
}
