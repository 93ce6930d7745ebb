use chrono::NaiveDate;

use super::super::clock::company_age_years;
use super::super::domain::{
    format_gbp, CheckValue, CompanyFacts, CriterionCheck, EligibilityVerdict, FundingRoundFacts,
};
use super::limits::{is_knowledge_intensive, EisLimits};
use super::seis::trading_activity_check;
use super::verdict::{VerdictBuilder, MANUAL_VERIFICATION};

pub(crate) const COMPANY_AGE: &str = "company_age";
pub(crate) const GROSS_ASSETS_BEFORE: &str = "gross_assets_before";
pub(crate) const GROSS_ASSETS_AFTER: &str = "gross_assets_after";
pub(crate) const EMPLOYEE_COUNT: &str = "employee_count";
pub(crate) const INVESTMENT_LIMIT: &str = "investment_limit";
pub(crate) const TRADING_ACTIVITY: &str = "trading_activity";
pub(crate) const INDEPENDENCE: &str = "independence";

const GROSS_ASSETS_REASON: &str = "Gross assets exceed EIS limits";

/// Apply every EIS rule; none of them short-circuits the others.
pub(crate) fn check_eis(
    company: &CompanyFacts,
    round: &FundingRoundFacts,
    today: NaiveDate,
    limits: &EisLimits,
) -> EligibilityVerdict {
    let mut verdict = VerdictBuilder::new();
    let knowledge_intensive = is_knowledge_intensive(&company.sic_codes);
    let classification = if knowledge_intensive {
        "knowledge-intensive"
    } else {
        "standard"
    };

    let age = company_age_years(company.incorporation_date, today);
    let age_limit = limits.company_age_limit(knowledge_intensive);
    let age_ok = age < f64::from(age_limit);
    verdict.record(
        COMPANY_AGE,
        CriterionCheck::evaluated(age_ok)
            .with_value(CheckValue::Years(age))
            .with_threshold(CheckValue::Years(f64::from(age_limit)))
            .with_notes(format!("{classification} company limit")),
    );
    if !age_ok {
        let suffix = if knowledge_intensive {
            " for knowledge-intensive companies"
        } else {
            ""
        };
        verdict.block(format!(
            "Company is too old for EIS (must be less than {age_limit} years{suffix})"
        ));
    }

    match company.gross_assets {
        Some(assets) => {
            let before_ok = assets <= limits.max_gross_assets_before;
            verdict.record(
                GROSS_ASSETS_BEFORE,
                CriterionCheck::evaluated(before_ok)
                    .with_value(CheckValue::Amount(assets))
                    .with_threshold(CheckValue::Amount(limits.max_gross_assets_before)),
            );

            let after_ok = match assets.checked_add(round.amount_to_raise) {
                Some(after) => {
                    let after_ok = after <= limits.max_gross_assets_after;
                    verdict.record(
                        GROSS_ASSETS_AFTER,
                        CriterionCheck::evaluated(after_ok)
                            .with_value(CheckValue::Amount(after))
                            .with_threshold(CheckValue::Amount(limits.max_gross_assets_after))
                            .with_notes(format!(
                                "gross assets plus {} raised",
                                format_gbp(round.amount_to_raise)
                            )),
                    );
                    after_ok
                }
                None => {
                    verdict.record(
                        GROSS_ASSETS_AFTER,
                        CriterionCheck::evaluated(false)
                            .with_threshold(CheckValue::Amount(limits.max_gross_assets_after))
                            .with_notes(
                                "gross assets plus amount raised exceed the representable range",
                            ),
                    );
                    false
                }
            };

            if !before_ok || !after_ok {
                verdict.block(GROSS_ASSETS_REASON);
            }
        }
        None => {
            verdict.record(
                GROSS_ASSETS_BEFORE,
                CriterionCheck::evaluated(true)
                    .with_threshold(CheckValue::Amount(limits.max_gross_assets_before))
                    .with_notes(format!("Gross assets not provided; {MANUAL_VERIFICATION}")),
            );
            verdict.needs_verification();
        }
    }

    let employee_limit = limits.employee_limit(knowledge_intensive);
    match company.employees {
        Some(employees) => {
            let employees_ok = employees <= employee_limit;
            verdict.record(
                EMPLOYEE_COUNT,
                CriterionCheck::evaluated(employees_ok)
                    .with_value(CheckValue::Count(employees))
                    .with_threshold(CheckValue::Count(employee_limit))
                    .with_notes(format!("{classification} company limit")),
            );
            if !employees_ok {
                verdict.block(format!(
                    "Too many employees for EIS (must be {employee_limit} or fewer)"
                ));
            }
        }
        None => {
            verdict.record(
                EMPLOYEE_COUNT,
                CriterionCheck::evaluated(true)
                    .with_threshold(CheckValue::Count(employee_limit))
                    .with_notes(format!("Employee count not provided; {MANUAL_VERIFICATION}")),
            );
            verdict.needs_verification();
        }
    }

    let investment_limit = limits.investment_limit(knowledge_intensive);
    let amount_ok = round.amount_to_raise <= investment_limit;
    verdict.record(
        INVESTMENT_LIMIT,
        CriterionCheck::evaluated(amount_ok)
            .with_value(CheckValue::Amount(round.amount_to_raise))
            .with_threshold(CheckValue::Amount(investment_limit))
            .with_notes(format!("{classification} annual limit")),
    );
    if !amount_ok {
        verdict.block(format!(
            "Investment amount exceeds {} annual EIS limit",
            format_gbp(investment_limit)
        ));
    }

    verdict.record(TRADING_ACTIVITY, trading_activity_check(company));
    verdict.needs_verification();

    // Recorded for the audit trail only; it does not move the result.
    verdict.record(
        INDEPENDENCE,
        CriterionCheck::evaluated(true).with_notes(format!(
            "Company must not be controlled by another company; {MANUAL_VERIFICATION}"
        )),
    );

    verdict.finish()
}
