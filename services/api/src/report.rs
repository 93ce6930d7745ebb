use crate::infra::{build_checker, load_request};
use chrono::NaiveDate;
use clap::Args;
use seis_eligibility::config::EvaluationConfig;
use seis_eligibility::eligibility::{EligibilityVerdict, RequiredDocument};
use seis_eligibility::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// JSON file holding `company` and `round` objects
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Evaluation date for company-age checks (defaults to ELIGIBILITY_TODAY, then today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the verdict as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DocumentsArgs {
    /// JSON file holding `company` and `round` objects
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Evaluation date used to judge whether accounts have been filed
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs { input, today, json } = args;

    let request = load_request(&input)?;
    let checker = build_checker(resolve_today(today)?);
    let verdict = checker.check_eligibility(&request.company, &request.round)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        for line in verdict_lines(&request.round.scheme, checker.today(), &verdict) {
            println!("{line}");
        }
    }

    Ok(())
}

pub(crate) fn run_documents(args: DocumentsArgs) -> Result<(), AppError> {
    let DocumentsArgs { input, today } = args;

    let request = load_request(&input)?;
    let checker = build_checker(resolve_today(today)?);
    let documents = checker.required_documents(&request.company, &request.round)?;

    for line in document_lines(&request.round.scheme, &documents) {
        println!("{line}");
    }

    Ok(())
}

fn resolve_today(today: Option<NaiveDate>) -> Result<Option<NaiveDate>, AppError> {
    match today {
        Some(date) => Ok(Some(date)),
        None => Ok(EvaluationConfig::from_env()?.today),
    }
}

pub(crate) fn verdict_lines(
    scheme: &str,
    today: NaiveDate,
    verdict: &EligibilityVerdict,
) -> Vec<String> {
    let mut lines = vec![
        format!("{} eligibility (evaluated {})", scheme.trim().to_ascii_uppercase(), today),
        format!("Result: {}", verdict.result.label()),
    ];

    lines.push(String::new());
    if verdict.reasons.is_empty() {
        lines.push("Blocking reasons: none".to_string());
    } else {
        lines.push("Blocking reasons".to_string());
        for reason in &verdict.reasons {
            lines.push(format!("- {reason}"));
        }
    }

    lines.push(String::new());
    lines.push("Checks performed".to_string());
    for (name, check) in &verdict.checks_performed {
        let status = if check.passed { "pass" } else { "FAIL" };
        let mut line = format!("- [{status}] {name}");
        if let Some(value) = &check.value {
            line.push_str(&format!(" | value {value}"));
        }
        if let Some(threshold) = &check.threshold {
            line.push_str(&format!(" | limit {threshold}"));
        }
        if let Some(notes) = &check.notes {
            line.push_str(&format!(" | {notes}"));
        }
        lines.push(line);
    }

    lines
}

fn document_lines(scheme: &str, documents: &[RequiredDocument]) -> Vec<String> {
    let mut lines = vec![format!(
        "Advance assurance documents ({})",
        scheme.trim().to_ascii_uppercase()
    )];
    for document in documents {
        lines.push(format!("- {}: {}", document.name, document.detail));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use seis_eligibility::eligibility::{
        CompanyFacts, EligibilityChecker, FixedClock, FundingRoundFacts,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date")
    }

    fn request() -> (CompanyFacts, FundingRoundFacts) {
        serde_json::from_value::<seis_eligibility::eligibility::EligibilityRequest>(
            serde_json::json!({
                "company": {
                    "incorporation_date": "2025-01-15",
                    "gross_assets": 12000,
                    "employees": 2
                },
                "round": { "scheme": "seis", "amount_to_raise": 175000 }
            }),
        )
        .map(|request| (request.company, request.round))
        .expect("request parses")
    }

    #[test]
    fn report_lists_reasons_and_checks() {
        let (company, round) = request();
        let checker = EligibilityChecker::with_clock(FixedClock::new(today()));
        let verdict = checker
            .check_eligibility(&company, &round)
            .expect("valid scheme");

        let lines = verdict_lines(&round.scheme, today(), &verdict);

        assert_eq!(lines[0], "SEIS eligibility (evaluated 2025-06-30)");
        assert_eq!(lines[1], "Result: not_eligible");
        assert!(lines
            .iter()
            .any(|line| line == "- Investment amount exceeds £150,000 SEIS limit"));
        assert!(lines.iter().any(|line| {
            line.starts_with("- [FAIL] investment_amount")
                && line.contains("value £175,000")
                && line.contains("limit £150,000")
        }));
        assert!(lines
            .iter()
            .any(|line| line.starts_with("- [pass] trading_activity")));
        assert!(lines.iter().all(|line| !line.contains('\n')));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Blocking reasons");
        assert!(lines.iter().any(|line| line == "Checks performed"));
    }

    #[test]
    fn document_listing_names_every_entry() {
        let (company, round) = request();
        let checker = EligibilityChecker::with_clock(FixedClock::new(today()));
        let documents = checker
            .required_documents(&company, &round)
            .expect("valid scheme");

        let lines = document_lines(&round.scheme, &documents);

        assert_eq!(lines[0], "Advance assurance documents (SEIS)");
        assert_eq!(lines.len(), documents.len() + 1);
        assert!(lines.iter().any(|line| line.starts_with("- Business plan:")));
    }
}
