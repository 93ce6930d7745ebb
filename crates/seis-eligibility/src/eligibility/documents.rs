//! Advance-assurance document checklist.
//!
//! HMRC expects the same core pack for every advance-assurance request; the
//! scheme and company facts add the optional extras.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock::company_age_years;
use super::domain::{CompanyFacts, FundingRoundFacts, Scheme};
use super::evaluation::is_knowledge_intensive;

/// One entry in the advance-assurance document pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredDocument {
    pub key: String,
    pub name: String,
    pub detail: String,
}

impl RequiredDocument {
    fn new(key: &str, name: &str, detail: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            detail: detail.into(),
        }
    }
}

pub(crate) fn required_documents(
    company: &CompanyFacts,
    round: &FundingRoundFacts,
    scheme: Scheme,
    today: NaiveDate,
) -> Vec<RequiredDocument> {
    let mut documents = vec![
        RequiredDocument::new(
            "business_plan",
            "Business plan",
            "Current plan describing the trade, market and how the money raised will be spent",
        ),
        RequiredDocument::new(
            "financial_forecasts",
            "Financial forecasts",
            "Profit and loss and cash flow forecasts covering at least the next two years",
        ),
    ];

    let accounts_detail = if company_age_years(company.incorporation_date, today) < 1.0 {
        "No statutory accounts filed yet; provide management accounts to date"
    } else {
        "Most recent statutory accounts filed at Companies House"
    };
    documents.push(RequiredDocument::new(
        "latest_accounts",
        "Latest accounts",
        accounts_detail,
    ));

    documents.push(RequiredDocument::new(
        "articles_of_association",
        "Articles of association",
        "Current articles, plus any proposed amendments for the share issue",
    ));
    documents.push(RequiredDocument::new(
        "shareholder_register",
        "Shareholder register",
        "Register of members including share classes and rights",
    ));
    documents.push(RequiredDocument::new(
        "investment_documents",
        "Draft investment documents",
        "Subscription or shareholder agreement and any information memorandum for investors",
    ));

    if let Some(use_of_funds) = round.use_of_funds.as_deref().map(str::trim) {
        if !use_of_funds.is_empty() {
            documents.push(RequiredDocument::new(
                "use_of_funds",
                "Use of funds statement",
                format!("Breakdown supporting: {use_of_funds}"),
            ));
        }
    }

    if scheme.includes_eis() && is_knowledge_intensive(&company.sic_codes) {
        documents.push(RequiredDocument::new(
            "knowledge_intensive_evidence",
            "Knowledge-intensive evidence",
            "Evidence of R&D spend or innovation and skilled-employee conditions",
        ));
    }

    let raised_before = company.previous_seis_rounds.unwrap_or(0) > 0
        || company.previous_eis_rounds.unwrap_or(0) > 0;
    if round.first_time_applicant == Some(false) || raised_before {
        documents.push(RequiredDocument::new(
            "previous_investment",
            "Previous SEIS/EIS investment",
            "Dates, amounts and compliance statements for every earlier SEIS/EIS share issue",
        ));
    }

    if company.part_of_group() {
        let detail = if scheme.includes_seis() {
            "Group structure chart; SEIS is not available to groups, so show any restructuring planned"
        } else {
            "Group structure chart showing every subsidiary and ownership percentage"
        };
        documents.push(RequiredDocument::new(
            "group_structure",
            "Group structure chart",
            detail,
        ));
    }

    documents
}
