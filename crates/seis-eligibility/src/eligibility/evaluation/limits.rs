use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// SIC prefixes treated as knowledge-intensive for the EIS thresholds.
pub const KNOWLEDGE_INTENSIVE_SIC_PREFIXES: [&str; 7] = ["62", "63", "72", "71", "73", "74", "75"];

/// Statutory thresholds applied by both rule sets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EligibilityLimits {
    pub seis: SeisLimits,
    pub eis: EisLimits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeisLimits {
    pub max_company_age_years: u32,
    pub max_gross_assets: Decimal,
    pub max_employees: u32,
    pub max_investment: Decimal,
}

impl Default for SeisLimits {
    fn default() -> Self {
        Self {
            max_company_age_years: 2,
            max_gross_assets: dec!(200000),
            max_employees: 25,
            max_investment: dec!(150000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EisLimits {
    pub max_company_age_years: u32,
    pub knowledge_intensive_max_company_age_years: u32,
    pub max_gross_assets_before: Decimal,
    pub max_gross_assets_after: Decimal,
    pub max_employees: u32,
    pub knowledge_intensive_max_employees: u32,
    pub annual_investment_limit: Decimal,
    pub knowledge_intensive_annual_investment_limit: Decimal,
}

impl EisLimits {
    pub fn company_age_limit(&self, knowledge_intensive: bool) -> u32 {
        if knowledge_intensive {
            self.knowledge_intensive_max_company_age_years
        } else {
            self.max_company_age_years
        }
    }

    pub fn employee_limit(&self, knowledge_intensive: bool) -> u32 {
        if knowledge_intensive {
            self.knowledge_intensive_max_employees
        } else {
            self.max_employees
        }
    }

    pub fn investment_limit(&self, knowledge_intensive: bool) -> Decimal {
        if knowledge_intensive {
            self.knowledge_intensive_annual_investment_limit
        } else {
            self.annual_investment_limit
        }
    }
}

impl Default for EisLimits {
    fn default() -> Self {
        Self {
            max_company_age_years: 7,
            knowledge_intensive_max_company_age_years: 10,
            max_gross_assets_before: dec!(15000000),
            max_gross_assets_after: dec!(16000000),
            max_employees: 250,
            knowledge_intensive_max_employees: 500,
            annual_investment_limit: dec!(5000000),
            knowledge_intensive_annual_investment_limit: dec!(10000000),
        }
    }
}

/// Prefix match: "6201" is knowledge-intensive through "62".
pub fn is_knowledge_intensive<S: AsRef<str>>(sic_codes: &[S]) -> bool {
    sic_codes.iter().any(|code| {
        let code = code.as_ref().trim();
        KNOWLEDGE_INTENSIVE_SIC_PREFIXES
            .iter()
            .any(|prefix| code.starts_with(prefix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_sic_prefix() {
        assert!(is_knowledge_intensive(&["6201"]));
        assert!(is_knowledge_intensive(&["47110", "72190"]));
        assert!(!is_knowledge_intensive(&["61"]));
        assert!(!is_knowledge_intensive(&["6"]));
        assert!(!is_knowledge_intensive::<&str>(&[]));
    }

    #[test]
    fn knowledge_intensive_companies_get_higher_eis_thresholds() {
        let limits = EisLimits::default();
        assert_eq!(limits.company_age_limit(true), 10);
        assert_eq!(limits.company_age_limit(false), 7);
        assert_eq!(limits.employee_limit(true), 500);
        assert_eq!(limits.employee_limit(false), 250);
        assert_eq!(limits.investment_limit(true), dec!(10000000));
        assert_eq!(limits.investment_limit(false), dec!(5000000));
    }
}
