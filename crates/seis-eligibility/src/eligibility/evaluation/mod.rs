mod eis;
mod limits;
mod seis;
mod verdict;

pub use limits::{
    is_knowledge_intensive, EisLimits, EligibilityLimits, SeisLimits,
    KNOWLEDGE_INTENSIVE_SIC_PREFIXES,
};

use chrono::NaiveDate;
use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use super::documents::{self, RequiredDocument};
use super::domain::{
    CompanyFacts, EligibilityError, EligibilityVerdict, FundingRoundFacts, Scheme,
};

/// Stateless evaluator applying the scheme thresholds to a company and round.
///
/// The only state is the clock used for company age and the limit tables, so
/// one checker can be shared across request handlers.
#[derive(Debug, Clone)]
pub struct EligibilityChecker<C = SystemClock> {
    clock: C,
    limits: EligibilityLimits,
}

impl EligibilityChecker<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for EligibilityChecker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> EligibilityChecker<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::with_limits(clock, EligibilityLimits::default())
    }

    pub fn with_limits(clock: C, limits: EligibilityLimits) -> Self {
        Self { clock, limits }
    }

    pub fn limits(&self) -> &EligibilityLimits {
        &self.limits
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Evaluate the round against the scheme it names.
    ///
    /// Fails only when the scheme code is not SEIS, EIS or BOTH; incomplete
    /// company facts degrade the verdict instead.
    pub fn check_eligibility(
        &self,
        company: &CompanyFacts,
        round: &FundingRoundFacts,
    ) -> Result<EligibilityVerdict, EligibilityError> {
        let scheme = round.scheme()?;
        let today = self.clock.today();

        let verdict = match scheme {
            Scheme::Seis => self.seis_at(company, round, today),
            Scheme::Eis => self.eis_at(company, round, today),
            Scheme::Both => {
                let seis = self.seis_at(company, round, today);
                let eis = self.eis_at(company, round, today);
                verdict::combine(seis, eis)
            }
        };

        info!(
            scheme = scheme.code(),
            result = verdict.result.label(),
            reasons = verdict.reasons.len(),
            "eligibility evaluated"
        );
        Ok(verdict)
    }

    pub fn check_seis_eligibility(
        &self,
        company: &CompanyFacts,
        round: &FundingRoundFacts,
    ) -> EligibilityVerdict {
        self.seis_at(company, round, self.clock.today())
    }

    pub fn check_eis_eligibility(
        &self,
        company: &CompanyFacts,
        round: &FundingRoundFacts,
    ) -> EligibilityVerdict {
        self.eis_at(company, round, self.clock.today())
    }

    /// Advance-assurance document checklist for the round's scheme.
    pub fn required_documents(
        &self,
        company: &CompanyFacts,
        round: &FundingRoundFacts,
    ) -> Result<Vec<RequiredDocument>, EligibilityError> {
        let scheme = round.scheme()?;
        Ok(documents::required_documents(
            company,
            round,
            scheme,
            self.clock.today(),
        ))
    }

    fn seis_at(
        &self,
        company: &CompanyFacts,
        round: &FundingRoundFacts,
        today: NaiveDate,
    ) -> EligibilityVerdict {
        let verdict = seis::check_seis(company, round, today, &self.limits.seis);
        debug!(
            result = verdict.result.label(),
            checks = verdict.checks_performed.len(),
            "seis rules applied"
        );
        verdict
    }

    fn eis_at(
        &self,
        company: &CompanyFacts,
        round: &FundingRoundFacts,
        today: NaiveDate,
    ) -> EligibilityVerdict {
        let verdict = eis::check_eis(company, round, today, &self.limits.eis);
        debug!(
            result = verdict.result.label(),
            checks = verdict.checks_performed.len(),
            "eis rules applied"
        );
        verdict
    }
}
