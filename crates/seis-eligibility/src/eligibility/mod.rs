//! SEIS/EIS eligibility evaluation.
//!
//! A checker takes plain company and round facts, applies the statutory
//! thresholds for the selected scheme and returns a verdict with one audit
//! entry per rule. Nothing here performs I/O; the current date comes from an
//! injected [`Clock`].

pub mod clock;
pub(crate) mod documents;
pub mod domain;
pub(crate) mod evaluation;
pub mod router;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use documents::RequiredDocument;
pub use domain::{
    format_gbp, CheckValue, CompanyFacts, CriterionCheck, EligibilityError, EligibilityResult,
    EligibilityVerdict, FundingRoundFacts, Scheme,
};
pub use evaluation::{
    is_knowledge_intensive, EisLimits, EligibilityChecker, EligibilityLimits, SeisLimits,
    KNOWLEDGE_INTENSIVE_SIC_PREFIXES,
};
pub use router::{eligibility_router, EligibilityRequest};
