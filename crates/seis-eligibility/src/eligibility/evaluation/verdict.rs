use std::collections::BTreeMap;

use super::super::domain::{CriterionCheck, EligibilityResult, EligibilityVerdict, Scheme};

pub(crate) const MANUAL_VERIFICATION: &str = "manual verification required";

/// Accumulates checks while moving the result down the
/// eligible -> possibly_eligible -> not_eligible lattice.
pub(crate) struct VerdictBuilder {
    result: EligibilityResult,
    reasons: Vec<String>,
    checks: BTreeMap<String, CriterionCheck>,
}

impl VerdictBuilder {
    pub(crate) fn new() -> Self {
        Self {
            result: EligibilityResult::Eligible,
            reasons: Vec::new(),
            checks: BTreeMap::new(),
        }
    }

    pub(crate) fn record(&mut self, name: &str, check: CriterionCheck) {
        self.checks.insert(name.to_string(), check);
    }

    /// Hard failure. Sticky. Reasons are kept unique, so rules that fail
    /// several related checks (EIS gross assets before and after the round)
    /// report the shared reason once.
    pub(crate) fn block(&mut self, reason: impl Into<String>) {
        self.result = EligibilityResult::NotEligible;
        let reason = reason.into();
        if !self.reasons.contains(&reason) {
            self.reasons.push(reason);
        }
    }

    /// The check could not be verified from the supplied facts.
    pub(crate) fn needs_verification(&mut self) {
        if self.result == EligibilityResult::Eligible {
            self.result = EligibilityResult::PossiblyEligible;
        }
    }

    pub(crate) fn finish(self) -> EligibilityVerdict {
        EligibilityVerdict {
            result: self.result,
            reasons: self.reasons,
            checks_performed: self.checks,
        }
    }
}

/// Merge independent SEIS and EIS verdicts for a `BOTH` round.
pub(crate) fn combine(seis: EligibilityVerdict, eis: EligibilityVerdict) -> EligibilityVerdict {
    let result = match (seis.result, eis.result) {
        (EligibilityResult::NotEligible, EligibilityResult::NotEligible) => {
            EligibilityResult::NotEligible
        }
        (EligibilityResult::Eligible, EligibilityResult::Eligible) => EligibilityResult::Eligible,
        _ => EligibilityResult::PossiblyEligible,
    };

    let mut reasons = seis.reasons;
    reasons.extend(eis.reasons);

    let mut checks_performed = BTreeMap::new();
    checks_performed.extend(namespaced(Scheme::Seis, seis.checks_performed));
    checks_performed.extend(namespaced(Scheme::Eis, eis.checks_performed));

    EligibilityVerdict {
        result,
        reasons,
        checks_performed,
    }
}

fn namespaced(
    scheme: Scheme,
    checks: BTreeMap<String, CriterionCheck>,
) -> impl Iterator<Item = (String, CriterionCheck)> {
    let prefix = scheme.code().to_ascii_lowercase();
    checks
        .into_iter()
        .map(move |(name, check)| (format!("{prefix}.{name}"), check))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(result: EligibilityResult, reasons: &[&str]) -> EligibilityVerdict {
        let mut checks_performed = BTreeMap::new();
        checks_performed.insert("company_age".to_string(), CriterionCheck::evaluated(true));
        EligibilityVerdict {
            result,
            reasons: reasons.iter().map(|reason| reason.to_string()).collect(),
            checks_performed,
        }
    }

    #[test]
    fn blocking_failure_is_sticky() {
        let mut builder = VerdictBuilder::new();
        builder.block("too old");
        builder.needs_verification();
        builder.record("company_age", CriterionCheck::evaluated(false));

        assert_eq!(builder.finish().result, EligibilityResult::NotEligible);
    }

    #[test]
    fn verification_only_downgrades_eligible() {
        let mut builder = VerdictBuilder::new();
        builder.needs_verification();
        builder.needs_verification();

        let verdict = builder.finish();
        assert_eq!(verdict.result, EligibilityResult::PossiblyEligible);
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn repeated_reason_is_reported_once() {
        let mut builder = VerdictBuilder::new();
        builder.block("Gross assets exceed EIS limits");
        builder.block("Gross assets exceed EIS limits");

        assert_eq!(builder.finish().reasons.len(), 1);
    }

    #[test]
    fn combination_follows_both_scheme_table() {
        use EligibilityResult::*;

        let cases = [
            (NotEligible, NotEligible, NotEligible),
            (Eligible, Eligible, Eligible),
            (Eligible, PossiblyEligible, PossiblyEligible),
            (NotEligible, Eligible, PossiblyEligible),
            (PossiblyEligible, NotEligible, PossiblyEligible),
            (PossiblyEligible, PossiblyEligible, PossiblyEligible),
        ];

        for (seis, eis, expected) in cases {
            let combined = combine(verdict(seis, &[]), verdict(eis, &[]));
            assert_eq!(combined.result, expected, "seis {seis:?} + eis {eis:?}");
        }
    }

    #[test]
    fn combination_keeps_both_audit_trails() {
        let combined = combine(
            verdict(EligibilityResult::NotEligible, &["seis reason"]),
            verdict(EligibilityResult::NotEligible, &["eis reason"]),
        );

        assert_eq!(combined.reasons, vec!["seis reason", "eis reason"]);
        assert!(combined.checks_performed.contains_key("seis.company_age"));
        assert!(combined.checks_performed.contains_key("eis.company_age"));
        assert_eq!(combined.checks_performed.len(), 2);
    }
}
