use super::common::*;
use crate::eligibility::domain::{EligibilityError, EligibilityResult, Scheme};
use rust_decimal_macros::dec;

#[test]
fn both_scheme_matches_independent_evaluations() {
    let checker = checker();
    let mut too_big = seed_company();
    too_big.gross_assets = Some(dec!(300000));
    let mut too_old = growth_company();
    too_old.sic_codes.clear();
    let mut nothing_fits = too_old.clone();
    nothing_fits.gross_assets = Some(dec!(40000000));

    for company in [seed_company(), growth_company(), too_big, too_old, nothing_fits] {
        for amount in [100_000, 1_000_000, 12_000_000] {
            let seis = checker.check_seis_eligibility(&company, &round(Scheme::Seis, amount));
            let eis = checker.check_eis_eligibility(&company, &round(Scheme::Eis, amount));
            let both = checker
                .check_eligibility(&company, &round(Scheme::Both, amount))
                .expect("valid scheme");

            let expected = match (seis.result, eis.result) {
                (EligibilityResult::NotEligible, EligibilityResult::NotEligible) => {
                    EligibilityResult::NotEligible
                }
                (EligibilityResult::Eligible, EligibilityResult::Eligible) => {
                    EligibilityResult::Eligible
                }
                _ => EligibilityResult::PossiblyEligible,
            };
            assert_eq!(both.result, expected);

            let mut reasons = seis.reasons.clone();
            reasons.extend(eis.reasons.clone());
            assert_eq!(both.reasons, reasons);
            assert_eq!(
                both.checks_performed.len(),
                seis.checks_performed.len() + eis.checks_performed.len()
            );
        }
    }
}

#[test]
fn both_scheme_namespaces_checks() {
    let verdict = checker()
        .check_eligibility(&seed_company(), &round(Scheme::Both, 100_000))
        .expect("valid scheme");

    assert!(verdict.check("seis.company_age").is_some());
    assert!(verdict.check("eis.company_age").is_some());
    assert!(verdict.check("seis.group_structure").is_some());
    assert!(verdict.check("eis.independence").is_some());
    assert!(verdict.check("company_age").is_none());
}

#[test]
fn seis_failure_with_eis_pass_is_possibly_eligible() {
    let verdict = checker()
        .check_eligibility(&growth_company(), &round(Scheme::Both, 1_000_000))
        .expect("valid scheme");

    assert_eq!(verdict.result, EligibilityResult::PossiblyEligible);
    assert!(verdict
        .reasons
        .iter()
        .any(|reason| reason == "Company has already received SEIS funding"));
}

#[test]
fn both_failing_is_not_eligible_with_seis_reasons_first() {
    let mut company = growth_company();
    company.sic_codes.clear();

    let verdict = checker()
        .check_eligibility(&company, &round(Scheme::Both, 6_000_000))
        .expect("valid scheme");

    assert_eq!(verdict.result, EligibilityResult::NotEligible);
    assert_eq!(
        verdict.reasons.first().map(String::as_str),
        Some("Company is too old for SEIS (must be less than 2 years)")
    );
    assert_eq!(
        verdict.reasons.last().map(String::as_str),
        Some("Investment amount exceeds £5,000,000 annual EIS limit")
    );
}

#[test]
fn unknown_scheme_produces_no_verdict() {
    match checker().check_eligibility(&seed_company(), &raw_round("FOO", 100_000)) {
        Err(EligibilityError::InvalidScheme { scheme }) => assert_eq!(scheme, "FOO"),
        other => panic!("expected invalid scheme, got {other:?}"),
    }
}

#[test]
fn lowercase_scheme_codes_are_accepted() {
    let verdict = checker()
        .check_eligibility(&seed_company(), &raw_round("seis", 100_000))
        .expect("scheme parses");

    assert_eq!(verdict.result, EligibilityResult::PossiblyEligible);
}

#[test]
fn evaluation_is_deterministic_for_a_fixed_clock() {
    let checker = checker();
    let company = growth_company();
    let round = round(Scheme::Both, 2_500_000);

    let first = checker.check_eligibility(&company, &round).expect("valid");
    let second = checker.check_eligibility(&company, &round).expect("valid");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}
