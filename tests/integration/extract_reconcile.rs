use std::collections::HashSet;

use anyhow::Result;
use dietbase::{Extractor, Restriction, RestrictionKind, RestrictionSource};

use crate::support;

#[test]
fn highest_confidence_claim_survives() -> Result<()> {
    let extractor = support::extractor()?;
    // Condition inference flags dairy at 1.0 while the avoidance template
    // flags it at 0.6; only the stronger claim may appear.
    let restrictions = extractor.extract("I'm lactose intolerant and I don't eat dairy");

    let dairy: Vec<_> = restrictions.iter().filter(|r| r.item == "dairy").collect();
    assert_eq!(dairy.len(), 1);
    assert_eq!(dairy[0].confidence, 1.0);
    assert_eq!(dairy[0].kind, RestrictionKind::Cannot);
    Ok(())
}

#[test]
fn items_are_unique_within_one_call() -> Result<()> {
    let extractor = support::extractor()?;
    let restrictions =
        extractor.extract("I'm allergic to shellfish and seafood makes me sick. I avoid shellfish");

    let mut seen = HashSet::new();
    for restriction in &restrictions {
        assert!(
            seen.insert(restriction.item.clone()),
            "duplicate item {} in output",
            restriction.item
        );
    }
    Ok(())
}

#[test]
fn contextual_claim_outranks_bare_mention_on_the_same_item() -> Result<()> {
    let extractor = support::extractor()?;
    // A bare mention of a common allergen would score 0.8; the avoidance
    // template claims it explicitly and wins despite the lower score.
    let restrictions = extractor.extract("I don't eat shellfish");

    let shellfish = restrictions
        .iter()
        .find(|r| r.item == "shellfish")
        .expect("shellfish missing");
    assert_eq!(shellfish.confidence, 0.6);
    assert_eq!(shellfish.kind, RestrictionKind::WillNot);
    Ok(())
}

#[test]
fn bare_mention_stands_alone_when_nothing_stronger_claims_it() -> Result<()> {
    let extractor = support::extractor()?;
    let restrictions = extractor.extract("no peanuts please");

    assert_eq!(restrictions.len(), 1);
    assert_eq!(restrictions[0].item, "peanuts");
    assert_eq!(restrictions[0].confidence, 0.8);
    assert_eq!(restrictions[0].kind, RestrictionKind::WillNot);
    assert_eq!(restrictions[0].source, RestrictionSource::User);
    Ok(())
}

#[test]
fn confidence_explanations_follow_the_bands() {
    let cases = [
        (1.0, "High confidence"),
        (0.8, "Medium confidence"),
        (0.6, "Lower confidence"),
        (0.4, "Low confidence"),
    ];
    for (confidence, prefix) in cases {
        let restriction = Restriction::new(
            "peanuts",
            RestrictionKind::Cannot,
            confidence,
            RestrictionSource::User,
        );
        assert!(
            Extractor::confidence_explanation(&restriction).starts_with(prefix),
            "confidence {confidence} should map to '{prefix}'"
        );
    }
}
