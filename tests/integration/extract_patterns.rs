use anyhow::Result;
use dietbase::{RestrictionKind, RestrictionSource};

use crate::support;

#[test]
fn explicit_allergy_declaration_is_full_confidence() -> Result<()> {
    let extractor = support::extractor()?;
    let restrictions = extractor.extract("I'm allergic to peanuts");

    assert_eq!(restrictions.len(), 1);
    let peanuts = &restrictions[0];
    assert_eq!(peanuts.item, "peanuts");
    assert_eq!(peanuts.kind, RestrictionKind::Cannot);
    assert_eq!(peanuts.confidence, 1.0);
    assert_eq!(peanuts.source, RestrictionSource::User);
    Ok(())
}

#[test]
fn avoidance_without_medical_marker_is_soft() -> Result<()> {
    let extractor = support::extractor()?;
    let restrictions = extractor.extract("I don't eat shellfish");

    let shellfish = restrictions
        .iter()
        .find(|r| r.item == "shellfish")
        .expect("shellfish missing");
    assert_eq!(shellfish.kind, RestrictionKind::WillNot);
    assert_eq!(shellfish.confidence, 0.6);
    Ok(())
}

#[test]
fn incapability_phrasing_is_hard() -> Result<()> {
    let extractor = support::extractor()?;
    let restrictions = extractor.extract("I can't eat eggs");

    assert_eq!(restrictions.len(), 1);
    assert_eq!(restrictions[0].item, "eggs");
    assert_eq!(restrictions[0].kind, RestrictionKind::Cannot);
    assert_eq!(restrictions[0].confidence, 0.8);
    Ok(())
}

#[test]
fn adverse_reaction_framing_is_hard() -> Result<()> {
    let extractor = support::extractor()?;
    let restrictions = extractor.extract("dairy makes me sick");

    assert_eq!(restrictions.len(), 1);
    assert_eq!(restrictions[0].item, "dairy");
    assert_eq!(restrictions[0].kind, RestrictionKind::Cannot);
    assert_eq!(restrictions[0].confidence, 0.8);
    Ok(())
}

#[test]
fn weak_preference_scores_lowest() -> Result<()> {
    let extractor = support::extractor()?;
    let restrictions = extractor.extract("I prefer not to eat pork");

    assert_eq!(restrictions.len(), 1);
    assert_eq!(restrictions[0].item, "pork");
    assert_eq!(restrictions[0].kind, RestrictionKind::WillNot);
    assert_eq!(restrictions[0].confidence, 0.4);
    Ok(())
}

#[test]
fn mixed_hard_and_soft_clauses_type_independently() -> Result<()> {
    let extractor = support::extractor()?;
    let restrictions = extractor.extract("I am allergic to peanuts and I don't eat red meat");

    assert_eq!(restrictions.len(), 2);
    assert_eq!(restrictions[0].item, "peanuts");
    assert_eq!(restrictions[0].kind, RestrictionKind::Cannot);
    assert_eq!(restrictions[0].confidence, 1.0);
    assert_eq!(restrictions[1].item, "red meat");
    assert_eq!(restrictions[1].kind, RestrictionKind::WillNot);
    assert_eq!(restrictions[1].confidence, 0.6);
    Ok(())
}

#[test]
fn unrecognized_input_yields_nothing() -> Result<()> {
    let extractor = support::extractor()?;
    assert!(extractor.extract("I love tacos").is_empty());
    Ok(())
}

#[test]
fn extraction_is_deterministic() -> Result<()> {
    let extractor = support::extractor()?;
    let input = "I'm allergic to peanuts, shellfish and eggs. I avoid gluten";
    assert_eq!(extractor.extract(input), extractor.extract(input));
    Ok(())
}
