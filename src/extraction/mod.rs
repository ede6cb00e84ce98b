//! Rule-based extraction of dietary restrictions from free text.
//!
//! Four strategies run unconditionally over the same lowercased input:
//! medical-condition inference, dietary-archetype expansion, direct lexicon
//! mentions, and contextual pattern templates. Their outputs are concatenated
//! and reconciled down to one restriction per item.

mod context;
mod mentions;

use std::collections::HashMap;

use anyhow::Result;

use crate::lexicon::{ARCHETYPES, CONDITIONS};
use crate::models::{Restriction, RestrictionKind, RestrictionSource};

use context::ContextRule;

pub struct Extractor {
    rules: Vec<ContextRule>,
}

impl Extractor {
    /// Compiles the contextual pattern table once.
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: context::compile_rules()?,
        })
    }

    /// Turns an utterance into zero or more restrictions, at most one per item.
    ///
    /// Pure and deterministic. Zero matches is a valid, common result and
    /// returns an empty vector, never an error.
    pub fn extract(&self, utterance: &str) -> Vec<Restriction> {
        let input = normalize(utterance);
        let mut candidates = Vec::new();

        for rule in CONDITIONS {
            if input.contains(rule.phrase) {
                for item in rule.implied {
                    candidates.push(Candidate::firm(Restriction::new(
                        *item,
                        RestrictionKind::Cannot,
                        1.0,
                        RestrictionSource::Inference,
                    )));
                }
            }
        }

        for rule in ARCHETYPES {
            if input.contains(rule.term) {
                for item in rule.implied {
                    candidates.push(Candidate::firm(Restriction::new(
                        *item,
                        RestrictionKind::Cannot,
                        0.9,
                        RestrictionSource::Inference,
                    )));
                }
            }
        }

        for restriction in mentions::scan(&input) {
            candidates.push(Candidate::fallback(restriction));
        }

        for restriction in context::apply(&self.rules, &input) {
            candidates.push(Candidate::firm(restriction));
        }

        let restrictions = reconcile(candidates);
        tracing::debug!(count = restrictions.len(), "extracted restrictions");
        restrictions
    }

    /// Human-readable rationale for a restriction's confidence band.
    pub fn confidence_explanation(restriction: &Restriction) -> &'static str {
        if restriction.confidence >= 0.9 {
            "High confidence - medical condition or explicit allergy mentioned"
        } else if restriction.confidence >= 0.7 {
            "Medium confidence - clear dietary restriction stated"
        } else if restriction.confidence >= 0.5 {
            "Lower confidence - preference or avoidance mentioned"
        } else {
            "Low confidence - indirect or unclear mention"
        }
    }
}

struct Candidate {
    restriction: Restriction,
    fallback: bool,
}

impl Candidate {
    fn firm(restriction: Restriction) -> Self {
        Self {
            restriction,
            fallback: false,
        }
    }

    /// A bare lexicon mention: kept only when nothing stronger claims the item.
    fn fallback(restriction: Restriction) -> Self {
        Self {
            restriction,
            fallback: true,
        }
    }
}

fn normalize(utterance: &str) -> String {
    utterance.to_lowercase().replace('\u{2019}', "'")
}

/// Collapse candidates to one restriction per item, preserving first-seen item
/// order. A fallback mention loses to any firm claim on the same item; among
/// claims of equal standing the highest confidence wins and ties keep the
/// first seen.
fn reconcile(candidates: Vec<Candidate>) -> Vec<Restriction> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, Candidate> = HashMap::new();
    for candidate in candidates {
        let key = candidate.restriction.item.clone();
        match best.get(&key) {
            None => {
                order.push(key.clone());
                best.insert(key, candidate);
            }
            Some(current) => {
                let wins = if current.fallback != candidate.fallback {
                    current.fallback
                } else {
                    candidate.restriction.confidence > current.restriction.confidence
                };
                if wins {
                    best.insert(key, candidate);
                }
            }
        }
    }
    order
        .into_iter()
        .filter_map(|item| best.remove(&item))
        .map(|candidate| candidate.restriction)
        .collect()
}
