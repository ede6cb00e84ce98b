//! Contextual pattern extraction.
//!
//! A ranked table of regex templates captures explicit restriction phrasing.
//! Each template carries its own confidence and kind, and captures the span
//! adjacent to its trigger up to the next sentence boundary. The span is split
//! into fragments on commas and conjunctions; a fragment that exactly matches a
//! lexicon term (after cleanup) emits that canonical item.

use anyhow::{Context, Result};
use regex::Regex;

use crate::lexicon;
use crate::models::{Restriction, RestrictionKind, RestrictionSource};

pub(crate) struct ContextRule {
    pattern: Regex,
    confidence: f32,
    kind: RestrictionKind,
}

/// Ordered most to least certain.
const RULE_TABLE: &[(&str, f32, RestrictionKind)] = &[
    // Explicit allergy declarations.
    (
        r"i(?:'m| am) allergic to ([^.!?;]+)",
        1.0,
        RestrictionKind::Cannot,
    ),
    (
        r"i (?:have|got)(?: an?)? ([^.!?;]+?) allerg(?:y|ies)",
        1.0,
        RestrictionKind::Cannot,
    ),
    // Diagnostic framing.
    (
        r"(?:diagnosed with|doctor said) ([^.!?;]+)",
        1.0,
        RestrictionKind::Cannot,
    ),
    // Direct incapability.
    (
        r"i can(?:'t|not) eat ([^.!?;]+)",
        0.8,
        RestrictionKind::Cannot,
    ),
    // Adverse reaction framing; the item precedes the first trigger.
    (
        r"([^.!?;,]+?) makes me sick",
        0.8,
        RestrictionKind::Cannot,
    ),
    (
        r"get sick from ([^.!?;]+)",
        0.8,
        RestrictionKind::Cannot,
    ),
    // Simple avoidance.
    (
        r"i do(?:n't| not) eat ([^.!?;]+)",
        0.6,
        RestrictionKind::WillNot,
    ),
    (r"i avoid ([^.!?;]+)", 0.6, RestrictionKind::WillNot),
    (
        r"stay away from ([^.!?;]+)",
        0.6,
        RestrictionKind::WillNot,
    ),
    // Weak preference.
    (
        r"i prefer not to eat ([^.!?;]+)",
        0.4,
        RestrictionKind::WillNot,
    ),
];

pub(crate) fn compile_rules() -> Result<Vec<ContextRule>> {
    RULE_TABLE
        .iter()
        .map(|(pattern, confidence, kind)| {
            let pattern = Regex::new(pattern)
                .with_context(|| format!("Failed to compile context pattern '{pattern}'"))?;
            Ok(ContextRule {
                pattern,
                confidence: *confidence,
                kind: *kind,
            })
        })
        .collect()
}

/// Run every template over the lowercased input and emit canonical items for
/// fragments the lexicon recognizes.
pub(crate) fn apply(rules: &[ContextRule], input: &str) -> Vec<Restriction> {
    let mut restrictions = Vec::new();
    for rule in rules {
        for captures in rule.pattern.captures_iter(input) {
            let Some(span) = captures.get(1) else {
                continue;
            };
            for fragment in split_fragments(span.as_str()) {
                if let Some(item) = lexicon::match_fragment(&fragment) {
                    restrictions.push(Restriction::new(
                        item,
                        rule.kind,
                        rule.confidence,
                        RestrictionSource::User,
                    ));
                }
            }
        }
    }
    restrictions
}

/// Split a captured span on commas and conjunctions, then clean each piece.
fn split_fragments(span: &str) -> Vec<String> {
    span.split(',')
        .flat_map(|chunk| chunk.split(" and "))
        .flat_map(|chunk| chunk.split(" or "))
        .flat_map(|chunk| chunk.split(" & "))
        .map(clean_fragment)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Trim punctuation and strip leading negation/article tokens.
fn clean_fragment(fragment: &str) -> String {
    let mut rest = fragment
        .trim()
        .trim_matches(|c: char| ".,!?;:'\"".contains(c))
        .trim();
    loop {
        let mut stripped = rest;
        for prefix in ["no ", "any ", "the ", "an ", "a "] {
            if let Some(tail) = stripped.strip_prefix(prefix) {
                stripped = tail.trim_start();
            }
        }
        if stripped == rest {
            break;
        }
        rest = stripped;
    }
    rest.to_string()
}
