use serde::{Deserialize, Serialize};

/// Whether a restriction is a hard prohibition or a soft preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RestrictionKind {
    /// Allergy, medical diagnosis, or religious/ethical prohibition.
    Cannot,
    /// Dislike or avoidance, not medically required.
    WillNot,
}

/// Provenance of a restriction entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionSource {
    /// Direct lexical mention in the person's own words.
    User,
    /// Derived from a medical-condition or dietary-archetype phrase.
    Inference,
    /// Manual edits and other non-conversational origins.
    System,
}

impl Default for RestrictionSource {
    fn default() -> Self {
        Self::System
    }
}

/// One food or ingredient the person cannot or will not eat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restriction {
    /// Canonical lowercase item key, e.g. "peanuts" or "red meat".
    pub item: String,
    #[serde(rename = "type")]
    pub kind: RestrictionKind,
    /// Extraction certainty in [0, 1]. Records missing the field compare as 0.
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub source: RestrictionSource,
}

impl Restriction {
    pub fn new(
        item: impl Into<String>,
        kind: RestrictionKind,
        confidence: f32,
        source: RestrictionSource,
    ) -> Self {
        let item: String = item.into();
        Self {
            item: item.trim().to_lowercase(),
            kind,
            confidence,
            source,
        }
    }
}
