use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::restriction::Restriction;

/// A person's accumulated dietary state, keyed by an opaque caller-supplied id
/// (identity-provider user id, or a fixed sentinel for anonymous use).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: String,
    /// Unique by item (case-insensitive). Corrupt or missing stored data
    /// normalizes to an empty list, never an absent field.
    #[serde(default)]
    pub restrictions: Vec<Restriction>,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    /// Display-language tag for rendering only; never affects extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Profile {
    pub fn new(id: impl Into<String>, restrictions: Vec<Restriction>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            restrictions,
            created_at: now,
            last_modified: now,
            language: None,
        }
    }

    /// Case-insensitive membership test on the restriction list.
    pub fn contains_item(&self, item: &str) -> bool {
        self.restrictions
            .iter()
            .any(|r| r.item.eq_ignore_ascii_case(item))
    }
}

/// One public-profile access event. Append-only; repeated views are distinct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileView {
    pub viewed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_id: Option<String>,
}

impl ProfileView {
    pub fn new(language: Option<String>, viewer_id: Option<String>) -> Self {
        Self {
            viewed_at: Utc::now(),
            language,
            viewer_id,
        }
    }
}
