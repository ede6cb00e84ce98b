//! Static matching tables for the extraction pipeline.
//!
//! The lexicon holds canonical English item keys plus the surface forms used to
//! recognize them: singular/alternate English spellings and the Spanish,
//! Chinese, and Japanese terms carried over from the display-translation table.
//! Synonyms only catch code-switched input; emitted items are always the
//! canonical key.

pub mod archetypes;
pub mod conditions;

pub use archetypes::{ArchetypeRule, ARCHETYPES};
pub use conditions::{ConditionRule, CONDITIONS};

/// One canonical item and the surface forms that map to it.
#[derive(Debug, Clone, Copy)]
pub struct LexiconEntry {
    pub item: &'static str,
    pub synonyms: &'static [&'static str],
}

pub const ENTRIES: &[LexiconEntry] = &[
    LexiconEntry {
        item: "peanuts",
        synonyms: &["peanut", "cacahuetes", "cacahuete", "花生", "ピーナッツ"],
    },
    LexiconEntry {
        item: "tree nuts",
        synonyms: &["tree nut", "frutos secos", "坚果", "ナッツ類"],
    },
    LexiconEntry {
        item: "shellfish",
        synonyms: &["mariscos", "marisco", "贝类", "貝類"],
    },
    LexiconEntry {
        item: "fish",
        synonyms: &["pescado", "鱼", "魚"],
    },
    LexiconEntry {
        item: "dairy",
        synonyms: &["lácteos", "lacteos", "乳制品", "乳製品"],
    },
    LexiconEntry {
        item: "eggs",
        synonyms: &["egg", "huevos", "huevo", "鸡蛋", "卵"],
    },
    LexiconEntry {
        item: "soy",
        synonyms: &["soja", "大豆"],
    },
    LexiconEntry {
        item: "wheat",
        synonyms: &["trigo", "小麦"],
    },
    LexiconEntry {
        item: "gluten",
        synonyms: &["麸质", "グルテン"],
    },
    LexiconEntry {
        item: "sesame",
        synonyms: &["sésamo", "sesamo", "芝麻", "ごま"],
    },
    LexiconEntry {
        item: "red meat",
        synonyms: &["carne roja", "红肉", "赤身肉"],
    },
    LexiconEntry {
        item: "pork",
        synonyms: &["cerdo", "猪肉", "豚肉"],
    },
    LexiconEntry {
        item: "beef",
        synonyms: &["carne de res", "牛肉"],
    },
    LexiconEntry {
        item: "chicken",
        synonyms: &["pollo", "鸡肉", "鶏肉"],
    },
    LexiconEntry {
        // Spanish shares "mariscos" with shellfish; both items emit on that
        // surface form, matching the translation table this derives from.
        item: "seafood",
        synonyms: &["mariscos", "海鲜", "魚介類"],
    },
    LexiconEntry {
        item: "peppers",
        synonyms: &["pimientos", "pimiento", "辣椒", "ピーマン"],
    },
    LexiconEntry {
        item: "black pepper",
        synonyms: &["pimienta negra", "黑胡椒", "黒コショウ"],
    },
];

/// Items scoring high confidence on a bare mention.
pub const COMMON_ALLERGENS: &[&str] = &[
    "peanuts",
    "nuts",
    "shellfish",
    "fish",
    "eggs",
    "milk",
    "dairy",
    "soy",
    "wheat",
    "gluten",
    "seafood",
    "tree nuts",
];

pub fn is_common_allergen(item: &str) -> bool {
    COMMON_ALLERGENS.iter().any(|a| *a == item)
}

/// Canonical items whose term or any synonym occurs as a substring of the
/// lowercased input, in table order.
pub fn find_mentions(input: &str) -> Vec<&'static str> {
    ENTRIES
        .iter()
        .filter(|entry| {
            input.contains(entry.item) || entry.synonyms.iter().any(|s| input.contains(s))
        })
        .map(|entry| entry.item)
        .collect()
}

/// Exact lookup of a cleaned fragment against canonical terms and synonyms.
pub fn match_fragment(fragment: &str) -> Option<&'static str> {
    ENTRIES
        .iter()
        .find(|entry| entry.item == fragment || entry.synonyms.contains(&fragment))
        .map(|entry| entry.item)
}
