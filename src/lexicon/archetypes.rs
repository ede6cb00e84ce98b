/// A lifestyle or religious dietary term and the full item set it implies.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeRule {
    pub term: &'static str,
    pub implied: &'static [&'static str],
}

/// Archetypes are well-defined categories but the person may follow a
/// less-strict personal variant, so they score slightly below a diagnosis.
pub const ARCHETYPES: &[ArchetypeRule] = &[
    ArchetypeRule {
        term: "kosher",
        implied: &["pork", "shellfish"],
    },
    ArchetypeRule {
        term: "halal",
        implied: &["pork", "alcohol"],
    },
    ArchetypeRule {
        term: "vegetarian",
        implied: &["meat", "fish"],
    },
    ArchetypeRule {
        term: "vegan",
        implied: &["meat", "fish", "dairy", "eggs", "honey"],
    },
];
