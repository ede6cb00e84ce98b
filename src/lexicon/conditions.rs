/// A medical-condition phrase and the items it rules out.
#[derive(Debug, Clone, Copy)]
pub struct ConditionRule {
    pub phrase: &'static str,
    pub implied: &'static [&'static str],
}

/// Diagnoses are unambiguous and always prohibitive, so every implied item is
/// emitted as a hard restriction at full confidence.
pub const CONDITIONS: &[ConditionRule] = &[
    ConditionRule {
        phrase: "celiac",
        implied: &["gluten", "wheat"],
    },
    ConditionRule {
        phrase: "coeliac",
        implied: &["gluten", "wheat"],
    },
    ConditionRule {
        phrase: "lactose intolerant",
        implied: &["dairy", "milk"],
    },
    ConditionRule {
        phrase: "dairy intolerant",
        implied: &["dairy", "milk"],
    },
    ConditionRule {
        phrase: "nut allergy",
        implied: &["peanuts", "tree nuts"],
    },
    ConditionRule {
        phrase: "shellfish allergy",
        implied: &["shellfish", "seafood"],
    },
];
