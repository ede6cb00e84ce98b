use crate::lexicon;
use crate::models::{Restriction, RestrictionKind, RestrictionSource};

/// Markers that flip the whole utterance to prohibitive.
const PROHIBITIVE_MARKERS: &[&str] = &["allerg", "can't eat", "cannot eat", "sick", "intoleran"];

/// Whole-utterance polarity. One marker anywhere types every bare mention in
/// the input; a compound sentence mixing a hard allergy with a soft preference
/// is not distinguished per item.
pub(crate) fn polarity(input: &str) -> RestrictionKind {
    if PROHIBITIVE_MARKERS.iter().any(|m| input.contains(m)) {
        RestrictionKind::Cannot
    } else {
        RestrictionKind::WillNot
    }
}

/// Emit one candidate per lexicon item mentioned anywhere in the input.
pub(crate) fn scan(input: &str) -> Vec<Restriction> {
    let kind = polarity(input);
    lexicon::find_mentions(input)
        .into_iter()
        .map(|item| {
            let confidence = if lexicon::is_common_allergen(item) {
                0.8
            } else {
                0.6
            };
            Restriction::new(item, kind, confidence, RestrictionSource::User)
        })
        .collect()
}
