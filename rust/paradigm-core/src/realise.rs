//! Realisation of a single paradigm cell.
//!
//! ```text
//! morphemes ──copy──▶ working list ──rules gated on the cell──▶ shrunk list
//!                                                                 │
//!                                   insertable items ◀──subsumes──┘
//! ```
//!
//! Each call builds its own working list, so the profile is never modified
//! and cells can be realised in any order with the same result.

use crate::error::ParadigmResult;
use crate::profile::LanguageProfile;
use crate::rule::GeneralisationRule;
use crate::structure::{Alignment, FeatureStructure, parse_features};
use crate::subsume::subsumes;
use crate::vocabulary::VocabularyItem;

/// Callbacks invoked synchronously at each stage of
/// [`realise_cell_with`]. All methods default to doing nothing.
pub trait RealisationObserver {
    /// The cell about to be realised.
    fn cell(&mut self, _cell: &FeatureStructure) {}

    /// The working copy of the lexicon, before any rule.
    fn copied(&mut self, _items: &[VocabularyItem]) {}

    /// Rule number `index` was tested against the cell.
    fn rule(&mut self, _index: usize, _rule: &GeneralisationRule, _fired: bool) {}

    /// The working list after all rules.
    fn generalised(&mut self, _items: &[VocabularyItem]) {}

    /// The insertable items, in lexicon order.
    fn matched(&mut self, _items: &[VocabularyItem]) {}
}

/// Observer that ignores every stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl RealisationObserver for Silent {}

impl<O: RealisationObserver + ?Sized> RealisationObserver for &mut O {
    fn cell(&mut self, cell: &FeatureStructure) {
        (**self).cell(cell)
    }

    fn copied(&mut self, items: &[VocabularyItem]) {
        (**self).copied(items)
    }

    fn rule(&mut self, index: usize, rule: &GeneralisationRule, fired: bool) {
        (**self).rule(index, rule, fired)
    }

    fn generalised(&mut self, items: &[VocabularyItem]) {
        (**self).generalised(items)
    }

    fn matched(&mut self, items: &[VocabularyItem]) {
        (**self).matched(items)
    }
}

/// Both observers see every stage, the left one first.
impl<A: RealisationObserver, B: RealisationObserver> RealisationObserver for (A, B) {
    fn cell(&mut self, cell: &FeatureStructure) {
        self.0.cell(cell);
        self.1.cell(cell);
    }

    fn copied(&mut self, items: &[VocabularyItem]) {
        self.0.copied(items);
        self.1.copied(items);
    }

    fn rule(&mut self, index: usize, rule: &GeneralisationRule, fired: bool) {
        self.0.rule(index, rule, fired);
        self.1.rule(index, rule, fired);
    }

    fn generalised(&mut self, items: &[VocabularyItem]) {
        self.0.generalised(items);
        self.1.generalised(items);
    }

    fn matched(&mut self, items: &[VocabularyItem]) {
        self.0.matched(items);
        self.1.matched(items);
    }
}

/// The vocabulary items inserted into `cell`, in lexicon order.
///
/// An empty result is a paradigm gap.
pub fn realise_cell(profile: &LanguageProfile, cell: &FeatureStructure) -> Vec<VocabularyItem> {
    realise_cell_with(profile, cell, &mut Silent)
}

/// [`realise_cell`] reporting every stage to `observer`.
///
/// 1. Copy the profile's morphemes.
/// 2. For each rule in order, if the cell satisfies its context, delete its
///    features from every item of the copy. Each rule is tested exactly once.
/// 3. Keep the items whose remaining meaning the cell satisfies.
pub fn realise_cell_with<O>(
    profile: &LanguageProfile,
    cell: &FeatureStructure,
    mut observer: O,
) -> Vec<VocabularyItem>
where
    O: RealisationObserver,
{
    observer.cell(cell);

    let mut items = profile.morphemes().to_vec();
    observer.copied(&items);

    for (index, rule) in profile.rules().iter().enumerate() {
        let fired = rule.applies_to(cell);
        if fired {
            tracing::trace!(%cell, %rule, "Rule fired");
            items = rule.apply(&items);
        }
        observer.rule(index, rule, fired);
    }
    observer.generalised(&items);

    let insertable: Vec<VocabularyItem> = items
        .into_iter()
        .filter(|item| subsumes(cell, item.meaning()))
        .collect();
    observer.matched(&insertable);

    tracing::trace!(
        %cell,
        forms = %spell_out(&insertable),
        "Realised cell"
    );
    insertable
}

/// Parse a compact cell string (`"1s>3s"`, `"1di"`) and realise it.
pub fn derivation<O>(
    profile: &LanguageProfile,
    input: &str,
    alignment: Alignment,
    observer: O,
) -> ParadigmResult<Vec<VocabularyItem>>
where
    O: RealisationObserver,
{
    let cell = parse_features(input, alignment)?;
    Ok(realise_cell_with(profile, &cell, observer))
}

/// Concatenate the forms of the inserted items.
pub fn spell_out(items: &[VocabularyItem]) -> String {
    items.iter().map(VocabularyItem::form).collect()
}
