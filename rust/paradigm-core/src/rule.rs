//! Generalisation rules.
//!
//! A rule `[+pl] → ∅ / [[Nom +3] [Acc +2]]` deletes `+pl` from the vocabulary
//! items whenever the paradigm cell being realised satisfies the context. The
//! deletion is triggered by the cell alone and reaches every item in the
//! working list, related to the context or not.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bundle::Bundle;
use crate::structure::FeatureStructure;
use crate::subsume::subsumes;
use crate::vocabulary::VocabularyItem;

/// A context-gated feature deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneralisationRule {
    #[serde(rename = "delete")]
    features: Bundle,
    context: FeatureStructure,
}

impl GeneralisationRule {
    pub fn new(features: Bundle, context: FeatureStructure) -> Self {
        Self { features, context }
    }

    /// Features removed when the rule fires.
    pub fn features(&self) -> &Bundle {
        &self.features
    }

    /// Condition on the paradigm cell.
    pub fn context(&self) -> &FeatureStructure {
        &self.context
    }

    /// Whether the rule fires for `cell`.
    pub fn applies_to(&self, cell: &FeatureStructure) -> bool {
        subsumes(cell, &self.context)
    }

    /// Delete the rule's features from every item, returning the new list.
    pub fn apply(&self, items: &[VocabularyItem]) -> Vec<VocabularyItem> {
        items.iter().map(|item| item.without(&self.features)).collect()
    }
}

impl fmt::Display for GeneralisationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \u{2192} \u{2205} / {}", self.features, self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{Alignment, parse_features};
    use pretty_assertions::assert_eq;

    fn rule(features: &str, context: &str) -> GeneralisationRule {
        GeneralisationRule::new(features.parse().unwrap(), context.parse().unwrap())
    }

    #[test]
    fn it_displays_as_a_deletion_rule() {
        assert_eq!(
            rule("[+pl]", "[[Nom +3] [Acc +2]]").to_string(),
            "[+pl] \u{2192} \u{2205} / [[Nom +3] [Acc +2]]"
        );
    }

    #[test]
    fn it_fires_on_matching_cells_only() {
        let karuk = rule("[+pl]", "[[Nom +3] [Acc +2]]");
        let third_on_second = parse_features("3s>2p", Alignment::Accusative).unwrap();
        let second_on_third = parse_features("2s>3p", Alignment::Accusative).unwrap();
        assert!(karuk.applies_to(&third_on_second));
        assert!(!karuk.applies_to(&second_on_third));
    }

    #[test]
    fn it_deletes_from_every_item() {
        let items = vec![
            VocabularyItem::new("a", "[[Acc +2 +pl]]".parse().unwrap()),
            VocabularyItem::new("b", "[[Nom +1 +pl] [+3]]".parse().unwrap()),
            VocabularyItem::new("c", "[[-pl]]".parse().unwrap()),
        ];
        let shrunk = rule("[+pl]", "[]").apply(&items);
        let meanings: Vec<String> = shrunk.iter().map(|vi| vi.meaning().to_string()).collect();
        assert_eq!(meanings, vec!["[[Acc +2]]", "[[Nom +1] [+3]]", "[[-pl]]"]);
    }

    #[test]
    fn it_deserializes_from_nested_lists() {
        let parsed: GeneralisationRule = serde_json::from_str(
            r#"{"delete": ["Acc", "+2"], "context": [["Nom", "-1"], ["-3", "+pl"]]}"#,
        )
        .unwrap();
        assert_eq!(parsed, rule("[Acc +2]", "[[Nom -1] [-3 +pl]]"));
    }
}
