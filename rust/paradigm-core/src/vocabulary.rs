//! Vocabulary items: phonological forms paired with the features they spell
//! out.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bundle::Bundle;
use crate::structure::FeatureStructure;

/// A Vocabulary Item (VI).
///
/// The `meaning` is the condition under which `form` may be inserted into a
/// paradigm cell. Generalisation rules shrink the meaning; they do so by
/// building a new item with [`VocabularyItem::without`], never by mutating a
/// stored one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabularyItem {
    form: String,
    meaning: FeatureStructure,
}

impl VocabularyItem {
    pub fn new(form: impl Into<String>, meaning: FeatureStructure) -> Self {
        Self {
            form: form.into(),
            meaning,
        }
    }

    /// The phonological form, e.g. `"-ap"` or `"ku-"`.
    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn meaning(&self) -> &FeatureStructure {
        &self.meaning
    }

    /// Return a copy of this item whose meaning lacks the `deleted` features
    /// in every bundle. The form is unchanged.
    pub fn without(&self, deleted: &Bundle) -> Self {
        Self {
            form: self.form.clone(),
            meaning: self.meaning.without(deleted),
        }
    }
}

impl fmt::Display for VocabularyItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/: {}", self.form, self.meaning)
    }
}
