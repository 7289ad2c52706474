//! Language profiles: the lexicon, the rules and the typological switches of
//! one language.
//!
//! Profiles are plain values. They are assembled once, usually with
//! [`LanguageProfile::builder`], and only read afterwards:
//!
//! ```
//! use paradigm_core::profile::LanguageProfile;
//!
//! let karuk = LanguageProfile::builder("Karuk")
//!     .transitive(true)
//!     .morpheme("-ap", "[[Acc +2 +pl]]")
//!     .rule("[+pl]", "[[Nom +3] [Acc +2]]")
//!     .build()
//!     .unwrap();
//! assert_eq!(karuk.rules().len(), 1);
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bundle::Bundle;
use crate::error::{ParadigmError, ParadigmResult};
use crate::feature::Feature;
use crate::rule::GeneralisationRule;
use crate::structure::FeatureStructure;
use crate::vocabulary::VocabularyItem;

/// The data a paradigm is computed from.
///
/// Fields are read through accessors; a profile never changes once built.
///
/// ```compile_fail
/// use paradigm_core::profile::LanguageProfile;
///
/// let mut profile = LanguageProfile::builder("Karuk").build().unwrap();
/// profile.rules.clear();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    name: String,
    #[serde(default)]
    morphemes: Vec<VocabularyItem>,
    /// Applied in this order.
    #[serde(default)]
    rules: Vec<GeneralisationRule>,
    /// The language distinguishes dual number.
    #[serde(default)]
    dual: bool,
    /// The language distinguishes 1st person inclusive.
    #[serde(default)]
    inclusive: bool,
    /// The verb agrees with the object as well.
    #[serde(default)]
    transitive: bool,
}

impl LanguageProfile {
    pub fn builder(name: impl Into<String>) -> LanguageProfileBuilder {
        LanguageProfileBuilder {
            profile: LanguageProfile {
                name: name.into(),
                ..Default::default()
            },
            error: None,
        }
    }

    /// A builder seeded with a copy of this profile.
    pub fn to_builder(&self) -> LanguageProfileBuilder {
        LanguageProfileBuilder {
            profile: self.clone(),
            error: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the language distinguishes dual number.
    pub fn dual(&self) -> bool {
        self.dual
    }

    /// Whether the language distinguishes 1st person inclusive.
    pub fn inclusive(&self) -> bool {
        self.inclusive
    }

    /// Whether the verb agrees with the object as well.
    pub fn transitive(&self) -> bool {
        self.transitive
    }

    pub fn morphemes(&self) -> &[VocabularyItem] {
        &self.morphemes
    }

    pub fn rules(&self) -> &[GeneralisationRule] {
        &self.rules
    }

    /// A copy of this profile with additional rules appended.
    ///
    /// Used to contrast a paradigm before and after a set of generalisations.
    pub fn extended_with<I>(&self, rules: I) -> Self
    where
        I: IntoIterator<Item = GeneralisationRule>,
    {
        let mut profile = self.clone();
        profile.rules.extend(rules);
        profile
    }

    /// Report rules that cannot have any effect on this lexicon.
    ///
    /// Such profiles are legitimate (partial rule sets are used on purpose),
    /// so nothing here is an error.
    pub fn lint(&self) -> Vec<ConfigurationWarning> {
        let carried: HashSet<Feature> = self
            .morphemes
            .iter()
            .flat_map(|vi| vi.meaning().iter())
            .flat_map(|bundle| bundle.features().collect::<Vec<_>>())
            .collect();

        let mut warnings = Vec::new();
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.features().is_empty() {
                warnings.push(ConfigurationWarning::EmptyDeletion { rule: index });
                continue;
            }
            for feature in rule.features().features() {
                if !carried.contains(&feature) {
                    warnings.push(ConfigurationWarning::UnusedDeletion {
                        rule: index,
                        feature,
                    });
                }
            }
        }
        warnings
    }
}

/// A profile shape that is allowed but probably unintended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationWarning {
    /// Rule `rule` deletes a feature that no vocabulary item carries
    UnusedDeletion { rule: usize, feature: Feature },
    /// Rule `rule` deletes nothing
    EmptyDeletion { rule: usize },
}

impl fmt::Display for ConfigurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationWarning::UnusedDeletion { rule, feature } => write!(
                f,
                "rule {} deletes {feature}, which no vocabulary item carries",
                rule + 1
            ),
            ConfigurationWarning::EmptyDeletion { rule } => {
                write!(f, "rule {} deletes no features", rule + 1)
            }
        }
    }
}

/// Builder for [`LanguageProfile`].
///
/// The textual methods parse bracket notation; the first parse failure is
/// kept and returned by [`LanguageProfileBuilder::build`].
#[derive(Debug, Clone)]
pub struct LanguageProfileBuilder {
    profile: LanguageProfile,
    error: Option<ParadigmError>,
}

impl LanguageProfileBuilder {
    pub fn dual(mut self, dual: bool) -> Self {
        self.profile.dual = dual;
        self
    }

    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.profile.inclusive = inclusive;
        self
    }

    pub fn transitive(mut self, transitive: bool) -> Self {
        self.profile.transitive = transitive;
        self
    }

    /// Add a vocabulary item whose meaning is written like `[[Abs +1 +sg]]`.
    pub fn morpheme(mut self, form: &str, meaning: &str) -> Self {
        match meaning.parse::<FeatureStructure>() {
            Ok(meaning) => self.profile.morphemes.push(VocabularyItem::new(form, meaning)),
            Err(error) => self.fail(error),
        }
        self
    }

    /// Add a rule written as a bundle of deleted features (`[+pl]`) and a
    /// context (`[[Nom +3] [Acc +2]]`).
    pub fn rule(mut self, features: &str, context: &str) -> Self {
        let parsed = features
            .parse::<Bundle>()
            .and_then(|features| Ok((features, context.parse::<FeatureStructure>()?)));
        match parsed {
            Ok((features, context)) => self
                .profile
                .rules
                .push(GeneralisationRule::new(features, context)),
            Err(error) => self.fail(error),
        }
        self
    }

    pub fn push_morpheme(mut self, item: VocabularyItem) -> Self {
        self.profile.morphemes.push(item);
        self
    }

    pub fn push_rule(mut self, rule: GeneralisationRule) -> Self {
        self.profile.rules.push(rule);
        self
    }

    fn fail(&mut self, error: ParadigmError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Finish the profile, logging any [`ConfigurationWarning`]s.
    pub fn build(self) -> ParadigmResult<LanguageProfile> {
        if let Some(error) = self.error {
            return Err(error);
        }
        for warning in self.profile.lint() {
            tracing::warn!(language = %self.profile.name, "{warning}");
        }
        tracing::debug!(
            language = %self.profile.name,
            morphemes = self.profile.morphemes.len(),
            rules = self.profile.rules.len(),
            "Built language profile"
        );
        Ok(self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Attribute;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_builds_profiles_from_bracket_notation() {
        let profile = LanguageProfile::builder("Limbu")
            .transitive(true)
            .dual(true)
            .inclusive(true)
            .morpheme("a-", "[[Abs +1] [+2] [-sg]]")
            .rule("[Abs]", "[[Abs +3]]")
            .build()
            .unwrap();
        assert_eq!(profile.name(), "Limbu");
        assert!(profile.dual() && profile.inclusive() && profile.transitive());
        assert_eq!(profile.morphemes()[0].to_string(), "/a-/: [[Abs +1] [+2] [-sg]]");
        assert_eq!(profile.rules()[0].to_string(), "[Abs] \u{2192} \u{2205} / [[Abs +3]]");
    }

    #[test]
    fn it_reports_the_first_malformed_entry() {
        let result = LanguageProfile::builder("Broken")
            .morpheme("x-", "[[Nom +4]]")
            .rule("+pl", "[]")
            .build();
        assert_eq!(
            result,
            Err(ParadigmError::UnknownFeature {
                feature: "+4".into()
            })
        );
    }

    #[test]
    fn it_accepts_but_lints_rules_without_effect() {
        let profile = LanguageProfile::builder("Partial")
            .morpheme("-ap", "[[Acc +2 +pl]]")
            .rule("[+pl -sg]", "[[Nom +3]]")
            .rule("[]", "[]")
            .build()
            .unwrap();
        assert_eq!(
            profile.lint(),
            vec![
                ConfigurationWarning::UnusedDeletion {
                    rule: 0,
                    feature: Feature::minus(Attribute::Singular)
                },
                ConfigurationWarning::EmptyDeletion { rule: 1 },
            ]
        );
        assert_eq!(
            profile.lint()[0].to_string(),
            "rule 1 deletes -sg, which no vocabulary item carries"
        );
    }

    #[test]
    fn it_extends_a_copy_with_more_rules() {
        let positive = LanguageProfile::builder("Karuk")
            .morpheme("-ap", "[[Acc +2 +pl]]")
            .rule("[+pl]", "[[Nom +3] [Acc +2]]")
            .build()
            .unwrap();
        let extra = GeneralisationRule::new(
            "[Acc +2]".parse().unwrap(),
            "[[Nom +3]]".parse().unwrap(),
        );
        let negative = positive.extended_with([extra.clone()]);
        assert_eq!(positive.rules().len(), 1);
        assert_eq!(negative.rules().len(), 2);
        assert_eq!(negative.rules()[1], extra);
    }
}
