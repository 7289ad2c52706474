//! Built-in language profiles.
//!
//! The data sets reproduce the agreement systems discussed in Trommer (2010),
//! *Paradigmatic Generalization of Morphemes*. Kulung and Karuk come in two
//! versions each, so that a paradigm can be compared before and after (some
//! of) its generalisation rules.

use crate::error::{ParadigmError, ParadigmResult};
use crate::profile::{LanguageProfile, LanguageProfileBuilder};
use crate::structure::Alignment;

/// A built-in profile together with the alignment its paradigm is drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Lookup key, e.g. `"kulung-predicted"`.
    pub key: &'static str,
    pub title: &'static str,
    pub alignment: Alignment,
    pub profile: LanguageProfile,
}

/// Ainu (isolate; Japan).
pub fn ainu() -> ParadigmResult<LanguageProfile> {
    LanguageProfile::builder("Ainu")
        .transitive(true)
        .morpheme("en-", "[[Acc +1 -pl]]")
        .morpheme("un-", "[[Acc +1 +pl]]")
        .morpheme("eci-", "[[+2 +pl]]")
        .morpheme("e-", "[[+2 -pl] [+3]]")
        .morpheme("ku-", "[[Nom +1 -pl] [+3]]")
        .morpheme("ci-", "[[Nom +1 +pl] [Acc +3]]")
        .morpheme("-as", "[[Nom +1 +pl +intr]]")
        .rule("[+pl]", "[[Nom +1] [Acc +2 -pl]]")
        .rule("[+3]", "[[Nom -3 -pl +intr]]")
        .build()
}

/// Karuk (Hokan; USA), positive indicative.
pub fn karuk_positive() -> ParadigmResult<LanguageProfile> {
    LanguageProfile::builder("Karuk")
        .transitive(true)
        .morpheme("-ap", "[[Acc +2 +pl]]")
        .rule("[+pl]", "[[Nom +3] [Acc +2]]")
        .build()
}

/// Karuk negative: the positive rules plus two generalisations of `-ap`.
pub fn karuk_negative() -> ParadigmResult<LanguageProfile> {
    karuk_positive()?
        .to_builder()
        .rule("[Acc +2]", "[[Nom -1] [-3 +pl]]")
        .rule("[Acc +2]", "[[Nom +3]]")
        .build()
}

fn kulung_builder() -> LanguageProfileBuilder {
    LanguageProfile::builder("Kulung")
        .transitive(true)
        .dual(true)
        .inclusive(true)
        .morpheme("-o", "[[Abs +1 +sg]]")
        .morpheme("-na", "[[Erg +1 +sg] [Abs -1 +2 -pl]]")
        .morpheme("-n", "[[Abs -1 +2 +pl]]")
        .morpheme("-c", "[[Abs -3 -sg -pl]]")
        .morpheme("-i", "[[Abs -3 -sg]]")
        .morpheme("-u", "[[Erg -3 -sg] [Abs +3]]")
        .morpheme("-am", "[[Erg -3 +pl] [Abs +3]]")
        .morpheme("-ka", "[[Abs +1 -2 -sg]]")
}

/// Kulung (Tibeto-Burman; Nepal) without generalisation rules: the ranges
/// the vocabulary items predict on their own.
pub fn kulung_predicted() -> ParadigmResult<LanguageProfile> {
    kulung_builder().build()
}

/// Kulung with its generalisation rules: the attested ranges.
pub fn kulung() -> ParadigmResult<LanguageProfile> {
    kulung_builder()
        .rule("[Abs]", "[[Abs +1 +sg]]")
        .rule("[Abs]", "[[Abs +3]]")
        .rule("[-3]", "[[Erg +3] [Abs +3]]")
        .rule("[-3]", "[[Erg +sg] [Abs +3]]")
        .rule("[-pl]", "[[Erg +3] [Abs +3]]")
        .rule("[-pl]", "[[Erg +sg] [Abs +3]]")
        .build()
}

/// Limbu (Tibeto-Burman; Bhutan, India, Nepal).
pub fn limbu() -> ParadigmResult<LanguageProfile> {
    LanguageProfile::builder("Limbu")
        .transitive(true)
        .dual(true)
        .inclusive(true)
        .morpheme("a-", "[[Abs +1] [+2] [-sg]]")
        .rule("[Abs]", "[[Abs +3]]")
        .build()
}

/// Every built-in sample, in presentation order.
pub fn catalogue() -> ParadigmResult<Vec<Sample>> {
    Ok(vec![
        Sample {
            key: "ainu",
            title: "Verb agreement in Ainu (isolate; Japan)",
            alignment: Alignment::Accusative,
            profile: ainu()?,
        },
        Sample {
            key: "karuk",
            title: "Verb agreement in Karuk (Hokan; USA), positive indicative",
            alignment: Alignment::Accusative,
            profile: karuk_positive()?,
        },
        Sample {
            key: "karuk-negative",
            title: "Verb agreement in Karuk (Hokan; USA), negative",
            alignment: Alignment::Accusative,
            profile: karuk_negative()?,
        },
        Sample {
            key: "kulung-predicted",
            title: "Verb agreement in Kulung (Tibeto-Burman; Nepal), predicted ranges",
            alignment: Alignment::Ergative,
            profile: kulung_predicted()?,
        },
        Sample {
            key: "kulung",
            title: "Verb agreement in Kulung (Tibeto-Burman; Nepal), actual ranges",
            alignment: Alignment::Ergative,
            profile: kulung()?,
        },
        Sample {
            key: "limbu",
            title: "Verb agreement in Limbu (Tibeto-Burman; Bhutan, India, Nepal)",
            alignment: Alignment::Ergative,
            profile: limbu()?,
        },
    ])
}

/// Look up a sample by key.
pub fn find(key: &str) -> ParadigmResult<Sample> {
    catalogue()?
        .into_iter()
        .find(|sample| sample.key == key)
        .ok_or_else(|| ParadigmError::UnknownLanguage {
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ConfigurationWarning;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_builds_every_sample() {
        let keys: Vec<&str> = catalogue()
            .unwrap()
            .iter()
            .map(|sample| sample.key)
            .collect();
        assert_eq!(
            keys,
            vec!["ainu", "karuk", "karuk-negative", "kulung-predicted", "kulung", "limbu"]
        );
    }

    #[test]
    fn it_extends_karuk_without_touching_the_positive_profile() {
        let positive = karuk_positive().unwrap();
        let negative = karuk_negative().unwrap();
        assert_eq!(positive.rules().len(), 1);
        assert_eq!(negative.rules().len(), 3);
        assert_eq!(negative.rules()[0], positive.rules()[0]);
        assert_eq!(negative.morphemes(), positive.morphemes());
    }

    #[test]
    fn it_shares_the_kulung_lexicon_between_variants() {
        let predicted = kulung_predicted().unwrap();
        let actual = kulung().unwrap();
        assert!(predicted.rules().is_empty());
        assert_eq!(actual.rules().len(), 6);
        assert_eq!(predicted.morphemes(), actual.morphemes());
        assert_eq!(predicted.morphemes().len(), 8);
    }

    #[test]
    fn it_ships_profiles_without_configuration_warnings() {
        for sample in catalogue().unwrap() {
            let warnings: Vec<ConfigurationWarning> = sample.profile.lint();
            assert!(warnings.is_empty(), "{}: {warnings:?}", sample.key);
        }
    }

    #[test]
    fn it_rejects_unknown_keys() {
        assert_eq!(find("limbu").unwrap().profile.name(), "Limbu");
        assert_eq!(
            find("klingon"),
            Err(ParadigmError::UnknownLanguage {
                key: "klingon".into()
            })
        );
    }
}
