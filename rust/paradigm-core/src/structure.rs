//! Disjunctive feature structures and the cell-string parser.
//!
//! A [`FeatureStructure`] is an ordered list of [`Bundle`]s. It plays two
//! roles:
//!
//! - a **paradigm cell**: one fully specified bundle per argument, produced by
//!   [`parse_features`] from strings like `"1s"` or `"1s>3p"`;
//! - a **condition**: the meaning of a vocabulary item or the context of a
//!   rule, where each bundle is independently matched against the cell (see
//!   [`crate::subsume`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bundle::Bundle;
use crate::error::{ParadigmError, ParadigmResult};
use crate::feature::Case;

/// An ordered sequence of feature bundles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureStructure(Vec<Bundle>);

impl FeatureStructure {
    pub fn new(bundles: Vec<Bundle>) -> Self {
        Self(bundles)
    }

    /// The structure with no bundles. As a condition it holds for every cell.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bundle> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return a copy with `deleted` removed from every bundle.
    pub fn without(&self, deleted: &Bundle) -> Self {
        Self(self.0.iter().map(|bundle| bundle.without(deleted)).collect())
    }
}

impl From<Vec<Bundle>> for FeatureStructure {
    fn from(bundles: Vec<Bundle>) -> Self {
        Self(bundles)
    }
}

impl<'a> IntoIterator for &'a FeatureStructure {
    type Item = &'a Bundle;
    type IntoIter = std::slice::Iter<'a, Bundle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FeatureStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, bundle) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{bundle}")?;
        }
        write!(f, "]")
    }
}

/// Reads the notation produced by `Display`: `[[Nom +1] [Acc +3]]`, or `[]`
/// for the empty structure.
impl FromStr for FeatureStructure {
    type Err = ParadigmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParadigmError::MalformedStructure {
            input: s.to_string(),
        };
        let mut rest = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(malformed)?
            .trim_start();

        let mut bundles = Vec::new();
        while !rest.is_empty() {
            if !rest.starts_with('[') {
                return Err(malformed());
            }
            let end = rest.find(']').ok_or_else(malformed)?;
            bundles.push(rest[..=end].parse::<Bundle>()?);
            rest = rest[end + 1..].trim_start();
        }
        Ok(Self(bundles))
    }
}

/// Case alignment used when building paradigm cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// `Nom` for intransitive subjects and agents, `Acc` for patients
    #[default]
    Accusative,
    /// `Abs` for intransitive subjects and patients, `Erg` for agents
    Ergative,
}

impl Alignment {
    /// Case of the sole argument of an intransitive verb.
    pub fn intransitive_subject(&self) -> Case {
        match self {
            Alignment::Accusative => Case::Nominative,
            Alignment::Ergative => Case::Absolutive,
        }
    }

    /// Case of the agent of a transitive verb.
    pub fn agent(&self) -> Case {
        match self {
            Alignment::Accusative => Case::Nominative,
            Alignment::Ergative => Case::Ergative,
        }
    }

    /// Case of the patient of a transitive verb.
    pub fn patient(&self) -> Case {
        match self {
            Alignment::Accusative => Case::Accusative,
            Alignment::Ergative => Case::Absolutive,
        }
    }

    pub fn is_ergative(&self) -> bool {
        matches!(self, Alignment::Ergative)
    }
}

impl From<bool> for Alignment {
    /// `true` selects ergative alignment.
    fn from(ergative: bool) -> Self {
        if ergative {
            Alignment::Ergative
        } else {
            Alignment::Accusative
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Accusative => write!(f, "nominative-accusative"),
            Alignment::Ergative => write!(f, "ergative-absolutive"),
        }
    }
}

/// Convert a cell string into a fully specified feature structure.
///
/// `"ARG"` is intransitive and yields one bundle marked `+intr`;
/// `"AGENT>PATIENT"` is transitive and yields two bundles. The empty string
/// yields the empty structure. A second `>` is rejected rather than folded
/// into the patient token.
///
/// ```
/// use paradigm_core::structure::{parse_features, Alignment};
///
/// let cell = parse_features("1s>3s", Alignment::Accusative).unwrap();
/// assert_eq!(cell.to_string(), "[[Nom +1 -2 -3 +sg -pl] [Acc -1 -2 +3 +sg -pl]]");
///
/// let cell = parse_features("1di", Alignment::Ergative).unwrap();
/// assert_eq!(cell.to_string(), "[[Abs +1 +2 -3 -sg -pl +intr]]");
/// ```
pub fn parse_features(input: &str, alignment: Alignment) -> ParadigmResult<FeatureStructure> {
    if input.is_empty() {
        return Ok(FeatureStructure::empty());
    }

    let argument = |token: &str, case: Case, intransitive: bool| {
        if token.is_empty() {
            return Err(ParadigmError::EmptyArgument {
                input: input.to_string(),
            });
        }
        Bundle::person_number(token, case, intransitive)
    };

    match input.split_once('>') {
        None => Ok(FeatureStructure(vec![argument(
            input,
            alignment.intransitive_subject(),
            true,
        )?])),
        Some((_, patient)) if patient.contains('>') => Err(ParadigmError::AmbiguousDelimiter {
            input: input.to_string(),
        }),
        Some((agent, patient)) => Ok(FeatureStructure(vec![
            argument(agent, alignment.agent(), false)?,
            argument(patient, alignment.patient(), false)?,
        ])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_parses_transitive_cells_with_accusative_alignment() {
        let cell = parse_features("1s>3s", Alignment::Accusative).unwrap();
        assert_eq!(
            cell,
            "[[Nom +1 -2 -3 +sg -pl] [Acc -1 -2 +3 +sg -pl]]"
                .parse::<FeatureStructure>()
                .unwrap()
        );
    }

    #[test]
    fn it_parses_transitive_cells_with_ergative_alignment() {
        let cell = parse_features("1s>3s", Alignment::from(true)).unwrap();
        assert_eq!(
            cell.to_string(),
            "[[Erg +1 -2 -3 +sg -pl] [Abs -1 -2 +3 +sg -pl]]"
        );
    }

    #[test]
    fn it_marks_intransitive_cells() {
        let cell = parse_features("1di", Alignment::Accusative).unwrap();
        assert_eq!(cell.to_string(), "[[Nom +1 +2 -3 -sg -pl +intr]]");
        let cell = parse_features("2P", Alignment::Ergative).unwrap();
        assert_eq!(cell.to_string(), "[[Abs -1 +2 -3 -sg +pl +intr]]");
    }

    #[test]
    fn it_parses_the_empty_string_as_the_empty_structure() {
        assert_eq!(
            parse_features("", Alignment::Accusative).unwrap(),
            FeatureStructure::empty()
        );
    }

    #[test]
    fn it_rejects_a_second_delimiter() {
        assert_eq!(
            parse_features("1s>2s>3s", Alignment::Accusative),
            Err(ParadigmError::AmbiguousDelimiter {
                input: "1s>2s>3s".into()
            })
        );
    }

    #[test]
    fn it_rejects_missing_arguments() {
        for input in ["1s>", ">3s", ">"] {
            assert_eq!(
                parse_features(input, Alignment::Accusative),
                Err(ParadigmError::EmptyArgument {
                    input: input.into()
                })
            );
        }
    }

    #[test]
    fn it_rejects_malformed_tokens() {
        assert!(matches!(
            parse_features("1s>4s", Alignment::Accusative),
            Err(ParadigmError::InvalidToken { found: '4', .. })
        ));
        assert!(matches!(
            parse_features("1s 3s", Alignment::Accusative),
            Err(ParadigmError::InvalidToken { found: ' ', .. })
        ));
    }

    #[test]
    fn it_reads_and_writes_bracket_notation() {
        let text = "[[Erg +1 +sg] [Abs -1 +2 -pl]]";
        let structure: FeatureStructure = text.parse().unwrap();
        assert_eq!(structure.len(), 2);
        assert_eq!(structure.to_string(), text);
        assert_eq!("[]".parse::<FeatureStructure>().unwrap(), FeatureStructure::empty());
        assert_eq!("[[]]".parse::<FeatureStructure>().unwrap().len(), 1);
        assert!("[[+1] +2]".parse::<FeatureStructure>().is_err());
        assert!("[+1]".parse::<FeatureStructure>().is_err());
    }
}
