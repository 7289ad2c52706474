//! Feature bundles: the specification of a single argument or condition.
//!
//! A [`Bundle`] is a fixed-shape record with one optional case slot and one
//! optional [`Sign`] per [`Attribute`]. A fully specified bundle (one produced
//! by [`Bundle::person_number`]) fills the case slot and the five person and
//! number slots; vocabulary items and rule contexts typically fill only a few.
//!
//! Dual number has no slot of its own: a dual argument is `-sg -pl`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParadigmError, ParadigmResult};
use crate::feature::{Attribute, Case, Feature, Sign};

/// Characters allowed in a person/number token.
const TOKEN_ALPHABET: &[char] = &['1', '2', '3', 'i', 's', 'd', 'p'];

/// A set of features with pairwise distinct attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Feature>", into = "Vec<Feature>")]
pub struct Bundle {
    case: Option<Case>,
    signs: [Option<Sign>; Attribute::ALL.len()],
}

impl Bundle {
    /// The empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bundle from a list of features.
    ///
    /// Fails with [`ParadigmError::DuplicateAttribute`] if two features fill
    /// the same slot.
    pub fn from_features<I>(features: I) -> ParadigmResult<Self>
    where
        I: IntoIterator<Item = Feature>,
    {
        let features: Vec<Feature> = features.into_iter().collect();
        let mut bundle = Bundle::new();
        for feature in &features {
            if bundle.occupies(feature) {
                return Err(ParadigmError::DuplicateAttribute {
                    bundle: features
                        .iter()
                        .map(Feature::to_string)
                        .collect::<Vec<_>>()
                        .join(" "),
                });
            }
            bundle = bundle.with(*feature);
        }
        Ok(bundle)
    }

    /// Fully specified bundle for a person/number token such as `"1s"`,
    /// `"2p"`, `"1di"` or `"3d"`.
    ///
    /// The token is lower-cased and read character by character: `1`, `2` and
    /// `3` set the person slots (`i`, inclusive, also sets person 2), `s` and
    /// `p` set singular and plural. Absent characters yield `-`, so a dual
    /// token is `-sg -pl`. `+intr` is appended when `intransitive` is set.
    ///
    /// ```
    /// use paradigm_core::bundle::Bundle;
    /// use paradigm_core::feature::Case;
    ///
    /// let bundle = Bundle::person_number("1pi", Case::Nominative, false).unwrap();
    /// assert_eq!(bundle.to_string(), "[Nom +1 +2 -3 -sg +pl]");
    /// ```
    pub fn person_number(token: &str, case: Case, intransitive: bool) -> ParadigmResult<Self> {
        let token = token.to_lowercase();
        if let Some(found) = token.chars().find(|c| !TOKEN_ALPHABET.contains(c)) {
            return Err(ParadigmError::InvalidToken { token, found });
        }
        if token.is_empty() {
            return Err(ParadigmError::EmptyArgument { input: token });
        }

        let has = |c: char| Sign::from(token.contains(c));
        let mut bundle = Bundle::new()
            .with(Feature::Case(case))
            .with(Feature::Signed(Attribute::Person1, has('1')))
            .with(Feature::Signed(
                Attribute::Person2,
                Sign::from(token.contains('2') || token.contains('i')),
            ))
            .with(Feature::Signed(Attribute::Person3, has('3')))
            .with(Feature::Signed(Attribute::Singular, has('s')))
            .with(Feature::Signed(Attribute::Plural, has('p')));
        if intransitive {
            bundle = bundle.with(Feature::plus(Attribute::Intransitive));
        }
        Ok(bundle)
    }

    /// Return a copy with `feature` stored in its slot, replacing whatever the
    /// slot held before.
    pub fn with(mut self, feature: Feature) -> Self {
        match feature {
            Feature::Case(case) => self.case = Some(case),
            Feature::Signed(attribute, sign) => self.signs[attribute.index()] = Some(sign),
        }
        self
    }

    /// Case label, if specified.
    pub fn case(&self) -> Option<Case> {
        self.case
    }

    /// Sign of an attribute, if specified.
    pub fn sign(&self, attribute: Attribute) -> Option<Sign> {
        self.signs[attribute.index()]
    }

    /// Whether this exact feature (slot and value) is present.
    pub fn contains(&self, feature: &Feature) -> bool {
        match feature {
            Feature::Case(case) => self.case == Some(*case),
            Feature::Signed(attribute, sign) => self.sign(*attribute) == Some(*sign),
        }
    }

    fn occupies(&self, feature: &Feature) -> bool {
        match feature {
            Feature::Case(_) => self.case.is_some(),
            Feature::Signed(attribute, _) => self.sign(*attribute).is_some(),
        }
    }

    /// Features in printing order: case first, then attributes.
    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        let signed = Attribute::ALL.into_iter().filter_map(|attribute| {
            self.sign(attribute)
                .map(|sign| Feature::Signed(attribute, sign))
        });
        self.case.map(Feature::Case).into_iter().chain(signed)
    }

    /// Number of specified features.
    pub fn len(&self) -> usize {
        self.features().count()
    }

    /// Whether no slot is specified.
    pub fn is_empty(&self) -> bool {
        self.case.is_none() && self.signs.iter().all(Option::is_none)
    }

    /// Subset test: every feature of `self` is present, with the same value,
    /// in `other`.
    pub fn is_subset_of(&self, other: &Bundle) -> bool {
        self.features().all(|feature| other.contains(&feature))
    }

    /// Return a copy without the features listed in `deleted`.
    ///
    /// A slot is cleared only when it holds exactly the listed value: deleting
    /// `+pl` leaves `-pl` in place.
    pub fn without(&self, deleted: &Bundle) -> Self {
        let mut bundle = *self;
        for feature in deleted.features() {
            if bundle.contains(&feature) {
                match feature {
                    Feature::Case(_) => bundle.case = None,
                    Feature::Signed(attribute, _) => bundle.signs[attribute.index()] = None,
                }
            }
        }
        bundle
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, feature) in self.features().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{feature}")?;
        }
        write!(f, "]")
    }
}

/// Reads `[Nom +1 -pl]`.
impl FromStr for Bundle {
    type Err = ParadigmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .filter(|inner| !inner.contains(['[', ']']))
            .ok_or_else(|| ParadigmError::MalformedStructure {
                input: s.to_string(),
            })?;
        let features = inner
            .split_whitespace()
            .map(str::parse)
            .collect::<ParadigmResult<Vec<Feature>>>()?;
        Bundle::from_features(features)
    }
}

impl TryFrom<Vec<Feature>> for Bundle {
    type Error = ParadigmError;

    fn try_from(features: Vec<Feature>) -> Result<Self, Self::Error> {
        Bundle::from_features(features)
    }
}

impl From<Bundle> for Vec<Feature> {
    fn from(bundle: Bundle) -> Self {
        bundle.features().collect()
    }
}
