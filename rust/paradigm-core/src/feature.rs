//! Atomic morpho-syntactic features.
//!
//! A feature is either a case label (`Nom`, `Acc`, `Erg`, `Abs`) or a signed
//! value of one of the binary [`Attribute`]s (`+1`, `-pl`, `+intr`, ...).
//! Features are written the way they appear in the literature and in the
//! built-in language tables:
//!
//! ```
//! use paradigm_core::feature::{Attribute, Case, Feature, Sign};
//!
//! let feature: Feature = "-pl".parse().unwrap();
//! assert_eq!(feature, Feature::Signed(Attribute::Plural, Sign::Minus));
//! assert_eq!("Abs".parse::<Feature>().unwrap(), Feature::Case(Case::Absolutive));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParadigmError;

/// Grammatical case label carried by an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Nominative,
    Accusative,
    Ergative,
    Absolutive,
}

impl Case {
    /// Abbreviation used in feature notation.
    pub fn label(&self) -> &'static str {
        match self {
            Case::Nominative => "Nom",
            Case::Accusative => "Acc",
            Case::Ergative => "Erg",
            Case::Absolutive => "Abs",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A binary attribute of a feature bundle.
///
/// The declaration order is the order in which attributes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    /// Speaker
    Person1,
    /// Addressee (also set for 1st person inclusive)
    Person2,
    /// Other
    Person3,
    Singular,
    Plural,
    /// Marks the sole argument of an intransitive verb
    Intransitive,
}

impl Attribute {
    /// All attributes, in printing order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Person1,
        Attribute::Person2,
        Attribute::Person3,
        Attribute::Singular,
        Attribute::Plural,
        Attribute::Intransitive,
    ];

    /// Slot index in a fixed-shape bundle.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// Suffix used in feature notation (`+1`, `-sg`, ...).
    pub fn suffix(&self) -> &'static str {
        match self {
            Attribute::Person1 => "1",
            Attribute::Person2 => "2",
            Attribute::Person3 => "3",
            Attribute::Singular => "sg",
            Attribute::Plural => "pl",
            Attribute::Intransitive => "intr",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.suffix() == suffix)
    }
}

/// The value of a binary attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl From<bool> for Sign {
    fn from(value: bool) -> Self {
        if value { Sign::Plus } else { Sign::Minus }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

/// An atomic feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Feature {
    /// An unsigned case label
    Case(Case),
    /// A signed attribute value
    Signed(Attribute, Sign),
}

impl Feature {
    /// Shorthand for a positive attribute value.
    pub fn plus(attribute: Attribute) -> Self {
        Feature::Signed(attribute, Sign::Plus)
    }

    /// Shorthand for a negative attribute value.
    pub fn minus(attribute: Attribute) -> Self {
        Feature::Signed(attribute, Sign::Minus)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Case(case) => write!(f, "{case}"),
            Feature::Signed(attribute, sign) => write!(f, "{sign}{}", attribute.suffix()),
        }
    }
}

impl FromStr for Feature {
    type Err = ParadigmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ParadigmError::UnknownFeature {
            feature: s.to_string(),
        };
        let sign = match s.chars().next() {
            Some('+') => Sign::Plus,
            Some('-') => Sign::Minus,
            _ => {
                return match s {
                    "Nom" => Ok(Feature::Case(Case::Nominative)),
                    "Acc" => Ok(Feature::Case(Case::Accusative)),
                    "Erg" => Ok(Feature::Case(Case::Ergative)),
                    "Abs" => Ok(Feature::Case(Case::Absolutive)),
                    _ => Err(unknown()),
                };
            }
        };
        let attribute = Attribute::from_suffix(&s[1..]).ok_or_else(unknown)?;
        Ok(Feature::Signed(attribute, sign))
    }
}

impl TryFrom<String> for Feature {
    type Error = ParadigmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Feature> for String {
    fn from(feature: Feature) -> Self {
        feature.to_string()
    }
}
