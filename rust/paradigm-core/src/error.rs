//! Error types for feature parsing and profile assembly.

use thiserror::Error;

/// Errors raised while reading feature notation, cell strings or profile
/// definitions.
///
/// Every variant except [`ParadigmError::UnknownLanguage`] is an input format
/// failure: it is reported before any paradigm cell is computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParadigmError {
    /// A person/number token contained a character outside `1 2 3 i s d p`
    #[error("Invalid person/number token {token:?}: unexpected {found:?}")]
    InvalidToken { token: String, found: char },

    /// One side of a cell string was empty (e.g. `"1s>"`)
    #[error("Empty argument in cell {input:?}")]
    EmptyArgument { input: String },

    /// A cell string had more than one `>` delimiter
    #[error("Cell {input:?} has more than one '>' delimiter")]
    AmbiguousDelimiter { input: String },

    /// A feature literal was not one of the recognised case labels or signed
    /// features
    #[error("Unknown feature {feature:?}")]
    UnknownFeature { feature: String },

    /// A bundle listed the same attribute twice
    #[error("Bundle {bundle:?} repeats an attribute")]
    DuplicateAttribute { bundle: String },

    /// Bracketed feature notation could not be read
    #[error("Malformed feature structure {input:?}")]
    MalformedStructure { input: String },

    /// No built-in language is registered under the key
    #[error("Unknown language {key:?}")]
    UnknownLanguage { key: String },
}

/// Result type for paradigm operations
pub type ParadigmResult<T> = Result<T, ParadigmError>;
