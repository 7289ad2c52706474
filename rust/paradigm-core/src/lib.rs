//! # paradigm-core
//!
//! Verbal agreement morphology under Paradigmatic Generalisation (Trommer
//! 2010).
//!
//! A language is described by a list of vocabulary items, each pairing a form
//! with the features it requires, and an ordered list of generalisation rules
//! that delete features from those items whenever the paradigm cell being
//! realised satisfies the rule's context. Realising a cell means:
//!
//! ```text
//! copy the lexicon → apply every rule whose context the cell satisfies
//!                  → insert every item whose remaining features the cell satisfies
//! ```
//!
//! Doing this for every person/number (× person/number) combination yields
//! the paradigm.
//!
//! ## Example
//!
//! ```
//! use paradigm_core::{realise_cell, parse_features, Alignment, LanguageProfile};
//!
//! let karuk = LanguageProfile::builder("Karuk")
//!     .transitive(true)
//!     .morpheme("-ap", "[[Acc +2 +pl]]")
//!     .rule("[+pl]", "[[Nom +3] [Acc +2]]")
//!     .build()
//!     .unwrap();
//!
//! // `-ap` marks plural addressee objects, but a third person subject
//! // extends it to singular ones.
//! let cell = parse_features("3s>2s", Alignment::Accusative).unwrap();
//! let realised = realise_cell(&karuk, &cell);
//! assert_eq!(realised.len(), 1);
//! assert_eq!(realised[0].form(), "-ap");
//! ```

#![warn(missing_debug_implementations)]

/// Person/number bundles and the token parser.
pub mod bundle;
/// Error types.
pub mod error;
/// Atomic features.
pub mod feature;
/// Built-in language profiles.
pub mod languages;
/// Paradigm enumeration and assembly.
pub mod paradigm;
/// Language profiles and their builder.
pub mod profile;
/// The cell realisation engine.
pub mod realise;
/// Generalisation rules.
pub mod rule;
/// Disjunctive feature structures and cell parsing.
pub mod structure;
/// Subsumption.
pub mod subsume;
/// Plain text tables.
pub mod table;
/// Derivation observers.
pub mod trace;
/// Vocabulary items.
pub mod vocabulary;

pub use bundle::Bundle;
pub use error::{ParadigmError, ParadigmResult};
pub use feature::{Attribute, Case, Feature, Sign};
pub use paradigm::{Argument, Cell, Paradigm, draw_paradigm};
pub use profile::{ConfigurationWarning, LanguageProfile};
pub use realise::{RealisationObserver, derivation, realise_cell, realise_cell_with};
pub use rule::GeneralisationRule;
pub use structure::{Alignment, FeatureStructure, parse_features};
pub use subsume::subsumes;
pub use trace::{LogObserver, Transcript};
pub use vocabulary::VocabularyItem;
