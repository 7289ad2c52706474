//! The subsumption test between a paradigm cell and a condition.
//!
//! A condition holds of a cell when each of its bundles is a subset of *some*
//! bundle of the cell. Bundles are not paired by position: `[[+3]]` holds of a
//! transitive cell whether the third person is the agent or the patient.

use crate::structure::FeatureStructure;

/// Whether `condition` is compatible with the fully specified `cell`.
///
/// An empty condition bundle is a subset of any cell bundle, and a condition
/// without bundles holds vacuously.
///
/// ```
/// use paradigm_core::structure::FeatureStructure;
/// use paradigm_core::subsume::subsumes;
///
/// let cell: FeatureStructure = "[[Nom +1 -pl] [Acc +3 -pl]]".parse().unwrap();
/// assert!(subsumes(&cell, &"[[+3] [+1]]".parse().unwrap()));
/// assert!(!subsumes(&cell, &"[[+1 +3]]".parse().unwrap()));
/// ```
pub fn subsumes(cell: &FeatureStructure, condition: &FeatureStructure) -> bool {
    condition
        .iter()
        .all(|wanted| cell.iter().any(|given| wanted.is_subset_of(given)))
}
