// Enumeration of full schedules from per-course candidate groups.

use crate::models::{Candidate, CandidateGroup, Section};

/// Expand one candidate into its choice units: the primary paired with each
/// of its associated sections, or the primary alone when it has none. A
/// candidate with k > 0 associated sections always contributes exactly k
/// units, never a "primary only" fallback.
fn choice_units(candidate: &Candidate) -> Vec<Vec<Section>> {
    if candidate.assoc_sections.is_empty() {
        vec![vec![candidate.section.clone()]]
    } else {
        candidate
            .assoc_sections
            .iter()
            .map(|assoc| vec![candidate.section.clone(), assoc.clone()])
            .collect()
    }
}

/// Produce every combination that takes exactly one primary section per
/// requested course, plus exactly one associated section whenever the chosen
/// primary carries any.
///
/// Implemented as a fold carrying the partial combinations built so far, so
/// depth is independent of the number of courses. An empty group list yields
/// the single empty combination; a group with zero candidates collapses the
/// whole product to no combinations at all (that course cannot be satisfied,
/// it is not skipped). Output order is the deterministic left-to-right
/// nesting of the input.
pub fn enumerate_combinations(groups: &[CandidateGroup]) -> Vec<Vec<Section>> {
    let mut combos: Vec<Vec<Section>> = vec![Vec::new()];
    for group in groups {
        let units: Vec<Vec<Section>> = group.candidates.iter().flat_map(choice_units).collect();
        let mut next = Vec::with_capacity(combos.len() * units.len());
        for partial in &combos {
            for unit in &units {
                let mut combo = partial.clone();
                combo.extend(unit.iter().cloned());
                next.push(combo);
            }
        }
        combos = next;
    }
    combos
}
