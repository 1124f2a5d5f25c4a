// Schedule generation pipeline: group candidates, enumerate combinations,
// filter conflicts, attribute blame when nothing survives.

pub mod combos;
pub mod conflict;
pub mod diagnostics;
pub mod extract;

pub use combos::enumerate_combinations;
pub use conflict::{has_conflict, schedule_has_conflicts};
pub use diagnostics::find_conflicting_courses;
pub use extract::build_candidate_groups;

use crate::models::{CourseRequest, Section};

/// Result of a schedule-generation run. An infeasible request set is a
/// distinguished outcome carrying diagnostics, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    Feasible(Vec<Vec<Section>>),
    Infeasible(Vec<CourseRequest>),
}

/// Full pipeline over an already-fetched, CRN-ordered row set. With zero
/// requests this returns exactly one empty schedule (there is nothing to
/// conflict).
pub fn generate_schedules(requests: &[CourseRequest], sections: &[Section]) -> ScheduleOutcome {
    let groups = build_candidate_groups(requests, sections);

    let valid: Vec<Vec<Section>> = enumerate_combinations(&groups)
        .into_iter()
        .filter(|combo| !schedule_has_conflicts(combo))
        .collect();

    if valid.is_empty() {
        ScheduleOutcome::Infeasible(find_conflicting_courses(requests, &groups))
    } else {
        ScheduleOutcome::Feasible(valid)
    }
}
