// Blame attribution when no conflict-free schedule exists.

use crate::algorithm::combos::enumerate_combinations;
use crate::algorithm::conflict::schedule_has_conflicts;
use crate::models::{CandidateGroup, CourseRequest};

/// Identify which requested courses block scheduling. For each request, drop
/// its candidate group and re-run enumeration on the remainder; if at least
/// one conflict-free schedule then exists, the dropped course was necessary
/// to make the request set infeasible and is reported.
///
/// This is a "which course, if dropped, unblocks scheduling" heuristic, not a
/// minimal conflict set. Course identity is a match on BOTH Subj and Code: a
/// group is excluded exactly when its request equals the course under test.
///
/// Only meaningful when the full enumeration produced zero conflict-free
/// schedules; callers are expected to check that first.
pub fn find_conflicting_courses(
    requests: &[CourseRequest],
    groups: &[CandidateGroup],
) -> Vec<CourseRequest> {
    requests
        .iter()
        .filter(|request| {
            let remaining: Vec<CandidateGroup> = groups
                .iter()
                .filter(|g| g.request != **request)
                .cloned()
                .collect();
            enumerate_combinations(&remaining)
                .iter()
                .any(|combo| !schedule_has_conflicts(combo))
        })
        .cloned()
        .collect()
}
