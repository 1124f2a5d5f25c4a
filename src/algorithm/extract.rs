// Builds per-course candidate groups out of a flat, CRN-ordered row set.

use std::collections::HashMap;

use crate::models::{Candidate, CandidateGroup, CourseRequest, Section};

/// Group fetched sections by requested course and attach associated sections
/// to their primaries.
///
/// An associated section (lab, recitation, ...) is stored as a row whose
/// title starts with `+` and whose CRN immediately follows its primary's.
/// The scan walks `crn + 1, crn + 2, ...` through the fetched rows and stops
/// at the first CRN gap or non-`+` title.
///
/// Precondition: `sections` is the complete result set for the requests,
/// ordered by CRN ascending within each course (the db layer's `ORDER BY CRN`
/// guarantees this; it is what makes consecutive-CRN detection sound).
/// Asserted in debug builds.
pub fn build_candidate_groups(
    requests: &[CourseRequest],
    sections: &[Section],
) -> Vec<CandidateGroup> {
    debug_assert!(
        sections.windows(2).all(|w| {
            w[0].subj != w[1].subj || w[0].crse != w[1].crse || w[0].crn <= w[1].crn
        }),
        "sections must be CRN-ordered within each course"
    );

    let by_crn: HashMap<i64, &Section> = sections.iter().map(|s| (s.crn, s)).collect();

    requests
        .iter()
        .map(|request| {
            let candidates = sections
                .iter()
                .filter(|s| s.subj == request.subj && s.crse == request.code)
                .filter(|s| !s.is_associated())
                .map(|primary| {
                    let mut assoc_sections = Vec::new();
                    let mut crn = primary.crn;
                    while let Some(next) = by_crn.get(&(crn + 1)) {
                        if !next.is_associated() {
                            break;
                        }
                        assoc_sections.push((*next).clone());
                        crn += 1;
                    }
                    Candidate {
                        section: primary.clone(),
                        assoc_sections,
                    }
                })
                .collect();
            CandidateGroup {
                request: request.clone(),
                candidates,
            }
        })
        .collect()
}
