// Core record types shared by the db layer, the algorithm and the API.

use serde::{Deserialize, Serialize};

/// A single offered class meeting, one row of the `Classes` table.
///
/// Field semantics carried by sentinel values rather than separate columns:
/// - a `title` starting with `+` marks an associated section (e.g. a lab tied
///   to the lecture preceding it by CRN) rather than a standalone offering;
/// - a `time` of `""` or `"TBA"` means the section is unscheduled;
/// - a `location` of exactly `"ASYNC WEB"` exempts the section from all
///   conflict checks regardless of its time and day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "Subj")]
    pub subj: String,
    #[serde(rename = "Crse")]
    pub crse: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Creds")]
    pub creds: String,
    #[serde(rename = "CRN")]
    pub crn: i64,
    #[serde(rename = "Avail")]
    pub avail: String,
    #[serde(rename = "Max")]
    pub max: String,
    /// `"HHMM-HHMM"` in 24-hour clock, or `"TBA"`/empty for unscheduled.
    #[serde(rename = "Time")]
    pub time: String,
    /// Concatenated single-letter day codes, e.g. `"MWF"`.
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Instructor")]
    pub instructor: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl Section {
    /// True if this row is an associated section (lab, recitation, ...) that
    /// only exists bundled with the primary section preceding it by CRN.
    pub fn is_associated(&self) -> bool {
        self.title.starts_with('+')
    }
}

/// One desired course, as supplied by the caller of schedule generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRequest {
    #[serde(rename = "Subj")]
    pub subj: String,
    #[serde(rename = "Code")]
    pub code: String,
}

/// A primary section together with the associated sections bundled to it.
/// Choosing this candidate means taking the primary plus exactly one of the
/// associated sections (or the primary alone when there are none).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub section: Section,
    pub assoc_sections: Vec<Section>,
}

/// All candidates for one requested course. The request travels with the
/// group so callers never have to re-derive course identity from the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateGroup {
    pub request: CourseRequest,
    pub candidates: Vec<Candidate>,
}
