// Time parsing and pairwise conflict detection between sections.

use crate::models::Section;

/// Location sentinel marking a section exempt from all conflict checks.
pub const ASYNC_LOCATION: &str = "ASYNC WEB";

/// Time sentinel for sections without a scheduled meeting time.
pub const TBA_TIME: &str = "TBA";

fn to_minutes(hhmm: &str) -> Option<i32> {
    let raw = hhmm.trim().parse::<i32>().ok()?;
    Some((raw / 100) * 60 + raw % 100)
}

/// Parse a `"HHMM-HHMM"` time string into (start, end) minutes since
/// midnight. Empty strings, the `"TBA"` sentinel and anything that does not
/// split on `-` into two parseable halves yield `None` ("no scheduled time").
/// Malformed data degrades to non-conflicting rather than erroring out.
pub fn parse_time(time: &str) -> Option<(i32, i32)> {
    if time.is_empty() || time == TBA_TIME {
        return None;
    }
    let parts: Vec<&str> = time.split('-').collect();
    if parts.len() != 2 {
        return None;
    }
    let start = to_minutes(parts[0])?;
    let end = to_minutes(parts[1])?;
    Some((start, end))
}

/// True if the two time ranges overlap. Intervals are half-open, so
/// back-to-back meetings (end1 == start2) do not overlap. A section with no
/// parseable time never overlaps anything.
pub fn times_overlap(time1: &str, time2: &str) -> bool {
    match (parse_time(time1), parse_time(time2)) {
        (Some((start1, end1)), Some((start2, end2))) => start1 < end2 && start2 < end1,
        _ => false,
    }
}

/// True if the two day strings share at least one day code. Day strings are
/// concatenated single-letter codes (`"MWF"`); the match is per-character and
/// case-sensitive.
pub fn days_overlap(day1: &str, day2: &str) -> bool {
    if day1.is_empty() || day2.is_empty() {
        return false;
    }
    day1.chars().any(|d| day2.contains(d))
}

/// True if the two sections meet at the same time on a shared day.
/// Asynchronous online sections never conflict with anything.
pub fn has_conflict(section1: &Section, section2: &Section) -> bool {
    if section1.location == ASYNC_LOCATION || section2.location == ASYNC_LOCATION {
        return false;
    }
    days_overlap(&section1.day, &section2.day) && times_overlap(&section1.time, &section2.time)
}

/// True if any unordered pair of sections in the schedule conflicts.
/// Schedules are small (at most two sections per requested course), so the
/// pairwise scan is fine.
pub fn schedule_has_conflicts(schedule: &[Section]) -> bool {
    for i in 0..schedule.len() {
        for j in (i + 1)..schedule.len() {
            if has_conflict(&schedule[i], &schedule[j]) {
                return true;
            }
        }
    }
    false
}
