//! Course-selection rule engine.
//!
//! Validates a student's full course selection before it is committed.
//! The rules are evaluated in a fixed order and short-circuit on the
//! first violation, producing a user-facing message specific to the
//! violated rule. No partial submission is ever attempted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{CourseCategory, CourseMode, Semester};
use crate::error::CoreError;

/// Minimum summed hours for online courses within one category.
pub const MIN_ONLINE_HOURS: i32 = 30;

/// Maximum summed hours for online courses within one category.
pub const MAX_ONLINE_HOURS: i32 = 45;

/// Maximum number of online courses within one category.
pub const MAX_ONLINE_COURSES_PER_CATEGORY: usize = 5;

/// Maximum number of offline courses within one category.
pub const MAX_OFFLINE_COURSES_PER_CATEGORY: usize = 1;

/// One selected course, annotated with its chosen mode and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionItem {
    pub course_id: String,
    pub mode: CourseMode,
    pub category: CourseCategory,
    /// Declared hours. Present for online courses, absent for offline.
    pub hours: Option<i32>,
}

/// Validate a course selection against the enrollment rules for the
/// given semester.
///
/// Rule order (short-circuiting on first failure):
/// 1. the selection must be non-empty;
/// 2. terminal semester: at least one OET course (any mode), and no
///    OEHM courses at all;
/// 3. other semesters: both categories must be represented, each
///    independently online or offline;
/// 4. offline courses: at most one per category;
/// 5. online courses: per-category summed hours within
///    [`MIN_ONLINE_HOURS`, `MAX_ONLINE_HOURS`] inclusive, at most
///    [`MAX_ONLINE_COURSES_PER_CATEGORY`] per category, and (outside
///    the terminal semester) no course id in both categories' online
///    selections.
pub fn validate_selection(semester: Semester, items: &[SelectionItem]) -> Result<(), CoreError> {
    if items.is_empty() {
        return Err(CoreError::Validation(
            "At least one course must be selected".to_string(),
        ));
    }

    let bucket = |mode: CourseMode, category: CourseCategory| -> Vec<&SelectionItem> {
        items
            .iter()
            .filter(|i| i.mode == mode && i.category == category)
            .collect()
    };

    let online_oet = bucket(CourseMode::Online, CourseCategory::Oet);
    let online_oehm = bucket(CourseMode::Online, CourseCategory::Oehm);
    let offline_oet = bucket(CourseMode::Offline, CourseCategory::Oet);
    let offline_oehm = bucket(CourseMode::Offline, CourseCategory::Oehm);

    if semester.is_terminal() {
        if online_oet.is_empty() && offline_oet.is_empty() {
            return Err(CoreError::Validation(
                "Semester VII requires at least one OET course (online or offline)".to_string(),
            ));
        }
        if !online_oehm.is_empty() || !offline_oehm.is_empty() {
            return Err(CoreError::Validation(
                "OEHM courses are not offered in semester VII".to_string(),
            ));
        }
    } else {
        let has_oet = !online_oet.is_empty() || !offline_oet.is_empty();
        let has_oehm = !online_oehm.is_empty() || !offline_oehm.is_empty();
        if !(has_oet && has_oehm) {
            return Err(CoreError::Validation(
                "Selection must include at least one OET and one OEHM course, \
                 each either online or offline"
                    .to_string(),
            ));
        }
    }

    if offline_oet.len() > MAX_OFFLINE_COURSES_PER_CATEGORY {
        return Err(CoreError::Validation(
            "At most one offline OET course may be selected".to_string(),
        ));
    }
    if offline_oehm.len() > MAX_OFFLINE_COURSES_PER_CATEGORY {
        return Err(CoreError::Validation(
            "At most one offline OEHM course may be selected".to_string(),
        ));
    }

    check_online_category(CourseCategory::Oet, &online_oet)?;
    check_online_category(CourseCategory::Oehm, &online_oehm)?;

    // The same online course may not satisfy both categories.
    if !semester.is_terminal() {
        let online_count = online_oet.len() + online_oehm.len();
        let unique_ids: HashSet<&str> = online_oet
            .iter()
            .chain(online_oehm.iter())
            .map(|i| i.course_id.as_str())
            .collect();
        if unique_ids.len() != online_count {
            return Err(CoreError::Validation(
                "A course selected in OET cannot be selected again in OEHM".to_string(),
            ));
        }
    }

    Ok(())
}

/// Hours-range and course-count checks for one category's online courses.
fn check_online_category(
    category: CourseCategory,
    selected: &[&SelectionItem],
) -> Result<(), CoreError> {
    if selected.is_empty() {
        return Ok(());
    }

    // Per-item hours are only bounded by i32, so sum in i64.
    let total_hours: i64 = selected
        .iter()
        .map(|i| i64::from(i.hours.unwrap_or(0)))
        .sum();
    if !(i64::from(MIN_ONLINE_HOURS)..=i64::from(MAX_ONLINE_HOURS)).contains(&total_hours) {
        return Err(CoreError::Validation(format!(
            "Total hours for online {} courses must be between {MIN_ONLINE_HOURS} \
             and {MAX_ONLINE_HOURS}",
            category.as_str()
        )));
    }

    if selected.len() > MAX_ONLINE_COURSES_PER_CATEGORY {
        return Err(CoreError::Validation(format!(
            "At most {MAX_ONLINE_COURSES_PER_CATEGORY} online {} courses may be selected",
            category.as_str()
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
