//! Pipeline stages: filter, project, reduce and collect over courses.
//!
//! Every stage borrows its input and returns a freshly derived value; the
//! source slice is never reordered or mutated.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use coursework_types::{Course, CourseName, EnrollmentCount};
use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};

/// Typed name-to-count mapping produced by [`to_name_count_mapping`].
pub type NameCounts = BTreeMap<CourseName, EnrollmentCount>;

/// What [`to_name_count_mapping`] does when two retained courses share a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateNamePolicy {
    /// Fail with [`QueryError::DuplicateCourseName`].
    #[default]
    Reject,
    /// The later course (in iteration order) overwrites the earlier one.
    KeepLast,
}

/// Returns a copy of `courses` sorted ascending by enrollment count.
///
/// The sort is stable: courses with equal counts keep their relative order.
pub fn sort_by_enrollment(courses: &[Course]) -> Vec<Course> {
    let mut sorted = courses.to_vec();
    sorted.sort_by_key(Course::enrollment_count);
    sorted
}

/// Lazily keeps the courses with strictly more than `threshold` students.
pub fn filter_over_threshold<'a>(
    courses: impl IntoIterator<Item = &'a Course>,
    threshold: EnrollmentCount,
) -> impl Iterator<Item = &'a Course> {
    courses
        .into_iter()
        .filter(move |course| course.is_over(threshold))
}

/// Maps each course to its name, preserving order.
pub fn project_names<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Vec<&'a str> {
    courses.into_iter().map(|c| c.name().as_str()).collect()
}

/// Maps each course to its enrollment count, preserving order.
pub fn project_counts<'a>(
    courses: impl IntoIterator<Item = &'a Course>,
) -> Vec<EnrollmentCount> {
    courses
        .into_iter()
        .map(Course::enrollment_count)
        .collect()
}

/// Total enrollment across `courses`; zero for an empty input.
pub fn sum_counts<'a>(courses: impl IntoIterator<Item = &'a Course>) -> u64 {
    EnrollmentCount::total(courses.into_iter().map(Course::enrollment_count))
}

/// Returns some course over `threshold`, or `None` if there is none.
///
/// Callers must not rely on which match is returned.
pub fn find_any_over_threshold(courses: &[Course], threshold: EnrollmentCount) -> Option<&Course> {
    courses.iter().find(|course| course.is_over(threshold))
}

/// Builds a name-to-count mapping of the courses over `threshold`.
///
/// Duplicate names are resolved by `policy`.
pub fn to_name_count_mapping(
    courses: &[Course],
    threshold: EnrollmentCount,
    policy: DuplicateNamePolicy,
) -> Result<NameCounts> {
    let mut mapping = NameCounts::new();

    for course in filter_over_threshold(courses, threshold) {
        match mapping.entry(course.name().clone()) {
            Entry::Vacant(slot) => {
                slot.insert(course.enrollment_count());
            }
            Entry::Occupied(mut slot) => match policy {
                DuplicateNamePolicy::Reject => {
                    return Err(QueryError::DuplicateCourseName {
                        name: course.name().clone(),
                    });
                }
                DuplicateNamePolicy::KeepLast => {
                    tracing::warn!(
                        name = %course.name(),
                        previous = %slot.get(),
                        replacement = %course.enrollment_count(),
                        "duplicate course name, keeping last"
                    );
                    slot.insert(course.enrollment_count());
                }
            },
        }
    }

    Ok(mapping)
}
