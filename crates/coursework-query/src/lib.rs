//! # coursework-query: enrollment queries over course catalogs
//!
//! This crate answers ad-hoc questions about an in-memory list of courses
//! without ever mutating it. Each question is a short pipeline of lazy
//! stages over the catalog:
//!
//! - sort ascending by enrollment (stable)
//! - filter courses strictly over a threshold
//! - project names or counts
//! - sum counts
//! - find any match (explicitly absent when none)
//! - collect a typed name-to-count mapping
//!
//! ## Usage
//!
//! ```
//! use coursework_query::{CourseCatalog, DuplicateNamePolicy};
//! use coursework_types::EnrollmentCount;
//!
//! let catalog = CourseCatalog::seed();
//! let threshold = EnrollmentCount::new(100);
//!
//! assert_eq!(catalog.names_over(threshold), vec!["JavaScript", "Java 8"]);
//! assert_eq!(catalog.total_over(threshold), 263);
//!
//! let mapping = catalog
//!     .name_counts_over(threshold, DuplicateNamePolicy::Reject)
//!     .unwrap();
//! assert_eq!(mapping.len(), 2);
//! ```
//!
//! The free functions in [`pipeline`] take any iterator of course
//! references, so stages compose directly:
//!
//! ```
//! use coursework_query::pipeline::{filter_over_threshold, project_counts};
//! use coursework_types::{seed_courses, EnrollmentCount};
//!
//! let courses = seed_courses();
//! let over = filter_over_threshold(&courses, EnrollmentCount::new(100));
//! assert_eq!(project_counts(over).len(), 2);
//! ```

mod error;
pub mod pipeline;
pub mod titles;


pub use error::{QueryError, Result};
pub use pipeline::{
    DuplicateNamePolicy, NameCounts, filter_over_threshold, find_any_over_threshold,
    project_counts, project_names, sort_by_enrollment, sum_counts, to_name_count_mapping,
};

use coursework_types::{Course, EnrollmentCount, seed_courses};

/// An owned course collection and the queries that can be asked of it.
///
/// The catalog holds only its courses. Every query borrows it immutably
/// and returns a derived value, so the insertion order observed by later
/// queries never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Creates a catalog over the given courses, kept in the given order.
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Creates the four-course example catalog.
    pub fn seed() -> Self {
        Self::new(seed_courses())
    }

    /// Returns the courses in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Returns the courses sorted ascending by enrollment.
    pub fn sorted_by_enrollment(&self) -> Vec<Course> {
        let sorted = sort_by_enrollment(&self.courses);
        tracing::debug!(courses = sorted.len(), "sorted catalog by enrollment");
        sorted
    }

    /// Lazily iterates the courses over `threshold`, in insertion order.
    pub fn over_threshold(&self, threshold: EnrollmentCount) -> impl Iterator<Item = &Course> {
        filter_over_threshold(&self.courses, threshold)
    }

    /// Names of the courses over `threshold`.
    pub fn names_over(&self, threshold: EnrollmentCount) -> Vec<&str> {
        let names = project_names(self.over_threshold(threshold));
        tracing::debug!(%threshold, matches = names.len(), "projected names");
        names
    }

    /// Enrollment counts of the courses over `threshold`.
    pub fn counts_over(&self, threshold: EnrollmentCount) -> Vec<EnrollmentCount> {
        let counts = project_counts(self.over_threshold(threshold));
        tracing::debug!(%threshold, matches = counts.len(), "projected counts");
        counts
    }

    /// Enrollment counts of every course, unfiltered.
    pub fn all_counts(&self) -> Vec<EnrollmentCount> {
        project_counts(&self.courses)
    }

    /// Total enrollment of the courses over `threshold`.
    pub fn total_over(&self, threshold: EnrollmentCount) -> u64 {
        let total = sum_counts(self.over_threshold(threshold));
        tracing::debug!(%threshold, total, "summed enrollment");
        total
    }

    /// Some course over `threshold`, if any.
    pub fn find_any_over(&self, threshold: EnrollmentCount) -> Option<&Course> {
        let found = find_any_over_threshold(&self.courses, threshold);
        tracing::debug!(%threshold, found = found.is_some(), "searched for any match");
        found
    }

    /// Name-to-count mapping of the courses over `threshold`.
    pub fn name_counts_over(
        &self,
        threshold: EnrollmentCount,
        policy: DuplicateNamePolicy,
    ) -> Result<NameCounts> {
        let mapping = to_name_count_mapping(&self.courses, threshold, policy)?;
        tracing::debug!(%threshold, ?policy, entries = mapping.len(), "collected mapping");
        Ok(mapping)
    }

    /// Runs every query at once.
    pub fn report(
        &self,
        threshold: EnrollmentCount,
        policy: DuplicateNamePolicy,
    ) -> Result<EnrollmentReport> {
        Ok(EnrollmentReport {
            threshold,
            sorted: self.sorted_by_enrollment(),
            names_over: self
                .names_over(threshold)
                .into_iter()
                .map(str::to_owned)
                .collect(),
            counts_over: self.counts_over(threshold),
            all_counts: self.all_counts(),
            total_over: self.total_over(threshold),
            any_over: self.find_any_over(threshold).cloned(),
            name_counts: self.name_counts_over(threshold, policy)?,
        })
    }
}

impl From<Vec<Course>> for CourseCatalog {
    fn from(courses: Vec<Course>) -> Self {
        Self::new(courses)
    }
}

impl FromIterator<Course> for CourseCatalog {
    fn from_iter<T: IntoIterator<Item = Course>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Owned results of every catalog query for one threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentReport {
    /// Threshold the filtered fields were computed with.
    pub threshold: EnrollmentCount,
    /// All courses, ascending by enrollment.
    pub sorted: Vec<Course>,
    /// Names over the threshold, in catalog order.
    pub names_over: Vec<String>,
    /// Counts over the threshold, in catalog order.
    pub counts_over: Vec<EnrollmentCount>,
    /// Counts of every course, in catalog order.
    pub all_counts: Vec<EnrollmentCount>,
    /// Sum of `counts_over`.
    pub total_over: u64,
    /// Some course over the threshold, or `None`.
    pub any_over: Option<Course>,
    /// Names over the threshold mapped to their counts.
    pub name_counts: NameCounts,
}
