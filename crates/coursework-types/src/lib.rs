//! # coursework-types: Core types for `Coursework`
//!
//! This crate contains the value types shared across the workspace:
//! - Course records ([`Course`])
//! - Course names ([`CourseName`])
//! - Enrollment counts ([`EnrollmentCount`])
//! - The built-in example catalog ([`seed_courses`])

use std::fmt::Display;

use serde::{Deserialize, Serialize};

// ============================================================================
// Enrollment Count - Copy (4-byte value, non-negative by construction)
// ============================================================================

/// Number of students enrolled in a course.
///
/// Backed by a `u32`, so a negative count cannot be represented. Totals
/// over many courses are widened to `u64` by [`EnrollmentCount::total`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EnrollmentCount(u32);

impl EnrollmentCount {
    /// No students.
    pub const ZERO: EnrollmentCount = EnrollmentCount(0);

    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Sums counts into a `u64` so the total cannot overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// # use coursework_types::EnrollmentCount;
    /// let counts = [EnrollmentCount::new(150), EnrollmentCount::new(113)];
    /// assert_eq!(EnrollmentCount::total(counts), 263);
    /// ```
    pub fn total(counts: impl IntoIterator<Item = EnrollmentCount>) -> u64 {
        counts.into_iter().map(|c| u64::from(c.0)).sum()
    }
}

impl Display for EnrollmentCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EnrollmentCount {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<EnrollmentCount> for u32 {
    fn from(count: EnrollmentCount) -> Self {
        count.0
    }
}

impl From<EnrollmentCount> for u64 {
    fn from(count: EnrollmentCount) -> Self {
        u64::from(count.0)
    }
}

// ============================================================================
// Course Name - Clone (contains String)
// ============================================================================

/// Human-readable name of a course.
///
/// Names are not unique; two courses may share one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseName(String);

impl CourseName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for CourseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CourseName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for CourseName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<CourseName> for String {
    fn from(value: CourseName) -> Self {
        value.0
    }
}

impl AsRef<str> for CourseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Course - Clone (immutable record)
// ============================================================================

/// A named course paired with its enrollment count.
///
/// Fields are private and there are no setters: a course never changes
/// after construction. Two courses are equal when both fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Course {
    name: CourseName,
    #[serde(rename = "enrollment")]
    enrollment_count: EnrollmentCount,
}

impl Course {
    pub fn new(name: impl Into<CourseName>, enrollment_count: u32) -> Self {
        Self::with_count(name, EnrollmentCount::new(enrollment_count))
    }

    pub fn with_count(name: impl Into<CourseName>, enrollment_count: EnrollmentCount) -> Self {
        Self {
            name: name.into(),
            enrollment_count,
        }
    }

    pub fn name(&self) -> &CourseName {
        &self.name
    }

    pub fn enrollment_count(&self) -> EnrollmentCount {
        self.enrollment_count
    }

    /// Returns true if strictly more than `threshold` students are enrolled.
    pub fn is_over(&self, threshold: EnrollmentCount) -> bool {
        self.enrollment_count > threshold
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} enrolled)", self.name, self.enrollment_count)
    }
}

impl<N: Into<CourseName>> From<(N, u32)> for Course {
    fn from((name, count): (N, u32)) -> Self {
        Self::new(name, count)
    }
}

/// The four-course example catalog, in insertion order.
pub fn seed_courses() -> Vec<Course> {
    vec![
        Course::new("Python", 45),
        Course::new("JavaScript", 150),
        Course::new("Java 8", 113),
        Course::new("C", 55),
    ]
}

#[cfg(test)]
mod tests;
