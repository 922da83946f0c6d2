//! Error types for the enrollment query pipeline.

use coursework_types::CourseName;
use thiserror::Error;

/// Errors raised while deriving results from a course catalog.
///
/// Filtering, projection and summing are total; only building a keyed
/// mapping can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Two retained courses share a name and the policy forbids overwriting.
    #[error("duplicate course name '{name}' in name-to-count mapping")]
    DuplicateCourseName { name: CourseName },
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
