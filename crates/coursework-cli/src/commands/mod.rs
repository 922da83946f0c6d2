//! CLI command implementations.

pub mod courses;
pub mod dates;
pub mod titles;
pub mod version;
