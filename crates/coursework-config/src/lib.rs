//! Configuration management for Coursework
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the binary)
//! 2. Environment variables (CWK_* prefix, `__` between nested keys)
//! 3. coursework.local.toml (gitignored, local overrides)
//! 4. coursework.toml (git-tracked, project config)
//! 5. ~/.config/coursework/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use chrono::NaiveDate;
use coursework_calendar::{DEFAULT_DATE_PATTERN, DatePattern};
use coursework_query::{CourseCatalog, DuplicateNamePolicy};
use coursework_types::{Course, EnrollmentCount, seed_courses};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main Coursework configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseworkConfig {
    pub pipeline: PipelineConfig,
    pub catalog: CatalogConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Courses with strictly more students than this are "over".
    pub threshold: u32,
    pub duplicate_names: DuplicateNamePolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: 100,
            duplicate_names: DuplicateNamePolicy::Reject,
        }
    }
}

impl PipelineConfig {
    pub fn threshold(&self) -> EnrollmentCount {
        EnrollmentCount::new(self.threshold)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub courses: Vec<Course>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            courses: seed_courses(),
        }
    }
}

impl CatalogConfig {
    /// Builds the queryable catalog, preserving configured order.
    pub fn to_catalog(&self) -> CourseCatalog {
        CourseCatalog::new(self.courses.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Date the calendar demonstration counts down to.
    pub reference_event: NaiveDate,
    pub event_label: String,
    pub date_pattern: String,
    pub datetime_pattern: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            reference_event: NaiveDate::from_ymd_opt(2022, 6, 5).unwrap_or_default(),
            event_label: "next World Cup".to_string(),
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            datetime_pattern: "dd/MM/yyyy hh:mm:ss".to_string(),
        }
    }
}

impl CalendarConfig {
    pub fn date_pattern(&self) -> Result<DatePattern, ConfigError> {
        DatePattern::parse(&self.date_pattern)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    pub fn datetime_pattern(&self) -> Result<DatePattern, ConfigError> {
        DatePattern::parse(&self.datetime_pattern)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

impl CourseworkConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Read a single TOML file, bypassing the layered sources
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the pipeline or calendar cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.catalog.courses.iter().position(|c| c.name().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "catalog.courses[{index}] has an empty name"
            )));
        }
        self.calendar.date_pattern()?;
        self.calendar.datetime_pattern()?;
        Ok(())
    }
}
