//! Configuration loader with multi-source merging

use crate::{CourseworkConfig, Paths};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "CWK".to_string(),
            include_user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "CWK")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/coursework/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<CourseworkConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = CourseworkConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/coursework/config.toml)
        if self.include_user_config {
            let paths = Paths::new();
            if let Ok(user_config_file) = paths.user_config_file() {
                if user_config_file.exists() {
                    tracing::debug!(path = %user_config_file.display(), "loading user config");
                    builder = builder.add_source(
                        config::File::from(user_config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // 3. Project config (coursework.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            tracing::debug!(path = %project_config_file.display(), "loading project config");
            builder = builder.add_source(
                config::File::from(project_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 4. Local config (coursework.local.toml, gitignored)
        let local_config_file = Paths::local_config_file(&self.project_dir);
        if local_config_file.exists() {
            tracing::debug!(path = %local_config_file.display(), "loading local config");
            builder = builder.add_source(
                config::File::from(local_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (CWK_PIPELINE__THRESHOLD=...)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Build and deserialize
        let config = builder.build().context("Failed to build configuration")?;

        let coursework_config: CourseworkConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        coursework_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(coursework_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> CourseworkConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursework_query::DuplicateNamePolicy;
    use coursework_types::Course;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = ConfigLoader::new()
            .with_project_dir(temp_dir.path())
            .without_user_config()
            .load()
            .expect("Failed to load config");

        assert_eq!(config, CourseworkConfig::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        // Write project config
        let config_content = r#"
[pipeline]
threshold = 50
duplicate_names = "keep-last"

[[catalog.courses]]
name = "Rust"
enrollment = 80

[[catalog.courses]]
name = "Haskell"
enrollment = 20

[calendar]
reference_event = "2026-06-11"
date_pattern = "yyyy-MM-dd"
"#;
        fs::write(project_dir.join("coursework.toml"), config_content)
            .expect("Failed to write config");

        let config = ConfigLoader::new()
            .with_project_dir(project_dir)
            .without_user_config()
            .load()
            .expect("Failed to load config");

        assert_eq!(config.pipeline.threshold, 50);
        assert_eq!(config.pipeline.duplicate_names, DuplicateNamePolicy::KeepLast);
        assert_eq!(
            config.catalog.courses,
            vec![Course::new("Rust", 80), Course::new("Haskell", 20)]
        );
        assert_eq!(config.calendar.reference_event.to_string(), "2026-06-11");
        assert_eq!(config.calendar.date_pattern, "yyyy-MM-dd");
        // Untouched keys keep their defaults
        assert_eq!(config.calendar.datetime_pattern, "dd/MM/yyyy hh:mm:ss");
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        // Write project config
        fs::write(
            project_dir.join("coursework.toml"),
            r#"
[pipeline]
threshold = 50
"#,
        )
        .expect("Failed to write project config");

        // Write local override
        fs::write(
            project_dir.join("coursework.local.toml"),
            r#"
[pipeline]
threshold = 120
"#,
        )
        .expect("Failed to write local config");

        let config = ConfigLoader::new()
            .with_project_dir(project_dir)
            .without_user_config()
            .load()
            .expect("Failed to load config");

        // Local config should override project config
        assert_eq!(config.pipeline.threshold, 120);
    }

    #[test]
    fn test_invalid_project_config_fails() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("coursework.toml"),
            r#"
[calendar]
date_pattern = "EEEE"
"#,
        )
        .expect("Failed to write config");

        let result = ConfigLoader::new()
            .with_project_dir(project_dir)
            .without_user_config()
            .load();

        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join("coursework.toml"),
            "pipeline = \"not a table\"",
        )
        .expect("Failed to write config");

        let config = ConfigLoader::new()
            .with_project_dir(temp_dir.path())
            .without_user_config()
            .load_or_default();

        assert_eq!(config, CourseworkConfig::default());
    }

    #[test]
    fn test_from_toml_file_reports_path() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing.toml");

        let err = CourseworkConfig::from_toml_file(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));

        let broken = temp_dir.path().join("broken.toml");
        fs::write(&broken, "[pipeline\nthreshold = 1").expect("Failed to write config");
        assert!(matches!(
            CourseworkConfig::from_toml_file(&broken),
            Err(crate::ConfigError::ParseError { .. })
        ));
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_overrides_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();
        fs::write(
            project_dir.join("coursework.toml"),
            r#"
[pipeline]
threshold = 50
"#,
        )
        .expect("Failed to write config");

        // Unique prefix: the process environment is shared across test threads.
        // SAFETY: only this test reads or writes CWKENVTEST_* variables.
        unsafe {
            env::set_var("CWKENVTEST_PIPELINE__THRESHOLD", "120");
            env::set_var("CWKENVTEST_PIPELINE__DUPLICATE_NAMES", "keep-last");
        }

        let result = ConfigLoader::new()
            .with_project_dir(project_dir)
            .with_env_prefix("CWKENVTEST")
            .without_user_config()
            .load();

        // SAFETY: as above.
        unsafe {
            env::remove_var("CWKENVTEST_PIPELINE__THRESHOLD");
            env::remove_var("CWKENVTEST_PIPELINE__DUPLICATE_NAMES");
        }

        let config = result.expect("Failed to load config");
        assert_eq!(config.pipeline.threshold, 120);
        assert_eq!(config.pipeline.duplicate_names, DuplicateNamePolicy::KeepLast);
    }
}
