//! Service settings.
//!
//! Loaded from an optional JSON file; a missing file means defaults.
//! Unknown keys in the file are rejected so typos surface at boot
//! instead of silently reverting a knob to its default.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Settings load and validation failures.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file exists but could not be read.
    #[error("failed to read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for this shape.
    #[error("failed to parse settings file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Settings parsed but are internally inconsistent.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Tunable behavior of the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Fields that may appear in `where` filters. `["*"]` permits every
    /// declared field; an empty list disables filtering entirely.
    #[serde(default = "default_allowed_filters")]
    pub allowed_filters: Vec<String>,

    /// Whether filters are checked against the schema and allow-list.
    #[serde(default = "default_true")]
    pub validate_filters: bool,

    /// Page size when `max_results` is absent.
    #[serde(default = "default_pagination_default")]
    pub pagination_default: usize,

    /// Hard ceiling on page size.
    #[serde(default = "default_pagination_limit")]
    pub pagination_limit: usize,

    /// Skip the exact total count on list responses.
    #[serde(default)]
    pub optimize_pagination_for_speed: bool,
}

fn default_allowed_filters() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_pagination_default() -> usize {
    25
}

fn default_pagination_limit() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            allowed_filters: default_allowed_filters(),
            validate_filters: true,
            pagination_default: default_pagination_default(),
            pagination_limit: default_pagination_limit(),
            optimize_pagination_for_speed: false,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Settings, SettingsError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let settings: Settings =
            serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Checks internal consistency of the pagination knobs.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.pagination_default == 0 {
            return Err(SettingsError::Invalid(
                "pagination_default must be at least 1".into(),
            ));
        }
        if self.pagination_limit == 0 {
            return Err(SettingsError::Invalid(
                "pagination_limit must be at least 1".into(),
            ));
        }
        if self.pagination_default > self.pagination_limit {
            return Err(SettingsError::Invalid(format!(
                "pagination_default ({}) exceeds pagination_limit ({})",
                self.pagination_default, self.pagination_limit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.allowed_filters, vec!["*".to_string()]);
        assert!(settings.validate_filters);
        assert_eq!(settings.pagination_default, 25);
        assert_eq!(settings.pagination_limit, 50);
        assert!(!settings.optimize_pagination_for_speed);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.pagination_default, 25);
    }

    #[test]
    fn test_partial_file_overrides_only_named_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_settings.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"allowed_filters": [], "optimize_pagination_for_speed": true}}"#
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert!(settings.allowed_filters.is_empty());
        assert!(settings.optimize_pagination_for_speed);
        assert_eq!(settings.pagination_default, 25);
        assert_eq!(settings.pagination_limit, 50);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_settings.json");
        std::fs::write(&path, r#"{"paginaton_limit": 10}"#).unwrap();

        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_settings.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn test_inconsistent_pagination_rejected() {
        let settings = Settings {
            pagination_default: 100,
            pagination_limit: 50,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid(_))
        ));

        let settings = Settings {
            pagination_limit: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
