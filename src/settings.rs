//! Timetable configuration.
//!
//! All tunables of the schedule engine: week shape, section timing,
//! reminder default, and the two data file paths. Settings deserialize
//! from TOML with per-field defaults, so a partial file is fine and an
//! absent file means the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`TimetableSettings`].
    #[error("malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for the schedule engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableSettings {
    /// Number of class days per week (1..=7, counted from Monday).
    pub weekly_class_days: u8,
    /// Maximum number of sections per day.
    pub max_daily_sections: u8,
    /// Length of one section in minutes.
    pub section_duration_minutes: u32,
    /// Break between sections in minutes.
    pub break_duration_minutes: u32,
    /// Default reminder lead time in minutes.
    pub default_reminder_minutes: u32,
    /// Path of the working schedule file.
    pub schedule_path: PathBuf,
    /// Path of the read-only example schedule file.
    pub example_schedule_path: PathBuf,
}

impl Default for TimetableSettings {
    fn default() -> Self {
        Self {
            weekly_class_days: 5,
            max_daily_sections: 12,
            section_duration_minutes: 45,
            break_duration_minutes: 10,
            default_reminder_minutes: 10,
            schedule_path: PathBuf::from("schedule.json"),
            example_schedule_path: PathBuf::from("example_schedule.json"),
        }
    }
}

impl TimetableSettings {
    /// Creates the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the week shape.
    pub fn with_week(mut self, weekly_class_days: u8, max_daily_sections: u8) -> Self {
        self.weekly_class_days = weekly_class_days;
        self.max_daily_sections = max_daily_sections;
        self
    }

    /// Sets section and break durations in minutes.
    pub fn with_timing(mut self, section_minutes: u32, break_minutes: u32) -> Self {
        self.section_duration_minutes = section_minutes;
        self.break_duration_minutes = break_minutes;
        self
    }

    /// Sets the working schedule file path.
    pub fn with_schedule_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.schedule_path = path.into();
        self
    }

    /// Sets the example schedule file path.
    pub fn with_example_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.example_schedule_path = path.into();
        self
    }

    /// Loads settings from a TOML file.
    ///
    /// Missing keys fall back to defaults. A missing file is an error;
    /// callers that treat the file as optional check existence first.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = toml::from_str(&text)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Minutes from one section start to the next (section + break).
    #[inline]
    pub fn section_stride_minutes(&self) -> u32 {
        self.section_duration_minutes + self.break_duration_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let s = TimetableSettings::default();
        assert_eq!(s.weekly_class_days, 5);
        assert_eq!(s.max_daily_sections, 12);
        assert_eq!(s.section_duration_minutes, 45);
        assert_eq!(s.break_duration_minutes, 10);
        assert_eq!(s.default_reminder_minutes, 10);
        assert_eq!(s.section_stride_minutes(), 55);
    }

    #[test]
    fn test_builder() {
        let s = TimetableSettings::new()
            .with_week(6, 10)
            .with_timing(40, 5)
            .with_schedule_path("my.json");
        assert_eq!(s.weekly_class_days, 6);
        assert_eq!(s.max_daily_sections, 10);
        assert_eq!(s.section_stride_minutes(), 45);
        assert_eq!(s.schedule_path, PathBuf::from("my.json"));
    }

    #[test]
    fn test_load_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "weekly_class_days = 6\nsection_duration_minutes = 50").unwrap();

        let s = TimetableSettings::load(file.path()).unwrap();
        assert_eq!(s.weekly_class_days, 6);
        assert_eq!(s.section_duration_minutes, 50);
        // Unspecified keys keep their defaults
        assert_eq!(s.max_daily_sections, 12);
        assert_eq!(s.break_duration_minutes, 10);
    }

    #[test]
    fn test_load_missing_file() {
        let err = TimetableSettings::load("/nonexistent/settings.toml").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_load_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "weekly_class_days = \"many\"").unwrap();
        let err = TimetableSettings::load(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
