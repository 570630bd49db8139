//! Schedule persistence.
//!
//! Two JSON shapes, both carrying the same course records:
//! - the **working file** is a bare array, written in full on every
//!   save and reloaded at startup (a missing file is an empty
//!   timetable);
//! - the **export file** wraps the array in a
//!   `{ version, export_time, courses }` envelope for interchange, and
//!   import accepts the same envelope.
//!
//! Records validate on the way in. Whether one bad record aborts the
//! load or is skipped with a warning is the caller's [`LoadPolicy`];
//! either way an invalid range never enters the timetable.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Course, Timetable};
use crate::settings::TimetableSettings;
use crate::validation::validate_course;

/// Error reading or writing schedule data.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read or written.
    #[error("schedule file {path}: {source}")]
    Io {
        /// Path involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid JSON for the expected shape.
    #[error("malformed schedule data: {0}")]
    Parse(#[from] serde_json::Error),
    /// A course record failed validation under [`LoadPolicy::Strict`].
    #[error("course record {index} is invalid: {message}")]
    InvalidRecord {
        /// Zero-based record position in the file.
        index: usize,
        /// Joined validation messages.
        message: String,
    },
}

/// What to do with an invalid record while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Fail the whole load on the first invalid record.
    #[default]
    Strict,
    /// Skip invalid records with a warning and keep the rest.
    SkipInvalid,
}

/// Export envelope: versioned wrapper around the course array.
#[derive(Debug, Serialize, Deserialize)]
struct ScheduleExport {
    version: String,
    export_time: String,
    #[serde(default)]
    courses: Vec<Course>,
}

/// Loads the working schedule file (bare course array).
///
/// A missing file is not an error: startup before the first save simply
/// yields an empty timetable.
pub fn load_timetable(
    path: impl AsRef<Path>,
    settings: &TimetableSettings,
    policy: LoadPolicy,
) -> Result<Timetable, StoreError> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("no schedule file at {}, starting empty", path.display());
        return Ok(Timetable::new());
    }

    let text = read_file(path)?;
    let records: Vec<Course> = serde_json::from_str(&text)?;
    let timetable = admit_records(records, settings, policy)?;
    log::info!(
        "loaded {} courses from {}",
        timetable.len(),
        path.display()
    );
    Ok(timetable)
}

/// Writes the working schedule file (bare course array, pretty JSON).
pub fn save_timetable(path: impl AsRef<Path>, timetable: &Timetable) -> Result<(), StoreError> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(timetable.courses())?;
    write_file(path, &text)?;
    log::info!("saved {} courses to {}", timetable.len(), path.display());
    Ok(())
}

/// Writes the export envelope with version and timestamp.
pub fn export_timetable(
    path: impl AsRef<Path>,
    timetable: &Timetable,
    now: NaiveDateTime,
) -> Result<(), StoreError> {
    let path = path.as_ref();
    let envelope = ScheduleExport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        export_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        courses: timetable.courses().to_vec(),
    };
    let text = serde_json::to_string_pretty(&envelope)?;
    write_file(path, &text)?;
    log::info!("exported {} courses to {}", timetable.len(), path.display());
    Ok(())
}

/// Reads an export envelope; a missing `courses` key is an empty list.
///
/// Unlike [`load_timetable`], the file must exist; import starts from
/// a file the user picked.
pub fn import_timetable(
    path: impl AsRef<Path>,
    settings: &TimetableSettings,
    policy: LoadPolicy,
) -> Result<Timetable, StoreError> {
    let path = path.as_ref();
    let text = read_file(path)?;
    let envelope: ScheduleExport = serde_json::from_str(&text)?;
    let timetable = admit_records(envelope.courses, settings, policy)?;
    log::info!(
        "imported {} courses from {}",
        timetable.len(),
        path.display()
    );
    Ok(timetable)
}

/// Validates records and builds the timetable per policy.
fn admit_records(
    records: Vec<Course>,
    settings: &TimetableSettings,
    policy: LoadPolicy,
) -> Result<Timetable, StoreError> {
    let mut timetable = Timetable::new();

    for (index, course) in records.into_iter().enumerate() {
        match validate_course(&course, settings) {
            Ok(()) => timetable.add(course),
            Err(errors) => {
                let message = errors
                    .iter()
                    .map(|e| e.message.clone())
                    .collect::<Vec<_>>()
                    .join("; ");
                match policy {
                    LoadPolicy::Strict => {
                        return Err(StoreError::InvalidRecord { index, message })
                    }
                    LoadPolicy::SkipInvalid => {
                        log::warn!("skipping course record {index}: {message}");
                    }
                }
            }
        }
    }

    Ok(timetable)
}

fn read_file(path: &Path) -> Result<String, StoreError> {
    std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, text: &str) -> Result<(), StoreError> {
    std::fs::write(path, text).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;
    use chrono::NaiveDate;

    fn settings() -> TimetableSettings {
        TimetableSettings::default()
    }

    fn sample_timetable() -> Timetable {
        Timetable::from_courses(vec![
            Course::new("Calculus")
                .with_teacher("Dr. Wu")
                .with_classroom("A-201")
                .with_day(0)
                .with_sections(1, 2)
                .with_reminder(15),
            Course::new("Physics")
                .with_teacher("Dr. Li")
                .with_classroom("B-103")
                .with_day(2)
                .with_sections(5, 6)
                .with_color("#2196F3"),
        ])
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        let original = sample_timetable();

        save_timetable(&path, &original).unwrap();
        let loaded = load_timetable(&path, &settings(), LoadPolicy::Strict).unwrap();

        assert_eq!(loaded.len(), 2);
        for (a, b) in original.iter().zip(loaded.iter()) {
            assert_eq!(a, b); // ids preserved, every field intact
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let loaded = load_timetable(&path, &settings(), LoadPolicy::Strict).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_generates_missing_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        std::fs::write(
            &path,
            r#"[{"name":"A","teacher":"T","classroom":"R","day":0,"start_section":1,"end_section":2}]"#,
        )
        .unwrap();

        let loaded = load_timetable(&path, &settings(), LoadPolicy::Strict).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.courses()[0].id.as_str().len(), 8);
    }

    #[test]
    fn test_load_strict_rejects_invalid_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        // end_section beyond the daily maximum of 12
        std::fs::write(
            &path,
            r#"[{"name":"Bad","teacher":"T","classroom":"R","day":0,"start_section":11,"end_section":13}]"#,
        )
        .unwrap();

        let err = load_timetable(&path, &settings(), LoadPolicy::Strict).unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn test_load_skip_invalid_keeps_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        std::fs::write(
            &path,
            r#"[
                {"name":"Bad","teacher":"T","classroom":"R","day":0,"start_section":5,"end_section":2},
                {"name":"Good","teacher":"T","classroom":"R","day":1,"start_section":1,"end_section":2}
            ]"#,
        )
        .unwrap();

        let loaded = load_timetable(&path, &settings(), LoadPolicy::SkipInvalid).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.courses()[0].name, "Good");
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_timetable(&path, &settings(), LoadPolicy::Strict).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn test_export_import_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        let original = sample_timetable();
        let now = NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();

        export_timetable(&path, &original, now).unwrap();

        // Envelope carries version and formatted timestamp
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(raw["export_time"], "2025-09-01 12:30:00");

        let imported = import_timetable(&path, &settings(), LoadPolicy::Strict).unwrap();
        assert_eq!(imported.len(), 2);
        for (a, b) in original.iter().zip(imported.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.name, b.name);
        }
    }

    #[test]
    fn test_import_missing_courses_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(&path, r#"{"version":"1.0","export_time":"2025-09-01 08:00:00"}"#).unwrap();

        let imported = import_timetable(&path, &settings(), LoadPolicy::Strict).unwrap();
        assert!(imported.is_empty());
    }

    #[test]
    fn test_import_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            import_timetable(dir.path().join("gone.json"), &settings(), LoadPolicy::Strict)
                .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
