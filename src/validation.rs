//! Course validation.
//!
//! Range checks applied before a course enters the timetable. Detects:
//! - Inverted section ranges (start after end)
//! - Sections outside the configured daily range
//! - Weekday outside the configured week
//! - Reminder lead time outside 1..=60 minutes
//!
//! Construction fails closed: an invalid record is rejected here rather
//! than accepted into the collection. Whether a rejected record aborts a
//! batch load or is skipped is the persistence layer's policy, see
//! [`crate::store::LoadPolicy`].

use thiserror::Error;

use crate::models::Course;
use crate::settings::TimetableSettings;

/// Validation result: all detected issues, not just the first.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// `start_section` is greater than `end_section`.
    SectionOrder,
    /// A section index lies outside `1..=max_daily_sections`.
    SectionOutOfRange,
    /// The weekday lies outside `0..weekly_class_days`.
    DayOutOfRange,
    /// The reminder lead time lies outside `1..=60` minutes.
    ReminderOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course against the configured week shape.
///
/// Checks:
/// 1. `1 <= start_section <= end_section`
/// 2. `end_section <= max_daily_sections`
/// 3. `day < weekly_class_days`
/// 4. `reminder_minutes` in `1..=60`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_course(course: &Course, settings: &TimetableSettings) -> ValidationResult {
    let mut errors = Vec::new();

    if course.start_section > course.end_section {
        errors.push(ValidationError::new(
            ValidationErrorKind::SectionOrder,
            format!(
                "Course '{}' starts at section {} but ends at section {}",
                course.name, course.start_section, course.end_section
            ),
        ));
    }

    if course.start_section < 1 || course.end_section > settings.max_daily_sections {
        errors.push(ValidationError::new(
            ValidationErrorKind::SectionOutOfRange,
            format!(
                "Course '{}' sections {}-{} lie outside 1-{}",
                course.name,
                course.start_section,
                course.end_section,
                settings.max_daily_sections
            ),
        ));
    }

    if course.day >= settings.weekly_class_days {
        errors.push(ValidationError::new(
            ValidationErrorKind::DayOutOfRange,
            format!(
                "Course '{}' is on day {} but the week has {} class days",
                course.name, course.day, settings.weekly_class_days
            ),
        ));
    }

    if course.reminder_minutes < 1 || course.reminder_minutes > 60 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ReminderOutOfRange,
            format!(
                "Course '{}' reminder lead time {} min is outside 1-60",
                course.name, course.reminder_minutes
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;

    fn settings() -> TimetableSettings {
        TimetableSettings::default()
    }

    #[test]
    fn test_valid_course() {
        let course = Course::new("Calculus").with_day(4).with_sections(1, 12);
        assert!(validate_course(&course, &settings()).is_ok());
    }

    #[test]
    fn test_inverted_sections() {
        let course = Course::new("Backwards").with_sections(5, 3);
        let errors = validate_course(&course, &settings()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SectionOrder));
    }

    #[test]
    fn test_section_beyond_daily_max() {
        let course = Course::new("Overflow").with_sections(11, 13);
        let errors = validate_course(&course, &settings()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SectionOutOfRange));
    }

    #[test]
    fn test_section_zero() {
        let course = Course::new("Zero").with_sections(0, 2);
        let errors = validate_course(&course, &settings()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SectionOutOfRange));
    }

    #[test]
    fn test_day_out_of_range() {
        // Default week has 5 class days (0..=4)
        let course = Course::new("Saturday").with_day(5);
        let errors = validate_course(&course, &settings()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DayOutOfRange));

        let wide = settings().with_week(7, 12);
        assert!(validate_course(&Course::new("Saturday").with_day(5), &wide).is_ok());
    }

    #[test]
    fn test_reminder_out_of_range() {
        let course = Course::new("Eager").with_reminder(90);
        let errors = validate_course(&course, &settings()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ReminderOutOfRange));

        let zero = Course::new("Never").with_reminder(0);
        assert!(validate_course(&zero, &settings()).is_err());
    }

    #[test]
    fn test_multiple_errors() {
        let course = Course::new("Broken").with_day(9).with_sections(6, 2);
        let errors = validate_course(&course, &settings()).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
