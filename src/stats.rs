//! Timetable statistics.
//!
//! Aggregates the course set for the statistics view: entry counts,
//! deduplicated course and credit totals, hour totals, and the per-day
//! distribution.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total entries | Number of timetable records |
//! | Unique courses | Distinct `(name, teacher)` pairs |
//! | Total hours | Σ section span × section duration, in hours |
//! | Total credits | Fixed credits per unique course |
//! | Avg credits | Total credits / unique courses |
//! | Per-day counts | Entries per weekday column |

use std::collections::HashSet;

use crate::models::Timetable;
use crate::settings::TimetableSettings;

/// Credits contributed by each unique course.
///
/// A persisted per-course credit attribute is an extension point; until
/// one exists every unique course counts this fixed value.
pub const DEFAULT_COURSE_CREDITS: f64 = 2.0;

/// Aggregated timetable statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableStats {
    /// Number of timetable entries.
    pub total_entries: usize,
    /// Distinct `(name, teacher)` pairs. The same course listed on two
    /// days counts once.
    pub unique_courses: usize,
    /// Total class hours across all entries.
    pub total_hours: f64,
    /// Total credits across unique courses.
    pub total_credits: f64,
    /// Average credits per unique course (0 when empty).
    pub avg_credits: f64,
    /// Entry count per weekday, indexed 0..weekly_class_days.
    pub per_day: Vec<usize>,
}

impl TimetableStats {
    /// Computes statistics over the whole timetable.
    pub fn summarize(timetable: &Timetable, settings: &TimetableSettings) -> Self {
        let hours_per_section = settings.section_duration_minutes as f64 / 60.0;
        let mut total_hours = 0.0;
        let mut total_credits = 0.0;
        let mut unique: HashSet<(&str, &str)> = HashSet::new();
        let mut per_day = vec![0usize; settings.weekly_class_days as usize];

        for course in timetable.iter() {
            total_hours += course.span() as f64 * hours_per_section;

            if unique.insert((course.name.as_str(), course.teacher.as_str())) {
                total_credits += DEFAULT_COURSE_CREDITS;
            }

            if let Some(count) = per_day.get_mut(course.day as usize) {
                *count += 1;
            }
        }

        let avg_credits = if unique.is_empty() {
            0.0
        } else {
            total_credits / unique.len() as f64
        };

        Self {
            total_entries: timetable.len(),
            unique_courses: unique.len(),
            total_hours,
            total_credits,
            avg_credits,
            per_day,
        }
    }
}
