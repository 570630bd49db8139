//! Course entry model.
//!
//! A course is one weekly timetable entry: a named class held on a fixed
//! weekday over a contiguous, 1-based range of teaching sections.
//!
//! # Identity
//! Every course carries an opaque [`CourseId`], generated once at creation
//! and stable across edits. Persisted records keep their id on reload; an
//! id is only generated when the record has none.

use serde::{Deserialize, Serialize};

use rand::distr::{Alphanumeric, SampleString};

use crate::conflict::TimeSlot;

/// Default block color for newly created courses (`#RRGGBB`).
pub const DEFAULT_COURSE_COLOR: &str = "#4CAF50";

/// Opaque unique course identifier.
///
/// 8 alphanumeric characters, generated at creation. Stable for the
/// lifetime of the course, including across edits and persistence
/// round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        let id = Alphanumeric.sample_string(&mut rand::rng(), 8);
        log::debug!("generated course id {id}");
        Self(id)
    }

    /// Wraps an existing id string (e.g. from persisted data).
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A weekly course entry.
///
/// Weekdays are 0-based with 0 = Monday. Sections are 1-based and the
/// range `[start_section, end_section]` is inclusive; a course spanning
/// sections 2..4 occupies three sections. Construction via the builder
/// does not enforce range invariants; callers run
/// [`crate::validation::validate_course`] before committing a course to
/// a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Stable unique identifier. Generated when absent in input data.
    #[serde(default = "CourseId::generate")]
    pub id: CourseId,
    /// Course name.
    pub name: String,
    /// Teacher name.
    pub teacher: String,
    /// Classroom label.
    pub classroom: String,
    /// Weekday index, 0 = Monday.
    pub day: u8,
    /// First occupied section (1-based, inclusive).
    pub start_section: u8,
    /// Last occupied section (1-based, inclusive).
    pub end_section: u8,
    /// Block color as `#RRGGBB` hex.
    #[serde(default = "default_color")]
    pub color: String,
    /// Whether a pre-class reminder is enabled.
    #[serde(default)]
    pub reminder: bool,
    /// Reminder lead time in minutes (1..=60).
    #[serde(default = "default_reminder_minutes")]
    pub reminder_minutes: u32,
}

fn default_color() -> String {
    DEFAULT_COURSE_COLOR.to_string()
}

fn default_reminder_minutes() -> u32 {
    10
}

impl Course {
    /// Creates a course with a fresh id and default attributes
    /// (Monday, section 1, default color, reminder off).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CourseId::generate(),
            name: name.into(),
            teacher: String::new(),
            classroom: String::new(),
            day: 0,
            start_section: 1,
            end_section: 1,
            color: default_color(),
            reminder: false,
            reminder_minutes: default_reminder_minutes(),
        }
    }

    /// Sets the teacher name.
    pub fn with_teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = teacher.into();
        self
    }

    /// Sets the classroom label.
    pub fn with_classroom(mut self, classroom: impl Into<String>) -> Self {
        self.classroom = classroom.into();
        self
    }

    /// Sets the weekday (0 = Monday).
    pub fn with_day(mut self, day: u8) -> Self {
        self.day = day;
        self
    }

    /// Sets the inclusive section range.
    pub fn with_sections(mut self, start_section: u8, end_section: u8) -> Self {
        self.start_section = start_section;
        self.end_section = end_section;
        self
    }

    /// Sets the block color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Enables the pre-class reminder with the given lead time.
    pub fn with_reminder(mut self, minutes: u32) -> Self {
        self.reminder = true;
        self.reminder_minutes = minutes;
        self
    }

    /// Number of sections this course occupies.
    #[inline]
    pub fn span(&self) -> u8 {
        self.end_section - self.start_section + 1
    }

    /// The (day, section range) view used for overlap checks.
    #[inline]
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.day, self.start_section, self.end_section)
    }
}
