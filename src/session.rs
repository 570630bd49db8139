//! Schedule session.
//!
//! The session is the single owner of the active schedule: settings,
//! timetable, and reminder bookkeeping travel together instead of
//! living in application-wide globals. Core computations stay pure;
//! the session wires them to the course set and the configured paths.
//!
//! Mutations are whole-entry and atomic with respect to reads: a course
//! is validated and conflict-checked before it touches the collection,
//! and the periodic display/reminder ticks only ever read. Persistence
//! happens before or after core calls, never inside them.

use std::path::Path;

use chrono::{Datelike, NaiveDateTime};
use thiserror::Error;

use crate::conflict::has_conflict;
use crate::grid::WeekGrid;
use crate::models::{Course, CourseId, Timetable};
use crate::reminder::{class_status, ClassStatus, ReminderEvent, ReminderLedger};
use crate::settings::TimetableSettings;
use crate::stats::TimetableStats;
use crate::store::{self, LoadPolicy, StoreError};
use crate::validation::{validate_course, ValidationError};

/// Error from a session operation.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The course failed range validation.
    #[error("invalid course: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
    /// The course collides with an existing entry.
    #[error("time conflict on day {day}, sections {start_section}-{end_section}")]
    Conflict {
        /// Weekday of the collision.
        day: u8,
        /// Candidate's start section.
        start_section: u8,
        /// Candidate's end section.
        end_section: u8,
    },
    /// No course has the given id.
    #[error("no course with id {0}")]
    UnknownCourse(CourseId),
    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// The active schedule: settings, courses, and reminder state.
#[derive(Debug, Clone, Default)]
pub struct ScheduleSession {
    settings: TimetableSettings,
    timetable: Timetable,
    ledger: ReminderLedger,
}

impl ScheduleSession {
    /// Creates a session with an empty timetable.
    pub fn new(settings: TimetableSettings) -> Self {
        Self {
            settings,
            timetable: Timetable::new(),
            ledger: ReminderLedger::new(),
        }
    }

    /// Opens a session from the configured working schedule file.
    ///
    /// A missing file starts empty; invalid records are handled per
    /// `policy`.
    pub fn open(settings: TimetableSettings, policy: LoadPolicy) -> Result<Self, SessionError> {
        let timetable = store::load_timetable(&settings.schedule_path, &settings, policy)?;
        Ok(Self {
            settings,
            timetable,
            ledger: ReminderLedger::new(),
        })
    }

    /// The session settings.
    pub fn settings(&self) -> &TimetableSettings {
        &self.settings
    }

    /// Read-only view of the course set.
    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    /// Adds a course, rejecting invalid ranges and time conflicts.
    pub fn add_course(&mut self, course: Course) -> Result<(), SessionError> {
        self.check(&course, None)?;
        log::info!("added course '{}'", course.name);
        self.timetable.add(course);
        Ok(())
    }

    /// Adds a course the user has confirmed despite a conflict.
    ///
    /// Range validation still applies; only the conflict gate is
    /// bypassed. An overlapped course will be missing from the grid per
    /// the first-match-wins placement policy.
    pub fn add_course_forced(&mut self, course: Course) -> Result<(), SessionError> {
        validate_course(&course, &self.settings).map_err(SessionError::Validation)?;
        log::info!("added course '{}' (conflict confirmed)", course.name);
        self.timetable.add(course);
        Ok(())
    }

    /// Replaces the course with the given id.
    ///
    /// The replacement inherits the stable id, so grid and persistence
    /// references survive the edit. The conflict check ignores the
    /// entry being replaced.
    pub fn update_course(
        &mut self,
        id: &CourseId,
        mut replacement: Course,
    ) -> Result<(), SessionError> {
        if self.timetable.get(id).is_none() {
            return Err(SessionError::UnknownCourse(id.clone()));
        }
        self.check(&replacement, Some(id))?;
        replacement.id = id.clone();
        log::info!("updated course '{}'", replacement.name);
        self.timetable.replace(id, replacement);
        Ok(())
    }

    /// Replaces a course the user has confirmed despite a conflict.
    pub fn update_course_forced(
        &mut self,
        id: &CourseId,
        mut replacement: Course,
    ) -> Result<(), SessionError> {
        if self.timetable.get(id).is_none() {
            return Err(SessionError::UnknownCourse(id.clone()));
        }
        validate_course(&replacement, &self.settings).map_err(SessionError::Validation)?;
        replacement.id = id.clone();
        self.timetable.replace(id, replacement);
        Ok(())
    }

    /// Removes and returns the course with the given id.
    pub fn remove_course(&mut self, id: &CourseId) -> Result<Course, SessionError> {
        let removed = self
            .timetable
            .remove(id)
            .ok_or_else(|| SessionError::UnknownCourse(id.clone()))?;
        log::info!("removed course '{}'", removed.name);
        Ok(removed)
    }

    /// Whether a candidate collides with the current set.
    ///
    /// Exposed so a dialog can ask the user before committing to
    /// [`Self::add_course_forced`].
    pub fn would_conflict(&self, candidate: &Course, exclude: Option<&CourseId>) -> bool {
        has_conflict(candidate, &self.timetable, exclude)
    }

    /// Saves the course set to the configured working file.
    pub fn save(&self) -> Result<(), SessionError> {
        store::save_timetable(&self.settings.schedule_path, &self.timetable)?;
        Ok(())
    }

    /// Replaces the course set from an import envelope file.
    pub fn import_from(
        &mut self,
        path: impl AsRef<Path>,
        policy: LoadPolicy,
    ) -> Result<usize, SessionError> {
        let imported = store::import_timetable(path, &self.settings, policy)?;
        let count = imported.len();
        self.timetable = imported;
        Ok(count)
    }

    /// Exports the course set to an envelope file.
    pub fn export_to(
        &self,
        path: impl AsRef<Path>,
        now: NaiveDateTime,
    ) -> Result<(), SessionError> {
        store::export_timetable(path, &self.timetable, now)?;
        Ok(())
    }

    /// Replaces the course set from the read-only example schedule.
    pub fn load_example(&mut self, policy: LoadPolicy) -> Result<usize, SessionError> {
        let path = &self.settings.example_schedule_path;
        if !path.exists() {
            return Err(SessionError::Store(StoreError::Io {
                path: path.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }));
        }
        let example = store::load_timetable(path, &self.settings, policy)?;
        let count = example.len();
        self.timetable = example;
        Ok(count)
    }

    /// Places the current course set into the configured week grid.
    pub fn grid(&self) -> WeekGrid {
        WeekGrid::place(
            &self.timetable,
            self.settings.weekly_class_days,
            self.settings.max_daily_sections,
        )
    }

    /// Aggregates statistics over the current course set.
    pub fn statistics(&self) -> TimetableStats {
        TimetableStats::summarize(&self.timetable, &self.settings)
    }

    /// Status of `now` against today's courses (display timer callback).
    pub fn status_at(&self, now: NaiveDateTime) -> ClassStatus<'_> {
        let weekday = now.weekday().num_days_from_monday() as u8;
        let today = self.timetable.courses_on(weekday);
        class_status(now, &today, &self.settings)
    }

    /// Reminders newly due at `now` (reminder timer callback).
    ///
    /// Each course fires at most once per calendar day.
    pub fn tick(&mut self, now: NaiveDateTime) -> Vec<ReminderEvent> {
        self.ledger.due_events(now, &self.timetable, &self.settings)
    }

    fn check(&self, course: &Course, exclude: Option<&CourseId>) -> Result<(), SessionError> {
        validate_course(course, &self.settings).map_err(SessionError::Validation)?;
        if has_conflict(course, &self.timetable, exclude) {
            return Err(SessionError::Conflict {
                day: course.day,
                start_section: course.start_section,
                end_section: course.end_section,
            });
        }
        Ok(())
    }
}
