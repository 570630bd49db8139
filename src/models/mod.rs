//! Schedule domain models.
//!
//! Provides the core data types of the timetable: the [`Course`] entry
//! with its stable [`CourseId`], and the [`Timetable`] collection that
//! owns all entries of the active schedule.
//!
//! Derived views (time slots, grid cells, status) live next to the
//! logic that computes them; see [`crate::conflict`], [`crate::grid`],
//! and [`crate::reminder`].

mod course;
mod timetable;

pub use course::{Course, CourseId, DEFAULT_COURSE_COLOR};
pub use timetable::Timetable;
