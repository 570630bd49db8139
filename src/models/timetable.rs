//! Timetable (course collection) model.
//!
//! The timetable owns all course entries for the active schedule. It is
//! an insertion-ordered collection; insertion order has no semantic
//! meaning, but iteration order is what the grid placement engine sees,
//! so it stays deterministic.

use serde::{Deserialize, Serialize};

use super::{Course, CourseId};

/// The full in-memory set of courses for one schedule.
///
/// Mutated only through whole-entry operations (add, replace, remove);
/// persisted in full on every save.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    courses: Vec<Course>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a timetable from existing courses, keeping their order.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Appends a course.
    pub fn add(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Replaces the course with the given id in place.
    ///
    /// Returns `false` if no course has that id. The replacement keeps
    /// its own fields; the caller decides whether it inherits the id.
    pub fn replace(&mut self, id: &CourseId, replacement: Course) -> bool {
        match self.courses.iter_mut().find(|c| &c.id == id) {
            Some(slot) => {
                *slot = replacement;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the course with the given id.
    pub fn remove(&mut self, id: &CourseId) -> Option<Course> {
        let idx = self.courses.iter().position(|c| &c.id == id)?;
        Some(self.courses.remove(idx))
    }

    /// Looks up a course by id.
    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| &c.id == id)
    }

    /// Removes all courses.
    pub fn clear(&mut self) {
        self.courses.clear();
    }

    /// Iterates over all courses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// All courses as a slice.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the timetable has no entries.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses held on the given weekday, sorted by start section.
    pub fn courses_on(&self, day: u8) -> Vec<&Course> {
        let mut found: Vec<&Course> = self.courses.iter().filter(|c| c.day == day).collect();
        found.sort_by_key(|c| c.start_section);
        found
    }

    /// Case-insensitive substring search over name, teacher, and classroom.
    ///
    /// An empty query matches every course.
    pub fn search(&self, query: &str) -> Vec<&Course> {
        let needle = query.to_lowercase();
        self.courses
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.name.to_lowercase().contains(&needle)
                    || c.teacher.to_lowercase().contains(&needle)
                    || c.classroom.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
