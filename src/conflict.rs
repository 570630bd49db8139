//! Course conflict detection.
//!
//! Two courses conflict when they fall on the same weekday and their
//! section ranges overlap. Section ranges are closed intervals, so
//! ranges that merely touch at a shared section (1-3 and 3-5) DO
//! conflict: one section cannot hold two classes.

use crate::models::{Course, CourseId, Timetable};

/// A (day, section range) view of a course.
///
/// Derived on demand for overlap computation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    /// Weekday index, 0 = Monday.
    pub day: u8,
    /// First occupied section (inclusive).
    pub start_section: u8,
    /// Last occupied section (inclusive).
    pub end_section: u8,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(day: u8, start_section: u8, end_section: u8) -> Self {
        Self {
            day,
            start_section,
            end_section,
        }
    }

    /// Whether two slots collide: same day and overlapping closed ranges.
    ///
    /// The ranges `[a.start, a.end]` and `[b.start, b.end]` overlap iff
    /// neither lies strictly before the other.
    #[inline]
    pub fn collides_with(&self, other: &Self) -> bool {
        self.day == other.day
            && !(self.end_section < other.start_section || self.start_section > other.end_section)
    }

    /// Whether the slot covers the given section on its day.
    #[inline]
    pub fn covers(&self, day: u8, section: u8) -> bool {
        self.day == day && self.start_section <= section && section <= self.end_section
    }
}

/// Checks whether a candidate course collides with any existing course.
///
/// `exclude` skips one course id, so an edit-in-place can ignore the
/// entry being replaced. Returns on the first collision found; the
/// outcome does not depend on iteration order. Pure, no side effects.
pub fn has_conflict(candidate: &Course, existing: &Timetable, exclude: Option<&CourseId>) -> bool {
    let slot = candidate.slot();
    existing
        .iter()
        .filter(|c| exclude != Some(&c.id))
        .any(|c| slot.collides_with(&c.slot()))
}
