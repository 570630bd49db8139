//! Weekly grid placement.
//!
//! Maps the course set into a day×section matrix for rendering. A
//! course anchors at `(day, start_section)` and its remaining sections
//! become vertical continuations of the same block, so the renderer
//! draws one merged cell spanning `end - start + 1` rows.
//!
//! # Conflict policy
//! When the user has permitted overlapping courses on a day, each cell
//! is claimed by the FIRST course in timetable order that covers it. A
//! later overlapping course never gets an anchor (its would-be anchor
//! cell already belongs to the earlier block), so it is absent from the
//! rendered grid. This is a documented display limitation, kept
//! deliberately; the course itself stays in the timetable and list views.

use serde::{Deserialize, Serialize};

use crate::models::{CourseId, Timetable};

/// State of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// No course covers this cell.
    Empty,
    /// A course block starts here, spanning `span` rows downward.
    Anchor {
        /// Course rendered in this block.
        course: CourseId,
        /// Number of sections the block covers (>= 1).
        span: u8,
    },
    /// Covered by the block anchored above in the same column.
    Continuation {
        /// Course whose block covers this cell.
        course: CourseId,
    },
}

/// A placed day×section grid.
///
/// Sections are 1-based to match the timetable convention; days are
/// 0-based columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekGrid {
    days: u8,
    sections: u8,
    cells: Vec<CellState>,
}

impl WeekGrid {
    /// Places the course set into a `days` × `sections` grid.
    ///
    /// Courses whose day or sections lie outside the grid are expected
    /// to have been rejected by validation; any out-of-grid portion is
    /// simply not addressable and is ignored here.
    pub fn place(courses: &Timetable, days: u8, sections: u8) -> Self {
        let mut cells = Vec::with_capacity(days as usize * sections as usize);

        for day in 0..days {
            for section in 1..=sections {
                let covering = courses.iter().find(|c| c.slot().covers(day, section));
                let state = match covering {
                    Some(c) if c.start_section == section => CellState::Anchor {
                        course: c.id.clone(),
                        span: c.span(),
                    },
                    Some(c) => CellState::Continuation {
                        course: c.id.clone(),
                    },
                    None => CellState::Empty,
                };
                cells.push(state);
            }
        }

        Self {
            days,
            sections,
            cells,
        }
    }

    /// Number of day columns.
    pub fn days(&self) -> u8 {
        self.days
    }

    /// Number of section rows.
    pub fn sections(&self) -> u8 {
        self.sections
    }

    /// The cell at `(day, section)`; section is 1-based.
    ///
    /// # Panics
    /// Panics if `day >= days` or `section` is outside `1..=sections`.
    pub fn cell(&self, day: u8, section: u8) -> &CellState {
        assert!(day < self.days, "day {day} outside grid");
        assert!(
            (1..=self.sections).contains(&section),
            "section {section} outside grid"
        );
        &self.cells[day as usize * self.sections as usize + (section as usize - 1)]
    }

    /// Iterates over anchor cells as `(day, section, course, span)`.
    ///
    /// This is what a renderer walks to draw merged course blocks.
    pub fn anchors(&self) -> impl Iterator<Item = (u8, u8, &CourseId, u8)> {
        self.cells.iter().enumerate().filter_map(|(idx, state)| {
            let day = (idx / self.sections as usize) as u8;
            let section = (idx % self.sections as usize) as u8 + 1;
            match state {
                CellState::Anchor { course, span } => Some((day, section, course, *span)),
                _ => None,
            }
        })
    }
}
