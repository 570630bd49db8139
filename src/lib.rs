//! Weekly class-schedule engine.
//!
//! Provides the core of a class-schedule manager: course entries,
//! conflict detection, weekly grid placement, reminder scheduling,
//! statistics, and JSON persistence. Rendering, dialogs, and
//! notification delivery are the host application's job; it calls in
//! with plain data and draws the results.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`models::Course`],
//!   [`models::CourseId`], [`models::Timetable`]
//! - **`settings`**: Week shape, section timing, and file paths
//! - **`validation`**: Range checks applied before a course is admitted
//! - **`conflict`**: Closed-interval overlap detection between courses
//! - **`grid`**: Day×section placement with merged multi-section blocks
//! - **`reminder`**: In-progress/upcoming status and one-shot reminders
//! - **`stats`**: Entry, hour, and credit aggregation
//! - **`store`**: Working-file and export-envelope JSON persistence
//! - **`session`**: The owning context tying settings, courses, and
//!   reminder state together
//!
//! # Conventions
//!
//! Weekdays are 0-based (0 = Monday); sections are 1-based inclusive
//! ranges. Section 1 starts at the 08:00 day anchor and each later
//! section starts one section-plus-break stride after the previous.

pub mod conflict;
pub mod grid;
pub mod models;
pub mod reminder;
pub mod session;
pub mod settings;
pub mod stats;
pub mod store;
pub mod validation;
