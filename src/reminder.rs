//! Class status and reminder scheduling.
//!
//! Derives wall-clock course times from the section index: the first
//! section starts at the fixed day anchor (08:00) and each following
//! section starts one stride (section + break duration) later. A course
//! runs for one section duration per occupied section slot; status and
//! reminders key off the start section only, matching the timetable's
//! bell schedule.
//!
//! Two independent consumers drive this module on timer ticks:
//! - the display layer polls [`class_status`] for the in-progress /
//!   next-up countdown, and
//! - the notification layer calls [`ReminderLedger::due_events`], which
//!   fires each course at most once per calendar day.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{Course, CourseId, Timetable};
use crate::settings::TimetableSettings;

/// Minutes after midnight at which section 1 starts (08:00).
pub const DAY_START_MINUTES: i64 = 8 * 60;

/// Start and end of a course's first section on the given date.
///
/// Start = 08:00 + `(start_section - 1) * (section + break)` minutes;
/// the class runs for one section duration.
pub fn course_times(
    course: &Course,
    date: NaiveDate,
    settings: &TimetableSettings,
) -> (NaiveDateTime, NaiveDateTime) {
    let offset = (course.start_section as i64 - 1) * settings.section_stride_minutes() as i64;
    let start = date.and_time(NaiveTime::MIN) + Duration::minutes(DAY_START_MINUTES + offset);
    let end = start + Duration::minutes(settings.section_duration_minutes as i64);
    (start, end)
}

/// What the current moment looks like against today's courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassStatus<'a> {
    /// No course is running and none remains today.
    Idle,
    /// A course is running; `remaining_minutes` counts down to its end.
    InProgress {
        /// The running course.
        course: &'a Course,
        /// Whole minutes until the course ends.
        remaining_minutes: i64,
    },
    /// No course is running; the next one starts later today.
    Upcoming {
        /// The next course to start.
        course: &'a Course,
        /// Whole minutes until it starts.
        remaining_minutes: i64,
    },
}

/// Computes the status of `now` against the given day's courses.
///
/// Scans in start-section order (the input need not be pre-sorted):
/// the first course whose `[start, end)` window contains `now` wins as
/// in-progress; otherwise the earliest course starting after `now`
/// becomes the upcoming candidate; otherwise the day is idle.
pub fn class_status<'a>(
    now: NaiveDateTime,
    today: &[&'a Course],
    settings: &TimetableSettings,
) -> ClassStatus<'a> {
    let mut ordered: Vec<&Course> = today.to_vec();
    ordered.sort_by_key(|c| c.start_section);

    let mut upcoming: Option<(&Course, NaiveDateTime)> = None;

    for course in ordered {
        let (start, end) = course_times(course, now.date(), settings);

        if start <= now && now < end {
            return ClassStatus::InProgress {
                course,
                remaining_minutes: (end - now).num_minutes(),
            };
        }

        if upcoming.is_none() && start > now {
            upcoming = Some((course, start));
        }
    }

    match upcoming {
        Some((course, start)) => ClassStatus::Upcoming {
            course,
            remaining_minutes: (start - now).num_minutes(),
        },
        None => ClassStatus::Idle,
    }
}

/// Whether a course's reminder window contains `now`.
///
/// True iff the course has its reminder enabled and `now` lies in
/// `[start - reminder_minutes, start)`. Pure; day-of-week scoping and
/// once-per-day bookkeeping are the [`ReminderLedger`]'s job.
pub fn should_fire(now: NaiveDateTime, course: &Course, settings: &TimetableSettings) -> bool {
    if !course.reminder {
        return false;
    }
    let (start, _) = course_times(course, now.date(), settings);
    let window_open = start - Duration::minutes(course.reminder_minutes as i64);
    window_open <= now && now < start
}

/// A reminder ready for delivery to the notification layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderEvent {
    /// Id of the course about to start.
    pub course_id: CourseId,
    /// Course name.
    pub course_name: String,
    /// Teacher name.
    pub teacher: String,
    /// Classroom label.
    pub classroom: String,
    /// Wall-clock start of the course.
    pub starts_at: NaiveDateTime,
    /// Whole minutes until the course starts.
    pub remaining_minutes: i64,
}

/// Once-per-day reminder bookkeeping.
///
/// The reminder window spans several timer ticks; without bookkeeping a
/// course would fire on every tick inside its window. The ledger
/// records which courses fired today and resets when the date rolls
/// over.
#[derive(Debug, Clone, Default)]
pub struct ReminderLedger {
    date: Option<NaiveDate>,
    fired: HashSet<CourseId>,
}

impl ReminderLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects reminders due at `now` that have not fired today.
    ///
    /// Only courses held on `now`'s weekday are considered. Each
    /// returned course is marked fired and will not fire again until
    /// the next calendar day.
    pub fn due_events(
        &mut self,
        now: NaiveDateTime,
        timetable: &Timetable,
        settings: &TimetableSettings,
    ) -> Vec<ReminderEvent> {
        let today = now.date();
        if self.date != Some(today) {
            self.date = Some(today);
            self.fired.clear();
        }

        let weekday = now.weekday().num_days_from_monday() as u8;
        let mut events = Vec::new();

        for course in timetable.courses_on(weekday) {
            if !should_fire(now, course, settings) || self.fired.contains(&course.id) {
                continue;
            }
            let (start, _) = course_times(course, today, settings);
            log::info!(
                "reminder due: '{}' starts at {}",
                course.name,
                start.format("%H:%M")
            );
            self.fired.insert(course.id.clone());
            events.push(ReminderEvent {
                course_id: course.id.clone(),
                course_name: course.name.clone(),
                teacher: course.teacher.clone(),
                classroom: course.classroom.clone(),
                starts_at: start,
                remaining_minutes: (start - now).num_minutes(),
            });
        }

        events
    }
}
