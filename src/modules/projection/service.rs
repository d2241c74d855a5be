use chrono::Weekday;
use scolaris_models::{Assignment, ScheduleEntry};
use tracing::instrument;

use crate::modules::projection::model::{Catalogs, DisplayAssignment, DisplayEntry};

// Placeholders for stale references: display degrades, never fails.
const UNKNOWN_CLASS: &str = "classe inconnue";
const UNKNOWN_SUBJECT: &str = "matière inconnue";
const UNKNOWN_TEACHER: &str = "enseignant inconnu";
const UNKNOWN_ROOM: &str = "salle inconnue";
const ALL_SUBJECTS: &str = "toutes les matières";

pub struct ProjectionService;

impl ProjectionService {
    /// Join a schedule entry against catalog snapshots for display.
    ///
    /// Pure. A referenced id missing from its catalog renders as a fixed
    /// placeholder rather than failing the whole projection.
    #[instrument(skip(entry, catalogs))]
    pub fn project_entry(entry: &ScheduleEntry, catalogs: &Catalogs) -> DisplayEntry {
        DisplayEntry {
            class_name: catalogs
                .class(entry.class_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| UNKNOWN_CLASS.to_string()),
            subject_name: catalogs
                .subject(entry.subject_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| UNKNOWN_SUBJECT.to_string()),
            teacher_name: catalogs
                .teacher(entry.teacher_id)
                .map(|t| t.full_name.clone())
                .unwrap_or_else(|| UNKNOWN_TEACHER.to_string()),
            room_name: catalogs
                .room(entry.room_id)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| UNKNOWN_ROOM.to_string()),
            day_name: Self::day_name(entry.day).to_string(),
            start: entry.slot.start().format("%H:%M").to_string(),
            end: entry.slot.end().format("%H:%M").to_string(),
            duration: Self::format_duration(entry.slot.duration_minutes()),
        }
    }

    /// Join an assignment against catalog snapshots for display.
    #[instrument(skip(assignment, catalogs))]
    pub fn project_assignment(assignment: &Assignment, catalogs: &Catalogs) -> DisplayAssignment {
        let subject_name = match assignment.subject_id() {
            None => ALL_SUBJECTS.to_string(),
            Some(subject_id) => catalogs
                .subject(subject_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| UNKNOWN_SUBJECT.to_string()),
        };
        DisplayAssignment {
            teacher_name: catalogs
                .teacher(assignment.teacher_id)
                .map(|t| t.full_name.clone())
                .unwrap_or_else(|| UNKNOWN_TEACHER.to_string()),
            class_name: catalogs
                .class(assignment.class_id())
                .map(|c| c.name.clone())
                .unwrap_or_else(|| UNKNOWN_CLASS.to_string()),
            subject_name,
            weekly_hours: assignment.weekly_hours,
        }
    }

    pub fn day_name(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "lundi",
            Weekday::Tue => "mardi",
            Weekday::Wed => "mercredi",
            Weekday::Thu => "jeudi",
            Weekday::Fri => "vendredi",
            Weekday::Sat => "samedi",
            Weekday::Sun => "dimanche",
        }
    }

    /// Render minutes as "Xh", "Xmin", or "XhYmin".
    pub fn format_duration(minutes: i64) -> String {
        let hours = minutes / 60;
        let rest = minutes % 60;
        match (hours, rest) {
            (0, m) => format!("{m}min"),
            (h, 0) => format!("{h}h"),
            (h, m) => format!("{h}h{m}min"),
        }
    }
}
