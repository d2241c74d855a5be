//! Schedule entry domain models.
//!
//! A schedule entry is one concrete timetable slot: who teaches what, to
//! which class, in which room, on which weekday, over which time window.
//! Time windows are half-open `[start, end)` intervals within a single day,
//! so two slots sharing a boundary instant do not overlap.

use crate::ids::{ClassId, EntryId, InstitutionId, RoomId, SubjectId, TeacherId};
use chrono::{DateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when constructing a degenerate time slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSlotError {
    #[error("invalid time range: start {start} must be strictly before end {end}")]
    EmptyOrInverted { start: NaiveTime, end: NaiveTime },
}

/// A validated half-open time-of-day window `[start, end)`.
///
/// Construction guarantees `start < end`, so a `TimeSlot` is never empty
/// and never crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, TimeSlotError> {
        if start >= end {
            return Err(TimeSlotError::EmptyOrInverted { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    #[inline]
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Half-open interval intersection: `[a, b)` and `[c, d)` overlap iff
    /// `a < d && c < b`. Touching boundaries do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Which shared resource a double-booking collides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    Teacher,
    Room,
    Class,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConflictKind::Teacher => "teacher",
            ConflictKind::Room => "room",
            ConflictKind::Class => "class",
        };
        write!(f, "{}", s)
    }
}

/// One timetable slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: EntryId,
    pub institution_id: InstitutionId,
    pub class_id: ClassId,
    pub subject_id: SubjectId,
    pub teacher_id: TeacherId,
    pub room_id: RoomId,
    pub day: Weekday,
    pub slot: TimeSlot,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScheduleEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        institution_id: InstitutionId,
        class_id: ClassId,
        subject_id: SubjectId,
        teacher_id: TeacherId,
        room_id: RoomId,
        day: Weekday,
        slot: TimeSlot,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: EntryId::new(),
            institution_id,
            class_id,
            subject_id,
            teacher_id,
            room_id,
            day,
            slot,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Operator input for booking or rescheduling a timetable slot.
///
/// `entry_id` is set when editing an existing entry, so the conflict checker
/// can exclude the entry's own prior version from the comparison set.
#[derive(Debug, Clone, Deserialize)]
pub struct ProposedEntry {
    pub entry_id: Option<EntryId>,
    pub class_id: ClassId,
    pub subject_id: SubjectId,
    pub teacher_id: TeacherId,
    pub room_id: RoomId,
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}
