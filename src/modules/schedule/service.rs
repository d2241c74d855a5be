use scolaris_models::{ConflictKind, ProposedEntry, ScheduleEntry, TimeSlot};
use scolaris_store::{
    ClassCatalog, RoomCatalog, ScheduleStore, StoreError, SubjectCatalog, TeacherCatalog,
};
use tracing::{debug, info, instrument};

use crate::modules::schedule::model::ConflictResult;
use crate::utils::errors::{EngineError, EngineResult};

pub struct ScheduleService;

impl ScheduleService {
    /// Check one proposed entry against existing entries.
    ///
    /// Pure: same-day entries whose half-open time windows overlap conflict
    /// when they share a teacher, a room, or a class — checked in that
    /// order, first match wins. An entry being edited never conflicts with
    /// its own stored version (same entry id).
    pub fn check_conflict(proposed: &ScheduleEntry, existing: &[ScheduleEntry]) -> ConflictResult {
        for entry in existing {
            if entry.id == proposed.id || entry.day != proposed.day {
                continue;
            }
            if !proposed.slot.overlaps(&entry.slot) {
                continue;
            }
            let kind = if entry.teacher_id == proposed.teacher_id {
                ConflictKind::Teacher
            } else if entry.room_id == proposed.room_id {
                ConflictKind::Room
            } else if entry.class_id == proposed.class_id {
                ConflictKind::Class
            } else {
                continue;
            };
            return ConflictResult::Conflict {
                kind,
                with: Box::new(entry.clone()),
            };
        }
        ConflictResult::NoConflict
    }

    /// Validate, conflict-check, and persist one timetable slot.
    ///
    /// The read of the day's entries and the write of the new entry form a
    /// compare-and-write on the day's version token: when a concurrent
    /// writer commits first, the day is re-read and re-checked, so two
    /// racing bookings of overlapping slots can never both succeed.
    ///
    /// On conflict nothing is written; the engine rejects, never
    /// auto-reschedules.
    #[instrument(skip(classes, subjects, teachers, rooms, schedule))]
    pub async fn propose_entry(
        classes: &dyn ClassCatalog,
        subjects: &dyn SubjectCatalog,
        teachers: &dyn TeacherCatalog,
        rooms: &dyn RoomCatalog,
        schedule: &dyn ScheduleStore,
        proposed: ProposedEntry,
    ) -> EngineResult<ScheduleEntry> {
        let class = classes
            .get(proposed.class_id)
            .await?
            .ok_or_else(|| EngineError::unknown_reference("class", proposed.class_id))?;
        subjects
            .get(proposed.subject_id)
            .await?
            .ok_or_else(|| EngineError::unknown_reference("subject", proposed.subject_id))?;
        teachers
            .get(proposed.teacher_id)
            .await?
            .ok_or_else(|| EngineError::unknown_reference("teacher", proposed.teacher_id))?;
        rooms
            .get(proposed.room_id)
            .await?
            .ok_or_else(|| EngineError::unknown_reference("room", proposed.room_id))?;

        let slot = TimeSlot::new(proposed.start, proposed.end)?;

        let mut entry = ScheduleEntry::new(
            class.institution_id,
            proposed.class_id,
            proposed.subject_id,
            proposed.teacher_id,
            proposed.room_id,
            proposed.day,
            slot,
        );
        if let Some(entry_id) = proposed.entry_id {
            entry.id = entry_id; // rescheduling an existing entry
        }

        loop {
            let snapshot = schedule
                .snapshot_day(class.institution_id, proposed.day)
                .await?;

            match Self::check_conflict(&entry, &snapshot.entries) {
                ConflictResult::Conflict { kind, with } => {
                    return Err(EngineError::SchedulingConflict { kind, with });
                }
                ConflictResult::NoConflict => {}
            }

            match schedule.insert(entry.clone(), snapshot.version).await {
                Ok(saved) => {
                    info!(entry_id = %saved.id, day = ?saved.day, "schedule entry committed");
                    return Ok(saved);
                }
                Err(StoreError::VersionConflict) => {
                    // Lost the race; re-read the day and check again.
                    debug!(day = ?proposed.day, "day version stale, re-checking");
                    continue;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};
    use scolaris_models::{ClassId, InstitutionId, RoomId, SubjectId, TeacherId};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn entry(
        teacher_id: TeacherId,
        room_id: RoomId,
        class_id: ClassId,
        day: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    ) -> ScheduleEntry {
        ScheduleEntry::new(
            InstitutionId::new(),
            class_id,
            SubjectId::new(),
            teacher_id,
            room_id,
            day,
            TimeSlot::new(start, end).unwrap(),
        )
    }

    #[test]
    fn test_room_conflict_detected() {
        let room = RoomId::new();
        let existing = entry(
            TeacherId::new(),
            room,
            ClassId::new(),
            Weekday::Mon,
            t(8, 0),
            t(9, 0),
        );
        let proposed = entry(
            TeacherId::new(),
            room,
            ClassId::new(),
            Weekday::Mon,
            t(8, 30),
            t(9, 30),
        );

        match ScheduleService::check_conflict(&proposed, &[existing.clone()]) {
            ConflictResult::Conflict { kind, with } => {
                assert_eq!(kind, ConflictKind::Room);
                assert_eq!(with.id, existing.id);
            }
            ConflictResult::NoConflict => panic!("expected a room conflict"),
        }
    }

    #[test]
    fn test_conflict_is_symmetric() {
        let teacher = TeacherId::new();
        let a = entry(
            teacher,
            RoomId::new(),
            ClassId::new(),
            Weekday::Tue,
            t(10, 0),
            t(12, 0),
        );
        let b = entry(
            teacher,
            RoomId::new(),
            ClassId::new(),
            Weekday::Tue,
            t(11, 0),
            t(13, 0),
        );
        assert!(ScheduleService::check_conflict(&a, &[b.clone()]).is_conflict());
        assert!(ScheduleService::check_conflict(&b, &[a]).is_conflict());
    }

    #[test]
    fn test_no_conflict_on_different_days() {
        let room = RoomId::new();
        let monday = entry(
            TeacherId::new(),
            room,
            ClassId::new(),
            Weekday::Mon,
            t(8, 0),
            t(9, 0),
        );
        let tuesday = entry(
            TeacherId::new(),
            room,
            ClassId::new(),
            Weekday::Tue,
            t(8, 0),
            t(9, 0),
        );
        assert!(!ScheduleService::check_conflict(&tuesday, &[monday]).is_conflict());
    }

    #[test]
    fn test_no_conflict_when_nothing_shared() {
        let a = entry(
            TeacherId::new(),
            RoomId::new(),
            ClassId::new(),
            Weekday::Mon,
            t(8, 0),
            t(9, 0),
        );
        let b = entry(
            TeacherId::new(),
            RoomId::new(),
            ClassId::new(),
            Weekday::Mon,
            t(8, 0),
            t(9, 0),
        );
        assert!(!ScheduleService::check_conflict(&a, &[b]).is_conflict());
    }

    #[test]
    fn test_touching_boundaries_do_not_conflict() {
        let teacher = TeacherId::new();
        let first = entry(
            teacher,
            RoomId::new(),
            ClassId::new(),
            Weekday::Mon,
            t(8, 0),
            t(9, 0),
        );
        let second = entry(
            teacher,
            RoomId::new(),
            ClassId::new(),
            Weekday::Mon,
            t(9, 0),
            t(10, 0),
        );
        assert!(!ScheduleService::check_conflict(&second, &[first]).is_conflict());
    }

    #[test]
    fn test_teacher_checked_before_room() {
        let teacher = TeacherId::new();
        let room = RoomId::new();
        let existing = entry(
            teacher,
            room,
            ClassId::new(),
            Weekday::Mon,
            t(8, 0),
            t(9, 0),
        );
        // Shares both teacher and room; teacher wins.
        let proposed = entry(
            teacher,
            room,
            ClassId::new(),
            Weekday::Mon,
            t(8, 0),
            t(9, 0),
        );
        match ScheduleService::check_conflict(&proposed, &[existing]) {
            ConflictResult::Conflict { kind, .. } => assert_eq!(kind, ConflictKind::Teacher),
            ConflictResult::NoConflict => panic!("expected a conflict"),
        }
    }

    #[test]
    fn test_entry_never_conflicts_with_its_prior_version() {
        let stored = entry(
            TeacherId::new(),
            RoomId::new(),
            ClassId::new(),
            Weekday::Mon,
            t(8, 0),
            t(9, 0),
        );
        let mut edited = stored.clone();
        edited.slot = TimeSlot::new(t(8, 30), t(9, 30)).unwrap();
        assert!(!ScheduleService::check_conflict(&edited, &[stored]).is_conflict());
    }
}
