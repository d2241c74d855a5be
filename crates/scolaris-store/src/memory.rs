//! In-memory implementation of every catalog and store trait.
//!
//! Backs the test suite and embeddings without a durable store. The day
//! version counter makes `insert` a genuine compare-and-write even across
//! concurrent tasks.

use crate::{
    AssignmentStore, ClassCatalog, DaySnapshot, DayVersion, RoomCatalog, ScheduleStore,
    StoreError, StoreResult, SubjectCatalog, TeacherCatalog,
};
use async_trait::async_trait;
use chrono::Weekday;
use scolaris_models::{
    Assignment, AssignmentId, Class, ClassId, EntryId, InstitutionId, Room, RoomId, ScheduleEntry,
    Subject, SubjectId, Teacher, TeacherId,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    classes: HashMap<ClassId, Class>,
    rooms: HashMap<RoomId, Room>,
    subjects: HashMap<SubjectId, Subject>,
    teachers: HashMap<TeacherId, Teacher>,
    assignments: HashMap<AssignmentId, Assignment>,
    entries: HashMap<EntryId, ScheduleEntry>,
    day_versions: HashMap<(InstitutionId, Weekday), u64>,
}

impl Inner {
    fn day_version(&self, institution_id: InstitutionId, day: Weekday) -> u64 {
        self.day_versions
            .get(&(institution_id, day))
            .copied()
            .unwrap_or(0)
    }

    fn bump_day(&mut self, institution_id: InstitutionId, day: Weekday) {
        *self.day_versions.entry((institution_id, day)).or_insert(0) += 1;
    }
}

/// One struct implementing all six collaborator traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Seeding helpers for tests and demos. Catalog CRUD proper lives in the
    // surrounding product, not in the engine.

    pub async fn add_class(&self, class: Class) -> Class {
        let mut inner = self.inner.write().await;
        inner.classes.insert(class.id, class.clone());
        class
    }

    pub async fn add_room(&self, room: Room) -> Room {
        let mut inner = self.inner.write().await;
        inner.rooms.insert(room.id, room.clone());
        room
    }

    pub async fn add_subject(&self, subject: Subject) -> Subject {
        let mut inner = self.inner.write().await;
        inner.subjects.insert(subject.id, subject.clone());
        subject
    }

    pub async fn add_teacher(&self, teacher: Teacher) -> Teacher {
        let mut inner = self.inner.write().await;
        inner.teachers.insert(teacher.id, teacher.clone());
        teacher
    }

    pub async fn set_room_status(&self, id: RoomId, status: scolaris_models::RoomStatus) {
        let mut inner = self.inner.write().await;
        if let Some(room) = inner.rooms.get_mut(&id) {
            room.status = status;
        }
    }
}

#[async_trait]
impl ClassCatalog for MemoryStore {
    async fn get(&self, id: ClassId) -> StoreResult<Option<Class>> {
        Ok(self.inner.read().await.classes.get(&id).cloned())
    }

    async fn list(&self, institution_id: InstitutionId) -> StoreResult<Vec<Class>> {
        let inner = self.inner.read().await;
        let mut classes: Vec<Class> = inner
            .classes
            .values()
            .filter(|c| c.institution_id == institution_id)
            .cloned()
            .collect();
        classes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(classes)
    }
}

#[async_trait]
impl RoomCatalog for MemoryStore {
    async fn get(&self, id: RoomId) -> StoreResult<Option<Room>> {
        Ok(self.inner.read().await.rooms.get(&id).cloned())
    }

    async fn list(&self, institution_id: InstitutionId) -> StoreResult<Vec<Room>> {
        let inner = self.inner.read().await;
        let mut rooms: Vec<Room> = inner
            .rooms
            .values()
            .filter(|r| r.institution_id == institution_id)
            .cloned()
            .collect();
        rooms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rooms)
    }
}

#[async_trait]
impl SubjectCatalog for MemoryStore {
    async fn get(&self, id: SubjectId) -> StoreResult<Option<Subject>> {
        Ok(self.inner.read().await.subjects.get(&id).cloned())
    }

    async fn list(&self, institution_id: InstitutionId) -> StoreResult<Vec<Subject>> {
        let inner = self.inner.read().await;
        let mut subjects: Vec<Subject> = inner
            .subjects
            .values()
            .filter(|s| s.institution_id == institution_id)
            .cloned()
            .collect();
        subjects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(subjects)
    }
}

#[async_trait]
impl TeacherCatalog for MemoryStore {
    async fn get(&self, id: TeacherId) -> StoreResult<Option<Teacher>> {
        Ok(self.inner.read().await.teachers.get(&id).cloned())
    }

    async fn list(&self, institution_id: InstitutionId) -> StoreResult<Vec<Teacher>> {
        let inner = self.inner.read().await;
        let mut teachers: Vec<Teacher> = inner
            .teachers
            .values()
            .filter(|t| t.institution_id == institution_id)
            .cloned()
            .collect();
        teachers.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(teachers)
    }
}

#[async_trait]
impl AssignmentStore for MemoryStore {
    async fn save(&self, assignment: Assignment) -> StoreResult<Assignment> {
        let mut inner = self.inner.write().await;
        inner.assignments.insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    async fn list_by_teacher(&self, teacher_id: TeacherId) -> StoreResult<Vec<Assignment>> {
        let inner = self.inner.read().await;
        let mut out: Vec<Assignment> = inner
            .assignments
            .values()
            .filter(|a| a.teacher_id == teacher_id)
            .cloned()
            .collect();
        out.sort_by_key(|a| a.created_at);
        Ok(out)
    }

    async fn list_by_class(&self, class_id: ClassId) -> StoreResult<Vec<Assignment>> {
        let inner = self.inner.read().await;
        let mut out: Vec<Assignment> = inner
            .assignments
            .values()
            .filter(|a| a.class_id() == class_id)
            .cloned()
            .collect();
        out.sort_by_key(|a| a.created_at);
        Ok(out)
    }

    async fn delete(&self, id: AssignmentId) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .assignments
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                entity: "assignment",
                id: id.to_string(),
            })
    }
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    async fn snapshot_day(
        &self,
        institution_id: InstitutionId,
        day: Weekday,
    ) -> StoreResult<DaySnapshot> {
        let inner = self.inner.read().await;
        let mut entries: Vec<ScheduleEntry> = inner
            .entries
            .values()
            .filter(|e| e.institution_id == institution_id && e.day == day)
            .cloned()
            .collect();
        entries.sort_by_key(|e| (e.slot.start(), e.id));
        Ok(DaySnapshot {
            entries,
            version: DayVersion(inner.day_version(institution_id, day)),
        })
    }

    async fn list_for_class(
        &self,
        institution_id: InstitutionId,
        class_id: ClassId,
    ) -> StoreResult<Vec<ScheduleEntry>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<ScheduleEntry> = inner
            .entries
            .values()
            .filter(|e| e.institution_id == institution_id && e.class_id == class_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.created_at);
        Ok(entries)
    }

    async fn insert(
        &self,
        entry: ScheduleEntry,
        expected: DayVersion,
    ) -> StoreResult<ScheduleEntry> {
        let mut inner = self.inner.write().await;
        if inner.day_version(entry.institution_id, entry.day) != expected.0 {
            return Err(StoreError::VersionConflict);
        }
        // Upsert by id: rescheduling replaces the prior version. If the
        // entry moved to another day, the old day changed too.
        if let Some(prior) = inner.entries.insert(entry.id, entry.clone())
            && prior.day != entry.day
        {
            inner.bump_day(prior.institution_id, prior.day);
        }
        inner.bump_day(entry.institution_id, entry.day);
        Ok(entry)
    }

    async fn delete(&self, id: EntryId) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        match inner.entries.remove(&id) {
            Some(entry) => {
                inner.bump_day(entry.institution_id, entry.day);
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "schedule entry",
                id: id.to_string(),
            }),
        }
    }
}
