//! # Scolaris Store
//!
//! Collaborator interfaces between the timetable engine and the product's
//! persistence layer. The engine never talks to a database directly; it
//! consumes these traits, and the surrounding product provides durable
//! implementations.
//!
//! Catalogs (classes, rooms, subjects, teachers) are read-only snapshots for
//! the duration of one operation. The schedule store carries a per-(day)
//! version token so a conflict check and the subsequent write form an atomic
//! compare-and-write: two racing bookings of the same slot can never both
//! observe a conflict-free day and both commit.
//!
//! [`MemoryStore`] implements every trait over in-process maps; it backs the
//! test suite and embeddings that have not wired a durable store yet.

pub mod memory;

use async_trait::async_trait;
use chrono::Weekday;
use scolaris_models::{
    Assignment, AssignmentId, Class, ClassId, EntryId, InstitutionId, Room, RoomId, ScheduleEntry,
    Subject, SubjectId, Teacher, TeacherId,
};
use thiserror::Error;

pub use memory::MemoryStore;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Compare-and-write lost the race: the day changed since the snapshot
    /// was taken. Callers re-read and re-check.
    #[error("day version is stale, the schedule changed since it was read")]
    VersionConflict,

    /// The targeted record does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Backend failure (connection loss, serialization, ...).
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Read-only roster of classes.
#[async_trait]
pub trait ClassCatalog: Send + Sync {
    async fn get(&self, id: ClassId) -> StoreResult<Option<Class>>;
    async fn list(&self, institution_id: InstitutionId) -> StoreResult<Vec<Class>>;
}

/// Read-only roster of rooms.
#[async_trait]
pub trait RoomCatalog: Send + Sync {
    async fn get(&self, id: RoomId) -> StoreResult<Option<Room>>;
    async fn list(&self, institution_id: InstitutionId) -> StoreResult<Vec<Room>>;
}

/// Read-only roster of subjects.
#[async_trait]
pub trait SubjectCatalog: Send + Sync {
    async fn get(&self, id: SubjectId) -> StoreResult<Option<Subject>>;
    async fn list(&self, institution_id: InstitutionId) -> StoreResult<Vec<Subject>>;
}

/// Read-only roster of teachers.
#[async_trait]
pub trait TeacherCatalog: Send + Sync {
    async fn get(&self, id: TeacherId) -> StoreResult<Option<Teacher>>;
    async fn list(&self, institution_id: InstitutionId) -> StoreResult<Vec<Teacher>>;
}

/// Durable store for assignments.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Insert or update one assignment and return the stored record.
    async fn save(&self, assignment: Assignment) -> StoreResult<Assignment>;
    async fn list_by_teacher(&self, teacher_id: TeacherId) -> StoreResult<Vec<Assignment>>;
    async fn list_by_class(&self, class_id: ClassId) -> StoreResult<Vec<Assignment>>;
    async fn delete(&self, id: AssignmentId) -> StoreResult<()>;
}

/// Opaque per-(institution, day) version token for compare-and-write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayVersion(pub u64);

/// A consistent read of one weekday's entries plus its version token.
#[derive(Debug, Clone)]
pub struct DaySnapshot {
    pub entries: Vec<ScheduleEntry>,
    pub version: DayVersion,
}

/// Durable store for schedule entries.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Read all entries of one weekday together with the day's version token.
    async fn snapshot_day(
        &self,
        institution_id: InstitutionId,
        day: Weekday,
    ) -> StoreResult<DaySnapshot>;

    /// All entries referencing one class, any day. Used to discover the room
    /// a fixed-policy class is bound to.
    async fn list_for_class(
        &self,
        institution_id: InstitutionId,
        class_id: ClassId,
    ) -> StoreResult<Vec<ScheduleEntry>>;

    /// Commit one entry if the day still matches `expected`. Fails with
    /// [`StoreError::VersionConflict`] when another writer got there first.
    async fn insert(
        &self,
        entry: ScheduleEntry,
        expected: DayVersion,
    ) -> StoreResult<ScheduleEntry>;

    async fn delete(&self, id: EntryId) -> StoreResult<()>;
}
