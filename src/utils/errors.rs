//! Engine error taxonomy.
//!
//! Every error is an expected domain outcome of operator input and carries
//! the entities involved, so the caller can render a specific message. None
//! of these are retried by the engine.

use scolaris_models::schedule::TimeSlotError;
use scolaris_models::{
    Assignment, ClassId, ConflictKind, ScheduleEntry, SchoolLevel, SubjectId,
};
use scolaris_store::StoreError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// An all-subjects assignment was requested for a level that uses
    /// subject teachers, or a subject assignment for a homeroom level.
    #[error("level {level} does not accept {requested} assignments")]
    InvalidLevelForMode {
        level: SchoolLevel,
        requested: &'static str,
    },

    /// A subject/class pairing crosses level boundaries.
    #[error(
        "subject {subject_id} ({subject_level}) cannot be assigned to class {class_id} ({class_level})"
    )]
    SubjectLevelMismatch {
        subject_id: SubjectId,
        subject_level: SchoolLevel,
        class_id: ClassId,
        class_level: SchoolLevel,
    },

    /// Proposed start is not strictly before end.
    #[error(transparent)]
    InvalidTimeRange(#[from] TimeSlotError),

    /// Teacher, room, or class double-booking. Carries the first conflicting
    /// entry found; callers wanting the full report re-query after resolving.
    #[error("{kind} is already booked by an overlapping entry")]
    SchedulingConflict {
        kind: ConflictKind,
        with: Box<ScheduleEntry>,
    },

    /// A referenced id does not exist in its catalog. Creation fails hard on
    /// this; display projection degrades to placeholders instead.
    #[error("unknown {entity} reference: {id}")]
    UnknownReference { entity: &'static str, id: String },

    /// The class already has a homeroom teacher. The prior assignment is
    /// never overwritten silently; callers replace it explicitly.
    #[error("class {class_id} already has a homeroom assignment")]
    HomeroomOccupied {
        class_id: ClassId,
        existing: Box<Assignment>,
    },

    /// Input DTO failed field validation.
    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),

    /// Persistence collaborator failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    pub fn unknown_reference(entity: &'static str, id: impl ToString) -> Self {
        Self::UnknownReference {
            entity,
            id: id.to_string(),
        }
    }
}
