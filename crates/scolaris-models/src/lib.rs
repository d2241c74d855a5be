//! # Scolaris Models
//!
//! Domain models and DTOs for the Scolaris timetable engine.
//!
//! This crate provides all data structures used throughout the engine:
//! entities, request DTOs with validation, and the derived enums that drive
//! assignment and room rules.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed UUID newtypes for every entity
//! - [`levels`]: `SchoolLevel` and `RoomPolicy` enums
//! - [`classes`]: Class entity and DTOs
//! - [`rooms`]: Room entity, status, and DTOs
//! - [`subjects`]: Subject entity and DTOs
//! - [`teachers`]: Teacher entity and DTOs
//! - [`assignments`]: Assignment entity (two-mode tagged variant) and DTOs
//! - [`schedule`]: Schedule entry, validated time slots, conflict kinds

pub mod assignments;
pub mod classes;
pub mod ids;
pub mod levels;
pub mod rooms;
pub mod schedule;
pub mod subjects;
pub mod teachers;

// Re-export commonly used types at crate root for convenience
pub use assignments::{
    AssignHomeroomDto, AssignSubjectDto, Assignment, AssignmentKind,
};
pub use classes::{Class, CreateClassDto};
pub use ids::{
    AssignmentId, ClassId, EntryId, InstitutionId, RoomId, SubjectId, TeacherId,
};
pub use levels::{RoomPolicy, SchoolLevel};
pub use rooms::{CreateRoomDto, Room, RoomStatus};
pub use schedule::{ConflictKind, ProposedEntry, ScheduleEntry, TimeSlot, TimeSlotError};
pub use subjects::{CreateSubjectDto, Subject};
pub use teachers::{CreateTeacherDto, Teacher};
