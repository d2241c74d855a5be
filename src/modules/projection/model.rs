//! Display projections and catalog snapshots.

use scolaris_models::{
    Class, ClassId, Room, RoomId, Subject, SubjectId, Teacher, TeacherId,
};
use serde::Serialize;
use std::collections::HashMap;

/// Read-only catalog snapshot passed explicitly into projections.
///
/// Built once per operation from the catalog providers; the engine never
/// caches it across calls.
#[derive(Debug, Default)]
pub struct Catalogs {
    classes: HashMap<ClassId, Class>,
    subjects: HashMap<SubjectId, Subject>,
    teachers: HashMap<TeacherId, Teacher>,
    rooms: HashMap<RoomId, Room>,
}

impl Catalogs {
    pub fn new(
        classes: Vec<Class>,
        subjects: Vec<Subject>,
        teachers: Vec<Teacher>,
        rooms: Vec<Room>,
    ) -> Self {
        Self {
            classes: classes.into_iter().map(|c| (c.id, c)).collect(),
            subjects: subjects.into_iter().map(|s| (s.id, s)).collect(),
            teachers: teachers.into_iter().map(|t| (t.id, t)).collect(),
            rooms: rooms.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    pub fn class(&self, id: ClassId) -> Option<&Class> {
        self.classes.get(&id)
    }

    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.get(&id)
    }

    pub fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.get(&id)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }
}

/// Human-readable rendering of one timetable slot.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayEntry {
    pub class_name: String,
    pub subject_name: String,
    pub teacher_name: String,
    pub room_name: String,
    pub day_name: String,
    pub start: String,
    pub end: String,
    pub duration: String,
}

/// Human-readable rendering of one assignment row.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayAssignment {
    pub teacher_name: String,
    pub class_name: String,
    /// "toutes les matières" for homeroom assignments.
    pub subject_name: String,
    pub weekly_hours: u32,
}
