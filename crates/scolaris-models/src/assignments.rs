//! Assignment domain models and DTOs.
//!
//! An assignment binds a teacher to teaching work in one of two mutually
//! exclusive modes, selected by the class's pedagogical level:
//!
//! - **All-subjects** (maternelle/primaire): one homeroom teacher covers
//!   every subject of one class.
//! - **Single-subject** (secondaire): one teacher teaches one subject in one
//!   class, with one row per class when the pair spans several classes.

use crate::ids::{AssignmentId, ClassId, InstitutionId, SubjectId, TeacherId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The two disjoint assignment shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AssignmentKind {
    /// Homeroom binding: all subjects of the class's level, implicitly.
    AllSubjects { class_id: ClassId },
    /// Subject binding: one subject in one class.
    SingleSubject {
        class_id: ClassId,
        subject_id: SubjectId,
    },
}

impl AssignmentKind {
    pub fn class_id(&self) -> ClassId {
        match self {
            AssignmentKind::AllSubjects { class_id } => *class_id,
            AssignmentKind::SingleSubject { class_id, .. } => *class_id,
        }
    }

    pub fn subject_id(&self) -> Option<SubjectId> {
        match self {
            AssignmentKind::AllSubjects { .. } => None,
            AssignmentKind::SingleSubject { subject_id, .. } => Some(*subject_id),
        }
    }

    pub fn is_all_subjects(&self) -> bool {
        matches!(self, AssignmentKind::AllSubjects { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub institution_id: InstitutionId,
    pub teacher_id: TeacherId,
    #[serde(flatten)]
    pub kind: AssignmentKind,
    pub weekly_hours: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    pub fn homeroom(
        institution_id: InstitutionId,
        teacher_id: TeacherId,
        class_id: ClassId,
        weekly_hours: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AssignmentId::new(),
            institution_id,
            teacher_id,
            kind: AssignmentKind::AllSubjects { class_id },
            weekly_hours,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn single_subject(
        institution_id: InstitutionId,
        teacher_id: TeacherId,
        subject_id: SubjectId,
        class_id: ClassId,
        weekly_hours: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AssignmentId::new(),
            institution_id,
            teacher_id,
            kind: AssignmentKind::SingleSubject {
                class_id,
                subject_id,
            },
            weekly_hours,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn class_id(&self) -> ClassId {
        self.kind.class_id()
    }

    pub fn subject_id(&self) -> Option<SubjectId> {
        self.kind.subject_id()
    }

    /// Natural-key match used for idempotent assignment creation:
    /// (teacher, class) for homeroom, (teacher, class, subject) otherwise.
    pub fn matches_key(&self, teacher_id: TeacherId, kind: &AssignmentKind) -> bool {
        self.teacher_id == teacher_id
            && self.kind.class_id() == kind.class_id()
            && self.kind.subject_id() == kind.subject_id()
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AssignHomeroomDto {
    pub teacher_id: TeacherId,
    pub class_id: ClassId,
    #[validate(range(min = 1, max = 60))]
    pub weekly_hours: u32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AssignSubjectDto {
    pub teacher_id: TeacherId,
    pub subject_id: SubjectId,
    #[validate(length(min = 1))]
    pub class_ids: Vec<ClassId>,
    #[validate(range(min = 1, max = 60))]
    pub weekly_hours_each: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_accessors() {
        let class_id = ClassId::new();
        let subject_id = SubjectId::new();

        let homeroom = AssignmentKind::AllSubjects { class_id };
        assert_eq!(homeroom.class_id(), class_id);
        assert_eq!(homeroom.subject_id(), None);
        assert!(homeroom.is_all_subjects());

        let single = AssignmentKind::SingleSubject {
            class_id,
            subject_id,
        };
        assert_eq!(single.subject_id(), Some(subject_id));
        assert!(!single.is_all_subjects());
    }

    #[test]
    fn test_natural_key_match() {
        let teacher_id = TeacherId::new();
        let class_id = ClassId::new();
        let subject_id = SubjectId::new();

        let existing =
            Assignment::single_subject(InstitutionId::new(), teacher_id, subject_id, class_id, 4);

        assert!(existing.matches_key(
            teacher_id,
            &AssignmentKind::SingleSubject {
                class_id,
                subject_id
            }
        ));
        // Same teacher and class, homeroom shape: different key.
        assert!(!existing.matches_key(teacher_id, &AssignmentKind::AllSubjects { class_id }));
        assert!(!existing.matches_key(
            TeacherId::new(),
            &AssignmentKind::SingleSubject {
                class_id,
                subject_id
            }
        ));
    }

    #[test]
    fn test_kind_serde_tagged() {
        let kind = AssignmentKind::AllSubjects {
            class_id: ClassId::from_u128(1),
        };
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains(r#""mode":"all_subjects""#));
    }

    #[test]
    fn test_assign_subject_dto_rejects_empty_classes() {
        let dto = AssignSubjectDto {
            teacher_id: TeacherId::new(),
            subject_id: SubjectId::new(),
            class_ids: vec![],
            weekly_hours_each: 4,
        };
        assert!(dto.validate().is_err());
    }
}
