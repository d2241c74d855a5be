use scolaris_models::{
    AssignHomeroomDto, AssignSubjectDto, Assignment, AssignmentKind, Class, Subject, TeacherId,
};
use scolaris_store::{AssignmentStore, ClassCatalog, SubjectCatalog, TeacherCatalog};
use tracing::{info, instrument};
use validator::Validate;

use crate::modules::levels::LevelService;
use crate::modules::subjects::SubjectService;
use crate::utils::errors::{EngineError, EngineResult};

pub struct AssignmentService;

impl AssignmentService {
    /// Bind a homeroom teacher to one class for all subjects of its level.
    ///
    /// Only maternelle/primaire classes accept this mode. Idempotent on the
    /// (teacher, class) natural key: an equivalent existing assignment is
    /// returned unchanged instead of duplicated. A class already held by a
    /// different homeroom teacher is never overwritten silently; use
    /// [`Self::replace_homeroom`].
    #[instrument(skip(classes, teachers, store))]
    pub async fn assign_homeroom(
        classes: &dyn ClassCatalog,
        teachers: &dyn TeacherCatalog,
        store: &dyn AssignmentStore,
        dto: AssignHomeroomDto,
    ) -> EngineResult<Assignment> {
        dto.validate()?;
        let class = Self::validate_homeroom_target(classes, teachers, &dto).await?;

        let existing = store.list_by_class(dto.class_id).await?;
        let key = AssignmentKind::AllSubjects {
            class_id: dto.class_id,
        };
        if let Some(found) = existing.iter().find(|a| a.matches_key(dto.teacher_id, &key)) {
            return Ok(found.clone());
        }
        if let Some(other) = existing.iter().find(|a| a.kind.is_all_subjects()) {
            return Err(EngineError::HomeroomOccupied {
                class_id: dto.class_id,
                existing: Box::new(other.clone()),
            });
        }

        let assignment = Assignment::homeroom(
            class.institution_id,
            dto.teacher_id,
            dto.class_id,
            dto.weekly_hours,
        );
        let saved = store.save(assignment).await?;
        info!(assignment_id = %saved.id, class_id = %dto.class_id, "homeroom assigned");
        Ok(saved)
    }

    /// Replace the homeroom teacher of a class.
    ///
    /// Deletes the prior all-subjects assignment, if any, then creates the
    /// new one. The explicit two-step keeps reassignment a deliberate
    /// operator action.
    #[instrument(skip(classes, teachers, store))]
    pub async fn replace_homeroom(
        classes: &dyn ClassCatalog,
        teachers: &dyn TeacherCatalog,
        store: &dyn AssignmentStore,
        dto: AssignHomeroomDto,
    ) -> EngineResult<Assignment> {
        dto.validate()?;
        let class = Self::validate_homeroom_target(classes, teachers, &dto).await?;

        let existing = store.list_by_class(dto.class_id).await?;
        if let Some(prior) = existing.iter().find(|a| a.kind.is_all_subjects()) {
            if prior.teacher_id == dto.teacher_id {
                return Ok(prior.clone());
            }
            store.delete(prior.id).await?;
            info!(assignment_id = %prior.id, "prior homeroom assignment removed");
        }

        let assignment = Assignment::homeroom(
            class.institution_id,
            dto.teacher_id,
            dto.class_id,
            dto.weekly_hours,
        );
        Ok(store.save(assignment).await?)
    }

    /// Bind a teacher to one secondary subject across several classes, one
    /// assignment row per class.
    ///
    /// All-or-nothing: every class is validated (existence and level
    /// agreement with the subject) before anything is written. Idempotent
    /// per (teacher, subject, class) key; classes already covered reuse
    /// their stored assignment.
    #[instrument(skip(classes, teachers, subjects, store))]
    pub async fn assign_subject_across_classes(
        classes: &dyn ClassCatalog,
        teachers: &dyn TeacherCatalog,
        subjects: &dyn SubjectCatalog,
        store: &dyn AssignmentStore,
        dto: AssignSubjectDto,
    ) -> EngineResult<Vec<Assignment>> {
        dto.validate()?;

        teachers
            .get(dto.teacher_id)
            .await?
            .ok_or_else(|| EngineError::unknown_reference("teacher", dto.teacher_id))?;
        let subject = subjects
            .get(dto.subject_id)
            .await?
            .ok_or_else(|| EngineError::unknown_reference("subject", dto.subject_id))?;
        if !subject.level.uses_subject_teachers() {
            return Err(EngineError::InvalidLevelForMode {
                level: subject.level,
                requested: "single-subject",
            });
        }

        // Validate every class before any write.
        let mut targets: Vec<Class> = Vec::with_capacity(dto.class_ids.len());
        for class_id in &dto.class_ids {
            if targets.iter().any(|c| c.id == *class_id) {
                continue; // duplicate id in input
            }
            let class = classes
                .get(*class_id)
                .await?
                .ok_or_else(|| EngineError::unknown_reference("class", class_id))?;
            let class_level = LevelService::classify(&class.level_label);
            if class_level != subject.level {
                return Err(EngineError::SubjectLevelMismatch {
                    subject_id: subject.id,
                    subject_level: subject.level,
                    class_id: class.id,
                    class_level,
                });
            }
            targets.push(class);
        }

        let mut out = Vec::with_capacity(targets.len());
        for class in &targets {
            let key = AssignmentKind::SingleSubject {
                class_id: class.id,
                subject_id: subject.id,
            };
            let existing = store.list_by_class(class.id).await?;
            if let Some(found) = existing.iter().find(|a| a.matches_key(dto.teacher_id, &key)) {
                out.push(found.clone());
                continue;
            }
            let assignment = Assignment::single_subject(
                class.institution_id,
                dto.teacher_id,
                subject.id,
                class.id,
                dto.weekly_hours_each,
            );
            out.push(store.save(assignment).await?);
        }
        info!(
            subject_id = %subject.id,
            count = out.len(),
            "subject assigned across classes"
        );
        Ok(out)
    }

    /// What a teacher actually teaches in one class, derived from stored
    /// assignments.
    ///
    /// Homeroom assignment: the full subject scope of the class's level.
    /// Subject assignments: exactly the bound subjects. No assignment:
    /// empty — an unassigned teacher is labeled unassigned by the caller,
    /// never defaulted to "all subjects".
    #[instrument(skip(subjects, store, class))]
    pub async fn effective_subjects_taught(
        subjects: &dyn SubjectCatalog,
        store: &dyn AssignmentStore,
        teacher_id: TeacherId,
        class: &Class,
    ) -> EngineResult<Vec<Subject>> {
        let assignments = store.list_by_class(class.id).await?;
        let mine: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| a.teacher_id == teacher_id)
            .collect();

        if mine.is_empty() {
            return Ok(Vec::new());
        }

        if mine.iter().any(|a| a.kind.is_all_subjects()) {
            let level = LevelService::classify(&class.level_label);
            let catalog = subjects.list(class.institution_id).await?;
            return Ok(SubjectService::subjects_for_level(level, &catalog));
        }

        let mut out = Vec::new();
        for assignment in mine {
            if let Some(subject_id) = assignment.subject_id()
                && let Some(subject) = subjects.get(subject_id).await?
            {
                out.push(subject);
            }
        }
        Ok(out)
    }

    async fn validate_homeroom_target(
        classes: &dyn ClassCatalog,
        teachers: &dyn TeacherCatalog,
        dto: &AssignHomeroomDto,
    ) -> EngineResult<Class> {
        teachers
            .get(dto.teacher_id)
            .await?
            .ok_or_else(|| EngineError::unknown_reference("teacher", dto.teacher_id))?;
        let class = classes
            .get(dto.class_id)
            .await?
            .ok_or_else(|| EngineError::unknown_reference("class", dto.class_id))?;

        let level = LevelService::classify(&class.level_label);
        if !level.uses_homeroom() {
            return Err(EngineError::InvalidLevelForMode {
                level,
                requested: "all-subjects",
            });
        }
        Ok(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scolaris_models::{ClassId, InstitutionId, SchoolLevel, Teacher};
    use scolaris_store::MemoryStore;

    struct Fixture {
        store: MemoryStore,
        institution_id: InstitutionId,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                store: MemoryStore::new(),
                institution_id: InstitutionId::new(),
            }
        }

        async fn teacher(&self, name: &str) -> Teacher {
            self.store
                .add_teacher(Teacher::new(self.institution_id, name, 24))
                .await
        }

        async fn class(&self, name: &str, label: &str) -> Class {
            self.store
                .add_class(Class::new(self.institution_id, name, label))
                .await
        }

        async fn subject(&self, name: &str, code: &str, level: SchoolLevel) -> Subject {
            self.store
                .add_subject(Subject::new(self.institution_id, name, code, level, 4))
                .await
        }
    }

    #[tokio::test]
    async fn test_homeroom_on_primary_class() {
        let fx = Fixture::new();
        let teacher = fx.teacher("Mme Diop").await;
        let class = fx.class("CP1", "CP").await;

        let assignment = AssignmentService::assign_homeroom(
            &fx.store,
            &fx.store,
            &fx.store,
            AssignHomeroomDto {
                teacher_id: teacher.id,
                class_id: class.id,
                weekly_hours: 24,
            },
        )
        .await
        .unwrap();

        assert!(assignment.kind.is_all_subjects());
        assert_eq!(assignment.weekly_hours, 24);
    }

    #[tokio::test]
    async fn test_homeroom_rejected_for_secondary_class() {
        let fx = Fixture::new();
        let teacher = fx.teacher("M. Ndiaye").await;
        let class = fx.class("6ème A", "6ème").await;

        let err = AssignmentService::assign_homeroom(
            &fx.store,
            &fx.store,
            &fx.store,
            AssignHomeroomDto {
                teacher_id: teacher.id,
                class_id: class.id,
                weekly_hours: 24,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            EngineError::InvalidLevelForMode {
                level: SchoolLevel::LowerSecondary,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_homeroom_is_idempotent() {
        let fx = Fixture::new();
        let teacher = fx.teacher("Mme Diop").await;
        let class = fx.class("CP1", "CP").await;
        let dto = || AssignHomeroomDto {
            teacher_id: teacher.id,
            class_id: class.id,
            weekly_hours: 24,
        };

        let first =
            AssignmentService::assign_homeroom(&fx.store, &fx.store, &fx.store, dto())
                .await
                .unwrap();
        let second =
            AssignmentService::assign_homeroom(&fx.store, &fx.store, &fx.store, dto())
                .await
                .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(fx.store.list_by_class(class.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_homeroom_occupied_by_other_teacher() {
        let fx = Fixture::new();
        let t1 = fx.teacher("Mme Diop").await;
        let t2 = fx.teacher("M. Ndiaye").await;
        let class = fx.class("CE2 B", "CE2").await;

        AssignmentService::assign_homeroom(
            &fx.store,
            &fx.store,
            &fx.store,
            AssignHomeroomDto {
                teacher_id: t1.id,
                class_id: class.id,
                weekly_hours: 24,
            },
        )
        .await
        .unwrap();

        let err = AssignmentService::assign_homeroom(
            &fx.store,
            &fx.store,
            &fx.store,
            AssignHomeroomDto {
                teacher_id: t2.id,
                class_id: class.id,
                weekly_hours: 24,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, EngineError::HomeroomOccupied { .. }));
    }

    #[tokio::test]
    async fn test_replace_homeroom_swaps_teacher() {
        let fx = Fixture::new();
        let t1 = fx.teacher("Mme Diop").await;
        let t2 = fx.teacher("M. Ndiaye").await;
        let class = fx.class("CE2 B", "CE2").await;

        AssignmentService::assign_homeroom(
            &fx.store,
            &fx.store,
            &fx.store,
            AssignHomeroomDto {
                teacher_id: t1.id,
                class_id: class.id,
                weekly_hours: 24,
            },
        )
        .await
        .unwrap();

        let replaced = AssignmentService::replace_homeroom(
            &fx.store,
            &fx.store,
            &fx.store,
            AssignHomeroomDto {
                teacher_id: t2.id,
                class_id: class.id,
                weekly_hours: 22,
            },
        )
        .await
        .unwrap();

        assert_eq!(replaced.teacher_id, t2.id);
        let remaining = fx.store.list_by_class(class.id).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].teacher_id, t2.id);
    }

    #[tokio::test]
    async fn test_unknown_teacher_fails_hard() {
        let fx = Fixture::new();
        let class = fx.class("CP1", "CP").await;

        let err = AssignmentService::assign_homeroom(
            &fx.store,
            &fx.store,
            &fx.store,
            AssignHomeroomDto {
                teacher_id: TeacherId::new(),
                class_id: class.id,
                weekly_hours: 24,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::UnknownReference { entity: "teacher", .. }
        ));
    }

    #[tokio::test]
    async fn test_subject_across_classes_creates_one_row_each() {
        let fx = Fixture::new();
        let teacher = fx.teacher("M. Ndiaye").await;
        let math = fx
            .subject("Mathématiques", "MATH", SchoolLevel::LowerSecondary)
            .await;
        let c6a = fx.class("C6A", "6ème").await;
        let c6b = fx.class("C6B", "6ème").await;

        let assignments = AssignmentService::assign_subject_across_classes(
            &fx.store,
            &fx.store,
            &fx.store,
            &fx.store,
            AssignSubjectDto {
                teacher_id: teacher.id,
                subject_id: math.id,
                class_ids: vec![c6a.id, c6b.id],
                weekly_hours_each: 4,
            },
        )
        .await
        .unwrap();

        assert_eq!(assignments.len(), 2);
        assert!(assignments.iter().all(|a| a.subject_id() == Some(math.id)));
        let class_ids: Vec<ClassId> = assignments.iter().map(|a| a.class_id()).collect();
        assert_eq!(class_ids, vec![c6a.id, c6b.id]);
    }

    #[tokio::test]
    async fn test_subject_across_classes_is_all_or_nothing() {
        let fx = Fixture::new();
        let teacher = fx.teacher("M. Ndiaye").await;
        let math = fx
            .subject("Mathématiques", "MATH", SchoolLevel::LowerSecondary)
            .await;
        let c6a = fx.class("C6A", "6ème").await;
        let lycee = fx.class("2nde A", "2nde").await;

        let err = AssignmentService::assign_subject_across_classes(
            &fx.store,
            &fx.store,
            &fx.store,
            &fx.store,
            AssignSubjectDto {
                teacher_id: teacher.id,
                subject_id: math.id,
                class_ids: vec![c6a.id, lycee.id],
                weekly_hours_each: 4,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, EngineError::SubjectLevelMismatch { .. }));
        // Nothing was written, not even for the valid class.
        assert!(fx.store.list_by_class(c6a.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_subject_assignment_rejects_primary_subject() {
        let fx = Fixture::new();
        let teacher = fx.teacher("Mme Diop").await;
        let lecture = fx.subject("Lecture", "LEC", SchoolLevel::Primary).await;
        let class = fx.class("CP1", "CP").await;

        let err = AssignmentService::assign_subject_across_classes(
            &fx.store,
            &fx.store,
            &fx.store,
            &fx.store,
            AssignSubjectDto {
                teacher_id: teacher.id,
                subject_id: lecture.id,
                class_ids: vec![class.id],
                weekly_hours_each: 4,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidLevelForMode { .. }));
    }

    #[tokio::test]
    async fn test_subject_assignment_idempotent_and_dedupes_input() {
        let fx = Fixture::new();
        let teacher = fx.teacher("M. Ndiaye").await;
        let math = fx
            .subject("Mathématiques", "MATH", SchoolLevel::LowerSecondary)
            .await;
        let c6a = fx.class("C6A", "6ème").await;

        let dto = || AssignSubjectDto {
            teacher_id: teacher.id,
            subject_id: math.id,
            class_ids: vec![c6a.id, c6a.id],
            weekly_hours_each: 4,
        };

        let first = AssignmentService::assign_subject_across_classes(
            &fx.store, &fx.store, &fx.store, &fx.store, dto(),
        )
        .await
        .unwrap();
        let second = AssignmentService::assign_subject_across_classes(
            &fx.store, &fx.store, &fx.store, &fx.store, dto(),
        )
        .await
        .unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(fx.store.list_by_class(c6a.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_effective_subjects_homeroom_gets_level_scope() {
        let fx = Fixture::new();
        let teacher = fx.teacher("Mme Diop").await;
        let class = fx.class("CP1", "CP").await;
        fx.subject("Lecture", "LEC", SchoolLevel::Primary).await;
        fx.subject("Calcul", "CAL", SchoolLevel::Primary).await;
        fx.subject("Mathématiques", "MATH", SchoolLevel::LowerSecondary)
            .await;

        AssignmentService::assign_homeroom(
            &fx.store,
            &fx.store,
            &fx.store,
            AssignHomeroomDto {
                teacher_id: teacher.id,
                class_id: class.id,
                weekly_hours: 24,
            },
        )
        .await
        .unwrap();

        let subjects = AssignmentService::effective_subjects_taught(
            &fx.store, &fx.store, teacher.id, &class,
        )
        .await
        .unwrap();
        assert_eq!(subjects.len(), 2);
        assert!(subjects.iter().all(|s| s.level == SchoolLevel::Primary));
    }

    #[tokio::test]
    async fn test_effective_subjects_single_subject_mode() {
        let fx = Fixture::new();
        let teacher = fx.teacher("M. Ndiaye").await;
        let math = fx
            .subject("Mathématiques", "MATH", SchoolLevel::LowerSecondary)
            .await;
        let class = fx.class("C6A", "6ème").await;

        AssignmentService::assign_subject_across_classes(
            &fx.store,
            &fx.store,
            &fx.store,
            &fx.store,
            AssignSubjectDto {
                teacher_id: teacher.id,
                subject_id: math.id,
                class_ids: vec![class.id],
                weekly_hours_each: 4,
            },
        )
        .await
        .unwrap();

        let subjects = AssignmentService::effective_subjects_taught(
            &fx.store, &fx.store, teacher.id, &class,
        )
        .await
        .unwrap();
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].id, math.id);
    }

    #[tokio::test]
    async fn test_unassigned_teacher_has_empty_scope() {
        let fx = Fixture::new();
        let teacher = fx.teacher("M. Ba").await;
        let class = fx.class("C6A", "6ème").await;
        fx.subject("Mathématiques", "MATH", SchoolLevel::LowerSecondary)
            .await;

        let subjects = AssignmentService::effective_subjects_taught(
            &fx.store, &fx.store, teacher.id, &class,
        )
        .await
        .unwrap();
        // Explicitly unassigned, never defaulted to "all subjects".
        assert!(subjects.is_empty());
    }
}
