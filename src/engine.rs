//! Engine facade.
//!
//! Ties the configuration and the persistence collaborators together and
//! exposes the operations the surrounding product consumes. Every operation
//! is synchronous-per-request: one call, one result or one domain error.

use std::sync::Arc;

use scolaris_models::{
    AssignHomeroomDto, AssignSubjectDto, Assignment, ClassId, ProposedEntry, Room, RoomPolicy,
    ScheduleEntry, SchoolLevel, Subject, TeacherId,
};
use scolaris_store::{
    AssignmentStore, ClassCatalog, RoomCatalog, ScheduleStore, SubjectCatalog, TeacherCatalog,
};

use crate::config::EngineConfig;
use crate::modules::assignments::AssignmentService;
use crate::modules::levels::LevelService;
use crate::modules::projection::{Catalogs, DisplayAssignment, DisplayEntry, ProjectionService};
use crate::modules::rooms::RoomService;
use crate::modules::schedule::ScheduleService;
use crate::modules::subjects::SubjectService;
use crate::utils::errors::{EngineError, EngineResult};

pub struct Engine {
    config: EngineConfig,
    classes: Arc<dyn ClassCatalog>,
    rooms: Arc<dyn RoomCatalog>,
    subjects: Arc<dyn SubjectCatalog>,
    teachers: Arc<dyn TeacherCatalog>,
    assignments: Arc<dyn AssignmentStore>,
    schedule: Arc<dyn ScheduleStore>,
}

impl Engine {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: EngineConfig,
        classes: Arc<dyn ClassCatalog>,
        rooms: Arc<dyn RoomCatalog>,
        subjects: Arc<dyn SubjectCatalog>,
        teachers: Arc<dyn TeacherCatalog>,
        assignments: Arc<dyn AssignmentStore>,
        schedule: Arc<dyn ScheduleStore>,
    ) -> Self {
        Self {
            config,
            classes,
            rooms,
            subjects,
            teachers,
            assignments,
            schedule,
        }
    }

    /// Build an engine over one store implementing every collaborator trait
    /// (e.g. [`scolaris_store::MemoryStore`]).
    pub fn with_store<S>(config: EngineConfig, store: Arc<S>) -> Self
    where
        S: ClassCatalog
            + RoomCatalog
            + SubjectCatalog
            + TeacherCatalog
            + AssignmentStore
            + ScheduleStore
            + 'static,
    {
        Self::new(
            config,
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        )
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Classify a raw class level label. Total, pure.
    pub fn classify_level(&self, raw_label: &str) -> SchoolLevel {
        LevelService::classify(raw_label)
    }

    /// Room-allocation policy for a level, under this institution's config.
    pub fn room_policy(&self, level: SchoolLevel) -> RoomPolicy {
        RoomService::resolve_policy(level, &self.config)
    }

    /// Rooms the operator may pick for the given class.
    pub async fn candidate_rooms(&self, class_id: ClassId) -> EngineResult<Vec<Room>> {
        let class = self
            .classes
            .get(class_id)
            .await?
            .ok_or_else(|| EngineError::unknown_reference("class", class_id))?;
        let all_rooms = self.rooms.list(class.institution_id).await?;
        RoomService::candidate_rooms(&class, &all_rooms, self.schedule.as_ref(), &self.config)
            .await
    }

    /// Subjects taught at one level, per this class's institution catalog.
    pub async fn subjects_for_class(&self, class_id: ClassId) -> EngineResult<Vec<Subject>> {
        let class = self
            .classes
            .get(class_id)
            .await?
            .ok_or_else(|| EngineError::unknown_reference("class", class_id))?;
        let level = LevelService::classify(&class.level_label);
        let catalog = self.subjects.list(class.institution_id).await?;
        Ok(SubjectService::subjects_for_level(level, &catalog))
    }

    pub async fn assign_homeroom(&self, dto: AssignHomeroomDto) -> EngineResult<Assignment> {
        AssignmentService::assign_homeroom(
            self.classes.as_ref(),
            self.teachers.as_ref(),
            self.assignments.as_ref(),
            dto,
        )
        .await
    }

    pub async fn replace_homeroom(&self, dto: AssignHomeroomDto) -> EngineResult<Assignment> {
        AssignmentService::replace_homeroom(
            self.classes.as_ref(),
            self.teachers.as_ref(),
            self.assignments.as_ref(),
            dto,
        )
        .await
    }

    pub async fn assign_subject_across_classes(
        &self,
        dto: AssignSubjectDto,
    ) -> EngineResult<Vec<Assignment>> {
        AssignmentService::assign_subject_across_classes(
            self.classes.as_ref(),
            self.teachers.as_ref(),
            self.subjects.as_ref(),
            self.assignments.as_ref(),
            dto,
        )
        .await
    }

    pub async fn effective_subjects_taught(
        &self,
        teacher_id: TeacherId,
        class_id: ClassId,
    ) -> EngineResult<Vec<Subject>> {
        let class = self
            .classes
            .get(class_id)
            .await?
            .ok_or_else(|| EngineError::unknown_reference("class", class_id))?;
        AssignmentService::effective_subjects_taught(
            self.subjects.as_ref(),
            self.assignments.as_ref(),
            teacher_id,
            &class,
        )
        .await
    }

    pub async fn propose_schedule_entry(
        &self,
        proposed: ProposedEntry,
    ) -> EngineResult<ScheduleEntry> {
        ScheduleService::propose_entry(
            self.classes.as_ref(),
            self.subjects.as_ref(),
            self.teachers.as_ref(),
            self.rooms.as_ref(),
            self.schedule.as_ref(),
            proposed,
        )
        .await
    }

    /// Project one entry for display, joining fresh catalog snapshots.
    pub async fn project_entry(&self, entry: &ScheduleEntry) -> EngineResult<DisplayEntry> {
        let catalogs = self.load_catalogs(entry.institution_id).await?;
        Ok(ProjectionService::project_entry(entry, &catalogs))
    }

    /// Project one assignment for display.
    pub async fn project_assignment(
        &self,
        assignment: &Assignment,
    ) -> EngineResult<DisplayAssignment> {
        let catalogs = self.load_catalogs(assignment.institution_id).await?;
        Ok(ProjectionService::project_assignment(assignment, &catalogs))
    }

    async fn load_catalogs(
        &self,
        institution_id: scolaris_models::InstitutionId,
    ) -> EngineResult<Catalogs> {
        Ok(Catalogs::new(
            self.classes.list(institution_id).await?,
            self.subjects.list(institution_id).await?,
            self.teachers.list(institution_id).await?,
            self.rooms.list(institution_id).await?,
        ))
    }
}
