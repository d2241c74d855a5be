//! Teacher domain models and DTOs.

use crate::ids::{InstitutionId, SubjectId, TeacherId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub full_name: String,
    /// Declared specialization; informational, assignments are the source of
    /// truth for what a teacher actually teaches.
    pub specialization: Option<SubjectId>,
    /// Contractual weekly hour budget.
    pub weekly_hours_budget: u32,
    pub institution_id: InstitutionId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Teacher {
    pub fn new(
        institution_id: InstitutionId,
        full_name: impl Into<String>,
        weekly_hours_budget: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TeacherId::new(),
            full_name: full_name.into(),
            specialization: None,
            weekly_hours_budget,
            institution_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_specialization(mut self, subject_id: SubjectId) -> Self {
        self.specialization = Some(subject_id);
        self
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1, max = 150))]
    pub full_name: String,
    pub specialization: Option<SubjectId>,
    #[validate(range(min = 1, max = 60))]
    pub weekly_hours_budget: u32,
}
