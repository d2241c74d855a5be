//! Class domain models and DTOs.

use crate::ids::{ClassId, InstitutionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A class (a cohort of students), owned by one institution.
///
/// The pedagogical level is kept as the raw label entered by the
/// administrator (e.g. "CM2 B", "6ème A", "Tle C"); the classifier derives
/// the `SchoolLevel` from it on every decision point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: ClassId,
    pub name: String,
    pub level_label: String,
    pub institution_id: InstitutionId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Class {
    pub fn new(
        institution_id: InstitutionId,
        name: impl Into<String>,
        level_label: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ClassId::new(),
            name: name.into(),
            level_label: level_label.into(),
            institution_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClassDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub level_label: String,
}
