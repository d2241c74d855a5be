//! Subject domain models and DTOs.

use crate::ids::{InstitutionId, SubjectId};
use crate::levels::SchoolLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A taught subject. Every subject belongs to exactly one pedagogical level;
/// the same discipline taught at two levels is two subject rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    /// Short code used on printed timetables ("MATH", "HG", "PC").
    pub code: String,
    pub level: SchoolLevel,
    /// Weighting coefficient used in grade averages.
    pub coefficient: u32,
    pub institution_id: InstitutionId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subject {
    pub fn new(
        institution_id: InstitutionId,
        name: impl Into<String>,
        code: impl Into<String>,
        level: SchoolLevel,
        coefficient: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SubjectId::new(),
            name: name.into(),
            code: code.into(),
            level,
            coefficient,
            institution_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubjectDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 10))]
    pub code: String,
    pub level: SchoolLevel,
    #[validate(range(min = 1, max = 20))]
    pub coefficient: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_belongs_to_one_level() {
        let subject = Subject::new(
            InstitutionId::new(),
            "Mathématiques",
            "MATH",
            SchoolLevel::LowerSecondary,
            4,
        );
        assert_eq!(subject.level, SchoolLevel::LowerSecondary);
        assert_eq!(subject.coefficient, 4);
    }

    #[test]
    fn test_create_subject_dto_validation() {
        let valid = CreateSubjectDto {
            name: "Histoire-Géographie".to_string(),
            code: "HG".to_string(),
            level: SchoolLevel::UpperSecondary,
            coefficient: 3,
        };
        assert!(valid.validate().is_ok());

        let bad_code = CreateSubjectDto {
            name: "Histoire-Géographie".to_string(),
            code: "HISTOIREGEO".to_string(),
            level: SchoolLevel::UpperSecondary,
            coefficient: 3,
        };
        assert!(bad_code.validate().is_err());
    }
}
