use scolaris_models::{SchoolLevel, Subject};
use tracing::instrument;

pub struct SubjectService;

impl SubjectService {
    /// Filter the subject catalog down to one pedagogical level.
    ///
    /// For homeroom levels the result is informational ("everything the
    /// homeroom teacher covers"); for secondary levels it is the per-subject
    /// choice set offered to the operator.
    #[instrument(skip(all_subjects))]
    pub fn subjects_for_level(level: SchoolLevel, all_subjects: &[Subject]) -> Vec<Subject> {
        all_subjects
            .iter()
            .filter(|s| s.level == level)
            .cloned()
            .collect()
    }
}
