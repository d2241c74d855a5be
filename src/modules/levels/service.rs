use scolaris_models::SchoolLevel;
use tracing::{debug, instrument};

use crate::modules::levels::model::{FALLBACK_LEVEL, LEVEL_KEYWORDS};

pub struct LevelService;

impl LevelService {
    /// Classify a raw class level label into a pedagogical level.
    ///
    /// Total: every label maps to a level. Matching is case-insensitive,
    /// ordered, first-match-wins over [`LEVEL_KEYWORDS`]; unrecognized
    /// labels fall back to [`FALLBACK_LEVEL`].
    #[instrument]
    pub fn classify(raw_label: &str) -> SchoolLevel {
        let normalized = raw_label.to_lowercase();
        for rule in LEVEL_KEYWORDS {
            if normalized.contains(rule.keyword) {
                return rule.level;
            }
        }
        debug!(label = raw_label, "unrecognized level label, using fallback");
        FALLBACK_LEVEL
    }
}
