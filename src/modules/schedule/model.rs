//! Conflict-check result types.

use scolaris_models::{ConflictKind, ScheduleEntry};
use serde::Serialize;

/// Outcome of checking a proposed entry against a day's existing entries.
///
/// The checker stops at the first conflict found; one is sufficient to
/// reject, and callers wanting the full report re-query after resolving it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ConflictResult {
    NoConflict,
    Conflict {
        kind: ConflictKind,
        with: Box<ScheduleEntry>,
    },
}

impl ConflictResult {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ConflictResult::Conflict { .. })
    }
}
