//! Pedagogical level and room policy enums.
//!
//! `SchoolLevel` is always derived from a class's raw level label by the
//! level classifier — it is never stored or accepted directly from input.
//! `RoomPolicy` is in turn derived from `SchoolLevel` and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four pedagogical stages governing assignment and room rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolLevel {
    EarlyChildhood,
    Primary,
    LowerSecondary,
    UpperSecondary,
}

impl SchoolLevel {
    /// All levels, in ascending pedagogical order.
    pub const ALL: [SchoolLevel; 4] = [
        SchoolLevel::EarlyChildhood,
        SchoolLevel::Primary,
        SchoolLevel::LowerSecondary,
        SchoolLevel::UpperSecondary,
    ];

    /// Levels where one homeroom teacher covers every subject of the class.
    pub fn uses_homeroom(&self) -> bool {
        matches!(self, SchoolLevel::EarlyChildhood | SchoolLevel::Primary)
    }

    /// Levels where teachers are bound to a single subject across classes.
    pub fn uses_subject_teachers(&self) -> bool {
        !self.uses_homeroom()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchoolLevel::EarlyChildhood => "early_childhood",
            SchoolLevel::Primary => "primary",
            SchoolLevel::LowerSecondary => "lower_secondary",
            SchoolLevel::UpperSecondary => "upper_secondary",
        }
    }

    /// Human-readable label for display projections.
    pub fn display_name(&self) -> &'static str {
        match self {
            SchoolLevel::EarlyChildhood => "Maternelle",
            SchoolLevel::Primary => "Primaire",
            SchoolLevel::LowerSecondary => "Secondaire 1er cycle",
            SchoolLevel::UpperSecondary => "Secondaire 2nd cycle",
        }
    }
}

impl fmt::Display for SchoolLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Room-allocation policy derived from a class's pedagogical level.
///
/// - `Fixed`: the class has one permanent room.
/// - `Flexible`: any room from the shared available pool.
/// - `Mixed`: either, decided per institution configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomPolicy {
    Fixed,
    Flexible,
    Mixed,
}

impl RoomPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomPolicy::Fixed => "fixed",
            RoomPolicy::Flexible => "flexible",
            RoomPolicy::Mixed => "mixed",
        }
    }
}

impl fmt::Display for RoomPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(RoomPolicy::Fixed),
            "flexible" => Ok(RoomPolicy::Flexible),
            "mixed" => Ok(RoomPolicy::Mixed),
            other => Err(format!("unknown room policy '{}'", other)),
        }
    }
}
