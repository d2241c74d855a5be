//! Room domain models and DTOs.
//!
//! Rooms are a shared pool owned by the institution. A class never owns a
//! room; the relation only exists through schedule entries.

use crate::ids::{InstitutionId, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Availability status of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Maintenance,
    Unavailable,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Free-form kind tag ("salle de classe", "labo", "amphi", ...).
    pub kind: String,
    pub capacity: u32,
    pub status: RoomStatus,
    pub institution_id: InstitutionId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    pub fn new(
        institution_id: InstitutionId,
        name: impl Into<String>,
        kind: impl Into<String>,
        capacity: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RoomId::new(),
            name: name.into(),
            kind: kind.into(),
            capacity,
            status: RoomStatus::Available,
            institution_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the room can appear in the open booking pool.
    pub fn is_bookable(&self) -> bool {
        self.status == RoomStatus::Available
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub kind: String,
    #[validate(range(min = 1, max = 1000))]
    pub capacity: u32,
}
