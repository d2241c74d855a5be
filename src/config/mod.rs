//! Engine configuration.

use scolaris_models::RoomPolicy;
use std::env;

/// Per-institution tunables for the assignment rules.
///
/// Homeroom levels always use the fixed room policy; the policy applied to
/// secondary levels is configurable and defaults to mixed.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub secondary_room_policy: RoomPolicy,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            secondary_room_policy: env::var("SCOLARIS_SECONDARY_ROOM_POLICY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(RoomPolicy::Mixed),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            secondary_room_policy: RoomPolicy::Mixed,
        }
    }
}
