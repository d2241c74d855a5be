use scolaris_models::{Class, Room, RoomId, RoomPolicy, RoomStatus, SchoolLevel};
use scolaris_store::ScheduleStore;
use tracing::{debug, instrument};

use crate::config::EngineConfig;
use crate::modules::levels::LevelService;
use crate::utils::errors::EngineResult;

pub struct RoomService;

impl RoomService {
    /// Derive the room-allocation policy for a pedagogical level.
    pub fn resolve_policy(level: SchoolLevel, config: &EngineConfig) -> RoomPolicy {
        if level.uses_homeroom() {
            RoomPolicy::Fixed
        } else {
            config.secondary_room_policy
        }
    }

    /// Narrow the room pool the operator may pick from for one class.
    ///
    /// Fixed policy: once the class has been scheduled into a room, that
    /// room is its permanent one and the only candidate — unless it has
    /// become `unavailable`, in which case the class falls back to the open
    /// pool so the operator can rebind it. Before first use the full
    /// available pool is offered.
    ///
    /// Flexible/mixed policy: every available room. Capacity and kind
    /// filtering is an operator concern, not enforced here.
    ///
    /// Read-only: this only narrows choices, it never writes.
    #[instrument(skip(all_rooms, schedule))]
    pub async fn candidate_rooms(
        class: &Class,
        all_rooms: &[Room],
        schedule: &dyn ScheduleStore,
        config: &EngineConfig,
    ) -> EngineResult<Vec<Room>> {
        let level = LevelService::classify(&class.level_label);
        let policy = Self::resolve_policy(level, config);

        if policy == RoomPolicy::Fixed
            && let Some(bound_id) = Self::bound_room(class, schedule).await?
        {
            match all_rooms.iter().find(|r| r.id == bound_id) {
                Some(room) if room.status != RoomStatus::Unavailable => {
                    return Ok(vec![room.clone()]);
                }
                Some(room) => {
                    debug!(
                        room_id = %room.id,
                        class_id = %class.id,
                        "bound room unavailable, offering the open pool"
                    );
                }
                // Stale reference: the bound room left the catalog.
                None => {}
            }
        }

        Ok(all_rooms.iter().filter(|r| r.is_bookable()).cloned().collect())
    }

    /// The room a class has ever been scheduled into, if any.
    async fn bound_room(
        class: &Class,
        schedule: &dyn ScheduleStore,
    ) -> EngineResult<Option<RoomId>> {
        let entries = schedule.list_for_class(class.institution_id, class.id).await?;
        Ok(entries.first().map(|e| e.room_id))
    }
}
