//! # Scolaris Engine
//!
//! The timetable assignment and conflict-resolution core of a school
//! management product. It classifies classes into pedagogical levels,
//! derives room-allocation policies, binds teachers to classes or subjects
//! under the level's rules, and validates proposed timetable slots against
//! double-bookings.
//!
//! ## Overview
//!
//! The rules differ by level:
//!
//! - **Maternelle / primaire**: one homeroom teacher covers every subject of
//!   one class, in one permanent room (fixed room policy).
//! - **Secondaire (1er / 2nd cycle)**: teachers are bound to one subject
//!   across several classes, rooms come from a shared pool (mixed policy by
//!   default, configurable per institution).
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture:
//!
//! ```text
//! src/
//! ├── config/           # Engine configuration from environment
//! ├── engine.rs         # Facade tying config and collaborators together
//! ├── logging.rs        # Tracing initialization
//! ├── modules/          # Feature modules
//! │   ├── levels/      # Level classifier (keyword table + matcher)
//! │   ├── rooms/       # Room policy resolver and candidate pools
//! │   ├── subjects/    # Subject scope filter
//! │   ├── assignments/ # Assignment resolver (homeroom / subject modes)
//! │   ├── schedule/    # Conflict checker and slot booking
//! │   └── projection/  # Display projections over catalog snapshots
//! └── utils/           # Error taxonomy
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `service.rs`: Business logic
//! - `model.rs`: Module-local types and configuration tables
//!
//! Persistence is a collaborator, never owned: the engine consumes the
//! catalog and store traits from [`scolaris_store`] and performs schedule
//! writes as a compare-and-write against a per-day version token, so
//! concurrent operators cannot double-book a slot.
//!
//! ## Quick start
//!
//! ```ignore
//! use scolaris::{Engine, config::EngineConfig};
//! use scolaris_store::MemoryStore;
//! use std::sync::Arc;
//!
//! let engine = Engine::with_store(EngineConfig::from_env(), Arc::new(MemoryStore::new()));
//! let level = engine.classify_level("CM2 B");
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Engine configuration
//! - [`engine`]: The facade consumed by the surrounding product
//! - [`logging`]: Tracing and log-file setup
//! - [`modules`]: Feature modules (levels, rooms, subjects, assignments,
//!   schedule, projection)
//! - [`utils`]: Shared error types

pub mod config;
pub mod engine;
pub mod logging;
pub mod modules;
pub mod utils;

pub use engine::Engine;
pub use utils::errors::{EngineError, EngineResult};

// Re-export workspace crates for convenience
pub use scolaris_models;
pub use scolaris_store;
