//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no delta-time scaling
//! - Seeded RNG only
//! - Time comes in as a `now` argument, never from a global clock
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod obstacle;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use actor::{Actor, BoundaryContact};
pub use collision::{Rect, actor_hits_obstacle, first_collision};
pub use obstacle::{Obstacle, ObstacleStream};
pub use snapshot::RenderSnapshot;
pub use state::{Command, EndCause, Engine, GameEvent, RunState};
