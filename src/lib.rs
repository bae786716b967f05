//! Sky Gap - A flap-through-the-gap arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, run state)
//! - `config`: Construction-time tuning record and validation
//! - `autopilot`: AI input source that drives the engine through commands
//!
//! Rendering, screen overlays and raw input wiring live outside this crate.
//! A presenter calls [`sim::Engine::step`] once per frame and draws the
//! returned [`sim::RenderSnapshot`].

pub mod autopilot;
pub mod config;
pub mod error;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::GameConfig;
pub use error::ConfigError;

/// Default tuning constants (retro 320x480 playfield)
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 320.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;

    /// Actor defaults - fixed column, falls and flaps vertically
    pub const ACTOR_X: f32 = 50.0;
    pub const ACTOR_WIDTH: f32 = 34.0;
    pub const ACTOR_HEIGHT: f32 = 24.0;

    /// Obstacle pair defaults
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    /// Vertical space between top and bottom barrier
    pub const GAP_HEIGHT: f32 = 120.0;
    /// Shortest barrier segment a spawn may produce
    pub const MIN_SEGMENT_HEIGHT: f32 = 50.0;

    /// Velocity added every tick (pixels/tick², positive = down)
    pub const GRAVITY: f32 = 0.4;
    /// Velocity set on flap (pixels/tick, negative = up)
    pub const FLAP_IMPULSE: f32 = -7.0;
    /// Horizontal obstacle scroll (pixels/tick)
    pub const OBSTACLE_SPEED: f32 = 2.0;
    /// Minimum time between spawns (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 1800.0;

    /// Nominal frame duration used by headless drivers (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
