//! The flapping actor
//!
//! Semi-implicit Euler at a fixed timestep of one tick: gravity is added to
//! velocity, then velocity to position. There is no delta-time scaling, so the
//! apparent speed follows the caller's frame rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;

/// Which playfield edge the actor was clamped against during a physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryContact {
    None,
    /// Clamped to y = 0. Forgiving: the run continues.
    Ceiling,
    /// Clamped to the floor. Fatal.
    Floor,
}

/// The player-controlled object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner; x never changes during a run
    pub pos: Vec2,
    /// Vertical velocity in pixels/tick (positive = down)
    pub vel_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Actor {
    /// Fresh actor at rest in the vertical center of the playfield
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.actor_x, config.actor_spawn_y()),
            vel_y: 0.0,
            width: config.actor_width,
            height: config.actor_height,
        }
    }

    /// Advance one tick under gravity and clamp to the playfield.
    ///
    /// Velocity is zeroed on either clamp. Only a floor contact should end
    /// the run; the caller decides what to do with the returned contact.
    pub fn apply_gravity_step(&mut self, config: &GameConfig) -> BoundaryContact {
        self.vel_y += config.gravity;
        self.pos.y += self.vel_y;

        let floor = config.playfield_height - self.height;
        if self.pos.y > floor {
            self.pos.y = floor;
            self.vel_y = 0.0;
            return BoundaryContact::Floor;
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel_y = 0.0;
            return BoundaryContact::Ceiling;
        }
        BoundaryContact::None
    }

    /// Override (not accumulate) the vertical velocity with the flap impulse
    pub fn flap(&mut self, impulse: f32) {
        self.vel_y = impulse;
    }

    /// Axis-aligned bounds for collision and drawing
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, self.height))
    }
}
