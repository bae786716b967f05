//! AI input source
//!
//! Reads the same snapshot a presenter draws and answers with the same
//! commands a keyboard would send, so demo mode and tests drive the engine
//! through its public surface only.

use crate::config::GameConfig;
use crate::sim::{Command, RenderSnapshot, RunState};

/// Flaps to keep the actor's bottom edge just above the bottom of the next gap
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Clearance kept above the gap bottom (pixels)
    pub margin: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { margin: 8.0 }
    }
}

impl Autopilot {
    pub fn new(margin: f32) -> Self {
        Self { margin }
    }

    /// Lowest safe y for the actor's bottom edge right now.
    ///
    /// Targets the first obstacle not yet cleared; with an empty field the
    /// centered band of one gap height is used instead.
    pub fn target_floor(&self, snapshot: &RenderSnapshot, config: &GameConfig) -> f32 {
        let gap_bottom = match snapshot.next_obstacle() {
            Some(obstacle) => obstacle.top_height + obstacle.gap_height,
            None => (snapshot.playfield_height + config.gap_height) / 2.0,
        };
        gap_bottom - self.margin
    }

    /// Decide this frame's command, if any
    pub fn decide(&self, snapshot: &RenderSnapshot, config: &GameConfig) -> Option<Command> {
        if snapshot.state != RunState::Running {
            return None;
        }
        let actor = &snapshot.actor;
        // Where the bottom edge lands next tick without a flap
        let next_vel = actor.vel_y + config.gravity;
        let next_bottom = actor.pos.y + next_vel + actor.height;

        if next_bottom > self.target_floor(snapshot, config) {
            Some(Command::Flap)
        } else {
            None
        }
    }
}
