//! Per-frame simulation tick
//!
//! Fixed order: actor physics, obstacle spawn/advance (scoring), collision.
//! Termination found early in the tick is applied at the end, so a pass
//! registered in the same tick as a fatal contact still counts.

use super::actor::BoundaryContact;
use super::collision::first_collision;
use super::snapshot::RenderSnapshot;
use super::state::{EndCause, Engine, GameEvent, RunState};

impl Engine {
    /// Advance one tick at timestamp `now_ms` and return what to draw.
    ///
    /// Call at most once per frame. When not running this changes nothing and
    /// just returns the current snapshot.
    pub fn step(&mut self, now_ms: f64) -> RenderSnapshot {
        if self.run_state != RunState::Running {
            return self.snapshot();
        }

        self.ticks += 1;
        let mut termination = None;

        match self.actor.apply_gravity_step(&self.config) {
            BoundaryContact::Floor => termination = Some(EndCause::Floor),
            BoundaryContact::Ceiling => self.events.push(GameEvent::CeilingBump),
            BoundaryContact::None => {}
        }

        if let Some(obstacle) = self.stream.maybe_spawn(now_ms, &self.config, &mut self.rng) {
            self.events.push(GameEvent::ObstacleSpawned {
                top_height: obstacle.top_height,
            });
        }

        let passed = self.stream.advance(self.actor.pos.x, &self.config);
        for _ in 0..passed {
            self.score += 1;
            self.events.push(GameEvent::ObstaclePassed { score: self.score });
            log::debug!("Obstacle passed, score {}", self.score);
        }

        if termination.is_none() && first_collision(&self.actor, self.stream.obstacles()).is_some() {
            termination = Some(EndCause::Obstacle);
        }

        log::trace!(
            "tick {} y={:.1} vy={:.2} obstacles={}",
            self.ticks,
            self.actor.pos.y,
            self.actor.vel_y,
            self.stream.len()
        );

        if let Some(cause) = termination {
            self.end_run(cause);
        }

        self.snapshot()
    }
}
