//! Obstacle pairs and the stream that spawns, scrolls, scores and prunes them

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;

/// A top and bottom barrier sharing one x position, separated by a gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge; decreases every tick
    pub x: f32,
    /// Height of the top barrier, fixed at spawn
    pub top_height: f32,
    /// Set once the actor has cleared this pair (score dedup)
    pub passed: bool,
    pub width: f32,
    pub gap_height: f32,
}

impl Obstacle {
    pub fn new(x: f32, top_height: f32, config: &GameConfig) -> Self {
        Self {
            x,
            top_height,
            passed: false,
            width: config.obstacle_width,
            gap_height: config.gap_height,
        }
    }

    /// Right edge (the last part of the pair the actor flies past)
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Entirely past the left edge of the playfield
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() < 0.0
    }

    /// Top barrier: from y = 0 down to the gap
    pub fn top_rect(&self) -> Rect {
        Rect::new(Vec2::new(self.x, 0.0), Vec2::new(self.width, self.top_height))
    }

    /// Bottom barrier: from the gap down to the playfield floor
    pub fn bottom_rect(&self, playfield_height: f32) -> Rect {
        let top = self.top_height + self.gap_height;
        Rect::new(
            Vec2::new(self.x, top),
            Vec2::new(self.width, (playfield_height - top).max(0.0)),
        )
    }
}

/// Ordered obstacles (spawn order) plus the spawn clock
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
    /// Timestamp (ms) of the most recent spawn, 0 after a reset
    last_spawn_ms: f64,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every obstacle and rewind the spawn clock
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.last_spawn_ms = 0.0;
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn last_spawn_ms(&self) -> f64 {
        self.last_spawn_ms
    }

    /// Append an already-built obstacle at the end of the stream
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Spawn one obstacle at the right edge if the interval has elapsed.
    ///
    /// At most one spawn per call: missed intervals are not back-filled.
    /// Returns the spawned obstacle.
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        now_ms: f64,
        config: &GameConfig,
        rng: &mut R,
    ) -> Option<&Obstacle> {
        // A NaN timestamp is never due
        let due = now_ms - self.last_spawn_ms > config.spawn_interval_ms;
        if !due {
            return None;
        }

        let (min, max) = config.top_height_range();
        let top_height = rng.random_range(min..=max) as f32;
        self.obstacles
            .push(Obstacle::new(config.playfield_width, top_height, config));
        self.last_spawn_ms = now_ms;

        log::debug!("Spawned obstacle at t={now_ms:.0}ms, top height {top_height}");
        self.obstacles.last()
    }

    /// Scroll every obstacle left, award passes, then prune off-screen pairs.
    ///
    /// An obstacle is passed the tick its trailing edge moves left of
    /// `actor_x`; each one is counted exactly once. Returns the number of
    /// newly passed obstacles.
    pub fn advance(&mut self, actor_x: f32, config: &GameConfig) -> u32 {
        for obstacle in &mut self.obstacles {
            obstacle.x -= config.obstacle_speed;
        }

        let mut passed = 0;
        for obstacle in self.obstacles.iter_mut().filter(|o| !o.passed) {
            if obstacle.trailing_edge() < actor_x {
                obstacle.passed = true;
                passed += 1;
            }
        }

        self.obstacles.retain(|o| !o.is_offscreen());
        passed
    }
}
