//! Game tuning
//!
//! Every numeric constant the simulation needs, fixed when an engine is built.
//! Loaded from JSON by native drivers; partial files override only the fields
//! they name.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tuning record shared by every part of one engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Actor ===
    /// Fixed horizontal position of the actor's left edge
    pub actor_x: f32,
    pub actor_width: f32,
    pub actor_height: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub min_segment_height: f32,
    pub obstacle_speed: f32,
    pub spawn_interval_ms: f64,

    // === Physics (per tick, no delta-time scaling) ===
    pub gravity: f32,
    pub flap_impulse: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            actor_x: ACTOR_X,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,

            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            min_segment_height: MIN_SEGMENT_HEIGHT,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every construction-time precondition
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("min_segment_height", self.min_segment_height),
            ("obstacle_speed", self.obstacle_speed),
            ("gravity", self.gravity),
        ];
        for (field, value) in dims {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field,
                    value: value as f64,
                });
            }
        }

        if !self.spawn_interval_ms.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "spawn_interval_ms",
            });
        }
        if self.spawn_interval_ms <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "spawn_interval_ms",
                value: self.spawn_interval_ms,
            });
        }

        if !self.flap_impulse.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "flap_impulse",
            });
        }
        if self.flap_impulse >= 0.0 {
            return Err(ConfigError::FlapNotUpward {
                value: self.flap_impulse,
            });
        }

        if !self.actor_x.is_finite() {
            return Err(ConfigError::NonFinite { field: "actor_x" });
        }
        if self.actor_x < 0.0
            || self.actor_x + self.actor_width > self.playfield_width
            || self.actor_height > self.playfield_height
        {
            return Err(ConfigError::ActorOutOfBounds);
        }

        let (min, max) = self.top_height_range();
        if self.gap_height + 2.0 * self.min_segment_height > self.playfield_height || max < min {
            return Err(ConfigError::GapTooLarge {
                gap: self.gap_height,
                min_segment: self.min_segment_height,
                playfield: self.playfield_height,
            });
        }

        if self.actor_height > self.gap_height {
            return Err(ConfigError::ActorTallerThanGap {
                actor: self.actor_height,
                gap: self.gap_height,
            });
        }

        Ok(())
    }

    /// Inclusive whole-pixel range for a spawned obstacle's top barrier height
    pub fn top_height_range(&self) -> (i32, i32) {
        let min = self.min_segment_height.ceil() as i32;
        let max = (self.playfield_height - self.gap_height - self.min_segment_height).floor() as i32;
        (min, max)
    }

    /// Lowest y the actor's top edge may reach before touching the floor
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.playfield_height - self.actor_height
    }

    /// Vertically centered actor position used at every reset
    #[inline]
    pub fn actor_spawn_y(&self) -> f32 {
        self.playfield_height / 2.0 - self.actor_height / 2.0
    }
}
