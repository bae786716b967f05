//! Read-only view handed to the presenter after every tick

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::collision::Rect;
use super::obstacle::Obstacle;
use super::state::{Engine, RunState};

/// Everything needed to draw one frame and pick which overlay to show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub actor: Actor,
    /// In spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub state: RunState,
    pub playfield_width: f32,
    pub playfield_height: f32,
}

impl RenderSnapshot {
    /// Top and bottom barrier rectangles per obstacle, in spawn order
    pub fn barrier_rects(&self) -> impl Iterator<Item = (Rect, Rect)> + '_ {
        self.obstacles
            .iter()
            .map(|o| (o.top_rect(), o.bottom_rect(self.playfield_height)))
    }

    /// First obstacle the actor has not cleared yet
    pub fn next_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| !o.passed)
    }
}

impl Engine {
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            actor: self.actor.clone(),
            obstacles: self.stream.obstacles().to_vec(),
            score: self.score,
            state: self.run_state,
            playfield_width: self.config.playfield_width,
            playfield_height: self.config.playfield_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;

    #[test]
    fn test_snapshot_reflects_engine() {
        let mut engine = Engine::new(GameConfig::default(), 3).expect("valid config");
        engine.start();
        let config = engine.config().clone();
        engine.stream.push(Obstacle::new(200.0, 60.0, &config));
        engine.stream.push(Obstacle::new(30.0, 150.0, &config));
        engine.score = 2;

        let snap = engine.snapshot();
        assert_eq!(snap.state, RunState::Running);
        assert_eq!(snap.score, 2);
        assert_eq!(snap.obstacles.len(), 2);
        assert_eq!(snap.obstacles[0].x, 200.0);

        let rects: Vec<_> = snap.barrier_rects().collect();
        assert_eq!(rects[1].0.size, Vec2::new(52.0, 150.0));
        assert_eq!(rects[1].1.min, Vec2::new(30.0, 270.0));
        assert_eq!(rects[1].1.max().y, 480.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let engine = Engine::new(GameConfig::default(), 3).expect("valid config");
        let json = serde_json::to_string(&engine.snapshot()).expect("serialize");
        assert!(json.contains("\"state\":\"Idle\""));
        let back: RenderSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, engine.snapshot());
    }

    #[test]
    fn test_next_obstacle_skips_passed() {
        let config = GameConfig::default();
        let mut engine = Engine::new(config.clone(), 3).expect("valid config");
        let mut cleared = Obstacle::new(-10.0, 60.0, &config);
        cleared.passed = true;
        engine.stream.push(cleared);
        engine.stream.push(Obstacle::new(140.0, 90.0, &config));
        let snap = engine.snapshot();
        assert_eq!(snap.next_obstacle().map(|o| o.x), Some(140.0));
    }
}
