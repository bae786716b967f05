//! Collision detection for the actor against obstacle pairs
//!
//! Everything is axis-aligned: the actor is a rectangle and each obstacle is a
//! full-height column with a gap cut out of it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::Obstacle;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap on the x axis (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.min.x < other.max().x && self.max().x > other.min.x
    }
}

/// Does the actor touch either barrier of this obstacle?
///
/// True iff the horizontal spans overlap and the actor is not entirely inside
/// the gap. An actor exactly flush with a gap edge is still inside.
pub fn actor_hits_obstacle(actor: &Actor, obstacle: &Obstacle) -> bool {
    let body = actor.rect();
    if !body.overlaps_x(&obstacle.top_rect()) {
        return false;
    }
    let gap_top = obstacle.top_height;
    let gap_bottom = obstacle.top_height + obstacle.gap_height;
    body.min.y < gap_top || body.max().y > gap_bottom
}

/// Index of the first obstacle (in spawn order) the actor collides with
pub fn first_collision<'a, I>(actor: &Actor, obstacles: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    obstacles
        .into_iter()
        .position(|obstacle| actor_hits_obstacle(actor, obstacle))
}
