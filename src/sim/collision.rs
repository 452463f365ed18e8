//! Forgiving bee/cloud collision
//!
//! Both sprites are tested through hitboxes inset from their drawn bounds.
//! A cloud's bottom band is left out entirely so the bee can graze the
//! fluffy base without dying.

use glam::Vec2;

use super::state::{Obstacle, Player};
use crate::tuning::Tuning;

/// Axis-aligned rectangle used for overlap tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub min: Vec2,
    pub max: Vec2,
}

impl Hitbox {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap: touching edges do not collide
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Bee hitbox, inset on every side
pub fn player_hitbox(player: &Player, tuning: &Tuning) -> Hitbox {
    let inset = Vec2::new(tuning.player_inset_x, tuning.player_inset_y);
    Hitbox::new(player.pos + inset, player.pos + player.size - inset)
}

/// Cloud hitbox: inset on the sides and top, bottom band excluded
pub fn obstacle_hitbox(obstacle: &Obstacle, tuning: &Tuning) -> Hitbox {
    let min = obstacle.pos + Vec2::new(tuning.obstacle_inset_x, tuning.obstacle_inset_top);
    let max = obstacle.pos + obstacle.size
        - Vec2::new(tuning.obstacle_inset_x, tuning.obstacle_inset_bottom);
    Hitbox::new(min, max)
}

/// Index of the first cloud the bee collides with
pub fn find_collision(player: &Player, obstacles: &[Obstacle], tuning: &Tuning) -> Option<usize> {
    let bee = player_hitbox(player, tuning);
    obstacles
        .iter()
        .position(|o| bee.overlaps(&obstacle_hitbox(o, tuning)))
}
