//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time inside a tick
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod obstacles;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, find_collision, obstacle_hitbox, player_hitbox};
pub use physics::{JumpGate, step_player, try_jump};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Player};
pub use tick::tick;
