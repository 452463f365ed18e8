//! Swarm Bee - An endless side-scrolling bee jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `renderer`: 2D draw calls against a canvas-like surface
//! - `hud`: Presentation bindings (score label, header, game-over view)
//! - `session`: Name entry, jump input and restart flow
//! - `tuning`: Data-driven game balance

pub mod hud;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;
    /// Ground band height at the bottom of the canvas
    pub const GROUND_MARGIN: f32 = 40.0;

    /// Bee defaults
    pub const PLAYER_X: f32 = 120.0;
    pub const PLAYER_SIZE: f32 = 34.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.55;
    /// Upward velocity applied by a jump (pixels/tick)
    pub const JUMP_IMPULSE: f32 = 13.0;
    /// Minimum time between two accepted jumps
    pub const JUMP_COOLDOWN_MS: f64 = 150.0;

    /// Cloud defaults
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 65.0;
    /// Horizontal distance between successive spawn points
    pub const MIN_GAP: f32 = 320.0;
    pub const MAX_GAP: f32 = 520.0;

    /// Score awarded per cloud that leaves the screen
    pub const SCORE_PER_OBSTACLE: u64 = 20;

    /// Scroll speed ramp (pixels/tick)
    pub const SPEED_START: f32 = 3.0;
    pub const SPEED_STEP: f32 = 0.25;
    pub const SPEED_MAX: f32 = 7.5;
    /// Score interval between speed steps
    pub const SPEED_MILESTONE: u64 = 1250;

    /// Forgiving hitboxes
    pub const OBSTACLE_INSET_X: f32 = 5.0;
    pub const OBSTACLE_INSET_TOP: f32 = 8.0;
    pub const OBSTACLE_INSET_BOTTOM: f32 = 7.0;
    pub const PLAYER_INSET_X: f32 = 5.0;
    pub const PLAYER_INSET_Y: f32 = 8.0;

    /// Name used when the player submits a blank name
    pub const DEFAULT_PLAYER_NAME: &str = "SwarmBee";
}
