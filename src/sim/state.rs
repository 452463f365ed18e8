//! Game state and core simulation types
//!
//! One [`GameState`] holds everything a play-through mutates. Nothing lives
//! in globals, so independent sessions can run side by side (tests do).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

/// Current phase of a play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the player to submit a name
    NotStarted,
    /// Active gameplay, one tick per frame
    Running,
    /// Run ended by a collision; waiting for restart
    GameOver,
}

/// State changes the presentation layer cares about
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new run began (first start or restart)
    SessionStarted,
    /// Score changed to the given total
    ScoreChanged { score: u64 },
    /// Scroll speed stepped up
    SpeedChanged { speed: f32 },
    /// A cloud was appended at spawn position `x`
    ObstacleSpawned { x: f32, height: f32 },
    /// The bee left the ground
    Jumped,
    /// Collision ended the run
    SessionEnded { score: u64 },
}

/// The bee
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = down)
    pub vel_y: f32,
    pub gravity: f32,
    /// Magnitude of the upward velocity set by a jump
    pub jump_impulse: f32,
    /// True between an accepted jump and the next ground contact
    pub airborne: bool,
}

impl Player {
    /// Bee standing on the ground
    pub fn new(tuning: &Tuning) -> Self {
        let size = Vec2::splat(tuning.player_size);
        Self {
            pos: Vec2::new(tuning.player_x, tuning.ground_y() - size.y),
            size,
            vel_y: 0.0,
            gravity: tuning.gravity,
            jump_impulse: tuning.jump_impulse,
            airborne: false,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// A cloud
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// Cloud of the given height standing on the ground at `x`
    pub fn grounded(x: f32, width: f32, height: f32, ground_y: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "obstacle must have positive size");
        Self {
            pos: Vec2::new(x, ground_y - height),
            size: Vec2::new(width, height),
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully scrolled past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Complete state of one play-through
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Active clouds in spawn order (= left-to-right order)
    pub obstacles: Vec<Obstacle>,
    /// Spawn position of the most recent cloud; advances with spawns only
    pub last_spawn_x: f32,
    pub score: u64,
    /// Scroll speed (pixels/tick)
    pub speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state waiting for a player
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::NotStarted,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            last_spawn_x: 0.0,
            score: 0,
            speed: tuning.speed_start,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            tuning,
        }
    }

    /// Reset everything a run mutates and start running
    pub fn start(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.last_spawn_x = 0.0;
        self.score = 0;
        self.speed = self.tuning.speed_start;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;

        self.events.clear();
        self.events.push(GameEvent::SessionStarted);
        self.events.push(GameEvent::ScoreChanged { score: 0 });
        log::info!("Run started with seed {}", seed);
    }

    pub fn ground_y(&self) -> f32 {
        self.tuning.ground_y()
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Seeded RNG for spawn rolls
    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
