//! Cloud spawning, scrolling and pruning
//!
//! Spawn spacing follows spawn history (`last_spawn_x`), not where the live
//! clouds currently are. Each new cloud lands one random gap past the
//! previous spawn point, so two clouds can never be closer than the
//! minimum gap, even right after the collection has been emptied.

use rand::Rng;

use super::state::{GameEvent, GameState, Obstacle};

/// Whether the manager should append a cloud this tick
pub fn needs_spawn(state: &GameState) -> bool {
    match state.obstacles.last() {
        None => true,
        Some(rightmost) => rightmost.pos.x < state.tuning.width - state.tuning.min_gap,
    }
}

/// Append one cloud a random gap past the previous spawn point
pub fn spawn_obstacle(state: &mut GameState) {
    let t = &state.tuning;
    let (min_h, max_h) = (t.obstacle_min_height, t.obstacle_max_height);
    let (min_gap, max_gap) = (t.min_gap, t.max_gap);
    let (width, ground_y) = (t.obstacle_width, t.ground_y());

    let rng = state.rng();
    let height = rng.random_range(min_h..=max_h);
    let gap = rng.random_range(min_gap..=max_gap);
    let x = state.last_spawn_x + gap;

    state.obstacles.push(Obstacle::grounded(x, width, height, ground_y));
    state.last_spawn_x = x;

    log::debug!("Spawned cloud at x={:.1} height={:.1}", x, height);
    state.push_event(GameEvent::ObstacleSpawned { x, height });
}

/// Scroll every cloud left and drop the ones fully off-screen.
///
/// Returns how many clouds were removed (oldest first).
pub fn advance_and_prune(state: &mut GameState) -> u32 {
    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
    }

    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_offscreen());
    let removed = (before - state.obstacles.len()) as u32;

    if removed > 0 {
        log::debug!("Cleared {} cloud(s)", removed);
    }
    removed
}

/// Per-tick obstacle update: scroll, prune, then refill
pub fn update_obstacles(state: &mut GameState) -> u32 {
    let removed = advance_and_prune(state);
    if needs_spawn(state) {
        spawn_obstacle(state);
    }
    removed
}
