//! Per-frame simulation tick
//!
//! One call advances the run by exactly one frame. The host decides when to
//! call it (animation frame in the browser, a plain loop in tests and the
//! native build) and stops calling once the phase leaves `Running`.

use super::collision::find_collision;
use super::difficulty::award_cleared;
use super::obstacles::update_obstacles;
use super::physics::step_player;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    // Nothing moves before the name is entered or after a crash
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    let ground_y = state.ground_y();
    step_player(&mut state.player, ground_y);

    let cleared = update_obstacles(state);

    if let Some(index) = find_collision(&state.player, &state.obstacles, &state.tuning) {
        let hit = &state.obstacles[index];
        log::info!(
            "Game over: hit cloud at x={:.1} after {} ticks, score {}",
            hit.pos.x,
            state.time_ticks,
            state.score
        );
        state.phase = GamePhase::GameOver;
    }

    award_cleared(state, cleared);

    if state.phase == GamePhase::GameOver {
        let score = state.score;
        state.push_event(GameEvent::SessionEnded { score });
    }
}
