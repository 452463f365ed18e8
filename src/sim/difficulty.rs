//! Score and speed ramp
//!
//! Score only grows when clouds leave the screen. Speed steps up once per
//! milestone the score crosses, up to the cap.

use super::state::{GameEvent, GameState};

/// Award score for cleared clouds and apply any speed steps it earns
pub fn award_cleared(state: &mut GameState, cleared: u32) {
    if cleared == 0 {
        return;
    }

    let old_score = state.score;
    let new_score = old_score + state.tuning.score_per_obstacle * u64::from(cleared);
    debug_assert!(new_score >= old_score, "score must never decrease");
    state.score = new_score;
    state.push_event(GameEvent::ScoreChanged { score: new_score });

    let steps = milestones_crossed(old_score, new_score, state.tuning.speed_milestone);
    if steps > 0 {
        apply_speed_steps(state, steps);
    }
}

/// Number of milestone multiples in `(old, new]`
pub fn milestones_crossed(old: u64, new: u64, milestone: u64) -> u64 {
    if milestone == 0 || new <= old {
        return 0;
    }
    new / milestone - old / milestone
}

fn apply_speed_steps(state: &mut GameState, steps: u64) {
    let before = state.speed;
    let (step, max) = (state.tuning.speed_step, state.tuning.speed_max);
    for _ in 0..steps {
        state.speed = (state.speed + step).min(max);
    }
    debug_assert!(state.speed <= max, "speed above cap");

    if state.speed > before {
        log::info!("Speed up: {:.2} -> {:.2} (score {})", before, state.speed, state.score);
        state.push_event(GameEvent::SpeedChanged { speed: state.speed });
    }
}
