//! Vertical bee physics and the jump trigger

use super::state::Player;

/// Advance the bee by one tick: gravity, then ground clamp
pub fn step_player(player: &mut Player, ground_y: f32) {
    player.vel_y += player.gravity;
    player.pos.y += player.vel_y;

    if player.bottom() >= ground_y {
        player.pos.y = ground_y - player.size.y;
        player.vel_y = 0.0;
        player.airborne = false;
    }

    debug_assert!(player.bottom() <= ground_y + f32::EPSILON * ground_y.abs().max(1.0));
}

/// Debounce for jump input (key repeat, double taps)
#[derive(Debug, Clone)]
pub struct JumpGate {
    cooldown_ms: f64,
    last_jump_ms: Option<f64>,
}

impl JumpGate {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            last_jump_ms: None,
        }
    }

    /// Whether a trigger at `now_ms` is outside the cooldown window
    pub fn is_open(&self, now_ms: f64) -> bool {
        match self.last_jump_ms {
            Some(last) => now_ms - last > self.cooldown_ms,
            None => true,
        }
    }
}

/// Start a jump if grounded and the gate is open. Returns whether it jumped.
pub fn try_jump(player: &mut Player, gate: &mut JumpGate, now_ms: f64) -> bool {
    if player.airborne || !gate.is_open(now_ms) {
        return false;
    }
    player.vel_y = -player.jump_impulse;
    player.airborne = true;
    gate.last_jump_ms = Some(now_ms);
    true
}
