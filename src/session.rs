//! Session controller: name entry, jump input and restart
//!
//! Owns one [`GameState`] plus the bits of input state that outlive a single
//! run (the player's name and the jump debounce clock).

use crate::consts::DEFAULT_PLAYER_NAME;
use crate::hud::{Presenter, present_events};
use crate::sim::{GameEvent, GamePhase, GameState, JumpGate, tick, try_jump};
use crate::tuning::Tuning;

/// Name to display for a submitted name; blank input gets the default
pub fn display_name(raw: &str) -> String {
    if raw.trim().is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        raw.to_string()
    }
}

/// One browser tab's worth of play
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    player_name: String,
    jump_gate: JumpGate,
}

impl Session {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let jump_gate = JumpGate::new(tuning.jump_cooldown_ms);
        Self {
            state: GameState::new(tuning, seed),
            player_name: String::new(),
            jump_gate,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Name entered: remember it and start a fresh run
    pub fn submit_name(&mut self, raw: &str, seed: u64) {
        self.player_name = display_name(raw);
        log::info!("Player {} joined", self.player_name);
        self.state.start(seed);
    }

    /// Jump input (key or touch). Ignored outside a run, while airborne and
    /// within the cooldown window.
    pub fn jump(&mut self, now_ms: f64) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let jumped = try_jump(&mut self.state.player, &mut self.jump_gate, now_ms);
        if jumped {
            self.state.push_event(GameEvent::Jumped);
        }
        jumped
    }

    /// "Play Again": full reset, only valid after a crash
    pub fn restart(&mut self, seed: u64) -> bool {
        if self.state.phase != GamePhase::GameOver {
            return false;
        }
        log::info!("{} restarts (last score {})", self.player_name, self.state.score);
        self.state.start(seed);
        true
    }

    /// Advance one frame; returns whether the host should schedule another
    pub fn tick(&mut self) -> bool {
        tick(&mut self.state);
        self.state.is_running()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Flush pending events to the presentation layer
    pub fn present(&mut self, presenter: &mut impl Presenter) {
        let events = self.state.drain_events();
        present_events(presenter, &self.player_name, &events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::GameOverView;
    use crate::sim::{find_collision, player_hitbox};

    #[derive(Default)]
    struct Overlay {
        header: String,
        score: String,
        game_over: Option<GameOverView>,
    }

    impl Presenter for Overlay {
        fn show_session(&mut self, header: &str) {
            self.header = header.to_string();
            self.game_over = None;
        }
        fn show_score(&mut self, label: &str) {
            self.score = label.to_string();
        }
        fn show_game_over(&mut self, view: &GameOverView) {
            self.game_over = Some(view.clone());
        }
    }

    #[test]
    fn test_blank_name_gets_default() {
        assert_eq!(display_name(""), "SwarmBee");
        assert_eq!(display_name("   \t"), "SwarmBee");
        assert_eq!(display_name("Ace"), "Ace");
        assert_eq!(display_name(" Ace "), " Ace ");
    }

    #[test]
    fn test_jump_ignored_before_start() {
        let mut session = Session::new(Tuning::default(), 1);
        assert!(!session.jump(1000.0));
        assert_eq!(session.state().player.vel_y, 0.0);
    }

    #[test]
    fn test_second_jump_within_cooldown_is_noop() {
        let mut session = Session::new(Tuning::default(), 1);
        session.submit_name("Ace", 1);
        assert!(session.jump(1000.0));
        let vel = session.state().player.vel_y;
        assert!(!session.jump(1100.0));
        assert_eq!(session.state().player.vel_y, vel);
        assert!(session.drain_events().contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut session = Session::new(Tuning::default(), 1);
        assert!(!session.restart(2));
        session.submit_name("Ace", 1);
        assert!(!session.restart(2));
        assert_eq!(session.phase(), GamePhase::Running);
    }

    /// Tick until the run ends, never jumping
    fn run_to_crash(session: &mut Session) -> u64 {
        let mut ticks = 0;
        while session.tick() {
            ticks += 1;
            assert!(ticks < 10_000, "run never ended");
        }
        ticks
    }

    #[test]
    fn test_end_to_end_without_jumping() {
        let mut session = Session::new(Tuning::default(), 2024);
        let mut overlay = Overlay::default();

        session.submit_name("Ace", 2024);
        session.present(&mut overlay);
        assert_eq!(overlay.header, "Bee: Ace");
        assert_eq!(overlay.score, "Score: 0");

        // Spawn points follow the gap history: gap1, gap1 + gap2, ...
        let mut spawns = Vec::new();
        let mut ground_y = Vec::new();
        let mut crashed = false;
        for _ in 0..10_000 {
            let running = session.tick();
            let state = session.state();
            ground_y.push(state.player.bottom());
            assert_eq!(state.player.vel_y, 0.0);
            let events = session.drain_events();
            for e in &events {
                if let GameEvent::ObstacleSpawned { x, .. } = e {
                    spawns.push(*x);
                }
            }
            present_events(&mut overlay, session.player_name(), &events);
            if !running {
                crashed = true;
                break;
            }
        }
        assert!(crashed);
        assert_eq!(session.phase(), GamePhase::GameOver);

        let t = &session.state().tuning;
        assert!(ground_y.iter().all(|&b| b == t.ground_y()));
        assert!(spawns[0] >= t.min_gap && spawns[0] <= t.max_gap);
        for pair in spawns.windows(2) {
            assert!(pair[1] - pair[0] >= t.min_gap && pair[1] - pair[0] <= t.max_gap);
        }

        // The crash happened because a cloud reached the bee's inset hitbox
        let state = session.state();
        assert!(find_collision(&state.player, &state.obstacles, t).is_some());
        let bee = player_hitbox(&state.player, t);
        assert!(state.obstacles.iter().any(|o| o.pos.x < bee.max.x));

        let view = overlay.game_over.expect("overlay shown");
        assert!(view.summary.contains("Ace"));
        assert!(view.summary.contains(&format!("Score: {}", state.score)));
        assert_eq!(overlay.score, format!("Score: {}", state.score));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = Session::new(Tuning::default(), 7);
        session.submit_name("", 7);
        assert_eq!(session.player_name(), "SwarmBee");
        run_to_crash(&mut session);
        session.drain_events();

        assert!(session.restart(8));
        let state = session.state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, state.tuning.speed_start);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.bottom(), state.ground_y());
        assert_eq!(state.player.vel_y, 0.0);
        assert!(!state.player.airborne);
        assert_eq!(state.last_spawn_x, 0.0);

        let mut overlay = Overlay::default();
        overlay.game_over = Some(GameOverView::new("SwarmBee", 40));
        session.present(&mut overlay);
        assert!(overlay.game_over.is_none());
        assert_eq!(overlay.score, "Score: 0");

        // And it runs again
        assert!(session.tick());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = Session::new(Tuning::default(), 5);
        let mut b = Session::new(Tuning::default(), 5);
        a.submit_name("A", 5);
        b.submit_name("B", 5);
        for _ in 0..50 {
            a.tick();
        }
        assert_eq!(b.state().time_ticks, 0);
        assert!(b.state().obstacles.is_empty());
        assert_eq!(a.state().time_ticks, 50);
    }
}
