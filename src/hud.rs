//! HUD and overlay presentation
//!
//! The simulation only emits [`GameEvent`]s. This module turns them into
//! the text the page shows and hands it to a [`Presenter`]; the browser
//! host implements `Presenter` on top of the DOM.

use crate::sim::GameEvent;

pub const GAME_OVER_TITLE: &str = "Game Over!";
pub const RESTART_LABEL: &str = "Play Again";

/// Score line shown above the canvas
pub fn score_label(score: u64) -> String {
    format!("Score: {}", score)
}

/// Name-tagged header
pub fn header_label(name: &str) -> String {
    format!("Bee: {}", name)
}

/// Contents of the game-over overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverView {
    pub title: String,
    /// "<name> – Score: N"
    pub summary: String,
    pub restart_label: String,
}

impl GameOverView {
    pub fn new(name: &str, score: u64) -> Self {
        Self {
            title: GAME_OVER_TITLE.to_string(),
            summary: format!("{} – Score: {}", name, score),
            restart_label: RESTART_LABEL.to_string(),
        }
    }
}

/// Something that can show the HUD (DOM in the browser, a log natively)
pub trait Presenter {
    /// A run started; show the header and hide any old overlay
    fn show_session(&mut self, header: &str);
    fn show_score(&mut self, label: &str);
    fn show_game_over(&mut self, view: &GameOverView);
}

/// Route simulation events to a presenter
pub fn present_events(presenter: &mut impl Presenter, player_name: &str, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::SessionStarted => presenter.show_session(&header_label(player_name)),
            GameEvent::ScoreChanged { score } => presenter.show_score(&score_label(*score)),
            GameEvent::SessionEnded { score } => {
                presenter.show_game_over(&GameOverView::new(player_name, *score))
            }
            GameEvent::SpeedChanged { .. } | GameEvent::ObstacleSpawned { .. } | GameEvent::Jumped => {}
        }
    }
}

/// Presenter that writes through the `log` facade (native host)
#[derive(Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn show_session(&mut self, header: &str) {
        log::info!("{}", header);
    }

    fn show_score(&mut self, label: &str) {
        log::debug!("{}", label);
    }

    fn show_game_over(&mut self, view: &GameOverView) {
        log::info!("{} {}", view.title, view.summary);
    }
}
