//! Game balance tuning
//!
//! Every gameplay constant lives here so it can be overridden without a
//! rebuild. Overrides are partial JSON documents: anything not named keeps
//! its default from [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning document can be rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("Tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Tuning IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl TuningError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        TuningError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Canvas ===
    pub width: f32,
    pub height: f32,
    /// Height of the ground band; ground level is `height - ground_margin`
    pub ground_margin: f32,

    // === Bee ===
    pub player_x: f32,
    pub player_size: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub jump_cooldown_ms: f64,

    // === Clouds ===
    pub obstacle_width: f32,
    pub obstacle_min_height: f32,
    pub obstacle_max_height: f32,
    pub min_gap: f32,
    pub max_gap: f32,

    // === Score & speed ===
    pub score_per_obstacle: u64,
    pub speed_start: f32,
    pub speed_step: f32,
    pub speed_max: f32,
    pub speed_milestone: u64,

    // === Hitboxes ===
    pub obstacle_inset_x: f32,
    pub obstacle_inset_top: f32,
    /// Band at the bottom of a cloud that never collides
    pub obstacle_inset_bottom: f32,
    pub player_inset_x: f32,
    pub player_inset_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            ground_margin: GROUND_MARGIN,

            player_x: PLAYER_X,
            player_size: PLAYER_SIZE,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            jump_cooldown_ms: JUMP_COOLDOWN_MS,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,
            min_gap: MIN_GAP,
            max_gap: MAX_GAP,

            score_per_obstacle: SCORE_PER_OBSTACLE,
            speed_start: SPEED_START,
            speed_step: SPEED_STEP,
            speed_max: SPEED_MAX,
            speed_milestone: SPEED_MILESTONE,

            obstacle_inset_x: OBSTACLE_INSET_X,
            obstacle_inset_top: OBSTACLE_INSET_TOP,
            obstacle_inset_bottom: OBSTACLE_INSET_BOTTOM,
            player_inset_x: PLAYER_INSET_X,
            player_inset_y: PLAYER_INSET_Y,
        }
    }
}

impl Tuning {
    /// Ground level (y of the ground's top edge)
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_margin
    }

    /// Same tuning for a canvas of a different size
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Fit this tuning to the real canvas. If the canvas makes it invalid,
    /// fall back to the defaults on that canvas, and only then to the plain
    /// defaults.
    pub fn fit_canvas(self, width: f32, height: f32) -> Self {
        let fitted = self.with_canvas(width, height);
        let Err(e) = fitted.validate() else {
            return fitted;
        };
        log::warn!("Tuning does not fit a {}x{} canvas ({}), using defaults", width, height, e);

        let defaults = Self::default().with_canvas(width, height);
        match defaults.validate() {
            Ok(()) => defaults,
            Err(e) => {
                log::warn!(
                    "Canvas {}x{} is unusable ({}), using {}x{}",
                    width, height, e, CANVAS_WIDTH, CANVAS_HEIGHT
                );
                Self::default()
            }
        }
    }

    /// Parse a (partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let floats = [
            ("width", self.width),
            ("height", self.height),
            ("ground_margin", self.ground_margin),
            ("player_x", self.player_x),
            ("player_size", self.player_size),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_min_height", self.obstacle_min_height),
            ("obstacle_max_height", self.obstacle_max_height),
            ("min_gap", self.min_gap),
            ("max_gap", self.max_gap),
            ("speed_start", self.speed_start),
            ("speed_step", self.speed_step),
            ("speed_max", self.speed_max),
            ("obstacle_inset_x", self.obstacle_inset_x),
            ("obstacle_inset_top", self.obstacle_inset_top),
            ("obstacle_inset_bottom", self.obstacle_inset_bottom),
            ("player_inset_x", self.player_inset_x),
            ("player_inset_y", self.player_inset_y),
        ];
        if let Some((field, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::invalid(field, format!("{} is not a finite number", value)));
        }
        if !self.jump_cooldown_ms.is_finite() {
            return Err(TuningError::invalid("jump_cooldown_ms", "not a finite number"));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(TuningError::invalid("width/height", "canvas must be non-empty"));
        }
        if !(self.ground_margin >= 0.0 && self.ground_margin < self.height) {
            return Err(TuningError::invalid(
                "ground_margin",
                format!("{} must lie within the canvas height {}", self.ground_margin, self.height),
            ));
        }
        if self.player_size <= 0.0 || self.player_size > self.ground_y() {
            return Err(TuningError::invalid(
                "player_size",
                format!("{} does not fit above the ground", self.player_size),
            ));
        }
        if self.gravity <= 0.0 || self.jump_impulse <= 0.0 {
            return Err(TuningError::invalid("gravity/jump_impulse", "must be positive"));
        }
        if self.jump_cooldown_ms < 0.0 {
            return Err(TuningError::invalid("jump_cooldown_ms", "must not be negative"));
        }
        if self.obstacle_width <= 0.0 {
            return Err(TuningError::invalid("obstacle_width", "must be positive"));
        }
        if !(self.obstacle_min_height > 0.0 && self.obstacle_min_height <= self.obstacle_max_height) {
            return Err(TuningError::invalid(
                "obstacle_min_height",
                format!(
                    "height range {}..={} is empty or non-positive",
                    self.obstacle_min_height, self.obstacle_max_height
                ),
            ));
        }
        if !(self.min_gap > 0.0 && self.min_gap <= self.max_gap) {
            return Err(TuningError::invalid(
                "min_gap",
                format!("gap range {}..={} is empty or non-positive", self.min_gap, self.max_gap),
            ));
        }
        if self.score_per_obstacle == 0 {
            return Err(TuningError::invalid("score_per_obstacle", "must be positive"));
        }
        if self.speed_milestone == 0 {
            return Err(TuningError::invalid("speed_milestone", "must be positive"));
        }
        if !(self.speed_start > 0.0 && self.speed_start <= self.speed_max) {
            return Err(TuningError::invalid(
                "speed_start",
                format!("{} must be positive and at most speed_max {}", self.speed_start, self.speed_max),
            ));
        }
        if self.speed_step < 0.0 {
            return Err(TuningError::invalid("speed_step", "must not be negative"));
        }
        if self.obstacle_inset_x * 2.0 >= self.obstacle_width
            || self.obstacle_inset_top + self.obstacle_inset_bottom >= self.obstacle_min_height
        {
            return Err(TuningError::invalid("obstacle_inset", "insets swallow the whole cloud"));
        }
        if self.player_inset_x * 2.0 >= self.player_size || self.player_inset_y * 2.0 >= self.player_size {
            return Err(TuningError::invalid("player_inset", "insets swallow the whole bee"));
        }
        Ok(())
    }

    /// Validated override or defaults, logging why an override was dropped
    fn or_default(result: Result<Self, TuningError>, source: &str) -> Self {
        match result {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", source);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning from {}: {}", source, e);
                Self::default()
            }
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "swarm_bee_tuning";

    /// Environment variable naming a tuning file (native only)
    #[allow(dead_code)]
    const ENV_VAR: &'static str = "SWARM_BEE_TUNING";

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                return Self::or_default(Self::from_json(&json), "LocalStorage");
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Load tuning overrides from the file named by `SWARM_BEE_TUNING`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(path) => {
                let result = std::fs::read_to_string(&path)
                    .map_err(TuningError::from)
                    .and_then(|json| Self::from_json(&json));
                Self::or_default(result, &path)
            }
            Err(_) => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.ground_y(), CANVAS_HEIGHT - GROUND_MARGIN);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "speed_max": 9.0, "min_gap": 400.0 }"#).unwrap();
        assert_eq!(tuning.speed_max, 9.0);
        assert_eq!(tuning.min_gap, 400.0);
        assert_eq!(tuning.max_gap, MAX_GAP);
        assert_eq!(tuning.gravity, GRAVITY);
    }

    #[test]
    fn test_rejects_empty_gap_range() {
        let err = Tuning::from_json(r#"{ "min_gap": 600.0, "max_gap": 500.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "min_gap", .. }));
    }

    #[test]
    fn test_rejects_non_finite() {
        // Too large for f32, deserializes to infinity
        let err = Tuning::from_json(r#"{ "max_gap": 1e39 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "max_gap", .. }));

        let mut tuning = Tuning::default();
        tuning.gravity = f32::NAN;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "gravity", .. })
        ));

        let mut tuning = Tuning::default();
        tuning.jump_cooldown_ms = f64::INFINITY;
        assert!(tuning.validate().is_err());

        // The loader falls back to defaults, and spawning works with those
        let tuning = Tuning::or_default(Tuning::from_json(r#"{ "max_gap": 1e39 }"#), "test");
        let mut session = crate::Session::new(tuning, 3);
        session.submit_name("Ace", 3);
        assert!(session.tick());
        assert_eq!(session.state().obstacles.len(), 1);
    }

    #[test]
    fn test_rejects_start_speed_above_cap() {
        let err = Tuning::from_json(r#"{ "speed_start": 8.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "speed_start", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ speed_max: }").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_or_default_falls_back() {
        let tuning = Tuning::or_default(Tuning::from_json("not json"), "test");
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_with_canvas() {
        let tuning = Tuning::default().with_canvas(1024.0, 300.0);
        assert_eq!(tuning.ground_y(), 300.0 - GROUND_MARGIN);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_fit_canvas_keeps_valid_override() {
        let tuning = Tuning::from_json(r#"{ "speed_max": 9.0 }"#).unwrap();
        let fitted = tuning.fit_canvas(1024.0, 300.0);
        assert_eq!(fitted.speed_max, 9.0);
        assert_eq!(fitted.width, 1024.0);
        assert_eq!(fitted.height, 300.0);
    }

    #[test]
    fn test_fit_canvas_falls_back_to_defaults_on_that_canvas() {
        // A 150px ground band leaves no room for the bee on a 180px canvas
        let tuning = Tuning::from_json(r#"{ "ground_margin": 150.0 }"#).unwrap();
        let fitted = tuning.fit_canvas(640.0, 180.0);
        assert_eq!(fitted.ground_margin, GROUND_MARGIN);
        assert_eq!(fitted.width, 640.0);
        assert_eq!(fitted.height, 180.0);
        assert!(fitted.validate().is_ok());
    }

    #[test]
    fn test_fit_canvas_unusable_canvas_uses_defaults() {
        let fitted = Tuning::default().fit_canvas(0.0, 0.0);
        assert_eq!(fitted, Tuning::default());
    }
}
