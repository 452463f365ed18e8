//! Scene drawing for the ground, the bee and the clouds
//!
//! Pure output: reads the game state and issues draw calls, never mutates.

use super::surface::Surface;
use crate::sim::{GameState, Obstacle, Player};

pub const GROUND_COLOR: &str = "#228B22";
pub const BEE_COLOR: &str = "#FFD700";
pub const WING_COLOR: &str = "#FFF";
pub const CLOUD_COLOR: &str = "#666";
pub const CLOUD_LABEL_COLOR: &str = "#FFF";
pub const CLOUD_LABEL_FONT: &str = "12px Arial";
pub const CLOUD_LABEL: &str = "Cloud";

/// Wing sprite size
const WING_W: f32 = 14.0;
const WING_H: f32 = 10.0;
/// Wing flap amplitude (pixels) and rate (radians per ms)
const WING_FLAP: f32 = 3.0;
const WING_RATE: f64 = 0.01;

/// Draw one frame. `time_ms` only drives the wing animation.
pub fn draw_frame(state: &GameState, surface: &mut impl Surface, time_ms: f64) {
    let t = &state.tuning;
    surface.clear(t.width, t.height);
    draw_ground(surface, t.width, t.height, state.ground_y());
    draw_bee(surface, &state.player, time_ms);
    for obstacle in &state.obstacles {
        draw_cloud(surface, obstacle);
    }
}

pub fn draw_ground(surface: &mut impl Surface, width: f32, height: f32, ground_y: f32) {
    surface.fill_rect(0.0, ground_y, width, height - ground_y, GROUND_COLOR);
}

/// Vertical wing offset; the two wings flap in opposition
pub fn wing_offset(time_ms: f64) -> f32 {
    (time_ms * WING_RATE).sin() as f32 * WING_FLAP
}

pub fn draw_bee(surface: &mut impl Surface, player: &Player, time_ms: f64) {
    let center = player.center();
    surface.fill_circle(center.x, center.y, player.size.x / 2.0, BEE_COLOR);

    let offset = wing_offset(time_ms);
    let (x, y) = (player.pos.x, player.pos.y);
    surface.fill_rect(x - 10.0, y + 12.0 + offset, WING_W, WING_H, WING_COLOR);
    surface.fill_rect(x + player.size.x - 4.0, y + 12.0 - offset, WING_W, WING_H, WING_COLOR);
}

pub fn draw_cloud(surface: &mut impl Surface, obstacle: &Obstacle) {
    let (pos, size) = (obstacle.pos, obstacle.size);
    surface.fill_rect(pos.x, pos.y, size.x, size.y, CLOUD_COLOR);
    surface.fill_text(
        CLOUD_LABEL,
        pos.x + 4.0,
        pos.y + 20.0,
        CLOUD_LABEL_FONT,
        CLOUD_LABEL_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, Recorder};
    use crate::sim::tick;
    use crate::tuning::Tuning;

    fn running_state() -> GameState {
        let mut state = GameState::new(Tuning::default(), 3);
        state.start(3);
        state
    }

    #[test]
    fn test_frame_order_and_content() {
        let mut state = running_state();
        tick(&mut state);
        let mut rec = Recorder::new();
        draw_frame(&state, &mut rec, 0.0);

        let t = &state.tuning;
        assert_eq!(
            rec.commands[0],
            DrawCommand::Clear {
                width: t.width,
                height: t.height
            }
        );
        assert_eq!(
            rec.commands[1],
            DrawCommand::Rect {
                x: 0.0,
                y: t.ground_y(),
                w: t.width,
                h: t.ground_margin,
                color: GROUND_COLOR.to_string(),
            }
        );
        assert!(matches!(
            &rec.commands[2],
            DrawCommand::Circle { radius, color, .. } if *radius == 17.0 && color == BEE_COLOR
        ));
        assert_eq!(rec.rects_with_color(WING_COLOR).count(), 2);
        assert_eq!(rec.rects_with_color(CLOUD_COLOR).count(), state.obstacles.len());
        // Clear + ground + body + 2 wings + (rect + label) per cloud
        assert_eq!(rec.commands.len(), 5 + 2 * state.obstacles.len());
    }

    #[test]
    fn test_cloud_label() {
        let mut rec = Recorder::new();
        let cloud = Obstacle::grounded(300.0, 50.0, 40.0, 360.0);
        draw_cloud(&mut rec, &cloud);
        assert_eq!(
            rec.commands[1],
            DrawCommand::Text {
                text: "Cloud".to_string(),
                x: 304.0,
                y: 340.0,
                font: CLOUD_LABEL_FONT.to_string(),
                color: CLOUD_LABEL_COLOR.to_string(),
            }
        );
    }

    #[test]
    fn test_wings_flap_in_opposition() {
        let state = running_state();
        let mut rec = Recorder::new();
        // sin(0.01 * 157.08) ~= 1
        draw_bee(&mut rec, &state.player, 157.08);
        let ys: Vec<f32> = rec
            .rects_with_color(WING_COLOR)
            .map(|c| match c {
                DrawCommand::Rect { y, .. } => *y,
                _ => unreachable!(),
            })
            .collect();
        let base = state.player.pos.y + 12.0;
        assert!((ys[0] - (base + 3.0)).abs() < 0.01);
        assert!((ys[1] - (base - 3.0)).abs() < 0.01);
    }

    #[test]
    fn test_drawing_does_not_mutate() {
        let mut state = running_state();
        tick(&mut state);
        let before = (state.player.pos, state.obstacles.clone(), state.score);
        let mut rec = Recorder::new();
        draw_frame(&state, &mut rec, 1234.0);
        assert_eq!(before, (state.player.pos, state.obstacles.clone(), state.score));
    }
}
