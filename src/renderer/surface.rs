//! Drawing surface abstraction

/// Minimal immediate-mode 2D target. Coordinates are absolute pixels with
/// the origin at the top-left corner.
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: String,
    },
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded rectangles with the given fill
    pub fn rects_with_color<'a>(&'a self, color: &'a str) -> impl Iterator<Item = &'a DrawCommand> + 'a {
        self.commands
            .iter()
            .filter(move |cmd| matches!(cmd, DrawCommand::Rect { color: fill, .. } if fill == color))
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}
