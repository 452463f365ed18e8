//! Canvas 2D backend

use web_sys::CanvasRenderingContext2d;

use super::surface::Surface;

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) {
        self.set_fill_style_str(color);
        self.begin_path();
        if let Err(e) = self.arc(cx as f64, cy as f64, radius as f64, 0.0, std::f64::consts::TAU) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.set_fill_style_str(color);
        self.set_font(font);
        if let Err(e) = CanvasRenderingContext2d::fill_text(self, text, x as f64, y as f64) {
            log::warn!("Canvas text failed: {:?}", e);
        }
    }
}
