//! 2D rendering module
//!
//! The scene is drawn as filled primitives (circles, rectangles, text)
//! against any [`Surface`]: the browser canvas in wasm builds, or a
//! [`Recorder`] that keeps the draw calls for inspection.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;
pub mod surface;

pub use shapes::draw_frame;
pub use surface::{DrawCommand, Recorder, Surface};
