use glam::Vec2;

use crate::{color::Color, handle::Handle, types::Rect};

/// A single textured quad submitted to the host engine.
#[derive(Debug, Clone)]
pub struct DrawCall {
    pub texture: Handle,
    /// source rectangle inside the texture, in pixels
    pub src: Rect,
    /// center of the quad in world space
    pub pos: Vec2,
    /// drawn size after scaling
    pub size: Vec2,
    /// angle in radians
    pub angle: f32,
    /// tint multiplier
    pub color: Color,
    pub flip_x: bool,
    pub flip_y: bool,
}

/// Drawing boundary implemented by the host engine.
/// The crate only submits draw requests, batching and GPU state belong
/// to the engine.
pub trait Render {
    fn draw_image(&mut self, call: &DrawCall);
}
