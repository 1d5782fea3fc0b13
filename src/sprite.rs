use core::fmt;
use std::fmt::Debug;

use glam::{UVec2, Vec2};

use crate::{
    color::{Color, WHITE},
    handle::Handle,
    types::{Anchor, Rect},
};

/// Sprite
/// A view into a sprite sheet: a texture handle plus the tile grid
/// layout and the currently selected tile.
#[derive(Clone)]
pub struct Sprite {
    /// texture
    pub texture: Handle,
    /// size of a single tile in pixels
    pub tile_size: UVec2,
    /// tiles per sheet row
    pub columns: u32,
    /// current tile index
    pub tile: u32,
    /// tint multiplier, combined with the actor tint when drawing
    pub color: Color,
    /// which point of the quad the owner position designates
    pub anchor: Anchor,
    /// Flip Horizontal
    pub flip_x: bool,
    /// Flip Vertical
    pub flip_y: bool,
}

impl Sprite {
    pub fn new(texture: Handle, tile_size: UVec2) -> Self {
        Self {
            texture,
            tile_size,
            columns: 1,
            tile: 0,
            color: WHITE,
            anchor: Anchor::default(),
            flip_x: false,
            flip_y: false,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Tile size in Vec2
    pub fn sizef(&self) -> Vec2 {
        Vec2::new(self.tile_size.x as f32, self.tile_size.y as f32)
    }

    /// Source rectangle of the current tile inside the sheet, in pixels
    pub fn src_rect(&self) -> Rect {
        let columns = self.columns.max(1);
        let col = self.tile % columns;
        let row = self.tile / columns;
        let size = self.sizef();
        let min = Vec2::new(col as f32 * size.x, row as f32 * size.y);
        Rect {
            min,
            max: min + size,
        }
    }
}

impl Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("tile_size", &self.tile_size)
            .field("tile", &self.tile)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    fn dummy_handle() -> Handle {
        let (sender, receiver) = channel();
        // keep the receiver alive for the duration of the test
        std::mem::forget(receiver);
        Handle::new(0, sender)
    }

    #[test]
    fn test_src_rect() {
        let mut sprite = Sprite::new(dummy_handle(), UVec2::new(16, 24)).with_columns(4);
        sprite.tile = 6;
        let src = sprite.src_rect();
        assert_eq!(src.min, Vec2::new(32.0, 24.0));
        assert_eq!(src.max, Vec2::new(48.0, 48.0));
    }

    #[test]
    fn test_defaults() {
        let sprite = Sprite::new(dummy_handle(), UVec2::splat(8));
        assert_eq!(sprite.color, WHITE);
        assert_eq!(sprite.anchor, Anchor::Center);
    }

    #[test]
    fn test_src_rect_single_column() {
        let mut sprite = Sprite::new(dummy_handle(), UVec2::new(8, 8));
        sprite.tile = 3;
        let src = sprite.src_rect();
        assert_eq!(src.min, Vec2::new(0.0, 24.0));
    }
}
