use glam::Vec2;

use crate::{
    animation::AnimationSet,
    color::{Color, WHITE},
    motion::Motion,
    render::{DrawCall, Render},
    sat::{self, SatRect},
    shake::Shaker,
    sprite::Sprite,
    types::{Anchor, Rect},
};

/// Actor
/// A scene-graph leaf: a positioned, tinted, optionally animated image
/// with an oriented bounding rectangle.
#[derive(Debug, Clone)]
pub struct Actor {
    /// center position
    pub pos: Vec2,
    /// unscaled size
    pub size: Vec2,
    pub scale: Vec2,
    /// angle in radians
    pub angle: f32,
    /// draw order, higher is drawn later
    pub z_index: u32,
    pub visible: bool,
    /// tint multiplier applied when drawing
    pub color: Color,
    pub sprite: Option<Sprite>,
    pub anim: Option<AnimationSet>,
    pub motion: Option<Motion>,
    pub shaker: Option<Shaker>,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Actor {
            pos,
            size,
            scale: Vec2::splat(1.0),
            angle: 0.0,
            z_index: 0,
            visible: true,
            color: WHITE,
            sprite: None,
            anim: None,
            motion: None,
            shaker: None,
        }
    }

    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.size = sprite.sizef();
        self.sprite = Some(sprite);
        self
    }

    pub fn with_anim(mut self, anim: AnimationSet) -> Self {
        self.anim = Some(anim);
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn with_z_index(mut self, z_index: u32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn scaled_size(&self) -> Vec2 {
        self.size * self.scale
    }

    /// Adopt the sprite tile size as the actor size
    pub fn size_from_sprite(&mut self) {
        if let Some(sprite) = &self.sprite {
            self.size = sprite.sizef();
        }
    }

    /// Axis-aligned bounds, rotation aware
    pub fn bounds(&self) -> Rect {
        let half_size = self.scaled_size() * 0.5;
        if self.angle == 0.0 {
            return Rect {
                min: self.pos - half_size,
                max: self.pos + half_size,
            };
        }
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for v in self.bounding_poly().vertices() {
            min = min.min(v);
            max = max.max(v);
        }
        Rect { min, max }
    }

    /// Oriented bounding rectangle used for collision checks
    pub fn bounding_poly(&self) -> SatRect {
        SatRect {
            pos: self.pos,
            half_size: self.scaled_size() * 0.5,
            angle: self.angle,
        }
    }

    /// Whether the bounding polygons intersect
    pub fn overlaps(&self, other: &Actor) -> bool {
        self.overlap(other).is_some()
    }

    /// Minimum translation vector separating this actor from the other,
    /// or None when they do not overlap. Zero-size actors never overlap.
    pub fn overlap(&self, other: &Actor) -> Option<Vec2> {
        sat::overlap(&self.bounding_poly(), &other.bounding_poly())
    }

    /// Place this actor relative to a rect so that matching anchor
    /// points coincide, e.g. Center centers it, TopLeft puts its
    /// top-left corner on the rect's top-left corner.
    pub fn align_to(&mut self, rect: &Rect, anchor: Anchor) {
        let factors = anchor.factors();
        let anchor_point = rect.min + anchor.offset(rect.size());
        self.pos = anchor_point + (Vec2::splat(0.5) - factors) * self.scaled_size();
    }

    /// Accelerate along the actor's facing angle
    pub fn accelerate_forward(&mut self) {
        let angle = self.angle;
        if let Some(motion) = self.motion.as_mut() {
            motion.accelerate_at_angle(angle);
        }
    }

    /// Per-frame update: run the shake effect, integrate motion, advance
    /// the animation clock and sync the sprite tile.
    pub fn advance(&mut self, tick: f32) {
        if let Some(shaker) = self.shaker.as_mut() {
            shaker.step(tick, &mut self.pos);
        }
        if let Some(motion) = self.motion.as_mut() {
            motion.integrate(tick, &mut self.pos, &mut self.angle);
        }
        if let Some(anim) = self.anim.as_mut() {
            anim.advance(tick);
            if let (Some(tile), Some(sprite)) = (anim.current_frame(), self.sprite.as_mut()) {
                sprite.tile = tile;
            }
        }
    }

    /// Submit at most one draw call for this actor
    pub fn draw(&self, render: &mut dyn Render) {
        if !self.visible {
            return;
        }
        let Some(sprite) = &self.sprite else {
            return;
        };
        // pos designates the sprite anchor point, the quad center shifts
        // the opposite way
        let size = self.scaled_size();
        let center = self.pos + (Vec2::splat(0.5) - sprite.anchor.factors()) * size;
        render.draw_image(&DrawCall {
            texture: sprite.texture.clone(),
            src: sprite.src_rect(),
            pos: center,
            size,
            angle: self.angle,
            color: self.color.modulate(sprite.color),
            flip_x: sprite.flip_x,
            flip_y: sprite.flip_y,
        });
    }
}
