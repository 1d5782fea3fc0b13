//! Separating axis test on rotated rectangles.
//!
//! This is the polygon intersection primitive actors delegate their
//! collision checks to.

use glam::Vec2;

#[derive(Debug, Clone)]
pub struct SatRect {
    /// center
    pub pos: Vec2,
    /// half size
    pub half_size: Vec2,
    /// angle in radians
    pub angle: f32,
}

impl SatRect {
    /// Corner vertices in order: top-left, top-right, bottom-right,
    /// bottom-left (before rotation).
    pub fn vertices(&self) -> [Vec2; 4] {
        let rot = Vec2::from_angle(self.angle);
        let Vec2 { x: w, y: h } = self.half_size;
        [
            Vec2::new(-w, -h),
            Vec2::new(w, -h),
            Vec2::new(w, h),
            Vec2::new(-w, h),
        ]
        .map(|v| self.pos + rot.rotate(v))
    }
}

#[derive(Debug)]
struct Projection {
    min: f32,
    max: f32,
}

fn project(vertices: &[Vec2], axis: Vec2) -> Projection {
    let mut min = vertices[0].dot(axis);
    let mut max = min;
    for v in &vertices[1..] {
        let p = v.dot(axis);
        if p < min {
            min = p;
        } else if p > max {
            max = p;
        }
    }
    Projection { min, max }
}

fn projection_overlap(a: Projection, b: Projection) -> Option<f32> {
    let overlap = f32::min(a.max, b.max) - f32::max(a.min, b.min);
    if overlap > 0.0 {
        Some(overlap)
    } else {
        None
    }
}

/// Overlap of two rotated rectangles.
/// Returns the minimum translation vector resolving the overlap, or
/// None when the rectangles are separated.
pub fn overlap(a: &SatRect, b: &SatRect) -> Option<Vec2> {
    let vs_a = a.vertices();
    let vs_b = b.vertices();

    // two edge normals per rect are enough for rectangles
    let axes = [
        (vs_a[1] - vs_a[0]).perp(),
        (vs_a[3] - vs_a[0]).perp(),
        (vs_b[1] - vs_b[0]).perp(),
        (vs_b[3] - vs_b[0]).perp(),
    ];

    let mut min_overlap = f32::MAX;
    let mut min_axis = Vec2::ZERO;

    for axis in &axes {
        if *axis == Vec2::ZERO {
            // degenerate rect, can't overlap anything
            return None;
        }
        let axis = axis.normalize();
        let proj_a = project(&vs_a, axis);
        let proj_b = project(&vs_b, axis);
        match projection_overlap(proj_a, proj_b) {
            Some(overlap) if overlap < min_overlap => {
                min_overlap = overlap;
                min_axis = axis;
            }
            Some(_) => {}
            None => return None,
        }
    }

    Some(min_axis * min_overlap)
}
