use glam::Vec2;

/// Rect
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build a rect from a center point and a full size
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn is_touching(&self, other: &Self) -> bool {
        !(self.min.x > other.max.x
            || self.max.x < other.min.x
            || self.min.y > other.max.y
            || self.max.y < other.min.y)
    }

    pub fn contains_pos(&self, pos: Vec2) -> bool {
        let Rect { min, max } = self;
        pos.x >= min.x && pos.y >= min.y && pos.x <= max.x && pos.y <= max.y
    }
}

/// Anchor
/// Alignment point inside a rectangular area, y axis pointing down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// Normalized factors of the anchor point, (0, 0) is top-left and
    /// (1, 1) is bottom-right.
    pub fn factors(self) -> Vec2 {
        match self {
            Anchor::TopLeft => Vec2::new(0.0, 0.0),
            Anchor::Top => Vec2::new(0.5, 0.0),
            Anchor::TopRight => Vec2::new(1.0, 0.0),
            Anchor::Left => Vec2::new(0.0, 0.5),
            Anchor::Center => Vec2::new(0.5, 0.5),
            Anchor::Right => Vec2::new(1.0, 0.5),
            Anchor::BottomLeft => Vec2::new(0.0, 1.0),
            Anchor::Bottom => Vec2::new(0.5, 1.0),
            Anchor::BottomRight => Vec2::new(1.0, 1.0),
        }
    }

    /// Offset of the anchor point from the top-left corner of an area
    pub fn offset(self, size: Vec2) -> Vec2 {
        self.factors() * size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_touching() {
        let a = Rect::from_center(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::from_center(Vec2::new(8.0, 0.0), Vec2::splat(10.0));
        let c = Rect::from_center(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        assert!(a.is_touching(&b));
        assert!(!a.is_touching(&c));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(Vec2::ZERO, Vec2::new(4.0, 2.0));
        assert!(r.contains_pos(Vec2::new(2.0, 1.0)));
        assert!(r.contains_pos(Vec2::ZERO));
        assert!(!r.contains_pos(Vec2::new(5.0, 1.0)));
    }

    #[test]
    fn test_anchor_offset() {
        let size = Vec2::new(100.0, 40.0);
        assert_eq!(Anchor::TopLeft.offset(size), Vec2::ZERO);
        assert_eq!(Anchor::Center.offset(size), Vec2::new(50.0, 20.0));
        assert_eq!(Anchor::BottomRight.offset(size), size);
    }
}
