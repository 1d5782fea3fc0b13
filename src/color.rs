/// Tint color, an RGBA multiplier applied to a drawn image.
/// WHITE leaves the image unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        WHITE
    }
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    pub fn with_a(mut self, a: u8) -> Self {
        self.a = a;
        self
    }

    /// Component-wise multiply of two tints
    pub fn modulate(self, other: Color) -> Color {
        fn mul(a: u8, b: u8) -> u8 {
            ((a as u16 * b as u16) / 0xff) as u8
        }
        Color {
            r: mul(self.r, other.r),
            g: mul(self.g, other.g),
            b: mul(self.b, other.b),
            a: mul(self.a, other.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulate() {
        assert_eq!(RED.modulate(WHITE), RED);
        assert_eq!(WHITE.modulate(BLACK), BLACK);
        let half = Color::rgb(0x80, 0x80, 0x80);
        assert_eq!(WHITE.modulate(half), half);
    }
}

pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
pub const SILVER: Color = Color::rgb(0xc0, 0xc0, 0xc0);
pub const RED: Color = Color::rgb(0xff, 0, 0);
pub const GREEN: Color = Color::rgb(0, 0x80, 0);
pub const LIME: Color = Color::rgb(0, 0xff, 0);
pub const BLUE: Color = Color::rgb(0, 0, 0xff);
pub const NAVY: Color = Color::rgb(0, 0, 0x80);
pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0);
pub const ORANGE: Color = Color::rgb(0xff, 0xa5, 0);
pub const PURPLE: Color = Color::rgb(0x80, 0, 0x80);
pub const FUCHSIA: Color = Color::rgb(0xff, 0, 0xff);
pub const AQUA: Color = Color::rgb(0, 0xff, 0xff);
pub const TEAL: Color = Color::rgb(0, 0x80, 0x80);
pub const MAROON: Color = Color::rgb(0x80, 0, 0);
pub const OLIVE: Color = Color::rgb(0x80, 0x80, 0);
pub const PINK: Color = Color::rgb(0xff, 0xc0, 0xcb);
pub const GOLD: Color = Color::rgb(0xff, 0xd7, 0);
pub const SKY_BLUE: Color = Color::rgb(0x87, 0xce, 0xeb);
