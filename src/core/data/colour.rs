#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`, `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// Component-wise product, treating each channel as a fraction of 255.
    #[must_use]
    pub fn modulate(self, other: Self) -> Self {
        let channel = |a: u8, b: u8| ((a as u16 * b as u16 + 127) / 255) as u8;

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let black = Colour::new(0, 0, 0);
        let white = Colour::new(255, 255, 255);

        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        assert_eq!(black.lerp(white, 0.5), Colour::new(128, 128, 128));
    }

    #[test]
    fn test_lerp_clamps_t() {
        let a = Colour::new(10, 20, 30);
        let b = Colour::new(200, 100, 0);

        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 2.0), b);
    }

    #[test]
    fn test_modulate() {
        let colour = Colour::new(200, 100, 50);

        assert_eq!(colour.modulate(Colour::new(255, 255, 255)), colour);
        assert_eq!(colour.modulate(Colour::new(0, 0, 0)), Colour::new(0, 0, 0));
    }
}
