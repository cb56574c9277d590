use std::fmt;

/// A straight line from `(x0, y0)` to `(x1, y1)` in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// `rgba(r, g, b, a)` colour, formatted as a CSS colour string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn new((r, g, b): (u8, u8, u8), a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb`, used for the opaque base paint.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// `hsla(h, s%, l%, a)` colour used for particle streaks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings() {
        let bg = Rgba::new((2, 17, 20), 0.06);
        assert_eq!(bg.to_string(), "rgba(2, 17, 20, 0.06)");
        assert_eq!(bg.to_hex(), "#021114");

        let streak = Hsla { hue: 190.5, saturation: 90.0, lightness: 65.0, alpha: 0.125 };
        assert_eq!(streak.to_string(), "hsla(190.5, 90%, 65%, 0.125)");

        // Spawned values are passed through unrounded.
        let fine = Hsla { hue: 197.123456, saturation: 90.0, lightness: 65.0, alpha: 0.1234567 };
        assert_eq!(fine.to_string(), "hsla(197.123456, 90%, 65%, 0.1234567)");
    }
}
