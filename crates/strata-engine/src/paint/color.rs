use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color.
///
/// Channels are straight bytes in `[0, 255]`. There is no alpha: strips are
/// always opaque and layered by z-index.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColorRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (hex digits, any case).
    pub fn from_hex(src: &str) -> Result<Self, ColorParseError> {
        let trimmed = src.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(bad));
        }

        // Every char is an ASCII hex digit from here on.
        let digits: Vec<u8> = hex.chars().map(nibble).collect();
        match *digits.as_slice() {
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            _ => Err(ColorParseError::BadLength(digits.len())),
        }
    }

    /// Mixes `self` weighted by `weight` with `other` weighted by `1 - weight`.
    ///
    /// Each side is rounded on its own before the two are summed, so a channel
    /// can land on 256 (e.g. `255 * 0.5` twice); the sum saturates at 255.
    pub fn mix(self, other: ColorRgb, weight: f64) -> Self {
        let w = weight.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| {
            let v = (f64::from(a) * w).round() + (f64::from(b) * (1.0 - w)).round();
            v.min(255.0) as u8
        };
        Self::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS functional notation: `rgb(r,g,b)`.
    pub fn to_css_rgb(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for ColorRgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn nibble(c: char) -> u8 {
    c.to_digit(16).map_or(0, |d| d as u8)
}

// ── ColorParseError ───────────────────────────────────────────────────────

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    /// Number of hex digits found; only 3 and 6 are accepted.
    BadLength(usize),
    BadDigit(char),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Empty => write!(f, "empty color"),
            ColorParseError::BadLength(n) => {
                write!(f, "color must be #rrggbb or #rgb, got {} digits", n)
            }
            ColorParseError::BadDigit(c) => write!(f, "invalid hex digit {:?} in color", c),
        }
    }
}

impl std::error::Error for ColorParseError {}
