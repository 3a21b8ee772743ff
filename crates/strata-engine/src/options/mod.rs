//! Render options for one gradient.
//!
//! [`GradientOptions`] is immutable and only obtainable through
//! [`GradientOptions::default`] or [`GradientOptionsBuilder::build`], which
//! validates every field.

mod anchor;
mod direction;
mod error;

pub use anchor::{Anchor, HEdge, VEdge};
pub use direction::Direction;
pub use error::OptionsError;

use std::num::NonZeroU32;

use crate::paint::ColorRgb;

// ── GradientOptions ───────────────────────────────────────────────────────

/// Everything a single gradient render reads.
///
/// | field       | default        |
/// |-------------|----------------|
/// | `from`      | `#000000`      |
/// | `to`        | `#ffffff`      |
/// | `direction` | horizontal     |
/// | `position`  | top left       |
/// | `length`    | element extent |
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GradientOptions {
    from: ColorRgb,
    to: ColorRgb,
    direction: Direction,
    position: Anchor,
    length: Option<NonZeroU32>,
}

impl GradientOptions {
    pub fn builder() -> GradientOptionsBuilder {
        GradientOptionsBuilder::new()
    }

    #[inline]
    pub fn from(&self) -> ColorRgb {
        self.from
    }

    #[inline]
    pub fn to(&self) -> ColorRgb {
        self.to
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn position(&self) -> Anchor {
        self.position
    }

    /// Explicit gradient length in pixels. `None` means "use the element's extent".
    #[inline]
    pub fn length(&self) -> Option<NonZeroU32> {
        self.length
    }

    /// Color shown past the last strip: the endpoint on the far side of the anchor.
    #[inline]
    pub fn fallback_color(&self) -> ColorRgb {
        match self.position.vertical {
            VEdge::Bottom => self.from,
            VEdge::Top => self.to,
        }
    }
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            from: ColorRgb::BLACK,
            to: ColorRgb::WHITE,
            direction: Direction::default(),
            position: Anchor::default(),
            length: None,
        }
    }
}

// ── GradientOptionsBuilder ────────────────────────────────────────────────

/// Builder for [`GradientOptions`]. Unset fields keep their defaults.
///
/// # Example
/// ```
/// use strata_engine::options::{Anchor, Direction, GradientOptions};
/// use strata_engine::paint::ColorRgb;
///
/// let options = GradientOptions::builder()
///     .from(ColorRgb::new(0x1a, 0x1a, 0x2a))
///     .to(ColorRgb::WHITE)
///     .direction(Direction::Vertical)
///     .position(Anchor::BOTTOM_RIGHT)
///     .length(120)
///     .build()
///     .unwrap();
/// assert_eq!(options.length().map(|l| l.get()), Some(120));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GradientOptionsBuilder {
    from: Option<ColorRgb>,
    to: Option<ColorRgb>,
    direction: Option<Direction>,
    position: Option<Anchor>,
    length: Option<u32>,
}

impl GradientOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, color: ColorRgb) -> Self {
        self.from = Some(color);
        self
    }

    pub fn to(mut self, color: ColorRgb) -> Self {
        self.to = Some(color);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn position(mut self, position: Anchor) -> Self {
        self.position = Some(position);
        self
    }

    pub fn length(mut self, px: u32) -> Self {
        self.length = Some(px);
        self
    }

    /// Parses `from` as a hex color.
    pub fn hex_from(self, hex: &str) -> Result<Self, OptionsError> {
        Ok(self.from(ColorRgb::from_hex(hex)?))
    }

    /// Parses `to` as a hex color.
    pub fn hex_to(self, hex: &str) -> Result<Self, OptionsError> {
        Ok(self.to(ColorRgb::from_hex(hex)?))
    }

    pub fn build(self) -> Result<GradientOptions, OptionsError> {
        let defaults = GradientOptions::default();
        let length = match self.length {
            None => None,
            Some(px) => Some(NonZeroU32::new(px).ok_or(OptionsError::ZeroLength)?),
        };
        Ok(GradientOptions {
            from: self.from.unwrap_or(defaults.from),
            to: self.to.unwrap_or(defaults.to),
            direction: self.direction.unwrap_or(defaults.direction),
            position: self.position.unwrap_or(defaults.position),
            length,
        })
    }
}
