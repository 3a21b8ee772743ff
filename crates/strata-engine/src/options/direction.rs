use std::fmt;
use std::str::FromStr;

use crate::coords::Size;

use super::OptionsError;

/// Which way the colors change.
///
/// A horizontal gradient is made of horizontal bands: full-width strips
/// stacked top to bottom. A vertical gradient is made of vertical bands
/// stacked left to right.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    /// Size of the element along the axis strips are stacked on.
    #[inline]
    pub fn stack_extent(self, size: Size) -> u32 {
        match self {
            Direction::Horizontal => size.height,
            Direction::Vertical => size.width,
        }
    }

    /// Size of the element across the stacking axis (the strip's long side).
    #[inline]
    pub fn cross_extent(self, size: Size) -> u32 {
        match self {
            Direction::Horizontal => size.width,
            Direction::Vertical => size.height,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

impl FromStr for Direction {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            _ => Err(OptionsError::UnknownDirection(s.to_owned())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
