use std::fmt;
use std::str::FromStr;

use super::OptionsError;

/// Vertical edge a gradient is pinned to.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum VEdge {
    #[default]
    Top,
    Bottom,
}

impl VEdge {
    pub fn as_str(self) -> &'static str {
        match self {
            VEdge::Top => "top",
            VEdge::Bottom => "bottom",
        }
    }
}

/// Horizontal edge a gradient is pinned to.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum HEdge {
    #[default]
    Left,
    Right,
}

impl HEdge {
    pub fn as_str(self) -> &'static str {
        match self {
            HEdge::Left => "left",
            HEdge::Right => "right",
        }
    }
}

// ── Anchor ────────────────────────────────────────────────────────────────

/// Corner of the element the first strip is pinned to.
///
/// Parsed from a word list: `"bottom right"`, `"right"`, `"top"`, or `""`.
/// A missing word keeps that axis at its default (top, left).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub vertical: VEdge,
    pub horizontal: HEdge,
}

impl Anchor {
    pub const TOP_LEFT: Self = Self::new(VEdge::Top, HEdge::Left);
    pub const TOP_RIGHT: Self = Self::new(VEdge::Top, HEdge::Right);
    pub const BOTTOM_LEFT: Self = Self::new(VEdge::Bottom, HEdge::Left);
    pub const BOTTOM_RIGHT: Self = Self::new(VEdge::Bottom, HEdge::Right);

    #[inline]
    pub const fn new(vertical: VEdge, horizontal: HEdge) -> Self {
        Self { vertical, horizontal }
    }
}

impl FromStr for Anchor {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut vertical = None;
        let mut horizontal = None;

        for word in s.split_whitespace() {
            let taken = match word.to_ascii_lowercase().as_str() {
                "top" => vertical.replace(VEdge::Top).is_some(),
                "bottom" => vertical.replace(VEdge::Bottom).is_some(),
                "left" => horizontal.replace(HEdge::Left).is_some(),
                "right" => horizontal.replace(HEdge::Right).is_some(),
                _ => return Err(OptionsError::UnknownPosition(word.to_owned())),
            };
            if taken {
                return Err(OptionsError::ConflictingPosition(s.to_owned()));
            }
        }

        Ok(Anchor::new(
            vertical.unwrap_or_default(),
            horizontal.unwrap_or_default(),
        ))
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vertical.as_str(), self.horizontal.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_partial_positions() {
        assert_eq!("bottom right".parse(), Ok(Anchor::BOTTOM_RIGHT));
        assert_eq!("right bottom".parse(), Ok(Anchor::BOTTOM_RIGHT));
        assert_eq!("right".parse(), Ok(Anchor::TOP_RIGHT));
        assert_eq!("BOTTOM".parse(), Ok(Anchor::BOTTOM_LEFT));
        assert_eq!("".parse(), Ok(Anchor::TOP_LEFT));
    }

    #[test]
    fn rejects_unknown_words() {
        assert_eq!(
            "top centre".parse::<Anchor>(),
            Err(OptionsError::UnknownPosition("centre".into()))
        );
    }

    #[test]
    fn rejects_same_axis_twice() {
        assert!(matches!(
            "top bottom".parse::<Anchor>(),
            Err(OptionsError::ConflictingPosition(_))
        ));
        assert!(matches!(
            "left left".parse::<Anchor>(),
            Err(OptionsError::ConflictingPosition(_))
        ));
    }

    #[test]
    fn display_round_trips_the_words() {
        assert_eq!(Anchor::BOTTOM_RIGHT.to_string(), "bottom right");
    }
}
