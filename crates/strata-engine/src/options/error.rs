use std::fmt;

use crate::paint::ColorParseError;

/// Rejected gradient options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// `length` must be at least one pixel.
    ZeroLength,
    UnknownDirection(String),
    /// A position word other than top, bottom, left or right.
    UnknownPosition(String),
    /// Two words for the same axis, e.g. `"top bottom"`.
    ConflictingPosition(String),
    Color(ColorParseError),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::ZeroLength => write!(f, "gradient length must be at least 1px"),
            OptionsError::UnknownDirection(s) => {
                write!(f, "unknown direction {:?}, expected horizontal or vertical", s)
            }
            OptionsError::UnknownPosition(s) => {
                write!(f, "unknown position {:?}, expected top, bottom, left or right", s)
            }
            OptionsError::ConflictingPosition(s) => {
                write!(f, "position {:?} names the same edge axis twice", s)
            }
            OptionsError::Color(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::Color(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColorParseError> for OptionsError {
    fn from(e: ColorParseError) -> Self {
        OptionsError::Color(e)
    }
}
