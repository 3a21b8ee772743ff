//! Paint model shared between the plan and the UI layer.
//!
//! Scope:
//! - color representation (8-bit sRGB, no alpha)
//! - color paths (the discrete steps of a two-stop gradient)

pub mod color;
pub mod path;

pub use color::{ColorParseError, ColorRgb};
pub use path::{ColorPath, MAX_STEPS};
