//! Strata engine crate.
//!
//! Owns the pure half of gradient rendering: colors, color paths, strip
//! layout and the render plan consumed by `strata-ui`. Nothing in here
//! touches an element tree.

pub mod coords;
pub mod logging;
pub mod options;
pub mod paint;
pub mod plan;
