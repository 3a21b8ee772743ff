//! Geometry shared between the plan and the UI layer.
//!
//! Canonical space:
//! - whole CSS pixels
//! - origin at the element's top-left corner
//! - +X right, +Y down
//!
//! Anchoring at the bottom or right edge is expressed through offsets, not
//! through negative coordinates.

mod size;

pub use size::Size;
