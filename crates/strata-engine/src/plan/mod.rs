//! Render plan: everything one gradient render needs, computed up front.
//!
//! The plan is pure data. `strata-ui` turns it into element nodes; nothing
//! here knows about the tree it will end up in.

mod strip;

pub use strip::{derive_strips, strip_thickness, Strip};

use crate::coords::Size;
use crate::options::{Anchor, Direction, GradientOptions};
use crate::paint::{ColorPath, ColorRgb};

/// Resolved gradient for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientPlan {
    pub direction: Direction,
    pub position: Anchor,
    /// Element inner size the plan was computed for.
    pub size: Size,
    /// Effective gradient length in pixels along the stacking axis.
    pub length: u32,
    pub thickness: u32,
    /// Fill of the background container, visible past the last strip.
    pub fill: ColorRgb,
    pub path: ColorPath,
    pub strips: Vec<Strip>,
}

impl GradientPlan {
    /// Resolves `options` against an element of `size`.
    ///
    /// Without an explicit length the gradient covers the element's extent on
    /// the stacking axis (height for horizontal, width for vertical).
    pub fn compute(options: &GradientOptions, size: Size) -> Self {
        let direction = options.direction();
        let length = options
            .length()
            .map_or_else(|| direction.stack_extent(size), |l| l.get());

        let path = ColorPath::build(options.from(), options.to(), length);
        let thickness = strip_thickness(length, path.len());
        let strips = derive_strips(&path, direction, size, length);

        log::trace!(
            "gradient plan: {} {}x{} length={} steps={} strips={} thickness={}",
            direction,
            size.width,
            size.height,
            length,
            path.len(),
            strips.len(),
            thickness,
        );

        Self {
            direction,
            position: options.position(),
            size,
            length,
            thickness,
            fill: options.fallback_color(),
            path,
            strips,
        }
    }

    /// True when the element ran out of room before the path ran out of colors.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.strips.len() < self.path.len()
    }
}
