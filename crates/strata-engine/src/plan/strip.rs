use crate::coords::Size;
use crate::options::Direction;
use crate::paint::{ColorPath, ColorRgb};

/// One flat-colored band of a gradient.
///
/// `offset` is measured from the anchored edge along the stacking axis;
/// `thickness` is the band's size on that axis. The band always spans the
/// full element on the other axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Strip {
    pub offset: u32,
    pub thickness: u32,
    pub color: ColorRgb,
}

/// Pixels per strip for a gradient of `length` split over `steps` colors.
///
/// Never less than 1, so a gradient shorter than its color count still advances.
pub fn strip_thickness(length: u32, steps: usize) -> u32 {
    if steps == 0 {
        return length.max(1);
    }
    let per_step = (f64::from(length) / steps as f64).round();
    (per_step as u32).max(1)
}

/// Lays `path` out as strips inside an element of `size`.
///
/// Strips are emitted while their offset is below the element's extent on
/// the stacking axis. Colors left over once the element is full are dropped.
pub fn derive_strips(path: &ColorPath, direction: Direction, size: Size, length: u32) -> Vec<Strip> {
    let thickness = strip_thickness(length, path.len());
    let extent = direction.stack_extent(size);

    let mut strips = Vec::with_capacity(path.len());
    let mut offset = 0u32;
    for &color in path {
        if offset >= extent {
            break;
        }
        strips.push(Strip { offset, thickness, color });
        offset = offset.saturating_add(thickness);
    }
    strips
}
