use super::ColorRgb;

/// Upper bound on the number of steps in a [`ColorPath`].
///
/// Longer gradients reuse each color for several pixels instead of emitting
/// one strip per pixel.
pub const MAX_STEPS: u32 = 100;

/// Ordered colors stepping from a start color toward an end color.
///
/// Invariants:
/// - never empty
/// - at most [`MAX_STEPS`] entries
/// - the first entry is the start color; the last is one step short of the end color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPath {
    colors: Vec<ColorRgb>,
}

impl ColorPath {
    /// Interpolates `distance` colors from `from` toward `to`.
    ///
    /// `distance` is clamped into `[1, MAX_STEPS]`. Step `i` mixes `from`
    /// with weight `1 - i / distance`; the weight is derived from the step
    /// index, so the path always has exactly the clamped `distance` entries.
    pub fn build(from: ColorRgb, to: ColorRgb, distance: u32) -> Self {
        let steps = distance.clamp(1, MAX_STEPS);
        let colors = (0..steps)
            .map(|i| {
                let weight = 1.0 - f64::from(i) / f64::from(steps);
                from.mix(to, weight)
            })
            .collect();
        Self { colors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[ColorRgb] {
        &self.colors
    }
}

impl<'a> IntoIterator for &'a ColorPath {
    type Item = &'a ColorRgb;
    type IntoIter = std::slice::Iter<'a, ColorRgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
