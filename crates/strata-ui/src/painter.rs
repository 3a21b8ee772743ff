use strata_engine::options::{Direction, HEdge, VEdge};
use strata_engine::plan::{GradientPlan, Strip};

use crate::element::{Element, Node};
use crate::style::{Display, Offsets, Position, SizeHint, Style};

/// Class marking the background container that holds the strips.
pub const GRADIENT_CLASS: &str = "gradient";
/// Class marking the layer that re-hosts the element's original content.
pub const CONTENT_CLASS: &str = "gradient-content";

const BACKGROUND_Z: i32 = 0;
const STRIP_Z: i32 = 1;
const CONTENT_Z: i32 = 2;

/// Turns a [`GradientPlan`] into element nodes.
///
/// Layer stack, bottom to top:
/// - background container (`z-index: 0`), filled with the plan's fallback color
/// - one strip per plan entry (`z-index: 1`), children of the container
/// - content layer (`z-index: 2`) holding the original children
pub struct Painter<'a> {
    plan: &'a GradientPlan,
}

impl<'a> Painter<'a> {
    pub fn new(plan: &'a GradientPlan) -> Self {
        Self { plan }
    }

    /// Container sized `length` along the stacking axis and 100% across it.
    pub fn background_layer(&self) -> Element {
        let along = SizeHint::Px(self.plan.length);
        let (width, height) = match self.plan.direction {
            Direction::Horizontal => (SizeHint::Fill, along),
            Direction::Vertical => (along, SizeHint::Fill),
        };

        let style = Style {
            position: Some(Position::Absolute),
            offsets: self.anchored(0, 0),
            width,
            height,
            overflow_hidden: true,
            z_index: Some(BACKGROUND_Z),
            background: Some(self.plan.fill),
            ..Style::default()
        };

        Element::new("div")
            .class(GRADIENT_CLASS)
            .style(style)
            .extend(self.plan.strips.iter().map(|s| self.strip(s)))
    }

    /// A single band, offset from the anchored edge on the stacking axis.
    pub fn strip(&self, strip: &Strip) -> Element {
        let cross = SizeHint::Px(self.plan.direction.cross_extent(self.plan.size));
        let along = SizeHint::Px(strip.thickness);
        let (width, height, offsets) = match self.plan.direction {
            Direction::Horizontal => (cross, along, self.anchored(strip.offset, 0)),
            Direction::Vertical => (along, cross, self.anchored(0, strip.offset)),
        };

        Element::new("div").style(Style {
            position: Some(Position::Absolute),
            offsets,
            width,
            height,
            z_index: Some(STRIP_Z),
            background: Some(strip.color),
            ..Style::default()
        })
    }

    /// Wraps `content` in a relatively positioned layer above the gradient.
    pub fn content_layer(display: Display, content: Vec<Node>) -> Element {
        Element::new("div")
            .class(CONTENT_CLASS)
            .style(Style {
                position: Some(Position::Relative),
                display: Some(display),
                z_index: Some(CONTENT_Z),
                ..Style::default()
            })
            .extend(content)
    }

    /// Offsets from the plan's anchored edges; the opposite edges stay unset.
    fn anchored(&self, vertical: u32, horizontal: u32) -> Offsets {
        let mut offsets = Offsets::default();
        match self.plan.position.vertical {
            VEdge::Top => offsets.top = Some(vertical),
            VEdge::Bottom => offsets.bottom = Some(vertical),
        }
        match self.plan.position.horizontal {
            HEdge::Left => offsets.left = Some(horizontal),
            HEdge::Right => offsets.right = Some(horizontal),
        }
        offsets
    }
}

#[cfg(test)]
mod tests {
    use strata_engine::coords::Size;
    use strata_engine::options::{Anchor, GradientOptions};

    use super::*;

    fn plan(options: GradientOptions, size: Size) -> GradientPlan {
        GradientPlan::compute(&options, size)
    }

    #[test]
    fn horizontal_container_is_full_width() {
        let p = plan(GradientOptions::default(), Size::new(300, 40));
        let layer = Painter::new(&p).background_layer();
        let style = layer.inline_style();

        assert!(layer.has_class(GRADIENT_CLASS));
        assert_eq!(style.width, SizeHint::Fill);
        assert_eq!(style.height, SizeHint::Px(40));
        assert!(style.overflow_hidden);
        assert_eq!(layer.children().len(), 40);
    }

    #[test]
    fn horizontal_strips_span_width_and_step_down() {
        let p = plan(GradientOptions::default(), Size::new(300, 40));
        let layer = Painter::new(&p).background_layer();

        for (i, strip) in layer.child_elements().enumerate() {
            let style = strip.inline_style();
            assert_eq!(style.width, SizeHint::Px(300));
            assert_eq!(style.height, SizeHint::Px(1));
            assert_eq!(style.offsets.top, Some(i as u32));
            assert_eq!(style.offsets.left, Some(0));
            assert_eq!(style.z_index, Some(STRIP_Z));
        }
    }

    #[test]
    fn vertical_strips_span_height_and_step_right() {
        let options = GradientOptions::builder()
            .direction(Direction::Vertical)
            .position(Anchor::BOTTOM_RIGHT)
            .build()
            .unwrap();
        let p = plan(options, Size::new(60, 25));
        let layer = Painter::new(&p).background_layer();

        assert_eq!(layer.inline_style().width, SizeHint::Px(60));
        assert_eq!(layer.inline_style().height, SizeHint::Fill);
        assert_eq!(layer.inline_style().offsets.bottom, Some(0));
        assert_eq!(layer.inline_style().offsets.right, Some(0));

        let last = layer.child_elements().last().unwrap().inline_style();
        assert_eq!(last.width, SizeHint::Px(1));
        assert_eq!(last.height, SizeHint::Px(25));
        assert_eq!(last.offsets.right, Some(59));
        assert_eq!(last.offsets.bottom, Some(0));
        assert_eq!(last.offsets.top, None);
        assert_eq!(last.offsets.left, None);
    }

    #[test]
    fn content_layer_sits_on_top() {
        let layer = Painter::content_layer(Display::Inline, vec![Node::from("hi")]);
        let style = layer.inline_style();
        assert!(layer.has_class(CONTENT_CLASS));
        assert_eq!(style.position, Some(Position::Relative));
        assert_eq!(style.display, Some(Display::Inline));
        assert_eq!(style.z_index, Some(CONTENT_Z));
        assert_eq!(layer.children(), &[Node::from("hi")]);
    }
}
