use strata_engine::options::GradientOptions;
use strata_engine::plan::GradientPlan;

use crate::element::Node;
use crate::painter::{Painter, CONTENT_CLASS, GRADIENT_CLASS};
use crate::style::Position;
use crate::surface::Surface;

/// Paints one set of [`GradientOptions`] behind any number of surfaces.
///
/// Each surface is laid out against its own measured size. Rendering the
/// same surface again replaces the previous gradient instead of nesting a
/// second one around it.
///
/// # Example
/// ```
/// use strata_ui::prelude::*;
///
/// let options = GradientOptions::builder()
///     .to(ColorRgb::new(0x4c, 0x6e, 0xf5))
///     .build()
///     .unwrap();
///
/// let mut cards = vec![
///     Element::new("div").size(200, 40).text("one"),
///     Element::new("div").size(200, 90).text("two"),
/// ];
/// GradientRenderer::new(options).render_all(cards.iter_mut());
///
/// assert_eq!(cards[0].position_mode(), Position::Relative);
/// ```
#[derive(Debug, Clone)]
pub struct GradientRenderer {
    options: GradientOptions,
}

impl GradientRenderer {
    pub fn new(options: GradientOptions) -> Self {
        Self { options }
    }

    /// Computes the plan for `target` and installs the gradient layers.
    pub fn render<S: Surface + ?Sized>(&self, target: &mut S) {
        let plan = GradientPlan::compute(&self.options, target.inner_size());

        log::debug!(
            "painting {} gradient: {} strips of {}px over {}px",
            plan.direction,
            plan.strips.len(),
            plan.thickness,
            plan.length,
        );
        if plan.size.is_empty() {
            log::debug!("surface has no area; painting fill and content layers only");
        } else if plan.is_truncated() {
            log::debug!(
                "gradient truncated: {} of {} colors fit",
                plan.strips.len(),
                plan.path.len()
            );
        }

        let content = unwrap_previous_layers(target.take_content());

        if target.position_mode() == Position::Static {
            target.set_position_mode(Position::Relative);
        }

        let painter = Painter::new(&plan);
        let layers = vec![
            Node::from(painter.background_layer()),
            Node::from(Painter::content_layer(target.display_mode(), content)),
        ];
        target.set_content(layers);
    }

    /// Renders every target with the same options.
    pub fn render_all<'t, S, I>(&self, targets: I)
    where
        S: Surface + ?Sized + 't,
        I: IntoIterator<Item = &'t mut S>,
    {
        let mut count = 0usize;
        for target in targets {
            self.render(target);
            count += 1;
        }
        log::debug!("rendered gradient into {} surfaces", count);
    }
}

/// One-shot form of [`GradientRenderer::render`].
pub fn render<S: Surface + ?Sized>(target: &mut S, options: &GradientOptions) {
    GradientRenderer::new(*options).render(target);
}

/// Strips a previous render's layers and returns the original content.
///
/// A previous render leaves exactly `[gradient container, content layer]`
/// at the front of the children; anything after them was added later and is
/// kept behind the recovered content.
fn unwrap_previous_layers(mut content: Vec<Node>) -> Vec<Node> {
    let rendered = has_class(content.first(), GRADIENT_CLASS)
        && has_class(content.get(1), CONTENT_CLASS);
    if !rendered {
        return content;
    }

    log::debug!("replacing existing gradient layers");
    let trailing = content.split_off(2);
    let mut recovered = match content.pop() {
        Some(Node::Element(wrapper)) => wrapper.into_children(),
        _ => Vec::new(),
    };
    recovered.extend(trailing);
    recovered
}

fn has_class(node: Option<&Node>, class: &str) -> bool {
    node.and_then(Node::as_element).is_some_and(|e| e.has_class(class))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strata_engine::coords::Size;
    use strata_engine::logging::{init_logging, LoggingConfig};
    use strata_engine::options::{Anchor, Direction};
    use strata_engine::paint::ColorRgb;

    use super::*;
    use crate::element::Element;
    use crate::style::{Display, SizeHint};

    fn setup() {
        init_logging(LoggingConfig::for_tests());
    }

    fn gradient_of(target: &Element) -> &Element {
        target.children()[0].as_element().unwrap()
    }

    fn content_of(target: &Element) -> &Element {
        target.children()[1].as_element().unwrap()
    }

    #[test]
    fn installs_container_then_content() {
        setup();
        let mut target = Element::new("div").size(300, 40).text("Hello");
        render(&mut target, &GradientOptions::default());

        assert_eq!(target.children().len(), 2);
        assert!(gradient_of(&target).has_class(GRADIENT_CLASS));
        assert!(content_of(&target).has_class(CONTENT_CLASS));
        assert_eq!(content_of(&target).children(), &[Node::from("Hello")]);
    }

    #[test]
    fn static_target_becomes_relative() {
        setup();
        let mut target = Element::new("div").size(10, 10);
        assert_eq!(target.position_mode(), Position::Static);
        render(&mut target, &GradientOptions::default());
        assert_eq!(target.position_mode(), Position::Relative);
    }

    #[test]
    fn positioned_target_keeps_its_mode() {
        setup();
        let mut target = Element::new("div").size(10, 10).position(Position::Absolute);
        render(&mut target, &GradientOptions::default());
        assert_eq!(target.position_mode(), Position::Absolute);
    }

    #[test]
    fn content_layer_copies_target_display() {
        setup();
        let mut target = Element::new("span").size(10, 10).display(Display::InlineBlock);
        render(&mut target, &GradientOptions::default());
        assert_eq!(content_of(&target).inline_style().display, Some(Display::InlineBlock));
    }

    #[test]
    fn bottom_right_anchors_strips_and_fills_with_start() {
        setup();
        let from = ColorRgb::new(0x11, 0x22, 0x33);
        let options = GradientOptions::builder()
            .from(from)
            .position(Anchor::BOTTOM_RIGHT)
            .build()
            .unwrap();
        let mut target = Element::new("div").size(100, 20);
        render(&mut target, &options);

        let container = gradient_of(&target);
        assert_eq!(container.inline_style().background, Some(from));
        for strip in container.child_elements() {
            let offsets = strip.inline_style().offsets;
            assert!(offsets.bottom.is_some() && offsets.right == Some(0));
            assert!(offsets.top.is_none() && offsets.left.is_none());
        }
        // The strip nearest the anchor carries the start color.
        let first = container.child_elements().next().unwrap();
        assert_eq!(first.inline_style().background, Some(from));
        assert_eq!(first.inline_style().offsets.bottom, Some(0));
    }

    #[test]
    fn strips_cover_the_requested_length() {
        setup();
        let options = GradientOptions::builder().length(200).build().unwrap();
        let mut target = Element::new("div").size(80, 400);
        render(&mut target, &options);

        let covered: u32 = gradient_of(&target)
            .child_elements()
            .map(|s| match s.inline_style().height {
                SizeHint::Px(h) => h,
                other => panic!("unexpected strip height {:?}", other),
            })
            .sum();
        assert_eq!(covered, 200);
    }

    #[test]
    fn short_target_truncates_strips() {
        setup();
        let options = GradientOptions::builder()
            .direction(Direction::Vertical)
            .length(100)
            .build()
            .unwrap();
        let mut target = Element::new("div").size(30, 50);
        render(&mut target, &options);

        let strips: Vec<&Element> = gradient_of(&target).child_elements().collect();
        assert_eq!(strips.len(), 30);
        assert!(strips.iter().all(|s| s.inline_style().offsets.left.unwrap() < 30));
    }

    #[test]
    fn rendering_twice_equals_rendering_once() {
        setup();
        let base = Element::new("div").size(120, 30).text("Body").child(Element::new("b").text("!"));

        let mut once = base.clone();
        render(&mut once, &GradientOptions::default());

        let mut twice = base;
        render(&mut twice, &GradientOptions::default());
        render(&mut twice, &GradientOptions::default());

        assert_eq!(twice, once);
    }

    #[test]
    fn rerender_with_new_options_replaces_layers() {
        setup();
        let mut target = Element::new("div").size(50, 50).text("x");
        render(&mut target, &GradientOptions::default());

        let red = ColorRgb::new(255, 0, 0);
        let options = GradientOptions::builder().to(red).build().unwrap();
        render(&mut target, &options);

        assert_eq!(target.children().len(), 2);
        assert_eq!(gradient_of(&target).inline_style().background, Some(red));
        assert_eq!(content_of(&target).children(), &[Node::from("x")]);
    }

    #[test]
    fn render_all_uses_each_targets_size() {
        setup();
        let mut targets = vec![
            Element::new("div").size(100, 10),
            Element::new("div").size(100, 60),
        ];
        let renderer = GradientRenderer::new(GradientOptions::default());
        renderer.render_all(targets.iter_mut());

        let counts: Vec<usize> = targets
            .iter()
            .map(|t| gradient_of(t).children().len())
            .collect();
        assert_eq!(counts, [10, 60]);
    }

    #[test]
    fn unmeasured_target_still_gets_both_layers() {
        setup();
        let mut target = Element::new("div").text("Hi");
        assert!(target.inner_size().is_empty());
        render(&mut target, &GradientOptions::default());

        assert_eq!(target.children().len(), 2);
        assert!(gradient_of(&target).children().is_empty());
        assert_eq!(content_of(&target).children(), &[Node::from("Hi")]);
    }

    #[test]
    fn renders_through_a_trait_object() {
        setup();
        let mut target = Element::new("div").size(20, 20);
        let surface: &mut dyn Surface = &mut target;
        render(surface, &GradientOptions::default());
        assert_eq!(target.children().len(), 2);
        assert_eq!(target.inner_size(), Size::new(20, 20));
    }

    #[test]
    fn serialized_output() {
        setup();
        let mut target = Element::new("div").size(4, 2).text("Hi");
        render(&mut target, &GradientOptions::default());

        let expected = concat!(
            r#"<div style="position:relative;">"#,
            r#"<div class="gradient" style="position:absolute;top:0px;left:0px;width:100%;height:2px;overflow:hidden;z-index:0;background-color:rgb(255,255,255);">"#,
            r#"<div style="position:absolute;top:0px;left:0px;width:4px;height:1px;z-index:1;background-color:rgb(0,0,0);"></div>"#,
            r#"<div style="position:absolute;top:1px;left:0px;width:4px;height:1px;z-index:1;background-color:rgb(128,128,128);"></div>"#,
            r#"</div>"#,
            r#"<div class="gradient-content" style="position:relative;z-index:2;display:block;">Hi</div>"#,
            r#"</div>"#,
        );
        assert_eq!(target.to_html(), expected);
    }
}
