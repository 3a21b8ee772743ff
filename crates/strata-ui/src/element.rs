use std::fmt;

use strata_engine::coords::Size;

use crate::html;
use crate::style::{Display, Position, Style};

// ── Node ──────────────────────────────────────────────────────────────────

/// One child in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_owned())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&html::to_html(self))
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A retained UI element: tag, classes, inline style, measured size, children.
///
/// `size` is the element's inner size as measured by whoever owns the tree
/// (a layout pass, a browser, a test). Gradients are laid out against it.
///
/// # Example
/// ```
/// use strata_ui::prelude::*;
///
/// let card = Element::new("div")
///     .class("card")
///     .size(240, 80)
///     .display(Display::InlineBlock)
///     .child(Element::new("h2").text("Status"));
/// assert_eq!(card.measured_size(), Size::new(240, 80));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    style: Style,
    size: Size,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    // ── builders ──────────────────────────────────────────────────────────

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.style.position = Some(position);
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.style.display = Some(display);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn extend<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[inline]
    pub fn inline_style(&self) -> &Style {
        &self.style
    }

    #[inline]
    pub fn inline_style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    #[inline]
    pub fn measured_size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn to_html(&self) -> String {
        html::element_to_html(self)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
