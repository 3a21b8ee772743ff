use std::fmt::Write;

use strata_engine::paint::ColorRgb;

// ── Position ──────────────────────────────────────────────────────────────

/// CSS `position` mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

impl Position {
    pub fn as_css(self) -> &'static str {
        match self {
            Position::Static => "static",
            Position::Relative => "relative",
            Position::Absolute => "absolute",
            Position::Fixed => "fixed",
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────

/// CSS `display` mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Display {
    #[default]
    Block,
    Inline,
    InlineBlock,
    Flex,
    None,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Inline => "inline",
            Display::InlineBlock => "inline-block",
            Display::Flex => "flex",
            Display::None => "none",
        }
    }
}

// ── SizeHint ──────────────────────────────────────────────────────────────

/// Width or height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SizeHint {
    /// Not set; the element sizes itself.
    #[default]
    Auto,
    /// Fixed pixel size.
    Px(u32),
    /// 100% of the parent on this axis.
    Fill,
}

impl SizeHint {
    fn css(self) -> Option<String> {
        match self {
            SizeHint::Auto => None,
            SizeHint::Px(v) => Some(format!("{}px", v)),
            SizeHint::Fill => Some("100%".to_owned()),
        }
    }
}

// ── Offsets ───────────────────────────────────────────────────────────────

/// Pixel distances from the parent's edges for positioned elements.
///
/// `None` leaves that edge unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Offsets {
    pub top: Option<u32>,
    pub right: Option<u32>,
    pub bottom: Option<u32>,
    pub left: Option<u32>,
}

// ── Style ─────────────────────────────────────────────────────────────────

/// Inline style of an element. Unset properties are not emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub position: Option<Position>,
    pub display: Option<Display>,
    pub offsets: Offsets,
    pub width: SizeHint,
    pub height: SizeHint,
    pub overflow_hidden: bool,
    pub z_index: Option<i32>,
    pub background: Option<ColorRgb>,
}

impl Style {
    /// Serializes to a CSS declaration list (`prop:value;` repeated).
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let mut decl = |name: &str, value: &dyn std::fmt::Display| {
            // Writing into a String cannot fail.
            let _ = write!(css, "{}:{};", name, value);
        };

        if let Some(p) = self.position {
            decl("position", &p.as_css());
        }
        let edges = [
            ("top", self.offsets.top),
            ("right", self.offsets.right),
            ("bottom", self.offsets.bottom),
            ("left", self.offsets.left),
        ];
        for (name, px) in edges {
            if let Some(px) = px {
                decl(name, &format_args!("{}px", px));
            }
        }
        if let Some(w) = self.width.css() {
            decl("width", &w);
        }
        if let Some(h) = self.height.css() {
            decl("height", &h);
        }
        if self.overflow_hidden {
            decl("overflow", &"hidden");
        }
        if let Some(z) = self.z_index {
            decl("z-index", &z);
        }
        if let Some(d) = self.display {
            decl("display", &d.as_css());
        }
        if let Some(bg) = self.background {
            decl("background-color", &bg.to_css_rgb());
        }
        css
    }
}
