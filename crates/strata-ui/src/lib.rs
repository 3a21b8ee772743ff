//! Strata UI: paints strip gradients behind elements of a retained tree.
//!
//! # Quick start
//!
//! ```rust
//! use strata_ui::prelude::*;
//!
//! let options = parse_options("from: #1a1a2a; to: #4c6ef5; position: bottom").unwrap();
//!
//! let mut header = Element::new("header")
//!     .size(640, 48)
//!     .child(Element::new("h1").text("Strata"));
//! render(&mut header, &options);
//!
//! let html = header.to_html();
//! assert!(html.contains(r#"class="gradient""#));
//! ```
//!
//! # Hosting gradients in another tree
//!
//! Implement [`Surface`](surface::Surface) for your node type; the renderer
//! only needs its measured size, its position and display modes, and a way
//! to swap its children.
//!
//! ```rust,ignore
//! impl Surface for MyNode {
//!     fn inner_size(&self) -> Size { self.layout.inner() }
//!     // ...
//! }
//! GradientRenderer::new(options).render(&mut my_node);
//! ```

pub mod dsl;
pub mod element;
pub mod html;
pub mod painter;
pub mod renderer;
pub mod style;
pub mod surface;

pub use renderer::{render, GradientRenderer};

/// Everything needed to build trees and paint gradients into them.
pub mod prelude {
    pub use crate::dsl::{parse_options, ParseError};
    pub use crate::element::{Element, Node};
    pub use crate::html::to_html;
    pub use crate::painter::{Painter, CONTENT_CLASS, GRADIENT_CLASS};
    pub use crate::renderer::{render, GradientRenderer};
    pub use crate::style::{Display, Offsets, Position, SizeHint, Style};
    pub use crate::surface::Surface;

    // Re-export the engine primitives everyone needs.
    pub use strata_engine::coords::Size;
    pub use strata_engine::options::{Anchor, Direction, GradientOptions, HEdge, OptionsError, VEdge};
    pub use strata_engine::paint::ColorRgb;
    pub use strata_engine::plan::{GradientPlan, Strip};
}
