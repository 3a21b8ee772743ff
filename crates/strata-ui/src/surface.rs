use strata_engine::coords::Size;

use crate::element::{Element, Node};
use crate::style::{Display, Position};

/// Anything a gradient can be painted behind.
///
/// The renderer only talks to this trait, so a tree other than [`Element`]
/// (a browser DOM binding, a retained widget tree) can host gradients by
/// implementing it.
pub trait Surface {
    /// Inner size the gradient is laid out against.
    fn inner_size(&self) -> Size;

    /// Effective position mode. Unset means `static`.
    fn position_mode(&self) -> Position;

    fn set_position_mode(&mut self, position: Position);

    /// Effective display mode, copied onto the content layer.
    fn display_mode(&self) -> Display;

    /// Removes and returns all children.
    fn take_content(&mut self) -> Vec<Node>;

    /// Replaces all children.
    fn set_content(&mut self, content: Vec<Node>);
}

impl Surface for Element {
    fn inner_size(&self) -> Size {
        self.measured_size()
    }

    fn position_mode(&self) -> Position {
        self.inline_style().position.unwrap_or_default()
    }

    fn set_position_mode(&mut self, position: Position) {
        self.inline_style_mut().position = Some(position);
    }

    fn display_mode(&self) -> Display {
        self.inline_style().display.unwrap_or_default()
    }

    fn take_content(&mut self) -> Vec<Node> {
        std::mem::take(self.children_mut())
    }

    fn set_content(&mut self, content: Vec<Node>) {
        *self.children_mut() = content;
    }
}
