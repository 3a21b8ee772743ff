//! HTML serialization of the element tree.
//!
//! Output is compact (no whitespace between tags) and deterministic: class
//! order is insertion order, style declarations follow [`Style::to_css`].
//!
//! [`Style::to_css`]: crate::style::Style::to_css

use crate::element::{Element, Node};

pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

pub fn element_to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(e) => write_element(out, e),
        Node::Text(t) => escape_into(out, t),
    }
}

fn write_element(out: &mut String, e: &Element) {
    out.push('<');
    out.push_str(e.tag());

    if !e.classes().is_empty() {
        out.push_str(" class=\"");
        escape_into(out, &e.classes().join(" "));
        out.push('"');
    }

    let css = e.inline_style().to_css();
    if !css.is_empty() {
        out.push_str(" style=\"");
        escape_into(out, &css);
        out.push('"');
    }
    out.push('>');

    for child in e.children() {
        write_node(out, child);
    }

    out.push_str("</");
    out.push_str(e.tag());
    out.push('>');
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}
