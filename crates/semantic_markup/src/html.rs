//! HTML serialization for markup trees.

use std::fmt::{self, Write};

use crate::node::{Element, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => write_escaped(f, text, false),
            Self::Fragment(nodes) => nodes
                .iter()
                .try_for_each(|node| fmt::Display::fmt(node, f)),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag())?;
        if let Some(class) = self.class() {
            f.write_str(" class=\"")?;
            write_escaped(f, class, true)?;
            f.write_char('"')?;
        }
        for (name, value) in self.attributes().iter() {
            let Some(rendered) = value.render(name) else {
                continue;
            };
            write!(f, " {name}=\"")?;
            write_escaped(f, &rendered, true)?;
            f.write_char('"')?;
        }
        if VOID_ELEMENTS.contains(&self.tag()) {
            return f.write_str("/>");
        }
        f.write_char('>')?;
        for node in self.nodes() {
            fmt::Display::fmt(node, f)?;
        }
        write!(f, "</{}>", self.tag())
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str, attribute: bool) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' if attribute => f.write_str("&quot;")?,
            _ => f.write_char(ch)?,
        }
    }
    Ok(())
}
