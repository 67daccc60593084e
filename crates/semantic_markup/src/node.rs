//! Markup tree produced by component rendering.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{json_kind, MarkupError};
use crate::props::{AttrValue, Attributes};

/// Shared event callback.
///
/// Components hand their own property bag to the callback (`Callback<Label>`),
/// while element-level click listeners use `Callback<()>`. Two callbacks are
/// equal when they share the same closure. Not `leptos::Callback`: that one
/// takes its argument by value and has no equality, and prop bags need both.
pub struct Callback<T: ?Sized = ()>(Rc<dyn Fn(&T)>);

impl<T: ?Sized> Callback<T> {
    /// Wraps a closure.
    pub fn new(f: impl Fn(&T) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the callback.
    pub fn call(&self, value: &T) {
        (self.0)(value)
    }
}

impl<T: ?Sized> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl<T: ?Sized> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized, F: Fn(&T) + 'static> From<F> for Callback<T> {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A rendered markup node.
pub enum Node {
    /// Element with tag, classes, attributes, and children.
    Element(Element),
    /// Escaped text content.
    Text(String),
    /// Sequence of sibling nodes without a wrapper.
    Fragment(Vec<Node>),
}

impl Node {
    /// Text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the element when this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        match self {
            Self::Element(element) => element.find_class(class),
            Self::Text(_) => None,
            Self::Fragment(nodes) => nodes.iter().find_map(|node| node.find_class(class)),
        }
    }

    /// Depth-first search for the first element with the given tag.
    pub fn find_tag(&self, tag: &str) -> Option<&Element> {
        match self {
            Self::Element(element) => element.find_tag(tag),
            Self::Text(_) => None,
            Self::Fragment(nodes) => nodes.iter().find_map(|node| node.find_tag(tag)),
        }
    }

    /// Serializes the tree to HTML.
    pub fn to_html(&self) -> String {
        self.to_string()
    }

    /// Decodes content from JSON: strings and numbers become text, arrays
    /// become fragments.
    pub fn from_json(value: Value) -> Result<Self, MarkupError> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            Value::Number(number) => Ok(Self::Text(number.to_string())),
            Value::Array(items) => items
                .into_iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Fragment),
            other => Err(MarkupError::UnsupportedContent(json_kind(&other))),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Fragment(nodes)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(value).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A markup element.
pub struct Element {
    tag: Cow<'static, str>,
    class: Option<String>,
    attrs: Attributes,
    children: Vec<Node>,
    on_click: Option<Callback>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            attrs: Attributes::default(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Sets the class attribute. Empty strings clear it.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = if class.is_empty() { None } else { Some(class) };
        self
    }

    /// Sets (or replaces) one attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Sets an attribute when a value is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<AttrValue>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Merges a whole attribute bag; later values replace earlier ones.
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(attrs);
        self
    }

    /// Puts `class` in front of the existing classes.
    pub fn prepend_class(mut self, class: &str) -> Self {
        self.class = Some(match self.class.take() {
            Some(existing) => format!("{class} {existing}"),
            None => class.to_string(),
        });
        self
    }

    /// Appends a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a child node when present.
    pub fn child_opt(mut self, node: Option<Node>) -> Self {
        self.children.extend(node);
        self
    }

    /// Appends several child nodes.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Attaches a click listener.
    pub fn on_click(mut self, callback: Callback) -> Self {
        self.on_click = Some(callback);
        self
    }

    /// Attaches a click listener when one is given.
    pub fn maybe_on_click(mut self, callback: Option<Callback>) -> Self {
        if callback.is_some() {
            self.on_click = callback;
        }
        self
    }

    /// Element tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Assembled class string, if any.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|classes| classes.split(' ').any(|token| token == class))
    }

    /// Looks up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// All attributes in insertion order.
    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    /// Child nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// The attached click listener.
    pub fn click_handler(&self) -> Option<&Callback> {
        self.on_click.as_ref()
    }

    /// Dispatches a click to the attached listener. Returns whether one ran.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(callback) => {
                callback.call(&());
                true
            }
            None => false,
        }
    }

    fn find_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|node| node.find_class(class))
    }

    fn find_tag(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|node| node.find_tag(tag))
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Cow<'static, str>,
        Option<String>,
        Attributes,
        Vec<Node>,
        Option<Callback>,
    ) {
        (self.tag, self.class, self.attrs, self.children, self.on_click)
    }
}
