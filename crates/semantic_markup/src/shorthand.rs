//! Component rendering contract and shorthand expansion.

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

use crate::error::{json_kind, MarkupError, PropWarning};
use crate::node::{Element, Node};

/// A property bag that renders to markup.
pub trait Component {
    /// Display name used in warnings.
    const NAME: &'static str;

    /// Builds the markup tree. Pure; never logs.
    fn build(&self) -> Node;

    /// Prop-combination problems for this bag.
    fn warnings(&self) -> Vec<PropWarning> {
        Vec::new()
    }

    /// Reports warnings (debug builds only) and builds the markup tree.
    fn render(&self) -> Node {
        #[cfg(debug_assertions)]
        for warning in self.warnings() {
            leptos::logging::warn!("{}: {warning}", Self::NAME);
        }
        self.build()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A child element given in compact form.
///
/// A plain value is mapped onto the target component's primary prop (an image
/// `src`, a label's content, an icon `name`, ...); a full bag is rendered as
/// is; a pre-built node is inserted untouched.
pub enum Shorthand<P> {
    /// Primitive value.
    Value(String),
    /// Full property bag.
    Props(Box<P>),
    /// Pre-rendered node.
    Element(Node),
}

impl<P> Shorthand<P> {
    /// Shorthand from a full property bag.
    pub fn props(props: P) -> Self {
        Self::Props(Box::new(props))
    }
}

impl<P> From<&str> for Shorthand<P> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl<P> From<String> for Shorthand<P> {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl<P> From<Node> for Shorthand<P> {
    fn from(node: Node) -> Self {
        Self::Element(node)
    }
}

impl<'de, P: DeserializeOwned> Deserialize<'de> for Shorthand<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(text) => Ok(Self::Value(text)),
            Value::Number(number) => Ok(Self::Value(number.to_string())),
            Value::Object(map) => serde_json::from_value(Value::Object(map))
                .map(Self::props)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(MarkupError::UnsupportedShorthand(
                json_kind(&other),
            ))),
        }
    }
}

/// Components that can be created from shorthand.
pub trait ShorthandFactory: Component + Clone + Default {
    /// Maps a primitive shorthand value onto a fresh bag.
    fn from_value(value: &str) -> Self;

    /// Expands shorthand into a rendered node.
    ///
    /// `customize` runs on the expanded bag before rendering. Callers use it to
    /// fill default props (touching only unset fields) and to apply override
    /// props such as chained callbacks. Pre-built nodes pass through untouched.
    fn create(shorthand: Option<&Shorthand<Self>>, customize: impl FnOnce(&mut Self)) -> Option<Node> {
        Self::create_with(shorthand, customize, |element| element)
    }

    /// Like [`ShorthandFactory::create`], with `adapt` applied to a pre-built
    /// element in place of `customize`.
    ///
    /// A pre-built element has no props left to fill, so `adapt` carries the
    /// same intent at markup level: default classes, chained click handlers.
    /// Text and fragment nodes pass through untouched.
    fn create_with(
        shorthand: Option<&Shorthand<Self>>,
        customize: impl FnOnce(&mut Self),
        adapt: impl FnOnce(Element) -> Element,
    ) -> Option<Node> {
        let mut props = match shorthand? {
            Shorthand::Value(value) => Self::from_value(value),
            Shorthand::Props(props) => props.as_ref().clone(),
            Shorthand::Element(Node::Element(element)) => {
                return Some(adapt(element.clone()).into())
            }
            Shorthand::Element(node) => return Some(node.clone()),
        };
        customize(&mut props);
        Some(props.render())
    }
}
