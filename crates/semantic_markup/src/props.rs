//! Pass-through attributes, shared base props, and prop partitioning.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{json_kind, MarkupError};

/// Attributes that belong on a native `<img>` rather than its wrapper.
///
/// `srcSet` is the camelCase prop spelling of `srcset`; both are accepted.
pub const HTML_IMAGE_PROPS: &[&str] = &[
    "alt", "height", "src", "srcset", "srcSet", "width", "loading",
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single attribute value.
pub enum AttrValue {
    /// Literal string value.
    Text(String),
    /// Boolean value; serialization depends on the attribute name.
    Bool(bool),
}

impl AttrValue {
    /// Serialized form for `name`, or `None` when the attribute is omitted.
    ///
    /// `aria-*` and `data-*` booleans stringify; other booleans follow HTML
    /// boolean-attribute rules.
    pub fn render(&self, name: &str) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(text) => Some(Cow::Borrowed(text)),
            Self::Bool(value) if name.starts_with("aria-") || name.starts_with("data-") => {
                Some(Cow::Borrowed(if *value { "true" } else { "false" }))
            }
            Self::Bool(true) => Some(Cow::Borrowed("")),
            Self::Bool(false) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered attribute bag.
///
/// Holds the "unhandled" props of a component: anything the component does not
/// interpret is forwarded verbatim to the rendered element.
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    /// Empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Attributes::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets an attribute, replacing any previous value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
    }

    /// Looks up an attribute.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Whether the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes and returns an attribute.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let index = self.0.iter().position(|(existing, _)| existing == name)?;
        Some(self.0.remove(index).1)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Extend<(String, AttrValue)> for Attributes {
    fn extend<I: IntoIterator<Item = (String, AttrValue)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl FromIterator<(String, AttrValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        attrs.extend(iter);
        attrs
    }
}

impl IntoIterator for Attributes {
    type Item = (String, AttrValue);
    type IntoIter = std::vec::IntoIter<(String, AttrValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut attrs = Self::new();
        for (name, value) in raw {
            let value = match value {
                Value::Null => continue,
                Value::Bool(flag) => AttrValue::Bool(flag),
                Value::Number(number) => AttrValue::Text(number.to_string()),
                Value::String(text) => AttrValue::Text(text),
                other => {
                    return Err(de::Error::custom(MarkupError::UnsupportedAttribute {
                        kind: json_kind(&other),
                        name,
                    }))
                }
            };
            attrs.set(name, value);
        }
        Ok(attrs)
    }
}

/// Splits attributes into those for an inner native element and the rest.
///
/// The inner bag receives every name listed in `html_props`, every `aria-*`
/// attribute, and `role`. Returns `(inner, root)`.
pub fn partition_html_props(attrs: Attributes, html_props: &[&str]) -> (Attributes, Attributes) {
    let mut inner = Attributes::new();
    let mut root = Attributes::new();
    for (name, value) in attrs {
        let is_inner = html_props.contains(&name.as_str())
            || name.starts_with("aria-")
            || name == "role";
        if is_inner {
            inner.set(name, value);
        } else {
            root.set(name, value);
        }
    }
    (inner, root)
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Props every component accepts.
pub struct BaseProps {
    /// Element type to render as, overriding the component default.
    #[serde(rename = "as")]
    pub element_type: Option<String>,
    /// Additional classes appended after the component's own.
    pub class_name: Option<String>,
    /// Unhandled props forwarded to the rendered element.
    #[serde(flatten)]
    pub attrs: Attributes,
}

impl BaseProps {
    /// Resolves the element type to render.
    ///
    /// An explicit `as` wins unless it equals `default_as`; otherwise the
    /// computed default applies, then `a` when an `href` is present (either the
    /// component's own or a pass-through attribute), then `default_as`, then
    /// `div`.
    pub fn element_type(
        &self,
        default_as: Option<&'static str>,
        computed_default: Option<&'static str>,
        has_href: bool,
    ) -> Cow<'static, str> {
        if let Some(requested) = self.element_type.as_deref() {
            if !requested.is_empty() && Some(requested) != default_as {
                return Cow::Owned(requested.to_string());
            }
        }
        if let Some(computed) = computed_default {
            return Cow::Borrowed(computed);
        }
        if has_href || self.attrs.contains("href") {
            return Cow::Borrowed("a");
        }
        Cow::Borrowed(default_as.unwrap_or("div"))
    }

    /// Puts `class` in front of any user-supplied class name.
    pub fn prepend_class(&mut self, class: &str) {
        self.class_name = Some(match self.class_name.take() {
            Some(existing) if !existing.is_empty() => format!("{class} {existing}"),
            _ => class.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn partition_routes_image_and_aria_props_inward() {
        let attrs = Attributes::new()
            .with("src", "foo.png")
            .with("id", "hero")
            .with("aria-label", "Hero")
            .with("role", "img")
            .with("data-test", "x");

        let (inner, root) = partition_html_props(attrs, HTML_IMAGE_PROPS);

        assert_eq!(
            inner.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["src", "aria-label", "role"]
        );
        assert_eq!(
            root.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["id", "data-test"]
        );
    }

    #[test]
    fn both_srcset_spellings_stay_on_the_image() {
        let attrs = Attributes::new()
            .with("srcSet", "a.png 2x")
            .with("srcset", "b.png 2x")
            .with("title", "t");

        let (inner, root) = partition_html_props(attrs, HTML_IMAGE_PROPS);

        assert_eq!(
            inner.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["srcSet", "srcset"]
        );
        assert_eq!(root.iter().map(|(name, _)| name).collect::<Vec<_>>(), vec!["title"]);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut attrs = Attributes::new().with("a", "1").with("b", "2");
        attrs.set("a", "3");
        assert_eq!(attrs.get("a"), Some(&AttrValue::from("3")));
        assert_eq!(attrs.iter().next().map(|(name, _)| name), Some("a"));
    }

    #[test]
    fn explicit_element_type_wins_unless_it_is_the_default() {
        let base = BaseProps {
            element_type: Some("span".into()),
            ..Default::default()
        };
        assert_eq!(base.element_type(None, Some("a"), false), "span");

        let base = BaseProps {
            element_type: Some("img".into()),
            ..Default::default()
        };
        assert_eq!(base.element_type(Some("img"), Some("div"), false), "div");
    }

    #[test]
    fn href_attribute_infers_anchor() {
        let base = BaseProps {
            attrs: Attributes::new().with("href", "/x"),
            ..Default::default()
        };
        assert_eq!(base.element_type(None, None, false), "a");
        assert_eq!(BaseProps::default().element_type(None, None, false), "div");
        assert_eq!(BaseProps::default().element_type(Some("i"), None, false), "i");
    }

    #[test]
    fn boolean_attribute_rendering_depends_on_name() {
        assert_eq!(AttrValue::Bool(false).render("aria-checked").as_deref(), Some("false"));
        assert_eq!(AttrValue::Bool(true).render("data-text").as_deref(), Some("true"));
        assert_eq!(AttrValue::Bool(true).render("disabled").as_deref(), Some(""));
        assert_eq!(AttrValue::Bool(false).render("disabled"), None);
    }

    #[test]
    fn base_props_collect_unhandled_keys() {
        let base: BaseProps = serde_json::from_value(json!({
            "as": "section",
            "className": "hero",
            "id": "main",
            "tabIndex": 2,
            "hidden": true
        }))
        .expect("base props");

        assert_eq!(base.element_type.as_deref(), Some("section"));
        assert_eq!(base.class_name.as_deref(), Some("hero"));
        assert_eq!(base.attrs.get("id"), Some(&AttrValue::from("main")));
        assert_eq!(base.attrs.get("tabIndex"), Some(&AttrValue::from("2")));
        assert_eq!(base.attrs.get("hidden"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn nested_attribute_values_are_rejected() {
        let err = serde_json::from_value::<Attributes>(json!({ "style": { "color": "red" } }))
            .unwrap_err();
        assert!(err.to_string().contains("attribute `style` must be a scalar"));
    }

    #[test]
    fn prepend_class_keeps_user_classes_last() {
        let mut base = BaseProps {
            class_name: Some("muted".into()),
            ..Default::default()
        };
        base.prepend_class("description");
        assert_eq!(base.class_name.as_deref(), Some("description muted"));
    }
}
