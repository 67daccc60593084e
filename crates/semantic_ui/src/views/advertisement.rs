use semantic_markup::{key_only, AttrValue, BaseProps, ClassList, Component, Element, Node, Token};
use serde::Deserialize;

use crate::children_or_content;
use crate::sui::AdUnit;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
/// Test-mode marker for an ad slot. Its value is shown in place of the ad.
pub enum AdTest {
    /// Plain on/off flag.
    Flag(bool),
    /// Numeric label.
    Number(f64),
    /// Text label.
    Text(String),
}

impl AdTest {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::Text(text) => !text.is_empty(),
        }
    }

    fn data_text(&self) -> AttrValue {
        match self {
            Self::Flag(flag) => AttrValue::Bool(*flag),
            Self::Number(number) => AttrValue::Text(number.to_string()),
            Self::Text(text) => AttrValue::Text(text.clone()),
        }
    }
}

impl From<bool> for AdTest {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for AdTest {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A standard ad slot.
pub struct Advertisement {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Centered in its container.
    #[serde(default)]
    pub centered: bool,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for primary content.
    #[serde(default)]
    pub content: Option<Node>,
    /// Shows a test placeholder carrying this value.
    #[serde(default)]
    pub test: Option<AdTest>,
    /// Standard ad unit size.
    pub unit: AdUnit,
}

impl Advertisement {
    /// Empty slot of the given unit.
    pub fn new(unit: AdUnit) -> Self {
        Self {
            base: BaseProps::default(),
            centered: false,
            children: Vec::new(),
            content: None,
            test: None,
            unit,
        }
    }
}

impl Component for Advertisement {
    const NAME: &'static str = "Advertisement";

    fn build(&self) -> Node {
        let test = self.test.as_ref();
        let classes = ClassList::new()
            .add("ui")
            .add(self.unit.token())
            .add(key_only(self.centered, "centered"))
            .add(key_only(test.is_some_and(AdTest::is_truthy), "test"))
            .add("ad")
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .attr_opt("data-text", test.map(AdTest::data_text))
            .children(children_or_content(&self.children, self.content.as_ref()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn unit_and_flags() {
        let ad = Advertisement {
            centered: true,
            test: Some("Leaderboard".into()),
            ..Advertisement::new(AdUnit::Leaderboard)
        };
        assert_eq!(
            ad.render().to_html(),
            r#"<div class="ui leaderboard centered test ad" data-text="Leaderboard"></div>"#
        );
    }

    #[test]
    fn multi_word_units() {
        let ad = Advertisement::new(AdUnit::MediumRectangle);
        assert_eq!(
            ad.render().to_html(),
            r#"<div class="ui medium rectangle ad"></div>"#
        );
    }

    #[test]
    fn test_values_render_as_data_text() {
        let cases = [
            (AdTest::Flag(true), "ui banner test ad", "true"),
            (AdTest::Flag(false), "ui banner ad", "false"),
            (AdTest::Number(3.0), "ui banner test ad", "3"),
            (AdTest::Number(0.0), "ui banner ad", "0"),
            (AdTest::Text(String::new()), "ui banner ad", ""),
        ];
        for (test, class, data_text) in cases {
            let ad = Advertisement {
                test: Some(test),
                ..Advertisement::new(AdUnit::Banner)
            };
            let node = ad.render();
            let root = node.as_element().expect("root");
            assert_eq!(root.class(), Some(class));
            assert_eq!(
                root.attribute("data-text").and_then(|value| value.render("data-text")),
                Some(data_text.into())
            );
        }
    }

    #[test]
    fn loads_from_json_and_requires_unit() {
        let ad: Advertisement = serde_json::from_value(json!({
            "unit": "half page",
            "test": 5,
            "content": "Ad"
        }))
        .expect("ad config");
        assert_eq!(
            ad.render().to_html(),
            r#"<div class="ui half page test ad" data-text="5">Ad</div>"#
        );

        let missing = serde_json::from_value::<Advertisement>(json!({ "centered": true }));
        assert!(missing.is_err());
    }
}
