use semantic_markup::{
    key_only, key_or_value_and_key, value_and_key, BaseProps, Callback, ClassList, Component,
    Element, KeyOrValue, Node, ShorthandFactory, Token,
};
use serde::Deserialize;

use crate::forward_click;
use crate::sui::{Color, Flip, IconCorner, Rotation, Size};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A glyph from the icon font.
pub struct Icon {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Formatted with a border.
    pub bordered: bool,
    /// Formatted inside a circle.
    pub circular: bool,
    /// Icon color.
    pub color: Option<Color>,
    /// Positioned in a corner of an icon group.
    pub corner: KeyOrValue<IconCorner>,
    /// Shown as disabled; clicks are ignored.
    pub disabled: bool,
    /// Rendered without horizontal spacing.
    pub fitted: bool,
    /// Mirrored.
    pub flipped: Option<Flip>,
    /// Inverted colors.
    pub inverted: bool,
    /// Formatted as a link.
    pub link: bool,
    /// Spinning loader.
    pub loading: bool,
    /// Icon name (for example `delete` or `user circle`).
    pub name: Option<String>,
    /// Rotated a quarter turn.
    pub rotated: Option<Rotation>,
    /// Icon size.
    pub size: Option<Size>,
    /// Called on click with the icon's props.
    #[serde(skip)]
    pub on_click: Option<Callback<Icon>>,
}

impl Component for Icon {
    const NAME: &'static str = "Icon";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add(self.color.map(Token::token))
            .add(self.name.as_deref())
            .add(self.size.map(Token::token))
            .add(key_only(self.bordered, "bordered"))
            .add(key_only(self.circular, "circular"))
            .add(key_only(self.disabled, "disabled"))
            .add(key_only(self.fitted, "fitted"))
            .add(key_only(self.inverted, "inverted"))
            .add(key_only(self.link, "link"))
            .add(key_only(self.loading, "loading"))
            .add(key_or_value_and_key(self.corner, "corner"))
            .add(value_and_key(self.flipped, "flipped"))
            .add(value_and_key(self.rotated, "rotated"))
            .add("icon")
            .add(self.base.class_name.as_deref())
            .build();

        // Decorative unless the caller labelled it or decided for themselves.
        let aria_hidden =
            !self.base.attrs.contains("aria-label") && !self.base.attrs.contains("aria-hidden");
        let on_click = if self.disabled {
            None
        } else {
            forward_click(self, self.on_click.as_ref())
        };

        Element::new(self.base.element_type(Some("i"), None, false))
            .attrs(self.base.attrs.clone())
            .attr_opt("aria-hidden", aria_hidden.then_some("true"))
            .with_class(classes)
            .maybe_on_click(on_click)
            .into()
    }
}

impl ShorthandFactory for Icon {
    fn from_value(value: &str) -> Self {
        Self {
            name: Some(value.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use semantic_markup::Attributes;

    use super::*;

    #[test]
    fn renders_decorative_italic_glyph() {
        let html = Icon::from_value("user").render().to_html();
        assert_eq!(html, r#"<i class="user icon" aria-hidden="true"></i>"#);
    }

    #[test]
    fn labelled_icons_are_not_hidden() {
        let icon = Icon {
            name: Some("search".into()),
            base: BaseProps {
                attrs: Attributes::new().with("aria-label", "Search"),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            icon.render().to_html(),
            r#"<i class="search icon" aria-label="Search"></i>"#
        );
    }

    #[test]
    fn explicit_aria_hidden_is_kept() {
        let icon = Icon {
            name: Some("user".into()),
            base: BaseProps {
                attrs: Attributes::new().with("aria-hidden", "false"),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            icon.render().to_html(),
            r#"<i class="user icon" aria-hidden="false"></i>"#
        );
    }

    #[test]
    fn modifier_classes_follow_framework_order() {
        let icon = Icon {
            color: Some(Color::Red),
            name: Some("heart".into()),
            size: Some(Size::Large),
            circular: true,
            corner: KeyOrValue::Value(IconCorner::TopRight),
            flipped: Some(Flip::Horizontally),
            ..Default::default()
        };
        let node = icon.render();
        let element = node.as_element().expect("element");
        assert_eq!(
            element.class(),
            Some("red heart large circular top right corner horizontally flipped icon")
        );
    }

    #[test]
    fn disabled_icons_swallow_clicks() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let on_click = Callback::new(move |_: &Icon| counter.set(counter.get() + 1));

        let enabled = Icon {
            on_click: Some(on_click.clone()),
            ..Icon::from_value("close")
        }
        .render();
        assert!(enabled.as_element().expect("element").click());

        let disabled = Icon {
            disabled: true,
            on_click: Some(on_click),
            ..Icon::from_value("close")
        }
        .render();
        assert!(!disabled.as_element().expect("element").click());
        assert_eq!(hits.get(), 1);
    }
}
