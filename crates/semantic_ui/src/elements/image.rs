use semantic_markup::{
    key_only, key_or_value_and_key, partition_html_props, value_and_key, vertical_align,
    BaseProps, ClassList, Component, Element, KeyOrValue, Node, PropWarning, Shorthand,
    ShorthandFactory, Token, HTML_IMAGE_PROPS,
};
use serde::Deserialize;

use crate::children_or_content;
use crate::elements::Label;
use crate::modules::Dimmer;
use crate::sui::{Floated, Side, Size, VerticalAlign};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// An image is a graphic representation of something.
///
/// Renders a bare `<img>` by default. Adding a dimmer, a label, `wrapped`, or
/// children switches the root to a `<div>` wrapper around an inner `<img>`;
/// an `href` alone switches it to an `<a>`. Image attributes (`src`, `alt`,
/// ARIA, ...) always land on the `<img>`.
pub struct Image {
    /// Shared element props. `src`, `alt`, and friends go in `base.attrs`.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Formatted to appear inline with text as an avatar.
    pub avatar: bool,
    /// Border to emphasize edges of white or transparent content.
    pub bordered: bool,
    /// Centered in a content block.
    pub centered: bool,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Appears circular.
    pub circular: bool,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Shorthand for a [`Dimmer`] over the image.
    pub dimmer: Option<Shorthand<Dimmer>>,
    /// Shown as disabled.
    pub disabled: bool,
    /// Sits to the left or right of other content.
    pub floated: Option<Floated>,
    /// Takes up the width of its container. Cannot be combined with `size`.
    pub fluid: bool,
    /// Hidden.
    pub hidden: bool,
    /// Renders the wrapper as an `<a>` with this href.
    pub href: Option<String>,
    /// Appears inline.
    pub inline: bool,
    /// Shorthand for a [`Label`] attached to the image.
    pub label: Option<Shorthand<Label>>,
    /// Rounded edges.
    pub rounded: bool,
    /// Image size.
    pub size: Option<Size>,
    /// Extra spacing from nearby content, optionally on one side only.
    pub spaced: KeyOrValue<Side>,
    /// Whether to add the `ui` class. Unset means yes.
    pub ui: Option<bool>,
    /// Vertical alignment.
    pub vertical_align: Option<VerticalAlign>,
    /// Wrap in a `div.ui.image`. Any explicit value selects the wrapper markup.
    pub wrapped: Option<bool>,
}

impl Image {
    fn wants_wrapper(&self) -> bool {
        self.dimmer.is_some()
            || self.label.is_some()
            || self.wrapped.is_some()
            || !self.children.is_empty()
    }
}

impl Component for Image {
    const NAME: &'static str = "Image";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add(key_only(self.ui.unwrap_or(true), "ui"))
            .add(self.size.map(Token::token))
            .add(key_only(self.avatar, "avatar"))
            .add(key_only(self.bordered, "bordered"))
            .add(key_only(self.circular, "circular"))
            .add(key_only(self.centered, "centered"))
            .add(key_only(self.disabled, "disabled"))
            .add(key_only(self.fluid, "fluid"))
            .add(key_only(self.hidden, "hidden"))
            .add(key_only(self.inline, "inline"))
            .add(key_only(self.rounded, "rounded"))
            .add(key_or_value_and_key(self.spaced, "spaced"))
            .add(value_and_key(self.floated, "floated"))
            .add(vertical_align(self.vertical_align))
            .add("image")
            .add(self.base.class_name.as_deref())
            .build();

        let tag = self.base.element_type(
            Some("img"),
            self.wants_wrapper().then_some("div"),
            self.href.is_some(),
        );
        let rest = self.base.attrs.clone();

        if !self.children.is_empty() || self.content.is_some() {
            return Element::new(tag)
                .attrs(rest)
                .with_class(classes)
                .children(children_or_content(&self.children, self.content.as_ref()))
                .into();
        }

        let (img_attrs, root_attrs) = partition_html_props(rest, HTML_IMAGE_PROPS);
        if tag == "img" {
            return Element::new(tag)
                .attrs(root_attrs)
                .attrs(img_attrs)
                .with_class(classes)
                .into();
        }

        Element::new(tag)
            .attrs(root_attrs)
            .with_class(classes)
            .attr_opt("href", self.href.as_deref())
            .child_opt(Dimmer::create(self.dimmer.as_ref(), |_| {}))
            .child_opt(Label::create(self.label.as_ref(), |_| {}))
            .child(Element::new("img").attrs(img_attrs))
            .into()
    }

    fn warnings(&self) -> Vec<PropWarning> {
        let mut warnings = Vec::new();
        if self.fluid && self.size.is_some() {
            warnings.push(PropWarning::Disallowed {
                prop: "fluid",
                other: "size",
            });
        }
        warnings
    }
}

impl ShorthandFactory for Image {
    fn from_value(value: &str) -> Self {
        let mut image = Self::default();
        image.base.attrs.set("src", value);
        image
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A group of images formatted together.
pub struct ImageGroup {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Size applied to every image in the group.
    pub size: Option<Size>,
}

impl Component for ImageGroup {
    const NAME: &'static str = "ImageGroup";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add("ui")
            .add(self.size.map(Token::token))
            .add(self.base.class_name.as_deref())
            .add("images")
            .build();

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .children(children_or_content(&self.children, self.content.as_ref()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use semantic_markup::Attributes;
    use serde_json::json;

    use super::*;

    fn image(src: &str) -> Image {
        Image::from_value(src)
    }

    #[test]
    fn bare_image_renders_img_with_all_attributes() {
        let mut avatar = Image {
            avatar: true,
            bordered: true,
            ..image("/avatar.png")
        };
        avatar.base.attrs.set("alt", "Me");
        avatar.base.attrs.set("id", "me");

        assert_eq!(
            avatar.render().to_html(),
            r#"<img class="ui avatar bordered image" id="me" src="/avatar.png" alt="Me"/>"#
        );
    }

    #[test]
    fn ui_class_can_be_dropped() {
        let node = Image {
            ui: Some(false),
            ..image("a.png")
        }
        .render();
        assert_eq!(node.as_element().and_then(Element::class), Some("image"));
    }

    #[test]
    fn enum_props_use_value_and_key_forms() {
        let node = Image {
            size: Some(Size::Small),
            spaced: KeyOrValue::Value(Side::Right),
            floated: Some(Floated::Left),
            vertical_align: Some(VerticalAlign::Middle),
            ..image("a.png")
        }
        .render();
        assert_eq!(
            node.as_element().and_then(Element::class),
            Some("ui small right spaced left floated middle aligned image")
        );
    }

    #[test]
    fn wrapped_image_moves_image_props_inside() {
        let mut wrapped = Image {
            wrapped: Some(false),
            ..image("a.png")
        };
        wrapped.base.attrs.set("data-slot", "hero");
        wrapped.base.attrs.set("aria-label", "Hero");

        assert_eq!(
            wrapped.render().to_html(),
            r#"<div class="ui image" data-slot="hero"><img src="a.png" aria-label="Hero"/></div>"#
        );
    }

    #[test]
    fn href_alone_renders_anchor_wrapper() {
        let linked = Image {
            href: Some("/profile".into()),
            ..image("a.png")
        };
        assert_eq!(
            linked.render().to_html(),
            r#"<a class="ui image" href="/profile"><img src="a.png"/></a>"#
        );
    }

    #[test]
    fn dimmer_and_label_precede_inner_img() {
        let labelled = Image {
            label: Some("Featured".into()),
            dimmer: Some("Loading".into()),
            ..image("a.png")
        };
        assert_eq!(
            labelled.render().to_html(),
            concat!(
                r#"<div class="ui image">"#,
                r#"<div class="ui dimmer"><div class="content">Loading</div></div>"#,
                r#"<div class="ui label">Featured</div>"#,
                r#"<img src="a.png"/>"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn children_replace_generated_markup() {
        let node = Image {
            children: vec![Node::text("custom")],
            href: Some("/ignored".into()),
            ..Default::default()
        }
        .render();
        assert_eq!(node.to_html(), r#"<div class="ui image">custom</div>"#);
    }

    #[test]
    fn explicit_element_type_is_respected() {
        let node = Image {
            base: BaseProps {
                element_type: Some("span".into()),
                attrs: Attributes::new().with("src", "a.png"),
                ..Default::default()
            },
            ..Default::default()
        }
        .render();
        assert_eq!(
            node.to_html(),
            r#"<span class="ui image"><img src="a.png"/></span>"#
        );
    }

    #[test]
    fn fluid_with_size_is_reported() {
        let image = Image {
            fluid: true,
            size: Some(Size::Large),
            ..Default::default()
        };
        assert_eq!(
            image.warnings(),
            vec![PropWarning::Disallowed {
                prop: "fluid",
                other: "size"
            }]
        );
    }

    #[test]
    fn loads_from_json_configuration() {
        let image: Image = serde_json::from_value(json!({
            "src": "/hero.png",
            "alt": "Hero",
            "size": "medium",
            "spaced": "left",
            "label": { "content": "New", "color": "red", "ribbon": true }
        }))
        .expect("image config");

        assert_eq!(
            image.render().to_html(),
            concat!(
                r#"<div class="ui medium left spaced image">"#,
                r#"<div class="ui red ribbon label">New</div>"#,
                r#"<img alt="Hero" src="/hero.png"/>"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn group_puts_user_classes_before_images() {
        let group = ImageGroup {
            size: Some(Size::Tiny),
            base: BaseProps {
                class_name: Some("gallery".into()),
                ..Default::default()
            },
            children: vec![image("a.png").render(), image("b.png").render()],
            ..Default::default()
        };
        assert_eq!(
            group.render().to_html(),
            r#"<div class="ui tiny gallery images"><img class="ui image" src="a.png"/><img class="ui image" src="b.png"/></div>"#
        );
    }
}
