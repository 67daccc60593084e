use semantic_markup::{
    key_only, vertical_align, BaseProps, Callback, ClassList, Component, Element, Node,
    ShorthandFactory,
};
use serde::Deserialize;

use crate::sui::VerticalAlign;
use crate::{children_or_content, forward_click};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// The dimmer overlay itself.
///
/// Renders the overlay in place; mounting it into a page portal is left to the
/// application.
pub struct Dimmer {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Shown.
    pub active: bool,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Disabled.
    pub disabled: bool,
    /// Inverted colors.
    pub inverted: bool,
    /// Dims the whole page.
    pub page: bool,
    /// Shown without animation.
    pub simple: bool,
    /// Vertical alignment of the content.
    pub vertical_align: Option<VerticalAlign>,
    /// Called on click with the dimmer's props.
    #[serde(skip)]
    pub on_click: Option<Callback<Dimmer>>,
}

impl Component for Dimmer {
    const NAME: &'static str = "Dimmer";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add("ui")
            .add(key_only(self.active, "active transition visible"))
            .add(key_only(self.disabled, "disabled"))
            .add(key_only(self.inverted, "inverted"))
            .add(key_only(self.page, "page"))
            .add(key_only(self.simple, "simple"))
            .add(vertical_align(self.vertical_align))
            .add("dimmer")
            .add(self.base.class_name.as_deref())
            .build();

        let content = children_or_content(&self.children, self.content.as_ref());
        let wrapper = (!content.is_empty())
            .then(|| Node::from(Element::new("div").with_class("content").children(content)));

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .maybe_on_click(forward_click(self, self.on_click.as_ref()))
            .child_opt(wrapper)
            .into()
    }
}

impl ShorthandFactory for Dimmer {
    fn from_value(value: &str) -> Self {
        Self {
            content: Some(Node::text(value)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A container that can be dimmed.
pub struct DimmerDimmable {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Blurs the content while dimmed.
    pub blurring: bool,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Currently dimmed.
    pub dimmed: bool,
}

impl Component for DimmerDimmable {
    const NAME: &'static str = "DimmerDimmable";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add(key_only(self.blurring, "blurring"))
            .add(key_only(self.dimmed, "dimmed"))
            .add("dimmable")
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .children(children_or_content(&self.children, self.content.as_ref()))
            .into()
    }
}
