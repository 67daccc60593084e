use semantic_markup::{
    key_only, BaseProps, Callback, ClassList, Component, Element, Node, Shorthand,
    ShorthandFactory,
};
use serde::Deserialize;
use serde_json::Value;

use crate::elements::{Flag, Icon, Image, Label};
use crate::forward_click;
use crate::modules::Inline;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// An option inside a dropdown menu.
pub struct DropdownItem {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Currently chosen.
    pub active: bool,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for the item text; wins over `text`.
    pub content: Option<Node>,
    /// Secondary text shown in a `span.description`.
    pub description: Option<Shorthand<Inline>>,
    /// Cannot be chosen.
    pub disabled: bool,
    /// Shorthand for a [`Flag`].
    pub flag: Option<Shorthand<Flag>>,
    /// Shorthand for an [`Icon`].
    pub icon: Option<Shorthand<Icon>>,
    /// Shorthand for an [`Image`].
    pub image: Option<Shorthand<Image>>,
    /// Shorthand for a [`Label`].
    pub label: Option<Shorthand<Label>>,
    /// Highlighted by keyboard navigation.
    pub selected: bool,
    /// Display text.
    pub text: Option<Node>,
    /// Stored value; never rendered.
    pub value: Option<Value>,
    /// Called on click with the item's props.
    #[serde(skip)]
    pub on_click: Option<Callback<DropdownItem>>,
}

impl Component for DropdownItem {
    const NAME: &'static str = "DropdownItem";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add(key_only(self.active, "active"))
            .add(key_only(self.disabled, "disabled"))
            .add(key_only(self.selected, "selected"))
            .add("item")
            .add(self.base.class_name.as_deref())
            .build();

        let root = Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .attr("role", "option")
            .attr("aria-disabled", self.disabled)
            .attr("aria-checked", self.active)
            .attr("aria-selected", self.selected)
            .with_class(classes)
            .maybe_on_click(forward_click(self, self.on_click.as_ref()));

        if !self.children.is_empty() {
            return root.children(self.children.iter().cloned()).into();
        }

        let description = Inline::create_with(
            self.description.as_ref(),
            |inline| inline.base.prepend_class("description"),
            |element| element.prepend_class("description"),
        );
        let text = self.content.as_ref().or(self.text.as_ref()).map(|text| match text {
            Node::Element(element) => element.clone().prepend_class("text").into(),
            other => Inline {
                base: BaseProps {
                    class_name: Some("text".into()),
                    ..Default::default()
                },
                content: Some(other.clone()),
                ..Default::default()
            }
            .render(),
        });

        root.child_opt(Image::create(self.image.as_ref(), |_| {}))
            .child_opt(Icon::create(self.icon.as_ref(), |_| {}))
            .child_opt(Flag::create(self.flag.as_ref(), |_| {}))
            .child_opt(Label::create(self.label.as_ref(), |_| {}))
            .child_opt(description)
            .child_opt(text)
            .into()
    }
}

impl ShorthandFactory for DropdownItem {
    fn from_value(value: &str) -> Self {
        Self {
            text: Some(Node::text(value)),
            ..Default::default()
        }
    }
}
