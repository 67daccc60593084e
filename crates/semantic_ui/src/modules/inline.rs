use semantic_markup::{BaseProps, ClassList, Component, Element, Node, ShorthandFactory};
use serde::Deserialize;

use crate::children_or_content;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Plain inline wrapper (`<span>` unless `as` says otherwise).
///
/// Used for the text and description parts of a dropdown item.
pub struct Inline {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
}

impl Component for Inline {
    const NAME: &'static str = "Inline";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(Some("span"), None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .children(children_or_content(&self.children, self.content.as_ref()))
            .into()
    }
}

impl ShorthandFactory for Inline {
    fn from_value(value: &str) -> Self {
        Self {
            content: Some(Node::text(value)),
            ..Default::default()
        }
    }
}
