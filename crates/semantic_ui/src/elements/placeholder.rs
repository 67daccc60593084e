use semantic_markup::{
    key_only, BaseProps, ClassList, Component, Element, Node, PropWarning, Token,
};
use serde::Deserialize;

use crate::children_or_content;
use crate::sui::LineLength;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Loading placeholder shown while content is fetched.
pub struct Placeholder {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Takes up the width of its container.
    pub fluid: bool,
    /// Inverted colors.
    pub inverted: bool,
}

impl Component for Placeholder {
    const NAME: &'static str = "Placeholder";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add("ui")
            .add(key_only(self.fluid, "fluid"))
            .add(key_only(self.inverted, "inverted"))
            .add("placeholder")
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .children(children_or_content(&self.children, self.content.as_ref()))
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Header block of a placeholder.
pub struct PlaceholderHeader {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Leaves room for an image beside the header.
    pub image: bool,
}

impl Component for PlaceholderHeader {
    const NAME: &'static str = "PlaceholderHeader";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add(key_only(self.image, "image"))
            .add("header")
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .children(children_or_content(&self.children, self.content.as_ref()))
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Image block of a placeholder. Never has content.
pub struct PlaceholderImage {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Rectangular shape. Cannot be combined with `square`.
    pub rectangular: bool,
    /// Square shape. Cannot be combined with `rectangular`.
    pub square: bool,
}

impl Component for PlaceholderImage {
    const NAME: &'static str = "PlaceholderImage";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add(key_only(self.square, "square"))
            .add(key_only(self.rectangular, "rectangular"))
            .add("image")
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .into()
    }

    fn warnings(&self) -> Vec<PropWarning> {
        if !(self.square && self.rectangular) {
            return Vec::new();
        }
        vec![
            PropWarning::Disallowed {
                prop: "square",
                other: "rectangular",
            },
            PropWarning::Disallowed {
                prop: "rectangular",
                other: "square",
            },
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A single line of placeholder text.
pub struct PlaceholderLine {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Relative line length.
    pub length: Option<LineLength>,
}

impl Component for PlaceholderLine {
    const NAME: &'static str = "PlaceholderLine";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add("line")
            .add(self.length.map(Token::token))
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A paragraph of placeholder lines.
pub struct PlaceholderParagraph {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
}

impl Component for PlaceholderParagraph {
    const NAME: &'static str = "PlaceholderParagraph";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add("paragraph")
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .children(children_or_content(&self.children, self.content.as_ref()))
            .into()
    }
}
