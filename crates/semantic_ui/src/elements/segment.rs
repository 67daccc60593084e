use semantic_markup::{
    key_only, key_or_value_and_key, text_align, value_and_key, BaseProps, ClassList, Component,
    Element, KeyOrValue, Node, PropWarning, Token,
};
use serde::Deserialize;

use crate::children_or_content;
use crate::sui::{Color, Floated, Intensity, Size, TextAlign, VerticalEdge};

fn medium_size_warning(size: Option<Size>) -> Vec<PropWarning> {
    match size {
        Some(Size::Medium) => vec![PropWarning::Unsupported {
            prop: "size",
            value: Size::Medium.token(),
        }],
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A grouping of related content.
pub struct Segment {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Attached to other segments, optionally on one edge.
    pub attached: KeyOrValue<VerticalEdge>,
    /// No special formatting.
    pub basic: bool,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Circular shape.
    pub circular: bool,
    /// Clears floated content.
    pub clearing: bool,
    /// Segment color.
    pub color: Option<Color>,
    /// Only takes up as much space as necessary.
    pub compact: bool,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Shown as disabled.
    pub disabled: bool,
    /// Floats to one side.
    pub floated: Option<Floated>,
    /// Inverted colors.
    pub inverted: bool,
    /// Shows a loading indicator.
    pub loading: bool,
    /// Extra padding, optionally `very` padded.
    pub padded: KeyOrValue<Intensity>,
    /// Looks like a pile of pages.
    pub piled: bool,
    /// Reserves space for content yet to come.
    pub placeholder: bool,
    /// Raised shadow.
    pub raised: bool,
    /// Lighter, less pronounced.
    pub secondary: bool,
    /// Segment size.
    pub size: Option<Size>,
    /// Shows it contains multiple pages.
    pub stacked: bool,
    /// Even less pronounced than `secondary`.
    pub tertiary: bool,
    /// Text alignment.
    pub text_align: Option<TextAlign>,
    /// Formatted as part of a vertical list.
    pub vertical: bool,
}

impl Component for Segment {
    const NAME: &'static str = "Segment";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add("ui")
            .add(self.color.map(Token::token))
            .add(self.size.map(Token::token))
            .add(key_only(self.basic, "basic"))
            .add(key_only(self.circular, "circular"))
            .add(key_only(self.clearing, "clearing"))
            .add(key_only(self.compact, "compact"))
            .add(key_only(self.disabled, "disabled"))
            .add(key_only(self.inverted, "inverted"))
            .add(key_only(self.loading, "loading"))
            .add(key_only(self.placeholder, "placeholder"))
            .add(key_only(self.piled, "piled"))
            .add(key_only(self.raised, "raised"))
            .add(key_only(self.secondary, "secondary"))
            .add(key_only(self.stacked, "stacked"))
            .add(key_only(self.tertiary, "tertiary"))
            .add(key_only(self.vertical, "vertical"))
            .add(key_or_value_and_key(self.attached, "attached"))
            .add(key_or_value_and_key(self.padded, "padded"))
            .add(text_align(self.text_align))
            .add(value_and_key(self.floated, "floated"))
            .add("segment")
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .children(children_or_content(&self.children, self.content.as_ref()))
            .into()
    }

    fn warnings(&self) -> Vec<PropWarning> {
        medium_size_warning(self.size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A group of segments.
pub struct SegmentGroup {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Only takes up as much space as necessary.
    pub compact: bool,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Segments laid out side by side.
    pub horizontal: bool,
    /// Looks like a pile of pages.
    pub piled: bool,
    /// Raised shadow.
    pub raised: bool,
    /// Size for every segment in the group. `medium` is not a group size.
    pub size: Option<Size>,
    /// Shows it contains multiple pages.
    pub stacked: bool,
}

impl Component for SegmentGroup {
    const NAME: &'static str = "SegmentGroup";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add("ui")
            .add(self.size.map(Token::token))
            .add(key_only(self.compact, "compact"))
            .add(key_only(self.horizontal, "horizontal"))
            .add(key_only(self.piled, "piled"))
            .add(key_only(self.raised, "raised"))
            .add(key_only(self.stacked, "stacked"))
            .add("segments")
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .children(children_or_content(&self.children, self.content.as_ref()))
            .into()
    }

    fn warnings(&self) -> Vec<PropWarning> {
        medium_size_warning(self.size)
    }
}
