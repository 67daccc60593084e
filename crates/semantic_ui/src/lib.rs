//! Semantic component library rendered through Leptos.
//!
//! Each component is a plain property bag: set the flags, enums, and shorthand
//! content you need and render it. Flags map onto the CSS framework's class
//! vocabulary (`ui avatar bordered image`), shorthand values expand into nested
//! components, and unhandled props pass through to the rendered element.
//! Every bag implements [`leptos::IntoView`], so it can be dropped straight
//! into a `view!` block:
//!
//! ```ignore
//! view! {
//!     <div>
//!         {Label { color: Some(Color::Red), content: Some("New".into()), ..Default::default() }}
//!     </div>
//! }
//! ```
//!
//! Components are grouped like the framework groups them: [`elements`],
//! [`modules`], and [`views`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod elements;
pub mod modules;
pub mod sui;
pub mod views;

pub use elements::{
    Flag, Icon, Image, ImageGroup, Label, LabelDetail, LabelGroup, LabelImage, Placeholder,
    PlaceholderHeader, PlaceholderImage, PlaceholderLine, PlaceholderParagraph, Segment,
    SegmentGroup,
};
pub use modules::{Dimmer, DimmerDimmable, DropdownItem, Inline};
pub use semantic_markup::{
    AttrValue, Attributes, BaseProps, Callback, Component, Element, KeyOrValue, Node,
    PropWarning, Shorthand, ShorthandFactory,
};
pub use sui::{
    AdUnit, Color, Flip, Floated, IconCorner, Intensity, LabelAttachment, LineLength,
    PointingDirection, Rotation, Side, Size, TextAlign, VerticalAlign, VerticalEdge,
};
pub use views::{
    AdTest, Advertisement, Card, CardContent, CardDescription, CardGroup, CardHeader, CardMeta,
};

/// Convenience imports for applications composing components.
pub mod prelude {
    pub use crate::{
        AdUnit, Advertisement, Card, CardContent, CardGroup, Color, Component, Dimmer,
        DimmerDimmable, DropdownItem, Floated, Icon, Image, ImageGroup, KeyOrValue, Label,
        LabelGroup, Node, Placeholder, PlaceholderHeader, PlaceholderImage, Segment,
        SegmentGroup, Shorthand, ShorthandFactory, Side, Size, TextAlign, VerticalAlign,
    };
}

/// Children when any were given, otherwise the content shorthand.
pub(crate) fn children_or_content(children: &[Node], content: Option<&Node>) -> Vec<Node> {
    if children.is_empty() {
        content.cloned().into_iter().collect()
    } else {
        children.to_vec()
    }
}

/// Element-level click listener that hands a snapshot of `props` to `handler`.
pub(crate) fn forward_click<T: Clone + 'static>(
    props: &T,
    handler: Option<&Callback<T>>,
) -> Option<Callback> {
    let handler = handler?.clone();
    let props = props.clone();
    Some(Callback::new(move |_| handler.call(&props)))
}

macro_rules! impl_into_view {
    ($($component:ty),+ $(,)?) => {
        $(
            impl leptos::IntoView for $component {
                fn into_view(self) -> leptos::View {
                    leptos::IntoView::into_view(semantic_markup::Component::render(&self))
                }
            }
        )+
    };
}

impl_into_view!(
    Advertisement,
    Card,
    CardContent,
    CardDescription,
    CardGroup,
    CardHeader,
    CardMeta,
    Dimmer,
    DimmerDimmable,
    DropdownItem,
    Flag,
    Icon,
    Image,
    ImageGroup,
    Inline,
    Label,
    LabelDetail,
    LabelGroup,
    Placeholder,
    PlaceholderHeader,
    PlaceholderImage,
    PlaceholderLine,
    PlaceholderParagraph,
    Segment,
    SegmentGroup,
);
