use semantic_markup::{
    key_only, text_align, width_class, BaseProps, Callback, ClassList, Component, Element, Node,
    Shorthand, ShorthandFactory, Token,
};
use serde::Deserialize;

use crate::elements::Image;
use crate::sui::{Color, TextAlign};
use crate::{children_or_content, forward_click};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A card displays site content in a manner similar to a playing card.
///
/// Without children or content, a card is generated from its `image`,
/// `header`, `meta`, `description`, and `extra` shorthands.
pub struct Card {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Centered inside its container.
    pub centered: bool,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Card color.
    pub color: Option<Color>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Shorthand for a [`CardDescription`].
    pub description: Option<Shorthand<CardDescription>>,
    /// Content of the trailing `extra` section.
    pub extra: Option<Node>,
    /// Takes up the width of its container.
    pub fluid: bool,
    /// Shorthand for a [`CardHeader`].
    pub header: Option<Shorthand<CardHeader>>,
    /// Renders the card as an `<a>` with this href.
    pub href: Option<String>,
    /// Shorthand for the card [`Image`].
    pub image: Option<Shorthand<Image>>,
    /// Formatted as a link.
    pub link: bool,
    /// Shorthand for a [`CardMeta`].
    pub meta: Option<Shorthand<CardMeta>>,
    /// Raised shadow.
    pub raised: bool,
    /// Called on click with the card's props. Renders the card as an `<a>`.
    #[serde(skip)]
    pub on_click: Option<Callback<Card>>,
}

impl Component for Card {
    const NAME: &'static str = "Card";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add("ui")
            .add(self.color.map(Token::token))
            .add(key_only(self.centered, "centered"))
            .add(key_only(self.fluid, "fluid"))
            .add(key_only(self.link, "link"))
            .add(key_only(self.raised, "raised"))
            .add("card")
            .add(self.base.class_name.as_deref())
            .build();

        let tag = self.base.element_type(
            None,
            self.on_click.is_some().then_some("a"),
            self.href.is_some(),
        );
        let root = Element::new(tag)
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .attr_opt("href", self.href.as_deref())
            .maybe_on_click(forward_click(self, self.on_click.as_ref()));

        if !self.children.is_empty() || self.content.is_some() {
            return root
                .children(children_or_content(&self.children, self.content.as_ref()))
                .into();
        }

        let image = Image::create(self.image.as_ref(), |image| {
            image.ui.get_or_insert(false);
            image.wrapped.get_or_insert(true);
        });
        let body = (self.header.is_some() || self.meta.is_some() || self.description.is_some())
            .then(|| {
                CardContent {
                    header: self.header.clone(),
                    meta: self.meta.clone(),
                    description: self.description.clone(),
                    ..Default::default()
                }
                .render()
            });
        let extra = self.extra.clone().map(|extra| {
            CardContent {
                extra: true,
                children: vec![extra],
                ..Default::default()
            }
            .render()
        });

        root.child_opt(image)
            .child_opt(body)
            .child_opt(extra)
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A section of a card.
pub struct CardContent {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Shorthand for a [`CardDescription`].
    pub description: Option<Shorthand<CardDescription>>,
    /// Secondary section at the bottom of the card.
    pub extra: bool,
    /// Shorthand for a [`CardHeader`].
    pub header: Option<Shorthand<CardHeader>>,
    /// Shorthand for a [`CardMeta`].
    pub meta: Option<Shorthand<CardMeta>>,
    /// Text alignment.
    pub text_align: Option<TextAlign>,
}

impl Component for CardContent {
    const NAME: &'static str = "CardContent";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add(key_only(self.extra, "extra"))
            .add(text_align(self.text_align))
            .add("content")
            .add(self.base.class_name.as_deref())
            .build();

        let root = Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes);

        if !self.children.is_empty() || self.content.is_some() {
            return root
                .children(children_or_content(&self.children, self.content.as_ref()))
                .into();
        }

        root.child_opt(CardHeader::create(self.header.as_ref(), |_| {}))
            .child_opt(CardMeta::create(self.meta.as_ref(), |_| {}))
            .child_opt(CardDescription::create(self.description.as_ref(), |_| {}))
            .into()
    }
}

/// Card text blocks that only differ by their class.
macro_rules! card_text {
    ($(#[$meta:meta])* $name:ident => $class:literal) => {
        #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        $(#[$meta])*
        pub struct $name {
            /// Shared element props.
            #[serde(flatten)]
            pub base: BaseProps,
            /// Primary content.
            #[serde(skip)]
            pub children: Vec<Node>,
            /// Shorthand for primary content.
            pub content: Option<Node>,
            /// Text alignment.
            pub text_align: Option<TextAlign>,
        }

        impl Component for $name {
            const NAME: &'static str = stringify!($name);

            fn build(&self) -> Node {
                let classes = ClassList::new()
                    .add(text_align(self.text_align))
                    .add($class)
                    .add(self.base.class_name.as_deref())
                    .build();

                Element::new(self.base.element_type(None, None, false))
                    .attrs(self.base.attrs.clone())
                    .with_class(classes)
                    .children(children_or_content(&self.children, self.content.as_ref()))
                    .into()
            }
        }

        impl ShorthandFactory for $name {
            fn from_value(value: &str) -> Self {
                Self {
                    content: Some(Node::text(value)),
                    ..Default::default()
                }
            }
        }
    };
}

card_text! {
    /// Title of a card.
    CardHeader => "header"
}

card_text! {
    /// Secondary details of a card.
    CardMeta => "meta"
}

card_text! {
    /// Body text of a card.
    CardDescription => "description"
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A group of cards laid out in rows.
pub struct CardGroup {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Centered inside its container.
    pub centered: bool,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Doubles column width on smaller screens.
    pub doubling: bool,
    /// Cards rendered when there is no other content.
    pub items: Vec<Card>,
    /// Cards per row, from 1 to 16.
    pub items_per_row: Option<u8>,
    /// Stacks cards on mobile.
    pub stackable: bool,
    /// Text alignment for every card.
    pub text_align: Option<TextAlign>,
}

impl Component for CardGroup {
    const NAME: &'static str = "CardGroup";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add("ui")
            .add(key_only(self.centered, "centered"))
            .add(key_only(self.doubling, "doubling"))
            .add(key_only(self.stackable, "stackable"))
            .add(text_align(self.text_align))
            .add(width_class(self.items_per_row, None))
            .add("cards")
            .add(self.base.class_name.as_deref())
            .build();

        let root = Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes);

        if !self.children.is_empty() || self.content.is_some() {
            return root
                .children(children_or_content(&self.children, self.content.as_ref()))
                .into();
        }

        root.children(self.items.iter().map(Card::render)).into()
    }
}
