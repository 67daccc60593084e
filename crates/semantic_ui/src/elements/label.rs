use semantic_markup::{
    key_only, key_or_value_and_key, value_and_key, BaseProps, Callback, ClassList, Component,
    Element, KeyOrValue, Node, PropWarning, Shorthand, ShorthandFactory, Token,
};
use serde::de::{Deserialize, Deserializer};
use serde_json::Value;

use crate::elements::{Icon, Image};
use crate::sui::{Color, LabelAttachment, PointingDirection, Side, Size};
use crate::{children_or_content, forward_click};

#[derive(Debug, Clone, PartialEq)]
/// The `image` prop of a [`Label`]: either the `image` class flag or an image
/// shorthand rendered inside the label.
pub enum LabelImage {
    /// Formats the label to emphasize an image (`true`) or not (`false`).
    Flag(bool),
    /// Image shorthand rendered before the content.
    Shorthand(Shorthand<Image>),
}

impl<'de> Deserialize<'de> for LabelImage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Bool(flag) => Ok(Self::Flag(flag)),
            other => Shorthand::deserialize(other)
                .map(Self::Shorthand)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A label displays content classification.
pub struct Label {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Active state.
    pub active: bool,
    /// Attached to a content segment.
    pub attached: Option<LabelAttachment>,
    /// Reduced complexity.
    pub basic: bool,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Circular.
    pub circular: bool,
    /// Label color.
    pub color: Option<Color>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Positioned in a corner of its container.
    pub corner: KeyOrValue<Side>,
    /// Shorthand for a [`LabelDetail`].
    pub detail: Option<Shorthand<LabelDetail>>,
    /// Formats the label as a dot. Requires `circular`.
    pub empty: bool,
    /// Floats above another element in the upper right corner.
    pub floating: bool,
    /// Formatted to label content alongside it horizontally.
    pub horizontal: bool,
    /// Shorthand for an [`Icon`] before the content.
    pub icon: Option<Shorthand<Icon>>,
    /// Image flag or image shorthand.
    pub image: Option<LabelImage>,
    /// Points at adjacent content.
    pub pointing: KeyOrValue<PointingDirection>,
    /// Prompts for an error in a form.
    pub prompt: bool,
    /// Shorthand for the remove icon; defaults to `delete`.
    pub remove_icon: Option<Shorthand<Icon>>,
    /// Appears as a ribbon attached to an element. Only `right` is accepted as
    /// a side.
    pub ribbon: KeyOrValue<Side>,
    /// Label size.
    pub size: Option<Size>,
    /// Appears as a tag.
    pub tag: bool,
    /// Called on click with the label's props.
    #[serde(skip)]
    pub on_click: Option<Callback<Label>>,
    /// Adds a remove icon; called with the label's props when it is clicked.
    #[serde(skip)]
    pub on_remove: Option<Callback<Label>>,
}

impl Label {
    fn pointing_class(&self) -> Option<String> {
        match self.pointing {
            KeyOrValue::Off => None,
            KeyOrValue::Key => Some("pointing".to_string()),
            KeyOrValue::Value(direction @ (PointingDirection::Left | PointingDirection::Right)) => {
                Some(format!("{} pointing", direction.token()))
            }
            KeyOrValue::Value(direction) => Some(format!("pointing {}", direction.token())),
        }
    }

    fn remove_icon(&self) -> Option<Node> {
        let on_remove = self.on_remove.clone()?;
        let shorthand = self
            .remove_icon
            .clone()
            .unwrap_or_else(|| Shorthand::from("delete"));
        let label = self.clone();
        let (element_on_remove, element_label) = (on_remove.clone(), label.clone());
        Icon::create_with(
            Some(&shorthand),
            move |icon| {
                let predefined = icon.on_click.take();
                icon.on_click = Some(Callback::new(move |icon: &Icon| {
                    if let Some(predefined) = &predefined {
                        predefined.call(icon);
                    }
                    on_remove.call(&label);
                }));
            },
            move |element| {
                let predefined = element.click_handler().cloned();
                element.on_click(Callback::new(move |_| {
                    if let Some(predefined) = &predefined {
                        predefined.call(&());
                    }
                    element_on_remove.call(&element_label);
                }))
            },
        )
    }
}

impl Component for Label {
    const NAME: &'static str = "Label";

    fn build(&self) -> Node {
        let image_flag = matches!(self.image, Some(LabelImage::Flag(true)));
        let classes = ClassList::new()
            .add("ui")
            .add(self.color.map(Token::token))
            .add(self.pointing_class())
            .add(self.size.map(Token::token))
            .add(key_only(self.active, "active"))
            .add(key_only(self.basic, "basic"))
            .add(key_only(self.circular, "circular"))
            .add(key_only(self.empty, "empty"))
            .add(key_only(self.floating, "floating"))
            .add(key_only(self.horizontal, "horizontal"))
            .add(key_only(image_flag, "image"))
            .add(key_only(self.prompt, "prompt"))
            .add(key_only(self.tag, "tag"))
            .add(key_or_value_and_key(self.corner, "corner"))
            .add(key_or_value_and_key(self.ribbon, "ribbon"))
            .add(value_and_key(self.attached, "attached"))
            .add("label")
            .add(self.base.class_name.as_deref())
            .build();

        let root = Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .maybe_on_click(forward_click(self, self.on_click.as_ref()));

        if !self.children.is_empty() {
            return root.children(self.children.iter().cloned()).into();
        }

        let image = match &self.image {
            Some(LabelImage::Shorthand(image)) => Image::create(Some(image), |_| {}),
            _ => None,
        };

        root.child_opt(Icon::create(self.icon.as_ref(), |_| {}))
            .child_opt(image)
            .child_opt(self.content.clone())
            .child_opt(LabelDetail::create(self.detail.as_ref(), |_| {}))
            .child_opt(self.remove_icon())
            .into()
    }

    fn warnings(&self) -> Vec<PropWarning> {
        let mut warnings = Vec::new();
        if self.empty && !self.circular {
            warnings.push(PropWarning::Demanded {
                prop: "empty",
                required: "circular",
            });
        }
        if self.ribbon == KeyOrValue::Value(Side::Left) {
            warnings.push(PropWarning::Unsupported {
                prop: "ribbon",
                value: Side::Left.token(),
            });
        }
        warnings
    }
}

impl ShorthandFactory for Label {
    fn from_value(value: &str) -> Self {
        Self {
            content: Some(Node::text(value)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A detail section inside a label.
pub struct LabelDetail {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
}

impl Component for LabelDetail {
    const NAME: &'static str = "LabelDetail";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add("detail")
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(None, None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .children(children_or_content(&self.children, self.content.as_ref()))
            .into()
    }
}

impl ShorthandFactory for LabelDetail {
    fn from_value(value: &str) -> Self {
        Self {
            content: Some(Node::text(value)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A group of labels sharing color, size, and shape.
pub struct LabelGroup {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Primary content.
    #[serde(skip)]
    pub children: Vec<Node>,
    /// Circular labels.
    pub circular: bool,
    /// Shared color.
    pub color: Option<Color>,
    /// Shorthand for primary content.
    pub content: Option<Node>,
    /// Shared size.
    pub size: Option<Size>,
    /// Labels appear as tags.
    pub tag: bool,
}

impl Component for LabelGroup {
    const NAME: &'static str = "LabelGroup";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add("ui")
            .add(self.color.map(Token::token))
            .add(self.size.map(Token::token))
            .add(key_only(self.circular, "circular"))
            .add(key_only(self.tag, "tag"))
            .add("labels")
            .add(self.base.class_name.as_deref())
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
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn class_of(label: &Label) -> String {
        label
            .render()
            .as_element()
            .and_then(Element::class)
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn content_label() {
        let label = Label {
            color: Some(Color::Teal),
            size: Some(Size::Small),
            ..Label::from_value("Beta")
        };
        assert_eq!(
            label.render().to_html(),
            r#"<div class="ui teal small label">Beta</div>"#
        );
    }

    #[test]
    fn pointing_forms() {
        let cases = [
            (KeyOrValue::Key, "ui pointing label"),
            (
                KeyOrValue::Value(PointingDirection::Left),
                "ui left pointing label",
            ),
            (
                KeyOrValue::Value(PointingDirection::Right),
                "ui right pointing label",
            ),
            (
                KeyOrValue::Value(PointingDirection::Above),
                "ui pointing above label",
            ),
            (
                KeyOrValue::Value(PointingDirection::Below),
                "ui pointing below label",
            ),
        ];
        for (pointing, expected) in cases {
            let label = Label {
                pointing,
                ..Default::default()
            };
            assert_eq!(class_of(&label), expected);
        }
    }

    #[test]
    fn flag_classes_and_attachment() {
        let label = Label {
            corner: KeyOrValue::Value(Side::Left),
            ribbon: KeyOrValue::Key,
            attached: Some(LabelAttachment::TopRight),
            image: Some(LabelImage::Flag(true)),
            tag: true,
            ..Default::default()
        };
        assert_eq!(
            class_of(&label),
            "ui image tag left corner ribbon top right attached label"
        );
    }

    #[test]
    fn shorthand_children_render_in_order() {
        let label = Label {
            icon: Some("mail".into()),
            image: Some(LabelImage::Shorthand("/joe.png".into())),
            content: Some("Joe".into()),
            detail: Some("Friend".into()),
            ..Default::default()
        };
        assert_eq!(
            label.render().to_html(),
            concat!(
                r#"<div class="ui label">"#,
                r#"<i class="mail icon" aria-hidden="true"></i>"#,
                r#"<img class="ui image" src="/joe.png"/>"#,
                "Joe",
                r#"<div class="detail">Friend</div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn image_shorthand_does_not_add_image_class() {
        let label = Label {
            image: Some(LabelImage::Shorthand("/joe.png".into())),
            ..Default::default()
        };
        assert_eq!(class_of(&label), "ui label");
    }

    #[test]
    fn children_suppress_shorthand() {
        let label = Label {
            children: vec![Node::text("Only")],
            icon: Some("mail".into()),
            ..Default::default()
        };
        assert_eq!(label.render().to_html(), r#"<div class="ui label">Only</div>"#);
    }

    #[test]
    fn remove_icon_only_with_handler() {
        let plain = Label::from_value("Tag");
        assert!(plain.render().find_class("delete").is_none());

        let removed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&removed);
        let label = Label {
            on_remove: Some(Callback::new(move |label: &Label| {
                sink.borrow_mut().push(label.content.clone());
            })),
            ..Label::from_value("Tag")
        };

        let node = label.render();
        let icon = node.find_class("delete").expect("remove icon");
        assert_eq!(icon.class(), Some("delete icon"));
        assert!(icon.click());
        assert_eq!(*removed.borrow(), vec![Some(Node::text("Tag"))]);
    }

    #[test]
    fn remove_icon_chains_its_own_handler_first() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let icon_calls = Rc::clone(&calls);
        let remove_calls = Rc::clone(&calls);

        let label = Label {
            remove_icon: Some(Shorthand::props(Icon {
                name: Some("close".into()),
                on_click: Some(Callback::new(move |_: &Icon| {
                    icon_calls.borrow_mut().push("icon")
                })),
                ..Default::default()
            })),
            on_remove: Some(Callback::new(move |_: &Label| {
                remove_calls.borrow_mut().push("remove")
            })),
            ..Label::from_value("Tag")
        };

        let node = label.render();
        assert!(node.find_class("close").expect("close icon").click());
        assert_eq!(*calls.borrow(), vec!["icon", "remove"]);
    }

    #[test]
    fn prebuilt_remove_icon_still_removes() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let element_calls = Rc::clone(&calls);
        let remove_calls = Rc::clone(&calls);

        let close = Element::new("i")
            .with_class("close icon")
            .on_click(Callback::new(move |_| element_calls.borrow_mut().push("element")));
        let label = Label {
            remove_icon: Some(Shorthand::from(Node::from(close))),
            on_remove: Some(Callback::new(move |label: &Label| {
                remove_calls.borrow_mut().push(if label.tag { "tag" } else { "plain" })
            })),
            tag: true,
            ..Label::from_value("Tag")
        };

        let node = label.render();
        let icon = node.find_class("close").expect("close icon");
        assert_eq!(icon.class(), Some("close icon"));
        assert!(icon.click());
        assert_eq!(*calls.borrow(), vec!["element", "tag"]);
    }

    #[test]
    fn prebuilt_remove_icon_without_handler_is_omitted() {
        let label = Label {
            remove_icon: Some(Shorthand::from(Node::from(
                Element::new("i").with_class("close icon"),
            ))),
            ..Label::from_value("Tag")
        };
        assert!(label.render().find_class("close").is_none());
    }

    #[test]
    fn root_click_receives_label_props() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let label = Label {
            active: true,
            on_click: Some(Callback::new(move |label: &Label| {
                *sink.borrow_mut() = Some(label.active)
            })),
            ..Default::default()
        };
        assert!(label.render().as_element().expect("root").click());
        assert_eq!(*seen.borrow(), Some(true));
    }

    #[test]
    fn warnings_cover_empty_and_left_ribbon() {
        let label = Label {
            empty: true,
            ribbon: KeyOrValue::Value(Side::Left),
            ..Default::default()
        };
        assert_eq!(
            label.warnings(),
            vec![
                PropWarning::Demanded {
                    prop: "empty",
                    required: "circular"
                },
                PropWarning::Unsupported {
                    prop: "ribbon",
                    value: "left"
                },
            ]
        );
        assert!(Label {
            empty: true,
            circular: true,
            ..Default::default()
        }
        .warnings()
        .is_empty());
    }

    #[test]
    fn image_prop_accepts_flag_or_shorthand() {
        let flagged: Label = serde_json::from_value(json!({ "image": true })).expect("flag");
        assert_eq!(flagged.image, Some(LabelImage::Flag(true)));

        let shorthand: Label =
            serde_json::from_value(json!({ "image": "/a.png", "as": "a", "href": "#" }))
                .expect("shorthand");
        assert_eq!(
            shorthand.render().to_html(),
            r##"<a class="ui label" href="#"><img class="ui image" src="/a.png"/></a>"##
        );
    }

    #[test]
    fn group_classes() {
        let group = LabelGroup {
            color: Some(Color::Blue),
            circular: true,
            ..Default::default()
        };
        assert_eq!(
            group.render().to_html(),
            r#"<div class="ui blue circular labels"></div>"#
        );
    }
}
