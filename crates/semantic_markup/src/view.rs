//! Leptos bridge: markup trees mount as regular views.

use std::borrow::Cow;

use leptos::{ev, html, CollectView, IntoView, View};

use crate::node::{Element, Node};

impl IntoView for Node {
    fn into_view(self) -> View {
        match self {
            Self::Element(element) => element.into_view(),
            Self::Text(text) => text.into_view(),
            Self::Fragment(nodes) => nodes.into_iter().collect_view(),
        }
    }
}

impl IntoView for Element {
    fn into_view(self) -> View {
        let (tag, class, attrs, children, on_click) = self.into_parts();
        let mut element = match tag {
            Cow::Borrowed(tag) => html::custom(html::Custom::new(tag)),
            Cow::Owned(tag) => html::custom(html::Custom::new(tag)),
        };
        if let Some(class) = class {
            element = element.attr("class", class);
        }
        for (name, value) in attrs {
            let Some(rendered) = value.render(&name).map(Cow::into_owned) else {
                continue;
            };
            element = element.attr(name, rendered);
        }
        if let Some(on_click) = on_click {
            element = element.on(ev::click, move |_| on_click.call(&()));
        }
        element.child(children.into_iter().collect_view()).into_view()
    }
}
