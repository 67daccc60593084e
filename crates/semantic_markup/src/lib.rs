//! Shared markup layer for the semantic component library.
//!
//! Components in `semantic_ui` are plain property bags that render into the
//! [`Node`] tree defined here. This crate owns the conventions every component
//! reuses: class-name assembly from flags ([`ClassList`], [`key_only`],
//! [`key_or_value_and_key`], ...), shorthand expansion ([`Shorthand`],
//! [`ShorthandFactory`]), pass-through attribute partitioning
//! ([`partition_html_props`]), element-type resolution, prop-validation
//! warnings, HTML serialization, and the Leptos [`leptos::IntoView`] bridge.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod classes;
mod error;
mod html;
mod node;
mod props;
mod shorthand;
mod view;

pub use classes::{
    key_only, key_or_value_and_key, text_align, value_and_key, vertical_align, width_class,
    ClassList, IntoClass, KeyOrValue, Token,
};
pub use error::{MarkupError, PropWarning};
pub use node::{Callback, Element, Node};
pub use props::{partition_html_props, AttrValue, Attributes, BaseProps, HTML_IMAGE_PROPS};
pub use shorthand::{Component, Shorthand, ShorthandFactory};
