//! Error and warning types for the markup layer.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures while decoding component configuration.
pub enum MarkupError {
    /// A vocabulary value did not match any known class token.
    #[error("unknown {kind} value `{value}`")]
    UnknownToken {
        /// Vocabulary being parsed (for example `Size`).
        kind: &'static str,
        /// Rejected input.
        value: String,
    },
    /// A JSON value cannot be expanded into a shorthand element.
    #[error("cannot expand {0} into shorthand")]
    UnsupportedShorthand(&'static str),
    /// A JSON value cannot be rendered as content.
    #[error("cannot render {0} as content")]
    UnsupportedContent(&'static str),
    /// A pass-through attribute held a non-scalar value.
    #[error("attribute `{name}` must be a scalar, got {kind}")]
    UnsupportedAttribute {
        /// Attribute name.
        name: String,
        /// JSON kind that was supplied.
        kind: &'static str,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Prop-combination warnings reported at render time.
///
/// Warnings never abort rendering; debug builds log them through
/// `leptos::logging::warn!`.
pub enum PropWarning {
    /// Two props that must not be combined were both set.
    #[error("prop `{prop}` cannot be used together with `{other}`")]
    Disallowed {
        /// Prop that was set.
        prop: &'static str,
        /// Conflicting prop.
        other: &'static str,
    },
    /// A prop was set without the prop it depends on.
    #[error("prop `{prop}` requires `{required}` to be set")]
    Demanded {
        /// Prop that was set.
        prop: &'static str,
        /// Missing prerequisite.
        required: &'static str,
    },
    /// A prop received a value the component does not accept.
    #[error("prop `{prop}` does not accept `{value}`")]
    Unsupported {
        /// Prop that was set.
        prop: &'static str,
        /// Rejected value token.
        value: &'static str,
    },
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
