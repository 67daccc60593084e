//! Class-name builders.
//!
//! Every component assembles its class attribute from the same small set of
//! rules: a flag contributes its key, an enum contributes `"<value> <key>"`,
//! and a flag-or-enum contributes either. [`ClassList`] joins the pieces,
//! skipping anything empty.

use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{json_kind, MarkupError};

/// A value from the CSS framework's vocabulary.
pub trait Token: Copy {
    /// Class token for this value.
    fn token(self) -> &'static str;
}

/// Anything that can contribute zero or one class token.
pub trait IntoClass {
    /// The class token, or `None` to contribute nothing.
    fn into_class(self) -> Option<String>;
}

impl IntoClass for &str {
    fn into_class(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoClass for String {
    fn into_class(self) -> Option<String> {
        Some(self)
    }
}

impl IntoClass for Option<&str> {
    fn into_class(self) -> Option<String> {
        self.map(str::to_string)
    }
}

impl IntoClass for Option<String> {
    fn into_class(self) -> Option<String> {
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Space-joined class list.
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class; `None` and empty strings are skipped.
    pub fn add(mut self, class: impl IntoClass) -> Self {
        if let Some(class) = class.into_class() {
            if !class.is_empty() {
                self.0.push(class);
            }
        }
        self
    }

    /// Joined class string.
    pub fn build(self) -> String {
        self.0.join(" ")
    }
}

/// `key` when `enabled`.
pub fn key_only(enabled: bool, key: &'static str) -> Option<&'static str> {
    enabled.then_some(key)
}

/// `"<value> <key>"` when a value is set.
pub fn value_and_key<T: Token>(value: Option<T>, key: &str) -> Option<String> {
    value.map(|value| format!("{} {key}", value.token()))
}

/// `key`, `"<value> <key>"`, or nothing, depending on the prop's state.
pub fn key_or_value_and_key<T: Token>(value: KeyOrValue<T>, key: &str) -> Option<String> {
    match value {
        KeyOrValue::Off => None,
        KeyOrValue::Key => Some(key.to_string()),
        KeyOrValue::Value(value) => Some(format!("{} {key}", value.token())),
    }
}

/// `"<value> aligned"`.
pub fn vertical_align<T: Token>(value: Option<T>) -> Option<String> {
    value_and_key(value, "aligned")
}

/// `"justified"` for justified text, otherwise `"<value> aligned"`.
pub fn text_align<T: Token>(value: Option<T>) -> Option<String> {
    match value {
        Some(value) if value.token() == "justified" => Some("justified".to_string()),
        _ => value_and_key(value, "aligned"),
    }
}

const NUMBER_WORDS: [&str; 16] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
];

/// Column-count class: the number spelled out, followed by `suffix` if given.
///
/// Counts outside `1..=16` contribute nothing.
pub fn width_class(width: Option<u8>, suffix: Option<&str>) -> Option<String> {
    let word = NUMBER_WORDS.get(usize::from(width?).checked_sub(1)?)?;
    Some(match suffix {
        Some(suffix) => format!("{word} {suffix}"),
        None => (*word).to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A prop that is either a plain flag or a vocabulary value.
pub enum KeyOrValue<T> {
    /// Unset.
    Off,
    /// Flag form (`true`).
    Key,
    /// Value form.
    Value(T),
}

impl<T> Default for KeyOrValue<T> {
    fn default() -> Self {
        Self::Off
    }
}

impl<T> From<bool> for KeyOrValue<T> {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Key
        } else {
            Self::Off
        }
    }
}

impl<'de, T> Deserialize<'de> for KeyOrValue<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null | Value::Bool(false) => Ok(Self::Off),
            Value::Bool(true) => Ok(Self::Key),
            Value::String(text) => text.parse().map(Self::Value).map_err(de::Error::custom),
            other => Err(de::Error::custom(MarkupError::UnsupportedShorthand(
                json_kind(&other),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Side {
        Left,
        Justified,
    }

    impl Token for Side {
        fn token(self) -> &'static str {
            match self {
                Self::Left => "left",
                Self::Justified => "justified",
            }
        }
    }

    impl FromStr for Side {
        type Err = MarkupError;

        fn from_str(value: &str) -> Result<Self, Self::Err> {
            match value {
                "left" => Ok(Self::Left),
                "justified" => Ok(Self::Justified),
                _ => Err(MarkupError::UnknownToken {
                    kind: "Side",
                    value: value.to_string(),
                }),
            }
        }
    }

    #[test]
    fn class_list_skips_empty_pieces() {
        let classes = ClassList::new()
            .add("ui")
            .add(None::<&str>)
            .add("")
            .add(Some("large"))
            .add(key_only(false, "avatar"))
            .add(key_only(true, "bordered"))
            .add("image")
            .build();
        assert_eq!(classes, "ui large bordered image");
    }

    #[test]
    fn key_or_value_forms() {
        assert_eq!(key_or_value_and_key(KeyOrValue::<Side>::Off, "spaced"), None);
        assert_eq!(
            key_or_value_and_key(KeyOrValue::<Side>::Key, "spaced").as_deref(),
            Some("spaced")
        );
        assert_eq!(
            key_or_value_and_key(KeyOrValue::Value(Side::Left), "spaced").as_deref(),
            Some("left spaced")
        );
    }

    #[test]
    fn alignment_helpers() {
        assert_eq!(vertical_align(Some(Side::Left)).as_deref(), Some("left aligned"));
        assert_eq!(text_align(Some(Side::Justified)).as_deref(), Some("justified"));
        assert_eq!(text_align(None::<Side>), None);
    }

    #[test]
    fn width_words() {
        assert_eq!(width_class(Some(3), None).as_deref(), Some("three"));
        assert_eq!(width_class(Some(16), Some("wide")).as_deref(), Some("sixteen wide"));
        assert_eq!(width_class(Some(0), None), None);
        assert_eq!(width_class(Some(17), None), None);
    }

    #[test]
    fn key_or_value_deserializes_flags_and_tokens() {
        let parsed: Vec<KeyOrValue<Side>> =
            serde_json::from_str(r#"[true, false, "left"]"#).expect("parse");
        assert_eq!(
            parsed,
            vec![KeyOrValue::Key, KeyOrValue::Off, KeyOrValue::Value(Side::Left)]
        );

        let err = serde_json::from_str::<KeyOrValue<Side>>(r#""up""#).unwrap_err();
        assert!(err.to_string().contains("unknown Side value `up`"));
    }
}
