use semantic_markup::{BaseProps, ClassList, Component, Element, Node, ShorthandFactory};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// A country flag sprite.
pub struct Flag {
    /// Shared element props.
    #[serde(flatten)]
    pub base: BaseProps,
    /// Country name or code (`france`, `fr`, ...).
    pub name: Option<String>,
}

impl Component for Flag {
    const NAME: &'static str = "Flag";

    fn build(&self) -> Node {
        let classes = ClassList::new()
            .add(self.name.as_deref())
            .add("flag")
            .add(self.base.class_name.as_deref())
            .build();

        Element::new(self.base.element_type(Some("i"), None, false))
            .attrs(self.base.attrs.clone())
            .with_class(classes)
            .into()
    }
}

impl ShorthandFactory for Flag {
    fn from_value(value: &str) -> Self {
        Self {
            name: Some(value.to_string()),
            ..Default::default()
        }
    }
}
