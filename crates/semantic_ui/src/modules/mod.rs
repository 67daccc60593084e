//! Interactive modules, rendered as static markup.

mod dimmer;
mod dropdown;
mod inline;

pub use dimmer::{Dimmer, DimmerDimmable};
pub use dropdown::DropdownItem;
pub use inline::Inline;
