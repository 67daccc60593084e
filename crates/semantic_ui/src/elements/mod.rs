//! Basic building blocks: icons, images, labels, placeholders, segments.

mod flag;
mod icon;
mod image;
mod label;
mod placeholder;
mod segment;

pub use flag::Flag;
pub use icon::Icon;
pub use image::{Image, ImageGroup};
pub use label::{Label, LabelDetail, LabelGroup, LabelImage};
pub use placeholder::{
    Placeholder, PlaceholderHeader, PlaceholderImage, PlaceholderLine, PlaceholderParagraph,
};
pub use segment::{Segment, SegmentGroup};
