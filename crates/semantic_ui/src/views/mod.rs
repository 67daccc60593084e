//! Content views: cards and advertisements.

mod advertisement;
mod card;

pub use advertisement::{AdTest, Advertisement};
pub use card::{Card, CardContent, CardDescription, CardGroup, CardHeader, CardMeta};
