//! Value types shared by decorations and themes.

mod color;
mod corner;

pub use color::Color;
pub use corner::CornerRounding;
