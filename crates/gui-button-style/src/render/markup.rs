//! Lowering decorations into the host's nested style markup.

use std::fmt;

use super::DecorationPainter;
use crate::decoration::Ornament;
use crate::types::Color;

/// Paints decorations as host style markup such as
/// `<with|ornament-corner|50%|...|<ornament|OK>>`.
///
/// Content is written through its `Display` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupPainter;

impl MarkupPainter {
    /// Create a markup painter.
    pub fn new() -> Self {
        Self
    }
}

impl<C: fmt::Display + ?Sized> DecorationPainter<C> for MarkupPainter {
    type Output = String;

    fn paint_content(&mut self, content: &C) -> String {
        content.to_string()
    }

    fn ornament(&mut self, ornament: &Ornament, inner: String) -> String {
        format!(
            "<with|ornament-corner|{}|ornament-color|{}|ornament-shadow-color|{}|ornament-sunny-color|{}|<ornament|{}>>",
            ornament.corner, ornament.color, ornament.shadow_color, ornament.sunny_color, inner
        )
    }

    fn drop_contour(&mut self, recolor: Option<Color>, inner: String) -> String {
        match recolor {
            Some(color) => format!("<with|shadow-recolor|{color}|<drop-contour|{inner}>>"),
            None => format!("<drop-contour|{inner}>"),
        }
    }
}
