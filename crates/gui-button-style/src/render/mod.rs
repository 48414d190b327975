//! Resolved decoration trees and the host painting interface.
//!
//! Resolving a state produces a [`Decorated`] value: plain data describing
//! which host primitives wrap the content, outermost first. Nothing is drawn
//! until the tree is handed to a [`DecorationPainter`], which is implemented
//! by the host rendering engine.
//!
//! # Example
//!
//! ```
//! use gui_button_style::prelude::*;
//!
//! let decorated = resolve(VisualState::Hover, "OK");
//! let markup = decorated.paint(&mut MarkupPainter::new());
//! assert!(markup.starts_with("<with|shadow-recolor|#6060c0|<drop-contour|"));
//! ```

mod markup;

pub use markup::MarkupPainter;

use crate::decoration::{Contour, Ornament};
use crate::types::Color;

/// Content wrapped in host decoration primitives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decorated<C> {
    /// Content inside a bevelled ornament box.
    Ornament { ornament: Ornament, content: C },
    /// A decorated subtree surrounded by a drop-contour effect.
    DropContour {
        contour: Contour,
        inner: Box<Decorated<C>>,
    },
}

impl<C> Decorated<C> {
    /// The wrapped content.
    pub fn content(&self) -> &C {
        match self {
            Self::Ornament { content, .. } => content,
            Self::DropContour { inner, .. } => inner.content(),
        }
    }

    /// Unwrap the content, discarding the decoration.
    pub fn into_content(self) -> C {
        match self {
            Self::Ornament { content, .. } => content,
            Self::DropContour { inner, .. } => inner.into_content(),
        }
    }

    /// The innermost ornament.
    pub fn ornament(&self) -> &Ornament {
        match self {
            Self::Ornament { ornament, .. } => ornament,
            Self::DropContour { inner, .. } => inner.ornament(),
        }
    }

    /// The outermost contour, if the tree has one.
    pub fn contour(&self) -> Option<&Contour> {
        match self {
            Self::Ornament { .. } => None,
            Self::DropContour { contour, .. } => Some(contour),
        }
    }

    /// Borrow the content, keeping the decoration structure.
    pub fn by_ref(&self) -> Decorated<&C> {
        match self {
            Self::Ornament { ornament, content } => Decorated::Ornament {
                ornament: *ornament,
                content,
            },
            Self::DropContour { contour, inner } => Decorated::DropContour {
                contour: *contour,
                inner: Box::new((**inner).by_ref()),
            },
        }
    }

    /// Replace the content, keeping the decoration structure.
    pub fn map<D>(self, f: impl FnOnce(C) -> D) -> Decorated<D> {
        match self {
            Self::Ornament { ornament, content } => Decorated::Ornament {
                ornament,
                content: f(content),
            },
            Self::DropContour { contour, inner } => Decorated::DropContour {
                contour,
                inner: Box::new(inner.map(f)),
            },
        }
    }

    /// Lower the tree onto host primitives, innermost first.
    pub fn paint<P>(&self, painter: &mut P) -> P::Output
    where
        P: DecorationPainter<C> + ?Sized,
    {
        match self {
            Self::Ornament { ornament, content } => {
                let inner = painter.paint_content(content);
                painter.ornament(ornament, inner)
            }
            Self::DropContour { contour, inner } => {
                let inner = inner.paint(painter);
                painter.drop_contour(contour.recolor, inner)
            }
        }
    }
}

/// Drawing primitives supplied by the host rendering engine.
///
/// Implementations build whatever the host renders: display lists, markup,
/// GPU commands. The resolver never calls these directly.
pub trait DecorationPainter<C: ?Sized> {
    /// The host's renderable unit.
    type Output;

    /// Render the bare content.
    fn paint_content(&mut self, content: &C) -> Self::Output;

    /// Wrap `inner` in a rounded, bevelled box.
    fn ornament(&mut self, ornament: &Ornament, inner: Self::Output) -> Self::Output;

    /// Surround `inner` with a drop-contour, optionally recoloring its shadow.
    fn drop_contour(&mut self, recolor: Option<Color>, inner: Self::Output) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::{Contour, Decoration};

    /// Records primitive calls in order.
    #[derive(Default)]
    struct CallLog(Vec<String>);

    impl DecorationPainter<&str> for CallLog {
        type Output = usize;

        fn paint_content(&mut self, content: &&str) -> usize {
            self.0.push(format!("content {content}"));
            0
        }

        fn ornament(&mut self, ornament: &Ornament, inner: usize) -> usize {
            self.0.push(format!("ornament {}", ornament.corner));
            inner + 1
        }

        fn drop_contour(&mut self, recolor: Option<Color>, inner: usize) -> usize {
            self.0.push(format!("contour {recolor:?}"));
            inner + 1
        }
    }

    #[test]
    fn test_paint_order_is_innermost_first() {
        let decorated = Decoration::with_contour(Ornament::classic(), Contour { recolor: None })
            .apply("x");
        let mut log = CallLog::default();

        let depth = decorated.paint(&mut log);

        assert_eq!(depth, 2);
        assert_eq!(log.0, vec!["content x", "ornament 50%", "contour None"]);
    }

    #[test]
    fn test_accessors_reach_through_contour() {
        let decorated = Decoration::with_contour(
            Ornament::classic().inverted(),
            Contour::recolored(Color::ACCENT_BLUE),
        )
        .apply(String::from("label"));

        assert_eq!(decorated.content(), "label");
        assert_eq!(decorated.ornament(), &Ornament::classic().inverted());
        assert_eq!(decorated.contour().and_then(|c| c.recolor), Some(Color::ACCENT_BLUE));
        assert_eq!(decorated.by_ref().into_content(), "label");
        assert_eq!(decorated.clone().map(|s| s.len()).into_content(), 5);
        assert_eq!(decorated.into_content(), "label");
    }

    #[test]
    fn test_by_ref_keeps_structure() {
        let decorated = Decoration::with_contour(
            Ornament::classic(),
            Contour::recolored(Color::ACCENT_BLUE),
        )
        .apply(vec![1_u8, 2]);

        let borrowed = decorated.by_ref();

        assert!(std::ptr::eq(*borrowed.content(), decorated.content()));
        assert_eq!(borrowed.contour(), decorated.contour());
        assert_eq!(borrowed.ornament(), decorated.ornament());
        assert_eq!(borrowed.map(|c| c.clone()), decorated);
    }
}
