//! Decoration parameter sets.
//!
//! A [`Decoration`] is an immutable description of how a button looks in one
//! visual state: a rounded ornament box with a bevel, optionally wrapped in a
//! drop-contour effect.

use serde::{Deserialize, Serialize};

use crate::render::Decorated;
use crate::types::{Color, CornerRounding};

/// The rounded, bevelled box drawn behind a button's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Ornament {
    /// Corner rounding of the box.
    pub corner: CornerRounding,
    /// Fill color.
    pub color: Color,
    /// Color of the lit (highlighted) edge.
    pub sunny_color: Color,
    /// Color of the recessed (shadowed) edge.
    pub shadow_color: Color,
}

impl Ornament {
    /// The resting ornament: pill corners, pastel grey fill, white highlight,
    /// dark grey shadow.
    pub const fn classic() -> Self {
        Self {
            corner: CornerRounding::PILL,
            color: Color::PASTEL_GREY,
            sunny_color: Color::WHITE,
            shadow_color: Color::DARK_GREY,
        }
    }

    /// The same box with the highlight and shadow edges exchanged.
    ///
    /// A raised bevel becomes a pushed-in one.
    pub const fn inverted(self) -> Self {
        Self {
            sunny_color: self.shadow_color,
            shadow_color: self.sunny_color,
            ..self
        }
    }
}

impl Default for Ornament {
    fn default() -> Self {
        Self::classic()
    }
}

/// A drop-contour effect drawn around the ornament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Contour {
    /// Color the contour's shadow is recolored to. `None` keeps the host default.
    pub recolor: Option<Color>,
}

impl Contour {
    /// A contour recolored to `color`.
    pub const fn recolored(color: Color) -> Self {
        Self {
            recolor: Some(color),
        }
    }
}

/// Complete visual parameters for one visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoration {
    /// The bevelled box.
    pub ornament: Ornament,
    /// Optional contour around the box.
    pub contour: Option<Contour>,
}

impl Decoration {
    /// A decoration without a contour.
    pub const fn plain(ornament: Ornament) -> Self {
        Self {
            ornament,
            contour: None,
        }
    }

    /// A decoration wrapped in `contour`.
    pub const fn with_contour(ornament: Ornament, contour: Contour) -> Self {
        Self {
            ornament,
            contour: Some(contour),
        }
    }

    /// Whether a contour is drawn.
    pub fn has_contour(&self) -> bool {
        self.contour.is_some()
    }

    /// The contour's shadow recolor, if any.
    pub fn shadow_recolor(&self) -> Option<Color> {
        self.contour.and_then(|c| c.recolor)
    }

    /// Wrap `content` in this decoration.
    ///
    /// The content is moved into the result untouched.
    pub fn apply<C>(&self, content: C) -> Decorated<C> {
        let ornamented = Decorated::Ornament {
            ornament: self.ornament,
            content,
        };
        match self.contour {
            Some(contour) => Decorated::DropContour {
                contour,
                inner: Box::new(ornamented),
            },
            None => ornamented,
        }
    }
}
