//! The decoration table.
//!
//! A [`ButtonTheme`] holds exactly one [`Decoration`] per [`VisualState`].
//! All three are derived from a single [`ButtonStyle`], which keeps the
//! relationship between states fixed no matter how the colors are configured:
//!
//! - `normal` is the bare ornament,
//! - `hover` is the same ornament inside the accent contour,
//! - `pressed` is the inverted ornament inside the same contour.

mod config;

pub use config::ButtonStyle;

use std::path::Path;

use crate::decoration::Decoration;
use crate::error::Result;
use crate::state::VisualState;

/// One decoration per visual state, shared read-only across button instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonTheme {
    style: ButtonStyle,
    normal: Decoration,
    hover: Decoration,
    pressed: Decoration,
}

impl ButtonTheme {
    /// Build the table from a style.
    pub fn from_style(style: ButtonStyle) -> Self {
        let ornament = style.ornament;
        Self {
            style,
            normal: Decoration::plain(ornament),
            hover: Decoration::with_contour(ornament, style.contour),
            pressed: Decoration::with_contour(ornament.inverted(), style.contour),
        }
    }

    /// Pastel grey pill buttons with a `#6060c0` contour on hover and press.
    pub fn classic() -> Self {
        Self::from_style(ButtonStyle::default())
    }

    /// Parse a theme from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        ButtonStyle::from_toml_str(source).map(Self::from_style)
    }

    /// Load a theme from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        ButtonStyle::from_file(path).map(Self::from_style)
    }

    /// The style the table was derived from.
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// The decoration for `state`. Defined for every state.
    pub fn decoration(&self, state: VisualState) -> &Decoration {
        match state {
            VisualState::Normal => &self.normal,
            VisualState::Hover => &self.hover,
            VisualState::Pressed => &self.pressed,
        }
    }
}

impl Default for ButtonTheme {
    fn default() -> Self {
        Self::classic()
    }
}

static_assertions::assert_impl_all!(ButtonTheme: Send, Sync);
