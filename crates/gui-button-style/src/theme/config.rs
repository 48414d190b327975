//! Theme configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decoration::{Contour, Ornament};
use crate::error::{Error, Result};
use crate::logging::targets;
use crate::types::Color;

/// The configurable inputs of a [`ButtonTheme`](super::ButtonTheme).
///
/// Every field is optional in TOML and falls back to the classic look:
///
/// ```toml
/// [ornament]
/// corner = "50%"
/// color = "pastel grey"
/// sunny-color = "white"
/// shadow-color = "dark grey"
///
/// [contour]
/// recolor = "#6060c0"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonStyle {
    /// The resting ornament. Pressed buttons use its inverse.
    pub ornament: Ornament,
    /// The contour drawn on hover and press.
    pub contour: Contour,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            ornament: Ornament::classic(),
            contour: Contour::recolored(Color::ACCENT_BLUE),
        }
    }
}

impl ButtonStyle {
    /// Parse a style from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let style: Self = toml::from_str(source)?;
        tracing::debug!(
            target: targets::THEME,
            corner = %style.ornament.corner,
            color = %style.ornament.color,
            recolor = ?style.contour.recolor,
            "parsed button style"
        );
        Ok(style)
    }

    /// Load a style from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(
            target: targets::THEME,
            "loading button style from {}",
            path.display()
        );
        Self::from_toml_str(&source)
    }
}
