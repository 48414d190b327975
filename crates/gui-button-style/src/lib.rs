//! Stylable button decorations.
//!
//! This crate maps the three visual states of a button to decorations and
//! applies them to arbitrary content:
//!
//! - **States**: [`VisualState`] is `Normal`, `Hover` or `Pressed`
//! - **Decorations**: a rounded, bevelled [`Ornament`] with an optional drop [`Contour`]
//! - **Themes**: one [`Decoration`] per state in a shared [`ButtonTheme`], loadable from TOML
//! - **Resolution**: [`StyleResolver`] produces pure [`Decorated`] trees
//! - **Painting**: hosts lower trees onto their own primitives via [`DecorationPainter`]
//!
//! # Example
//!
//! ```
//! use gui_button_style::prelude::*;
//!
//! let resolver = StyleResolver::classic();
//! let pressed = resolver.resolve(VisualState::Pressed, "Run");
//!
//! // Pressed buttons invert the bevel and add the accent contour.
//! assert_eq!(pressed.ornament().sunny_color, Color::DARK_GREY);
//! assert_eq!(pressed.contour().and_then(|c| c.recolor), Some(Color::ACCENT_BLUE));
//!
//! // States arriving by name are validated first.
//! assert!(resolver.resolve_named("disabled", "Run").is_err());
//! ```

pub mod decoration;
pub mod logging;
pub mod render;
pub mod resolve;
pub mod state;
pub mod theme;
pub mod types;

mod error;

pub use decoration::{Contour, Decoration, Ornament};
pub use error::{Error, Result};
pub use render::{Decorated, DecorationPainter, MarkupPainter};
pub use resolve::{StyleResolver, classic_theme, resolve};
pub use state::VisualState;
pub use theme::{ButtonStyle, ButtonTheme};
pub use types::{Color, CornerRounding};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::decoration::{Contour, Decoration, Ornament};
    pub use crate::render::{Decorated, DecorationPainter, MarkupPainter};
    pub use crate::resolve::{StyleResolver, resolve};
    pub use crate::state::VisualState;
    pub use crate::theme::{ButtonStyle, ButtonTheme};
    pub use crate::types::{Color, CornerRounding};
}
