//! Style resolution.
//!
//! [`StyleResolver`] turns a visual state and some content into a
//! [`Decorated`] tree by looking the state up in a shared [`ButtonTheme`].
//! Resolution is a pure table lookup followed by structural wrapping: the
//! same state and content always produce equal trees, and the content is
//! never inspected.

use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::logging::targets;
use crate::render::Decorated;
use crate::state::VisualState;
use crate::theme::ButtonTheme;

static CLASSIC_THEME: OnceLock<Arc<ButtonTheme>> = OnceLock::new();

/// The process-wide classic theme.
pub fn classic_theme() -> Arc<ButtonTheme> {
    CLASSIC_THEME
        .get_or_init(|| Arc::new(ButtonTheme::classic()))
        .clone()
}

/// Resolves visual states against a shared decoration table.
///
/// Cloning a resolver shares its theme.
#[derive(Debug, Clone)]
pub struct StyleResolver {
    theme: Arc<ButtonTheme>,
}

impl StyleResolver {
    /// Create a resolver over `theme`.
    pub fn new(theme: Arc<ButtonTheme>) -> Self {
        Self { theme }
    }

    /// Create a resolver using the classic theme.
    pub fn classic() -> Self {
        Self::new(classic_theme())
    }

    /// The theme this resolver reads from.
    pub fn theme(&self) -> &Arc<ButtonTheme> {
        &self.theme
    }

    /// Decorate `content` for `state`.
    pub fn resolve<C>(&self, state: VisualState, content: C) -> Decorated<C> {
        tracing::trace!(target: targets::RESOLVE, %state, "resolving decoration");
        self.theme.decoration(state).apply(content)
    }

    /// Decorate `content` for a state given by name.
    ///
    /// Unknown names fail with [`Error::InvalidState`](crate::Error::InvalidState)
    /// before anything is wrapped.
    pub fn resolve_named<C>(&self, state: &str, content: C) -> Result<Decorated<C>> {
        let state = state.parse::<VisualState>()?;
        Ok(self.resolve(state, content))
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::classic()
    }
}

/// Decorate `content` for `state` using the classic theme.
pub fn resolve<C>(state: VisualState, content: C) -> Decorated<C> {
    StyleResolver::classic().resolve(state, content)
}
