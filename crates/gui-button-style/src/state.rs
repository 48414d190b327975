//! Visual states of a button.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The interaction-derived appearance mode of a button.
///
/// Buttons have no disabled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// Resting, slightly raised.
    #[default]
    Normal,
    /// Pointer over the button.
    Hover,
    /// Press or drag in progress.
    Pressed,
}

impl VisualState {
    /// All states, in declaration order.
    pub const ALL: [VisualState; 3] = [Self::Normal, Self::Hover, Self::Pressed];

    /// The state's name as used by host documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hover => "hover",
            Self::Pressed => "pressed",
        }
    }
}

impl FromStr for VisualState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "normal" => Ok(Self::Normal),
            "hover" => Ok(Self::Hover),
            "pressed" => Ok(Self::Pressed),
            other => Err(Error::invalid_state(other)),
        }
    }
}

impl TryFrom<u8> for VisualState {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| Error::invalid_state(code.to_string()))
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
