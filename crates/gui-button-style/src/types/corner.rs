//! Corner rounding for ornament boxes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Corner rounding expressed as a percentage of the box's smaller side.
///
/// `0%` draws square corners, `50%` produces a pill shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CornerRounding(u8);

impl CornerRounding {
    /// Square corners.
    pub const SQUARE: Self = Self(0);
    /// Fully rounded ends.
    pub const PILL: Self = Self(50);

    /// Create a rounding from a percentage in `0..=100`.
    pub fn from_percent(percent: u8) -> Result<Self> {
        if percent > 100 {
            return Err(Error::invalid_value(
                "ornament-corner",
                format!("{percent}% is outside 0%..100%"),
            ));
        }
        Ok(Self(percent))
    }

    /// The rounding as a percentage.
    pub fn percent(self) -> u8 {
        self.0
    }

    /// The rounding as a fraction in `0.0..=1.0`.
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl Default for CornerRounding {
    fn default() -> Self {
        Self::PILL
    }
}

impl FromStr for CornerRounding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().strip_suffix('%').ok_or_else(|| {
            Error::invalid_value("ornament-corner", format!("'{s}' is not a percentage"))
        })?;
        let percent = digits.trim().parse::<u8>().map_err(|e| {
            Error::invalid_value("ornament-corner", format!("'{s}': {e}"))
        })?;
        Self::from_percent(percent)
    }
}

impl TryFrom<String> for CornerRounding {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CornerRounding> for String {
    fn from(rounding: CornerRounding) -> Self {
        rounding.to_string()
    }
}

impl fmt::Display for CornerRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
