//! Pointer events scoped to a button's rendered region.

use std::fmt;
use std::str::FromStr;

/// An interaction event delivered by the host for one button region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// The pointer entered the region.
    Enter,
    /// The pointer left the region.
    Leave,
    /// A press started, either a plain click or the start of a drag.
    PressOrDrag,
    /// The press or drag gesture ended, wherever the pointer is.
    Release,
}

impl PointerEvent {
    /// All events.
    pub const ALL: [PointerEvent; 4] = [
        Self::Enter,
        Self::Leave,
        Self::PressOrDrag,
        Self::Release,
    ];

    /// Classify a host interaction tag.
    ///
    /// `click` and `drag` both map to [`PointerEvent::PressOrDrag`]. Returns
    /// `None` for tags that do not concern buttons.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "enter" | "mouse-over" | "mouse-enter" => Some(Self::Enter),
            "leave" | "mouse-out" | "mouse-leave" => Some(Self::Leave),
            "press" | "click" | "drag" | "press-or-drag" => Some(Self::PressOrDrag),
            "release" | "mouse-up" => Some(Self::Release),
            other => {
                tracing::warn!(
                    target: crate::logging::targets::EVENT,
                    tag = other,
                    "unclassified pointer event tag"
                );
                None
            }
        }
    }

    /// Canonical tag for this event.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Leave => "leave",
            Self::PressOrDrag => "press-or-drag",
            Self::Release => "release",
        }
    }
}

/// Error returned when parsing an unknown event tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventTag(pub String);

impl fmt::Display for UnknownEventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown pointer event tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownEventTag {}

impl FromStr for PointerEvent {
    type Err = UnknownEventTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownEventTag(s.to_string()))
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_and_drag_are_merged() {
        assert_eq!(PointerEvent::from_tag("click"), Some(PointerEvent::PressOrDrag));
        assert_eq!(PointerEvent::from_tag("drag"), Some(PointerEvent::PressOrDrag));
    }

    #[test]
    fn test_host_tags() {
        assert_eq!(PointerEvent::from_tag("mouse-over"), Some(PointerEvent::Enter));
        assert_eq!(PointerEvent::from_tag("mouse-out"), Some(PointerEvent::Leave));
        assert_eq!(PointerEvent::from_tag(" release "), Some(PointerEvent::Release));
        assert_eq!(PointerEvent::from_tag("keypress"), None);
    }

    #[test]
    fn test_canonical_tags_round_trip() {
        for event in PointerEvent::ALL {
            assert_eq!(event.to_string().parse::<PointerEvent>(), Ok(event));
        }
        assert_eq!(
            "scroll".parse::<PointerEvent>(),
            Err(UnknownEventTag("scroll".to_string()))
        );
    }
}
