//! The button interaction state machine.
//!
//! | From         | Event          | To           | Dispatches |
//! |--------------|----------------|--------------|------------|
//! | `Idle`       | `Enter`        | `Hovering`   | no         |
//! | `Hovering`   | `Leave`        | `Idle`       | no         |
//! | `Hovering`   | `PressOrDrag`  | `Activating` | no         |
//! | `Activating` | `Release`      | `Idle`       | yes        |
//!
//! Every other pair leaves the state unchanged. In particular, leaving the
//! region while `Activating` does not cancel the gesture: the command is
//! still dispatched on release.

use gui_button_style::VisualState;

use crate::event::PointerEvent;

/// Where a button is in its press gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No pointer interaction.
    #[default]
    Idle,
    /// Pointer over the button, not pressed.
    Hovering,
    /// Press or drag in progress.
    Activating,
}

impl InteractionState {
    /// The visual state rendered for this interaction state.
    pub fn visual_state(self) -> VisualState {
        match self {
            Self::Idle => VisualState::Normal,
            Self::Hovering => VisualState::Hover,
            Self::Activating => VisualState::Pressed,
        }
    }

    /// Apply `event` and report what happened.
    pub fn on_event(self, event: PointerEvent) -> Transition {
        use InteractionState::*;
        use PointerEvent::*;

        let (to, dispatch) = match (self, event) {
            (Idle, Enter) => (Hovering, false),
            (Hovering, Leave) => (Idle, false),
            (Hovering, PressOrDrag) => (Activating, false),
            (Activating, Release) => (Idle, true),
            (state, _) => (state, false),
        };

        Transition {
            from: self,
            to,
            event,
            dispatch,
        }
    }
}

/// The outcome of feeding one event to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State before the event.
    pub from: InteractionState,
    /// State after the event.
    pub to: InteractionState,
    /// The event that was applied.
    pub event: PointerEvent,
    /// Whether the bound command must be forwarded.
    pub dispatch: bool,
}

impl Transition {
    /// Whether the state changed. Unchanged states need no re-render.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// Whether this transition completed an activation.
    pub fn is_activation(&self) -> bool {
        self.from == InteractionState::Activating && self.to == InteractionState::Idle
    }
}
