//! Stylable action buttons for document hosts.
//!
//! An action button wraps arbitrary content and runs a caller-chosen command
//! when clicked. It looks different in each of its three visual states:
//!
//! - **normal**: a pastel grey pill with a raised bevel
//! - **hover**: the same pill inside a blue drop contour
//! - **pressed**: an inverted bevel inside the same contour
//!
//! This crate provides the interaction side: the [`InteractionState`] machine,
//! [`PointerEvent`] classification, and command forwarding through a
//! [`CommandExecutor`]. Decorations come from [`gui_button_style`], which is
//! re-exported as [`style`].
//!
//! # Example
//!
//! ```
//! use gui_button::prelude::*;
//!
//! let (mut executor, commands) = QueuedExecutor::channel();
//! let mut button = bind("Print", "(print-document)");
//!
//! // Drag out of the button and release outside: still an activation.
//! let dispatched = button.handle_events(
//!     [
//!         PointerEvent::Enter,
//!         PointerEvent::PressOrDrag,
//!         PointerEvent::Leave,
//!         PointerEvent::Release,
//!     ],
//!     &mut executor,
//! );
//!
//! assert_eq!(dispatched, 1);
//! assert_eq!(button.state(), InteractionState::Idle);
//! assert_eq!(commands.try_recv().unwrap(), "(print-document)");
//! ```

pub mod button;
pub mod construct;
pub mod event;
pub mod executor;
pub mod logging;
pub mod state;

pub use gui_button_style as style;

pub use button::{ButtonSpec, RenderedButton, bind};
pub use construct::{ACTION_BUTTON, ConstructDescriptor};
pub use event::{PointerEvent, UnknownEventTag};
pub use executor::{CommandExecutor, QueuedExecutor};
pub use gui_button_style::{Error, Result};
pub use state::{InteractionState, Transition};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::button::{ButtonSpec, RenderedButton, bind};
    pub use crate::construct::ACTION_BUTTON;
    pub use crate::event::PointerEvent;
    pub use crate::executor::{CommandExecutor, QueuedExecutor};
    pub use crate::state::{InteractionState, Transition};
    pub use gui_button_style::prelude::*;
}
