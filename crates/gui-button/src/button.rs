//! Action buttons.
//!
//! [`bind`] pairs caller content with a command and returns a live
//! [`RenderedButton`]. The host feeds it [`PointerEvent`]s for its region;
//! the button walks its [`InteractionState`] machine, regenerates its
//! decoration on every state change and forwards the command to a
//! [`CommandExecutor`] each time an activation completes.
//!
//! # Example
//!
//! ```
//! use gui_button::prelude::*;
//!
//! let mut dispatched = Vec::new();
//! let mut run = |cmd: &&str| dispatched.push(cmd.to_string());
//!
//! let mut button = bind("Compile", "(compile-buffer)");
//! button.handle_event(PointerEvent::Enter, &mut run);
//! assert_eq!(button.visual_state(), VisualState::Hover);
//!
//! button.handle_event(PointerEvent::PressOrDrag, &mut run);
//! button.handle_event(PointerEvent::Release, &mut run);
//! assert_eq!(button.visual_state(), VisualState::Normal);
//! assert_eq!(dispatched, ["(compile-buffer)"]);
//! ```

use gui_button_style::{Decorated, StyleResolver, VisualState};

use crate::event::PointerEvent;
use crate::executor::CommandExecutor;
use crate::logging::targets;
use crate::state::{InteractionState, Transition};

/// The two arguments of an action button: what to show and what to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec<C, K> {
    /// Caller-owned renderable content. Wrapped, never inspected.
    pub content: C,
    /// Opaque command forwarded verbatim on activation.
    pub command: K,
}

impl<C, K> ButtonSpec<C, K> {
    /// Create a spec.
    pub fn new(content: C, command: K) -> Self {
        Self { content, command }
    }

    /// Bind the spec to a resolver, producing a live button in the idle state.
    pub fn bind(self, resolver: StyleResolver) -> RenderedButton<C, K> {
        let state = InteractionState::default();
        let frame = resolver.resolve(state.visual_state(), ());
        RenderedButton {
            spec: self,
            state,
            frame,
            resolver,
            activations: 0,
        }
    }
}

/// Bind `content` and `command` into a classic-themed button.
pub fn bind<C, K>(content: C, command: K) -> RenderedButton<C, K> {
    ButtonSpec::new(content, command).bind(StyleResolver::classic())
}

/// A bound button embedded in a host document.
///
/// Each instance owns its state; instances share nothing but the resolver's
/// read-only theme.
#[derive(Debug, Clone)]
pub struct RenderedButton<C, K> {
    spec: ButtonSpec<C, K>,
    state: InteractionState,
    /// Decoration for the current state, resolved without content.
    frame: Decorated<()>,
    resolver: StyleResolver,
    activations: u64,
}

impl<C, K> RenderedButton<C, K> {
    /// Current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Visual state currently rendered.
    pub fn visual_state(&self) -> VisualState {
        self.state.visual_state()
    }

    /// The wrapped content.
    pub fn content(&self) -> &C {
        &self.spec.content
    }

    /// The bound command.
    pub fn command(&self) -> &K {
        &self.spec.command
    }

    /// Number of completed activations so far.
    pub fn activations(&self) -> u64 {
        self.activations
    }

    /// The resolver used for re-rendering.
    pub fn resolver(&self) -> &StyleResolver {
        &self.resolver
    }

    /// The current rendered output: the content inside the current decoration.
    pub fn rendered(&self) -> Decorated<&C> {
        self.frame.clone().map(|()| &self.spec.content)
    }

    /// Feed one pointer event.
    ///
    /// On a state change the decoration is regenerated from the resolver.
    /// When an activation completes, `executor` receives the command exactly
    /// once and the button is already back in its idle state.
    pub fn handle_event<E>(&mut self, event: PointerEvent, executor: &mut E) -> Transition
    where
        E: CommandExecutor<K> + ?Sized,
    {
        let transition = self.state.on_event(event);

        if !transition.changed() {
            tracing::trace!(
                target: targets::DISPATCH,
                state = ?self.state,
                %event,
                "event ignored"
            );
            return transition;
        }

        self.state = transition.to;
        self.frame = self.resolver.resolve(self.state.visual_state(), ());
        tracing::debug!(
            target: targets::DISPATCH,
            from = ?transition.from,
            to = ?transition.to,
            %event,
            "button state changed"
        );

        if transition.dispatch {
            self.activations += 1;
            tracing::debug!(
                target: targets::EXECUTOR,
                activation = self.activations,
                "forwarding command"
            );
            executor.execute(&self.spec.command);
        }

        transition
    }

    /// Feed a sequence of events. Returns the number of commands forwarded.
    pub fn handle_events<I, E>(&mut self, events: I, executor: &mut E) -> usize
    where
        I: IntoIterator<Item = PointerEvent>,
        E: CommandExecutor<K> + ?Sized,
    {
        let mut dispatched = 0;
        for event in events {
            if self.handle_event(event, executor).dispatch {
                dispatched += 1;
            }
        }
        dispatched
    }

    /// Unbind the button, returning its content and command.
    pub fn into_spec(self) -> ButtonSpec<C, K> {
        self.spec
    }
}

static_assertions::assert_impl_all!(RenderedButton<String, String>: Send, Sync);
