//! Forwarding commands to the host's command subsystem.
//!
//! A button never runs its command itself. When an activation completes it
//! hands the command to a [`CommandExecutor`] and moves on: it does not wait
//! for a result, retry, or roll back. Whatever the executor does with the
//! command, including failing, stays inside the executor.

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::logging::targets;

/// Receives commands from completed activations.
pub trait CommandExecutor<K: ?Sized> {
    /// Run or schedule `command`. Called exactly once per activation.
    fn execute(&mut self, command: &K);
}

impl<K: ?Sized, F> CommandExecutor<K> for F
where
    F: FnMut(&K),
{
    fn execute(&mut self, command: &K) {
        self(command)
    }
}

/// An executor that queues commands for another thread or subsystem.
///
/// # Example
///
/// ```
/// use gui_button::prelude::*;
///
/// let (mut executor, commands) = QueuedExecutor::channel();
/// let mut button = bind("Save", String::from("(save-buffer)"));
///
/// button.handle_events(
///     [PointerEvent::Enter, PointerEvent::PressOrDrag, PointerEvent::Release],
///     &mut executor,
/// );
///
/// assert_eq!(commands.try_recv().unwrap(), "(save-buffer)");
/// ```
#[derive(Debug, Clone)]
pub struct QueuedExecutor<K> {
    sender: Sender<K>,
}

impl<K> QueuedExecutor<K> {
    /// Create an executor sending into `sender`.
    pub fn new(sender: Sender<K>) -> Self {
        Self { sender }
    }

    /// Create an executor together with the receiving end of its queue.
    pub fn channel() -> (Self, Receiver<K>) {
        let (sender, receiver) = unbounded();
        (Self::new(sender), receiver)
    }
}

impl<K: Clone> CommandExecutor<K> for QueuedExecutor<K> {
    fn execute(&mut self, command: &K) {
        // A dropped receiver belongs to the command subsystem; the button has
        // already settled.
        if self.sender.send(command.clone()).is_err() {
            tracing::trace!(target: targets::EXECUTOR, "command queue disconnected");
        }
    }
}
