//! Logging facilities.
//!
//! gui-button uses the `tracing` crate. Install a subscriber in the host
//! application to see its output:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("gui_button=debug")
//!     .init();
//! ```
//!
//! State changes and forwarded commands log at `debug`, ignored events and
//! style resolution at `trace`.

/// Target names for log filtering.
pub mod targets {
    /// Pointer event classification.
    pub const EVENT: &str = "gui_button::event";
    /// State machine transitions.
    pub const DISPATCH: &str = "gui_button::dispatch";
    /// Command forwarding.
    pub const EXECUTOR: &str = "gui_button::executor";
    pub use gui_button_style::logging::targets::{RESOLVE, THEME};
}
