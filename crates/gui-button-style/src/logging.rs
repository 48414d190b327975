//! Logging targets for style resolution and theme loading.
//!
//! Resolution logs at `trace`, theme loading at `debug`.

/// Target names for log filtering.
pub mod targets {
    /// Style resolution.
    pub const RESOLVE: &str = "gui_button_style::resolve";
    /// Theme parsing and loading.
    pub const THEME: &str = "gui_button_style::theme";
}
