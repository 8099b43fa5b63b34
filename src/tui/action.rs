//! Actions returned by screen event handlers.

/// An action that a screen handler returns to the [`App`](super::App).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No app-level change needed.
    None,
    /// Quit the application.
    Quit,
}
