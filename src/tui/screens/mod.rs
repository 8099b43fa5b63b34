//! TUI screen implementations.

pub mod registration;

pub use registration::{RegistrationScreen, draw_registration};
