//! Reusable TUI widgets.

pub mod alert;
pub mod form;
pub mod preview;

pub use alert::draw_alert;
pub use form::draw_form;
pub use preview::draw_preview;
