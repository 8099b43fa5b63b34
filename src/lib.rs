//! Student registration form with live field validation, a conditional
//! learning-support field, profile-picture preview, and a submission gate.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod preview;
pub mod tui;
