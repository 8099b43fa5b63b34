//! Form behaviour: live field validation, the learning-support toggle,
//! the submission gate, and reset.
//!
//! Handlers are generic over [`FormView`] and never touch a concrete UI.

mod controller;
mod gate;
mod live;
mod reset;
mod view;

pub use controller::RegistrationForm;
pub use gate::{GateFailure, SubmitOutcome, acknowledgment, check_required, submit};
pub use live::{on_change, on_input, toggle_support_details};
pub use reset::reset;
pub use view::{FormView, apply_result, clear_validity};
