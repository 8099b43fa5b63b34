//! Submit-time checks that decide whether a registration is accepted.

use tracing::info;

use crate::model::{
    FieldId, validate_name, validate_phone, validate_postal_code, validate_student_id,
};

use super::reset::reset;
use super::view::FormView;

/// The first required check that failed at submit time.
///
/// The `Display` text is the blocking alert shown to the user. Checks run
/// in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GateFailure {
    #[error("First Name must be at least 2 characters long")]
    FirstName,
    #[error("Last Name must be at least 2 characters long")]
    LastName,
    #[error("Please enter a valid Phone number (10 digits)")]
    Phone,
    #[error("Please enter a valid postal code (6 digits)")]
    PostalCode,
    #[error("Student ID must follow STU1234 pattern")]
    StudentId,
    #[error("You must agree to the Terms and Conditions")]
    Terms,
}

impl GateFailure {
    /// The field that receives focus after this failure, if any.
    pub fn focus_target(self) -> Option<FieldId> {
        match self {
            Self::FirstName => Some(FieldId::FirstName),
            Self::LastName => Some(FieldId::LastName),
            Self::Phone => Some(FieldId::Phone),
            Self::PostalCode => Some(FieldId::PostalCode),
            Self::StudentId => Some(FieldId::StudentId),
            Self::Terms => None,
        }
    }
}

/// What happened to a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required check failed; nothing was reset.
    Blocked(GateFailure),
    /// Every check passed and the form was reset.
    Accepted {
        /// The first name as it was entered.
        first_name: String,
    },
}

/// Runs the required checks in order and stops at the first failure.
///
/// Email and support details are validated live only and are not checked
/// here.
pub fn check_required<V: FormView + ?Sized>(view: &V) -> Result<(), GateFailure> {
    validate_name(view.value(FieldId::FirstName)).map_err(|_| GateFailure::FirstName)?;
    validate_name(view.value(FieldId::LastName)).map_err(|_| GateFailure::LastName)?;
    validate_phone(view.value(FieldId::Phone)).map_err(|_| GateFailure::Phone)?;
    validate_postal_code(view.value(FieldId::PostalCode))
        .map_err(|_| GateFailure::PostalCode)?;
    validate_student_id(view.value(FieldId::StudentId)).map_err(|_| GateFailure::StudentId)?;
    if !view.is_checked(FieldId::Terms) {
        return Err(GateFailure::Terms);
    }
    Ok(())
}

/// The acknowledgment shown after a successful registration.
pub fn acknowledgment(first_name: &str) -> String {
    format!("Thank you for registering, {first_name}!")
}

/// Handles a submit event.
///
/// On failure the user is alerted and focus moves to the offending field.
/// On success the user is thanked by first name and the form is reset.
pub fn submit<V: FormView + ?Sized>(view: &mut V) -> SubmitOutcome {
    if let Err(failure) = check_required(view) {
        info!(?failure, "submission blocked");
        view.alert(&failure.to_string());
        if let Some(target) = failure.focus_target() {
            view.focus(target);
        }
        return SubmitOutcome::Blocked(failure);
    }

    let first_name = view.value(FieldId::FirstName).to_string();
    info!("submission accepted");
    view.alert(&acknowledgment(&first_name));
    reset(view);
    SubmitOutcome::Accepted { first_name }
}
