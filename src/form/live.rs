//! Per-field validation on every value change.

use tracing::debug;

use crate::model::{
    FieldId, normalize_student_id, validate_email, validate_name, validate_phone,
    validate_postal_code, validate_student_id, validate_support_details, validate_terms,
};

use super::view::{FormView, apply_result, clear_validity};

/// Handles an input event on a text field, re-validating it in isolation.
///
/// The student ID is upper-cased in place before its pattern is tested.
/// Support details are only validated while the learning-support box is
/// checked; otherwise their validity display is cleared.
pub fn on_input<V: FormView + ?Sized>(view: &mut V, id: FieldId) {
    let result = match id {
        FieldId::FirstName | FieldId::LastName => validate_name(view.value(id)),
        FieldId::Email => validate_email(view.value(id)),
        FieldId::Phone => validate_phone(view.value(id)),
        FieldId::PostalCode => validate_postal_code(view.value(id)),
        FieldId::StudentId => {
            let upper = normalize_student_id(view.value(id));
            view.set_value(id, upper);
            validate_student_id(view.value(id))
        }
        FieldId::SupportDetails => {
            if !view.is_checked(FieldId::LearningSupport) {
                clear_validity(view, id);
                return;
            }
            validate_support_details(view.value(id))
        }
        FieldId::LearningSupport | FieldId::Terms | FieldId::ProfilePicture => return,
    };
    debug!(field = ?id, valid = result.is_ok(), "validated field");
    apply_result(view, id, result);
}

/// Handles a change event on a checkbox.
pub fn on_change<V: FormView + ?Sized>(view: &mut V, id: FieldId) {
    match id {
        FieldId::LearningSupport => toggle_support_details(view),
        FieldId::Terms => {
            let result = validate_terms(view.is_checked(FieldId::Terms));
            debug!(valid = result.is_ok(), "validated terms");
            apply_result(view, id, result);
        }
        _ => {}
    }
}

/// Shows or hides the support-details field to match the learning-support
/// checkbox.
///
/// Revealing it moves focus there. Hiding it also clears its value,
/// message, and validity, so a hidden field never shows stale state.
pub fn toggle_support_details<V: FormView + ?Sized>(view: &mut V) {
    let details = FieldId::SupportDetails;
    if view.is_checked(FieldId::LearningSupport) {
        view.set_visible(details, true);
        view.focus(details);
    } else {
        view.set_visible(details, false);
        view.set_value(details, String::new());
        clear_validity(view, details);
    }
}
