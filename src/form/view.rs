use crate::model::{FieldId, Validity};
use crate::preview::{SelectedFile, Thumbnail};

/// Capability interface over whatever hosts the form's controls.
///
/// Every handler in [`crate::form`] reads and mutates the form only through
/// this trait, so the same validation and gating logic drives the terminal
/// UI and the in-memory state used by tests.
pub trait FormView {
    /// Current raw value of a text field.
    fn value(&self, id: FieldId) -> &str;

    /// Replaces the raw value of a text field.
    fn set_value(&mut self, id: FieldId, value: String);

    /// Checked state of a checkbox.
    fn is_checked(&self, id: FieldId) -> bool;

    /// Sets the checked state of a checkbox.
    fn set_checked(&mut self, id: FieldId, checked: bool);

    /// Sets the validity class shown on a field.
    fn set_validity(&mut self, id: FieldId, validity: Validity);

    /// Sets the text of a field's error-message slot.
    fn set_message(&mut self, id: FieldId, message: &str);

    /// Shows or hides a field.
    fn set_visible(&mut self, id: FieldId, visible: bool);

    /// Moves input focus to a field.
    fn focus(&mut self, id: FieldId);

    /// Shows a blocking acknowledgment to the user.
    fn alert(&mut self, message: &str);

    /// The file currently chosen in the profile-picture input, if any.
    fn selected_file(&self) -> Option<&SelectedFile>;

    /// Clears the profile-picture input's selection.
    fn clear_file_selection(&mut self);

    /// Replaces the contents of the image preview area.
    fn set_preview(&mut self, preview: Option<Thumbnail>);
}

/// Applies a validation result to a field: the validity class and message
/// always change together, and the message is empty exactly when valid.
pub fn apply_result<V, E>(view: &mut V, id: FieldId, result: Result<(), E>)
where
    V: FormView + ?Sized,
    E: ToString,
{
    match result {
        Ok(()) => {
            view.set_validity(id, Validity::Valid);
            view.set_message(id, "");
        }
        Err(e) => {
            view.set_validity(id, Validity::Invalid);
            view.set_message(id, &e.to_string());
        }
    }
}

/// Removes both validity classes and the message from a field.
pub fn clear_validity<V: FormView + ?Sized>(view: &mut V, id: FieldId) {
    view.set_validity(id, Validity::Unvalidated);
    view.set_message(id, "");
}
