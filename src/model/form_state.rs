//! In-memory registration document.

use crate::form::FormView;
use crate::preview::{SelectedFile, Thumbnail};

use super::field::{Field, FieldId, FieldKind, Validity};

/// The aggregate form: every field plus the uploaded image, focus, and any
/// pending acknowledgment.
///
/// This is the single source of truth the terminal UI renders from. All
/// behavioural changes go through its [`FormView`] implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    fields: Vec<Field>,
    focus: FieldId,
    file: Option<SelectedFile>,
    preview: Option<Thumbnail>,
    alert: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Creates a blank form. The support-details field starts hidden.
    pub fn new() -> Self {
        let mut fields: Vec<Field> = FieldId::ALL.into_iter().map(Field::new).collect();
        fields[FieldId::SupportDetails.index()].visible = false;
        Self {
            fields,
            focus: FieldId::FirstName,
            file: None,
            preview: None,
            alert: None,
        }
    }

    /// Returns the state of a single field.
    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    /// Returns all fields in document order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the focused field.
    pub fn focused(&self) -> FieldId {
        self.focus
    }

    /// Returns the image preview, if one has been decoded.
    pub fn preview(&self) -> Option<&Thumbnail> {
        self.preview.as_ref()
    }

    /// Returns the acknowledgment waiting to be dismissed, if any.
    pub fn alert_message(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Dismisses the pending acknowledgment.
    pub fn dismiss_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// Records the user's file choice in the profile-picture input.
    pub fn choose_file(&mut self, file: Option<SelectedFile>) {
        self.file = file;
    }

    /// Moves focus to the next visible field, wrapping around.
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    /// Moves focus to the previous visible field, wrapping around.
    pub fn focus_prev(&mut self) {
        self.step_focus(FieldId::ALL.len() - 1);
    }

    fn step_focus(&mut self, step: usize) {
        let len = FieldId::ALL.len();
        let mut index = self.focus.index();
        for _ in 0..len {
            index = (index + step) % len;
            if self.fields[index].visible {
                self.focus = FieldId::ALL[index];
                return;
            }
        }
    }

    /// Appends a character to the focused field if it holds text.
    ///
    /// Returns `true` when the value changed.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let field = &mut self.fields[self.focus.index()];
        if !field.id.is_text() {
            return false;
        }
        field.value.push(ch);
        true
    }

    /// Removes the last character of the focused field if it holds text.
    ///
    /// Returns `true` when the value changed.
    pub fn delete_char(&mut self) -> bool {
        let field = &mut self.fields[self.focus.index()];
        field.id.is_text() && field.value.pop().is_some()
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        &mut self.fields[id.index()]
    }
}

impl FormView for FormState {
    fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    fn set_value(&mut self, id: FieldId, value: String) {
        self.field_mut(id).value = value;
    }

    fn is_checked(&self, id: FieldId) -> bool {
        self.field(id).checked
    }

    fn set_checked(&mut self, id: FieldId, checked: bool) {
        if id.kind() == FieldKind::Checkbox {
            self.field_mut(id).checked = checked;
        }
    }

    fn set_validity(&mut self, id: FieldId, validity: Validity) {
        self.field_mut(id).validity = validity;
    }

    fn set_message(&mut self, id: FieldId, message: &str) {
        if id.has_message() {
            self.field_mut(id).message = message.to_string();
        }
    }

    fn set_visible(&mut self, id: FieldId, visible: bool) {
        self.field_mut(id).visible = visible;
        if !visible && self.focus == id {
            self.focus_prev();
        }
    }

    fn focus(&mut self, id: FieldId) {
        if self.field(id).visible {
            self.focus = id;
        }
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    fn clear_file_selection(&mut self) {
        self.file = None;
        self.field_mut(FieldId::ProfilePicture).value.clear();
    }

    fn set_preview(&mut self, preview: Option<Thumbnail>) {
        self.preview = preview;
    }
}
