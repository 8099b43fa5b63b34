use tracing::info;

use crate::model::{FieldId, FieldKind};

use super::view::{FormView, clear_validity};

/// Returns every control to its initial empty state.
///
/// Clears values and checkboxes, hides the support details, empties the
/// preview, removes validity classes and messages everywhere, and clears
/// the file input's selection. Running it twice is the same as once.
pub fn reset<V: FormView + ?Sized>(view: &mut V) {
    for id in FieldId::ALL {
        match id.kind() {
            FieldKind::Checkbox => view.set_checked(id, false),
            FieldKind::Text | FieldKind::TextArea | FieldKind::File => {
                view.set_value(id, String::new())
            }
        }
        clear_validity(view, id);
    }
    view.set_visible(FieldId::SupportDetails, false);
    view.set_preview(None);
    view.clear_file_selection();
    info!("form reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{on_change, on_input, submit};
    use crate::model::{FormState, Validity};
    use crate::preview::{SelectedFile, Thumbnail, png_bytes};

    fn populated() -> FormState {
        let mut state = FormState::new();
        for (id, value) in [
            (FieldId::FirstName, "Ada"),
            (FieldId::LastName, "Lovelace"),
            (FieldId::Email, "ada@example"),
            (FieldId::Phone, "1234567890"),
            (FieldId::PostalCode, "123456"),
            (FieldId::StudentId, "stu1234"),
        ] {
            state.set_value(id, value.to_string());
            on_input(&mut state, id);
        }
        state.set_checked(FieldId::LearningSupport, true);
        on_change(&mut state, FieldId::LearningSupport);
        state.set_value(FieldId::SupportDetails, "needs".into());
        on_input(&mut state, FieldId::SupportDetails);
        state.set_checked(FieldId::Terms, true);
        on_change(&mut state, FieldId::Terms);
        state.set_value(FieldId::ProfilePicture, "/tmp/me.png".into());
        state.choose_file(Some(SelectedFile::new("/tmp/me.png", Some("image/png"))));
        state.set_preview(Some(Thumbnail::from_bytes(&png_bytes(3, 3)).unwrap()));
        state.set_validity(FieldId::ProfilePicture, Validity::Valid);
        state
    }

    #[test]
    fn clears_everything() {
        let mut state = populated();
        assert_eq!(state.field(FieldId::Email).validity, Validity::Invalid);

        reset(&mut state);
        for field in state.fields() {
            assert_eq!(field.value, "", "{:?}", field.id);
            assert!(!field.checked, "{:?}", field.id);
            assert_eq!(field.validity, Validity::Unvalidated, "{:?}", field.id);
            assert_eq!(field.message, "", "{:?}", field.id);
        }
        assert!(!state.field(FieldId::SupportDetails).visible);
        assert!(state.preview().is_none());
        assert!(state.selected_file().is_none());
    }

    #[test]
    fn is_idempotent() {
        let mut once = populated();
        reset(&mut once);
        let mut twice = once.clone();
        reset(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn matches_reset_after_successful_submit() {
        let mut explicit = populated();
        reset(&mut explicit);

        let mut submitted = populated();
        assert!(matches!(
            submit(&mut submitted),
            crate::form::SubmitOutcome::Accepted { .. }
        ));
        submitted.dismiss_alert();

        assert_eq!(explicit.fields(), submitted.fields());
        assert_eq!(explicit.preview(), submitted.preview());
        assert_eq!(explicit.selected_file(), submitted.selected_file());
    }

    #[test]
    fn logged_at_info_after_accepted_submit() {
        let mut state = populated();
        let logs = crate::logging::tests::capture_info(|| {
            submit(&mut state);
        });
        assert!(logs.contains("submission accepted"), "{logs}");
        assert!(logs.contains("form reset"), "{logs}");
    }

    #[test]
    fn blank_form_is_unchanged() {
        let mut state = FormState::new();
        reset(&mut state);
        assert_eq!(state, FormState::new());
    }
}
