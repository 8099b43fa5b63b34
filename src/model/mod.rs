mod field;
mod form_state;
mod validation;

pub use field::{Field, FieldId, FieldKind, Validity};
pub use form_state::FormState;
pub use validation::{
    MIN_NAME_LEN, MIN_SUPPORT_DETAILS_LEN, ValidationError, normalize_student_id, validate_email,
    validate_name, validate_phone, validate_postal_code, validate_student_id,
    validate_support_details, validate_terms,
};
