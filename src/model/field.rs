//! Field identifiers and per-field state.

/// Stable identifiers for every control on the registration form, in
/// document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Phone,
    PostalCode,
    StudentId,
    LearningSupport,
    SupportDetails,
    Terms,
    ProfilePicture,
}

/// The kind of input control backing a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text area.
    TextArea,
    /// Boolean checkbox.
    Checkbox,
    /// File selection input.
    File,
}

impl FieldId {
    /// Every field in document order.
    pub const ALL: [FieldId; 10] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::PostalCode,
        FieldId::StudentId,
        FieldId::LearningSupport,
        FieldId::SupportDetails,
        FieldId::Terms,
        FieldId::ProfilePicture,
    ];

    /// Position of this field in [`FieldId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::PostalCode => "Postal Code",
            Self::StudentId => "Student ID (e.g. STU1234)",
            Self::LearningSupport => "I need learning support",
            Self::SupportDetails => "Support Details",
            Self::Terms => "I agree to the Terms and Conditions",
            Self::ProfilePicture => "Profile Picture (path)",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::LearningSupport | Self::Terms => FieldKind::Checkbox,
            Self::SupportDetails => FieldKind::TextArea,
            Self::ProfilePicture => FieldKind::File,
            _ => FieldKind::Text,
        }
    }

    /// Returns `true` for fields whose value is edited as text.
    pub fn is_text(self) -> bool {
        matches!(
            self.kind(),
            FieldKind::Text | FieldKind::TextArea | FieldKind::File
        )
    }

    /// Returns `true` for fields that carry an error-message slot.
    ///
    /// The learning-support toggle is the only control without one.
    pub fn has_message(self) -> bool {
        self != Self::LearningSupport
    }
}

/// Tri-state validity driving a field's visual feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// Not yet validated, or cleared (neither valid nor invalid).
    #[default]
    Unvalidated,
    Valid,
    Invalid,
}

/// A single form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Which control this is.
    pub id: FieldId,
    /// Raw value as typed (empty for checkboxes).
    pub value: String,
    /// Checked state (checkboxes only).
    pub checked: bool,
    /// Current validity class.
    pub validity: Validity,
    /// Error message; empty unless the field is invalid.
    pub message: String,
    /// Whether the control is currently shown.
    pub visible: bool,
}

impl Field {
    /// Creates an empty, visible, unvalidated field.
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            checked: false,
            validity: Validity::Unvalidated,
            message: String::new(),
            visible: true,
        }
    }
}
