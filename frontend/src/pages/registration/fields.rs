/// Inputs rendered by the registration forms.
///
/// Each variant carries the `name` attribute the parent keys its state by, so
/// change forwarding never has to read the name back off the DOM node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    UserEmail,
    LastName,
    FirstName,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Email,
    Text,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Email => "email",
            InputType::Text => "text",
        }
    }
}

impl RegistrationField {
    pub fn name(&self) -> &'static str {
        match self {
            RegistrationField::UserEmail => "user_email",
            RegistrationField::LastName => "lastName",
            RegistrationField::FirstName => "firstName",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegistrationField::UserEmail => "Email",
            RegistrationField::LastName => "Last Name",
            RegistrationField::FirstName => "First Name",
        }
    }

    pub fn input_type(&self) -> InputType {
        match self {
            RegistrationField::UserEmail => InputType::Email,
            RegistrationField::LastName | RegistrationField::FirstName => InputType::Text,
        }
    }

    /// DOM id shared by the `<label for>` and the `<input>`.
    pub fn input_id(&self) -> &'static str {
        match self {
            RegistrationField::UserEmail => "email-address",
            RegistrationField::LastName => "last-name",
            RegistrationField::FirstName => "first-name",
        }
    }
}

/// A single forwarded edit: which field changed and its current value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldChange {
    pub field: RegistrationField,
    pub value: String,
}

impl FieldChange {
    pub fn new(field: RegistrationField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
