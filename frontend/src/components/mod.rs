pub mod common;
pub mod field_input;
pub mod status;

pub use common::SubmitButton;
pub use field_input::FieldInput;
pub use status::{RegistrationStatus, StatusLine};
