use super::fields::{FieldChange, RegistrationField};
use leptos::*;

pub mod authenticator;
pub mod user;

pub use authenticator::DeviceRegistrationForm;
pub use user::UserRegistrationForm;

/// Builds the change handler for one field: stops the default action and
/// reports the input's current value under that field.
pub(crate) fn forward_change(
    handle_user_input: Callback<FieldChange>,
    field: RegistrationField,
) -> Callback<ev::Event> {
    Callback::new(move |ev: ev::Event| {
        ev.prevent_default();
        let value = event_target_value(&ev);
        log::debug!("forwarding change for {}", field.name());
        handle_user_input.call(FieldChange::new(field, value));
    })
}
