use leptos::*;

pub mod components;
pub mod fields;
pub mod view_model;

mod panel;

pub use components::{DeviceRegistrationForm, UserRegistrationForm};
pub use fields::{FieldChange, RegistrationField};
pub use panel::RegistrationPanel;
pub use view_model::{RegistrationHandlers, RegistrationState, StatusMessage};

#[component]
pub fn RegistrationPage() -> impl IntoView {
    view! { <RegistrationPanel /> }
}
