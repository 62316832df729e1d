use super::{
    components::{DeviceRegistrationForm, UserRegistrationForm},
    view_model::use_registration_view_model,
};
use crate::state::config::use_config;
use leptos::*;

#[component]
pub fn RegistrationPanel() -> impl IntoView {
    let vm = use_registration_view_model();
    let form = vm.form;
    let status = vm.status;
    let (config, _) = use_config();
    let hide_empty_status = Signal::derive(move || config.with(|c| c.runtime.hide_empty_status));

    view! {
        <main class="pa4 black-80">
            <section class="mb4">
                <h2 class="f4 fw6">"Register User"</h2>
                <UserRegistrationForm
                    email=Signal::derive(move || form.with(|s| s.email.clone()))
                    last_name=Signal::derive(move || form.with(|s| s.last_name.clone()))
                    first_name=Signal::derive(move || form.with(|s| s.first_name.clone()))
                    handle_user_input=vm.handle_user_input
                    register_user=vm.register_user
                />
            </section>
            <section>
                <DeviceRegistrationForm
                    message=Signal::derive(move || status.with(|s| s.message.clone()))
                    registration_status=Signal::derive(move || status.with(|s| s.status.is_error()))
                    email=Signal::derive(move || form.with(|s| s.email.clone()))
                    handle_user_input=vm.handle_user_input
                    register=vm.register_device
                    hide_empty_status=hide_empty_status
                />
            </section>
        </main>
    }
}
