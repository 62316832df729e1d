use leptos::*;

use crate::{
    pages::registration::{RegistrationHandlers, RegistrationPage},
    state::config::{refresh_runtime_config, use_config},
};

/// Mounts right away and resolves runtime config in the background; the page
/// picks up the result reactively once it arrives.
pub fn mount_app() {
    mount_to_body(|| {
        let (_config, set_config) = use_config();
        spawn_local(refresh_runtime_config(set_config));
        app_root()
    });
}

/// Root view. Embedding applications that submit registrations themselves
/// provide their own `RegistrationHandlers` before rendering the page.
pub fn app_root() -> impl IntoView {
    if use_context::<RegistrationHandlers>().is_none() {
        provide_context(RegistrationHandlers::logging());
    }
    view! { <RegistrationPage /> }
}
