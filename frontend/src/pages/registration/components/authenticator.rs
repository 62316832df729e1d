use super::forward_change;
use crate::{
    components::{FieldInput, RegistrationStatus, StatusLine, SubmitButton},
    pages::registration::fields::{FieldChange, RegistrationField},
};
use leptos::*;

#[component]
pub fn DeviceRegistrationForm(
    #[prop(into)] message: MaybeSignal<String>,
    /// `true` when the last registration attempt failed.
    #[prop(into)]
    registration_status: MaybeSignal<bool>,
    #[prop(into)] email: MaybeSignal<String>,
    handle_user_input: Callback<FieldChange>,
    register: Callback<()>,
    #[prop(optional, into)] hide_empty_status: MaybeSignal<bool>,
) -> impl IntoView {
    let status = Signal::derive(move || RegistrationStatus::from(registration_status.get()));
    let on_email_change = forward_change(handle_user_input, RegistrationField::UserEmail);

    view! {
        <form class="measure">
            <fieldset id="sign_up" class="ba b--transparent ph0 mh0">
                <legend class="f4 fw6 ph0 mh0">"Register Authenticator"</legend>
                <FieldInput
                    field=RegistrationField::UserEmail
                    value=email
                    id_prefix="device-"
                    on_change_text=on_email_change
                />
            </fieldset>
            <div>
                <SubmitButton label="Register" on_submit=register />
            </div>
            <StatusLine
                message=message
                status=status
                hide_when_empty=hide_empty_status
            />
        </form>
    }
}
