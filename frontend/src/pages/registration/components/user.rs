use super::forward_change;
use crate::{
    components::{FieldInput, SubmitButton},
    pages::registration::fields::{FieldChange, RegistrationField},
};
use leptos::*;

#[component]
pub fn UserRegistrationForm(
    #[prop(into)] first_name: MaybeSignal<String>,
    #[prop(into)] last_name: MaybeSignal<String>,
    #[prop(into)] email: MaybeSignal<String>,
    handle_user_input: Callback<FieldChange>,
    register_user: Callback<()>,
) -> impl IntoView {
    let on_change = move |field| forward_change(handle_user_input, field);

    view! {
        <form class="measure">
            <fieldset class="ba b--transparent ph0 mh0">
                <FieldInput
                    field=RegistrationField::UserEmail
                    value=email
                    id_prefix="user-"
                    on_change_text=on_change(RegistrationField::UserEmail)
                />
                <FieldInput
                    field=RegistrationField::LastName
                    value=last_name
                    id_prefix="user-"
                    on_change_text=on_change(RegistrationField::LastName)
                />
                <FieldInput
                    field=RegistrationField::FirstName
                    value=first_name
                    id_prefix="user-"
                    on_change_text=on_change(RegistrationField::FirstName)
                />
                <div class="mt3">
                    <SubmitButton label="Register" on_submit=register_user />
                </div>
            </fieldset>
        </form>
    }
}
