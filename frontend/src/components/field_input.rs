use crate::pages::registration::fields::RegistrationField;
use leptos::*;

/// Labelled input bound to one registration field.
///
/// The displayed value always comes from `value`; edits are only reported
/// through `on_change_text` and show up once the owner passes them back.
#[component]
pub fn FieldInput(
    field: RegistrationField,
    #[prop(into)] value: MaybeSignal<String>,
    on_change_text: Callback<ev::Event>,
    /// Keeps ids unique when several forms share a page.
    #[prop(optional)]
    id_prefix: &'static str,
) -> impl IntoView {
    let attr_value = value.clone();
    let id = format!("{id_prefix}{}", field.input_id());

    view! {
        <div class="mt3">
            <label class="db fw6 lh-copy f6" for=id.clone()>
                {field.label()}
            </label>
            <input
                id=id
                name=field.name()
                type=field.input_type().as_str()
                class="pa2 input-reset ba bg-transparent w-100"
                value=move || attr_value.get()
                prop:value=move || value.get()
                on:input=move |ev| on_change_text.call(ev)
            />
        </div>
    }
}
