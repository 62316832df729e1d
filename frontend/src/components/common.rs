use leptos::{ev::MouseEvent, *};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "b ph3 pv2 input-reset ba grow pointer f6 dib",
        }
    }
}

/// Wraps a zero-argument submit callback so activating the control never
/// triggers the browser's own form submission.
pub fn submit_handler(on_submit: Callback<()>) -> impl Fn(MouseEvent) + Copy + 'static {
    move |ev: MouseEvent| {
        ev.prevent_default();
        log::info!("registration submitted");
        on_submit.call(());
    }
}

#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    on_submit: Callback<()>,
    #[prop(optional)] variant: ButtonVariant,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            name="register"
            value=label.clone()
            class=variant.classes()
            on:click=submit_handler(on_submit)
        >
            {label}
        </button>
    }
}
