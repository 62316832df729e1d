use leptos::*;

/// Outcome shown next to the authenticator form.
///
/// Parents that track the result as a flag convert with `From<bool>`, where
/// `true` marks the error state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationStatus {
    Failed,
    #[default]
    Succeeded,
}

impl RegistrationStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, RegistrationStatus::Failed)
    }

    pub fn classes(&self) -> &'static str {
        match self {
            RegistrationStatus::Failed => "text-status-error-text",
            RegistrationStatus::Succeeded => "text-status-success-text",
        }
    }
}

impl From<bool> for RegistrationStatus {
    fn from(failed: bool) -> Self {
        if failed {
            RegistrationStatus::Failed
        } else {
            RegistrationStatus::Succeeded
        }
    }
}

#[component]
pub fn StatusLine(
    #[prop(into)] message: MaybeSignal<String>,
    #[prop(into)] status: MaybeSignal<RegistrationStatus>,
    #[prop(optional, into)] hide_when_empty: MaybeSignal<bool>,
) -> impl IntoView {
    move || {
        let text = message.get();
        if hide_when_empty.get() && text.is_empty() {
            return ().into_view();
        }
        view! {
            <div class=format!("mv3 {}", status.get().classes()) role="status">
                {text}
            </div>
        }
        .into_view()
    }
}
