use super::fields::{FieldChange, RegistrationField};
use crate::{
    api::{AuthenticatorRegistrationRequest, UserRegistrationRequest},
    components::RegistrationStatus,
};
use leptos::*;
use log::{debug, info};

/// Field values owned by the page. The forms only ever see copies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationState {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegistrationState {
    pub fn apply(&mut self, change: FieldChange) {
        let slot = match change.field {
            RegistrationField::UserEmail => &mut self.email,
            RegistrationField::LastName => &mut self.last_name,
            RegistrationField::FirstName => &mut self.first_name,
        };
        *slot = change.value;
    }

    pub fn user_request(&self) -> UserRegistrationRequest {
        UserRegistrationRequest {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    pub fn authenticator_request(&self) -> AuthenticatorRegistrationRequest {
        AuthenticatorRegistrationRequest {
            email: self.email.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
    pub status: RegistrationStatus,
}

impl StatusMessage {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: RegistrationStatus::Failed,
        }
    }

    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: RegistrationStatus::Succeeded,
        }
    }
}

/// Submission hooks supplied by the embedding application through context.
#[derive(Clone, Copy)]
pub struct RegistrationHandlers {
    pub on_register_device: Callback<AuthenticatorRegistrationRequest>,
    pub on_register_user: Callback<UserRegistrationRequest>,
}

impl RegistrationHandlers {
    /// Handlers that only record the submission in the log.
    pub fn logging() -> Self {
        Self {
            on_register_device: Callback::new(|_: AuthenticatorRegistrationRequest| {
                info!("authenticator registration requested");
            }),
            on_register_user: Callback::new(|_: UserRegistrationRequest| {
                info!("user registration requested");
            }),
        }
    }
}

#[derive(Clone, Copy)]
pub struct RegistrationViewModel {
    pub form: RwSignal<RegistrationState>,
    pub status: RwSignal<StatusMessage>,
    pub handle_user_input: Callback<FieldChange>,
    pub register_device: Callback<()>,
    pub register_user: Callback<()>,
}

/// Status shown under the authenticator form. Reuses a signal the embedding
/// application provided so its handlers can report results.
pub fn use_status_message() -> RwSignal<StatusMessage> {
    match use_context::<RwSignal<StatusMessage>>() {
        Some(status) => status,
        None => {
            let status = create_rw_signal(StatusMessage::default());
            provide_context(status);
            status
        }
    }
}

pub fn use_registration_view_model() -> RegistrationViewModel {
    let handlers =
        use_context::<RegistrationHandlers>().unwrap_or_else(RegistrationHandlers::logging);
    let form = create_rw_signal(RegistrationState::default());
    let status = use_status_message();

    let handle_user_input = Callback::new(move |change: FieldChange| {
        debug!("updating {}", change.field.name());
        form.update(|state| state.apply(change));
    });

    let register_device = Callback::new(move |_: ()| {
        let request = form.with_untracked(RegistrationState::authenticator_request);
        handlers.on_register_device.call(request);
    });

    let register_user = Callback::new(move |_: ()| {
        let request = form.with_untracked(RegistrationState::user_request);
        handlers.on_register_user.call(request);
    });

    RegistrationViewModel {
        form,
        status,
        handle_user_input,
        register_device,
        register_user,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn apply_stores_value_under_named_field() {
        let mut state = RegistrationState::default();
        state.apply(FieldChange::new(RegistrationField::UserEmail, "a@b.com"));
        state.apply(FieldChange::new(RegistrationField::LastName, "Doe"));
        state.apply(FieldChange::new(RegistrationField::FirstName, " Jane "));
        assert_eq!(
            state,
            RegistrationState {
                email: "a@b.com".into(),
                first_name: " Jane ".into(),
                last_name: "Doe".into(),
            }
        );
    }

    #[test]
    fn requests_copy_current_values() {
        let state = RegistrationState {
            email: "a@b.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
        };
        assert_eq!(state.authenticator_request().email, "a@b.com");
        let user = state.user_request();
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Doe");
    }

    #[test]
    fn view_model_routes_submissions_to_context_handlers() {
        with_runtime(|| {
            let users = Rc::new(RefCell::new(Vec::new()));
            let devices = Rc::new(RefCell::new(Vec::new()));
            let (user_sink, device_sink) = (users.clone(), devices.clone());
            provide_context(RegistrationHandlers {
                on_register_device: Callback::new(move |req: AuthenticatorRegistrationRequest| {
                    device_sink.borrow_mut().push(req)
                }),
                on_register_user: Callback::new(move |req: UserRegistrationRequest| {
                    user_sink.borrow_mut().push(req)
                }),
            });

            let vm = use_registration_view_model();
            vm.handle_user_input
                .call(FieldChange::new(RegistrationField::UserEmail, "a@b.com"));
            vm.handle_user_input
                .call(FieldChange::new(RegistrationField::FirstName, "Jane"));
            vm.register_device.call(());
            vm.register_user.call(());

            assert_eq!(
                *devices.borrow(),
                vec![AuthenticatorRegistrationRequest {
                    email: "a@b.com".into()
                }]
            );
            assert_eq!(
                *users.borrow(),
                vec![UserRegistrationRequest {
                    email: "a@b.com".into(),
                    first_name: "Jane".into(),
                    last_name: String::new(),
                }]
            );
        });
    }

    #[test]
    fn status_signal_from_context_is_reused() {
        with_runtime(|| {
            let provided = create_rw_signal(StatusMessage::failed("Email already registered"));
            provide_context(provided);
            let vm = use_registration_view_model();
            assert_eq!(vm.status.get_untracked().status, RegistrationStatus::Failed);
            provided.set(StatusMessage::succeeded("Registered"));
            assert_eq!(vm.status.get_untracked().message, "Registered");
        });
    }
}
