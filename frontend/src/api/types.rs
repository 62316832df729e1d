use serde::{Deserialize, Serialize};

/// Body of the user registration call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistrationRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Identifies the account an authenticator is being registered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatorRegistrationRequest {
    pub email: String,
}
