//! Auth slice state.

use crate::providers::UserCredential;
use crate::store::AsyncValue;

/// Authentication state: the login form fields, the in-flight login
/// request, and the signed-in identity.
///
/// Lives only for the app session; nothing here is ever persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// Login form email field.
    pub email: String,
    /// Login form password field.
    pub password: String,
    /// Lifecycle of the current login request.
    pub login: AsyncValue<UserCredential>,
    /// Signed-in identity after a successful login.
    pub user: Option<UserCredential>,
}
