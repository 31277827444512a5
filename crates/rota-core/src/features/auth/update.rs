//! Auth slice reducer.

use super::state::AuthState;
use crate::store::{Action, AsyncValue};

/// Message shown when both sign-in and account creation fail.
///
/// Fixed on purpose: provider error details stay out of the state.
pub const LOGIN_FAILED_MESSAGE: &str = "Authentication failed.";

/// Applies an action to the auth slice, returning the next state.
///
/// Pure: the previous state is consumed by value and never mutated in
/// place. Unrecognized actions (including store bootstrap) return the
/// previous state unchanged.
pub fn reduce(state: AuthState, action: &Action) -> AuthState {
    match action {
        Action::EmailChanged(email) => AuthState {
            email: email.clone(),
            ..state
        },
        Action::PasswordChanged(password) => AuthState {
            password: password.clone(),
            ..state
        },
        Action::LoginStart => AuthState {
            login: AsyncValue::InProgress,
            ..state
        },
        // A successful login clears the form: only the identity survives.
        Action::LoginSuccess(user) => AuthState {
            user: Some(user.clone()),
            ..AuthState::default()
        },
        Action::LoginFail => AuthState {
            login: AsyncValue::Error(LOGIN_FAILED_MESSAGE.to_string()),
            ..state
        },
        _ => state,
    }
}
