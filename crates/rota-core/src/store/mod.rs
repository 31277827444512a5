//! Central store: the action vocabulary and the state container.
//!
//! All state transitions go through [`Store::dispatch`], which runs every
//! slice reducer over the action. Reducers consume the previous slice by
//! value and return the next one; nothing mutates state in place.

pub mod async_value;

pub use async_value::AsyncValue;

use crate::features::auth::{self, AuthState};
use crate::features::employees::{self, EmployeesState};
use crate::models::EmployeeMap;
use crate::providers::UserCredential;

/// Every state transition the store understands.
///
/// A closed vocabulary: reducers match exhaustively with a catch-all arm,
/// so any action a slice does not recognize is an identity transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Store bootstrap marker; no slice recognizes it.
    Init,
    /// Login form email field edited.
    EmailChanged(String),
    /// Login form password field edited.
    PasswordChanged(String),
    /// Login request started.
    LoginStart,
    /// Login finished with a signed-in identity.
    LoginSuccess(UserCredential),
    /// Sign-in and the account-creation fallback both failed.
    LoginFail,
    /// Roster subscription started.
    WatchStart,
    /// Roster payload arrived; `None` models an empty collection upstream.
    EmployeesFetched(Option<EmployeeMap>),
    /// Roster subscription torn down.
    Unsubscribe,
}

impl Action {
    /// Returns the action name for logging (payloads stay out of the log
    /// stream; `PasswordChanged` carries a secret).
    pub fn name(&self) -> &'static str {
        match self {
            Action::Init => "init",
            Action::EmailChanged(_) => "email_changed",
            Action::PasswordChanged(_) => "password_changed",
            Action::LoginStart => "login_start",
            Action::LoginSuccess(_) => "login_success",
            Action::LoginFail => "login_fail",
            Action::WatchStart => "watch_start",
            Action::EmployeesFetched(_) => "employees_fetched",
            Action::Unsubscribe => "unsubscribe",
        }
    }
}

/// Combined application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub auth: AuthState,
    pub employees: EmployeesState,
}

/// The central store.
///
/// An explicit, constructible context object: build one per app session,
/// drop it (or [`Store::reset`]) to tear the session down. There is no
/// global instance.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    /// Creates a store and runs the bootstrap action through the reducers.
    pub fn new() -> Self {
        let mut store = Self {
            state: AppState::default(),
        };
        store.dispatch(Action::Init);
        store
    }

    /// Applies an action to every slice, replacing the state value.
    ///
    /// Dispatch is synchronous and is the only write path into the state.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");
        let AppState { auth, employees } = std::mem::take(&mut self.state);
        self.state = AppState {
            auth: auth::reduce(auth, &action),
            employees: employees::reduce(employees, &action),
        };
    }

    /// Borrows the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Restores the initial state (explicit session teardown).
    pub fn reset(&mut self) {
        self.state = AppState::default();
    }
}
