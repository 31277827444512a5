//! Authentication slice: login form, session identity, async login flow.

mod login;
mod state;
mod update;

pub use login::login;
pub use state::AuthState;
pub use update::{LOGIN_FAILED_MESSAGE, reduce};
