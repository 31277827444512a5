//! Login command handler.

use anyhow::{Context, Result, bail};
use rota_core::config::Config;
use rota_core::features::auth;
use rota_core::navigation::LogNavigator;
use rota_core::providers::firebase::{FirebaseIdentity, FirebaseIdentityConfig};
use rota_core::store::{Action, Store};

/// Signs in with the configured identity service and reports the terminal
/// state.
///
/// # Errors
/// Returns an error if the operation fails.
pub async fn run(config: &Config, email: &str, password: &str) -> Result<()> {
    let store = sign_in(config, email, password).await?;

    match &store.state().auth.user {
        Some(user) => {
            println!("Logged in as {} ({})", user.email, user.uid);
            Ok(())
        }
        None => bail_with_login_error(&store),
    }
}

/// Runs the login flow against a fresh store and returns the store.
///
/// Each CLI invocation is one app session; nothing is cached between runs.
pub(crate) async fn sign_in(config: &Config, email: &str, password: &str) -> Result<Store> {
    let identity = FirebaseIdentity::new(FirebaseIdentityConfig::from_env(
        config.identity.api_key.as_deref(),
        config.identity.base_url.as_deref(),
    )?)
    .context("build identity client")?;

    tracing::debug!(email, "starting login flow");

    let mut store = Store::new();
    store.dispatch(Action::EmailChanged(email.to_string()));
    store.dispatch(Action::PasswordChanged(password.to_string()));

    let mut dispatch = |action| store.dispatch(action);
    auth::login(&identity, &LogNavigator, &mut dispatch, email, password).await;

    Ok(store)
}

/// Surfaces the login failure recorded in the store.
pub(crate) fn bail_with_login_error(store: &Store) -> Result<()> {
    match store.state().auth.login.error() {
        Some(message) => bail!("{message}"),
        None => bail!("Login did not complete"),
    }
}
