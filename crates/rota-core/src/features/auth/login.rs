//! Asynchronous login flow.

use tracing::{debug, warn};

use crate::navigation::{MAIN_SCREEN, Navigator};
use crate::providers::IdentityService;
use crate::store::Action;

/// Runs one login attempt against the identity service, dispatching the
/// resulting state transitions in order.
///
/// `LoginStart` is dispatched before the first await. A sign-in failure
/// falls back to one account-creation attempt with the same credentials;
/// error causes are not distinguished, so a transient sign-in failure
/// also takes the fallback path. Any success dispatches `LoginSuccess`
/// and navigates to the main screen exactly once; a failed fallback
/// dispatches `LoginFail` and never navigates.
///
/// Overlapping invocations are not coordinated: two concurrent flows
/// interleave their dispatches and the last terminal action wins.
pub async fn login<I, N>(
    identity: &I,
    navigator: &N,
    dispatch: &mut dyn FnMut(Action),
    email: &str,
    password: &str,
) where
    I: IdentityService,
    N: Navigator,
{
    dispatch(Action::LoginStart);

    match identity.sign_in(email, password).await {
        Ok(user) => {
            dispatch(Action::LoginSuccess(user));
            navigator.navigate(MAIN_SCREEN);
        }
        Err(err) => {
            debug!(error = %err, "sign-in failed, attempting account creation");
            match identity.create_user(email, password).await {
                Ok(user) => {
                    dispatch(Action::LoginSuccess(user));
                    navigator.navigate(MAIN_SCREEN);
                }
                Err(err) => {
                    warn!(error = %err, "account creation failed");
                    dispatch(Action::LoginFail);
                }
            }
        }
    }
}
