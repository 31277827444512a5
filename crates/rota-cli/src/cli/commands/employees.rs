//! Employee roster command handlers.

use anyhow::{Context, Result, bail};
use rota_core::config::Config;
use rota_core::providers::RosterService;
use rota_core::providers::firebase::{FirebaseRoster, FirebaseRosterConfig};
use rota_core::store::Action;

use super::login;

/// Signs in, then lists the roster for that account.
///
/// # Errors
/// Returns an error if the operation fails.
pub async fn list(config: &Config, email: &str, password: &str) -> Result<()> {
    let mut store = login::sign_in(config, email, password).await?;

    let Some(user) = store.state().auth.user.clone() else {
        return login::bail_with_login_error(&store);
    };

    let roster = FirebaseRoster::new(FirebaseRosterConfig::from_env(
        config.roster.database_url.as_deref(),
    )?)
    .context("build roster client")?;

    store.dispatch(Action::WatchStart);
    let payload = roster
        .fetch_employees(&user)
        .await
        .context("fetch employees")?;
    store.dispatch(Action::EmployeesFetched(payload));

    let Some(employees) = store.state().employees.roster.value() else {
        bail!("Roster did not load");
    };

    if employees.is_empty() {
        println!("No employees found.");
    } else {
        for employee in employees.values() {
            println!(
                "{}  {}  {}",
                employee.employee_name, employee.phone, employee.shift
            );
        }
    }

    Ok(())
}
