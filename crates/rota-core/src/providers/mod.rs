//! Backend service clients and interfaces.

pub mod firebase;
pub mod shared;

pub use shared::{USER_AGENT, UserCredential, resolve_api_key, resolve_base_url};

use anyhow::Result;

use crate::models::EmployeeMap;

/// Identity service consumed by the login flow.
///
/// Both calls may fail with any error value; callers treat all failures
/// alike and never branch on the cause.
#[allow(async_fn_in_trait)]
pub trait IdentityService {
    /// Signs in an existing account.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserCredential>;

    /// Creates a new account.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    async fn create_user(&self, email: &str, password: &str) -> Result<UserCredential>;
}

/// Read side of the employee roster collection.
#[allow(async_fn_in_trait)]
pub trait RosterService {
    /// Fetches the full employee map for the signed-in account.
    ///
    /// Returns `None` when the account has no collection yet (the backend
    /// serves a null body for missing paths).
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    async fn fetch_employees(&self, credential: &UserCredential) -> Result<Option<EmployeeMap>>;
}
