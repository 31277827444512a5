//! Types and helpers shared across backend clients.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Standard User-Agent header for rota API requests.
pub const USER_AGENT: &str = concat!("rota/", env!("CARGO_PKG_VERSION"));

/// Signed-in identity returned by the identity service.
///
/// Field names map the identity service's wire format (`localId`,
/// `idToken`, `refreshToken`) so responses deserialize directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    /// Stable account id.
    #[serde(rename = "localId")]
    pub uid: String,
    /// Email the account was signed in with.
    pub email: String,
    /// Short-lived bearer token for data access.
    #[serde(rename = "idToken")]
    pub id_token: String,
    /// Long-lived token for refreshing the session.
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

// ============================================================================
// Config resolution helpers
// ============================================================================

/// Resolves an API key with precedence: config > env.
///
/// # Errors
/// Returns an error when neither the config file nor the environment
/// provides a non-empty key.
pub fn resolve_api_key(
    config_api_key: Option<&str>,
    env_var: &str,
    config_key: &str,
) -> Result<String> {
    // Try config value first
    if let Some(key) = config_api_key {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    // Fall back to env var
    std::env::var(env_var).context(format!(
        "No API key available. Set {env_var} or {config_key} in config.toml."
    ))
}

/// Resolves a base URL with precedence: env > config > default.
///
/// # Errors
/// Returns an error when the resolved URL is not well-formed.
pub fn resolve_base_url(
    config_base_url: Option<&str>,
    env_var: &str,
    default_url: &str,
    service_name: &str,
) -> Result<String> {
    // Try env var first
    if let Ok(env_url) = std::env::var(env_var) {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed, service_name)?;
            return Ok(trimmed.to_string());
        }
    }

    // Try config value
    if let Some(config_url) = config_base_url {
        let trimmed = config_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed, service_name)?;
            return Ok(trimmed.to_string());
        }
    }

    // Default
    Ok(default_url.to_string())
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str, service_name: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid {service_name} base URL: {url}"))?;
    Ok(())
}
