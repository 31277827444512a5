//! Firebase-backed identity and roster clients.
//!
//! The identity client talks to the Identity Toolkit REST surface
//! (`accounts:signInWithPassword`, `accounts:signUp`); the roster client
//! reads the realtime-database REST surface. Both are thin: rota treats
//! the backend as an opaque identity-and-document service.

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use crate::models::EmployeeMap;
use crate::providers::shared::{USER_AGENT, UserCredential, resolve_api_key, resolve_base_url};
use crate::providers::{IdentityService, RosterService};

const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Identity endpoint configuration.
#[derive(Debug, Clone)]
pub struct FirebaseIdentityConfig {
    pub api_key: String,
    pub base_url: String,
}

impl FirebaseIdentityConfig {
    /// Creates a config from file values and environment.
    ///
    /// API key resolution order:
    /// 1. `identity.api_key` from config.toml
    /// 2. `FIREBASE_API_KEY` environment variable
    ///
    /// Environment variables:
    /// - `FIREBASE_API_KEY` (fallback if not in config)
    /// - `FIREBASE_IDENTITY_URL` (optional base URL override)
    ///
    /// # Errors
    /// Returns an error if no API key is available or a URL is malformed.
    pub fn from_env(config_api_key: Option<&str>, config_base_url: Option<&str>) -> Result<Self> {
        let api_key = resolve_api_key(config_api_key, "FIREBASE_API_KEY", "identity.api_key")?;
        let base_url = resolve_base_url(
            config_base_url,
            "FIREBASE_IDENTITY_URL",
            DEFAULT_IDENTITY_BASE_URL,
            "identity",
        )?;

        Ok(Self { api_key, base_url })
    }
}

/// REST client for the identity service.
pub struct FirebaseIdentity {
    http: reqwest::Client,
    config: FirebaseIdentityConfig,
}

/// Request body shared by sign-in and sign-up.
#[derive(Debug, Serialize)]
struct CredentialRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

impl FirebaseIdentity {
    /// Creates a client for the given endpoint configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: FirebaseIdentityConfig) -> Result<Self> {
        Ok(Self {
            http: build_http_client()?,
            config,
        })
    }

    async fn credential_request(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<UserCredential> {
        let url = format!(
            "{}/accounts:{}?key={}",
            self.config.base_url, endpoint, self.config.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&CredentialRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .with_context(|| format!("send accounts:{endpoint} request"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "accounts:{endpoint} failed ({status}): {}",
                error_code(&body)
            ));
        }

        response
            .json::<UserCredential>()
            .await
            .with_context(|| format!("decode accounts:{endpoint} response"))
    }
}

impl IdentityService for FirebaseIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserCredential> {
        self.credential_request("signInWithPassword", email, password)
            .await
    }

    async fn create_user(&self, email: &str, password: &str) -> Result<UserCredential> {
        self.credential_request("signUp", email, password).await
    }
}

/// Roster database configuration.
#[derive(Debug, Clone)]
pub struct FirebaseRosterConfig {
    pub database_url: String,
}

impl FirebaseRosterConfig {
    /// Creates a config from file values and environment.
    ///
    /// There is no default database URL; one must come from
    /// `FIREBASE_DATABASE_URL` or `roster.database_url` in config.toml
    /// (env wins).
    ///
    /// # Errors
    /// Returns an error if no database URL is available or it is malformed.
    pub fn from_env(config_database_url: Option<&str>) -> Result<Self> {
        let candidate = match std::env::var("FIREBASE_DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => match config_database_url {
                Some(url) if !url.trim().is_empty() => url.trim().to_string(),
                _ => bail!(
                    "No database URL available. \
                     Set FIREBASE_DATABASE_URL or roster.database_url in config.toml."
                ),
            },
        };

        url::Url::parse(&candidate)
            .with_context(|| format!("Invalid roster database URL: {candidate}"))?;

        Ok(Self {
            database_url: candidate,
        })
    }
}

/// REST client for the employee roster collection.
pub struct FirebaseRoster {
    http: reqwest::Client,
    config: FirebaseRosterConfig,
}

impl FirebaseRoster {
    /// Creates a client for the given database configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: FirebaseRosterConfig) -> Result<Self> {
        Ok(Self {
            http: build_http_client()?,
            config,
        })
    }
}

impl RosterService for FirebaseRoster {
    async fn fetch_employees(&self, credential: &UserCredential) -> Result<Option<EmployeeMap>> {
        let base = self.config.database_url.trim_end_matches('/');
        let url = format!(
            "{base}/users/{}/employees.json?auth={}",
            credential.uid, credential.id_token
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("send employees fetch request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "employees fetch failed ({status}): {}",
                error_code(&body)
            ));
        }

        // Missing collections come back as a JSON null body.
        response
            .json::<Option<EmployeeMap>>()
            .await
            .context("decode employees payload")
    }
}

fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("build HTTP client")
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Extracts the service error code from an error body, falling back to the
/// raw body when it is not the expected JSON shape.
fn error_code(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn identity_for(server: &MockServer) -> FirebaseIdentity {
        FirebaseIdentity::new(FirebaseIdentityConfig {
            api_key: "test-key".to_string(),
            base_url: server.uri(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn sign_in_parses_credential() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "email": "a@b.com",
                "password": "pw",
                "returnSecureToken": true,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "localId": "u-1",
                "email": "a@b.com",
                "idToken": "tok",
                "refreshToken": "refresh",
                "expiresIn": "3600",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let credential = identity_for(&server).sign_in("a@b.com", "pw").await.unwrap();
        assert_eq!(credential.uid, "u-1");
        assert_eq!(credential.id_token, "tok");
    }

    #[tokio::test]
    async fn sign_in_surfaces_service_error_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "message": "INVALID_PASSWORD" }
            })))
            .mount(&server)
            .await;

        let err = identity_for(&server)
            .sign_in("a@b.com", "wrong")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("INVALID_PASSWORD"));
    }

    #[tokio::test]
    async fn create_user_hits_sign_up_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signUp"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "localId": "u-2",
                "email": "new@b.com",
                "idToken": "tok2",
                "refreshToken": "refresh2",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let credential = identity_for(&server)
            .create_user("new@b.com", "pw")
            .await
            .unwrap();
        assert_eq!(credential.uid, "u-2");
    }

    fn test_credential() -> UserCredential {
        UserCredential {
            uid: "u-1".to_string(),
            email: "a@b.com".to_string(),
            id_token: "tok".to_string(),
            refresh_token: "refresh".to_string(),
        }
    }

    #[tokio::test]
    async fn fetch_employees_null_body_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/u-1/employees.json"))
            .and(query_param("auth", "tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
            .mount(&server)
            .await;

        let roster = FirebaseRoster::new(FirebaseRosterConfig {
            database_url: server.uri(),
        })
        .unwrap();
        let payload = roster.fetch_employees(&test_credential()).await.unwrap();
        assert!(payload.is_none());
    }

    #[tokio::test]
    async fn fetch_employees_parses_keyed_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/u-1/employees.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "-Nx1": {
                    "employeeName": "Dana",
                    "phone": "555-0101",
                    "shift": "Friday",
                    "uid": "u-1",
                }
            })))
            .mount(&server)
            .await;

        let roster = FirebaseRoster::new(FirebaseRosterConfig {
            database_url: server.uri(),
        })
        .unwrap();
        let payload = roster
            .fetch_employees(&test_credential())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload["-Nx1"].employee_name, "Dana");
    }
}
