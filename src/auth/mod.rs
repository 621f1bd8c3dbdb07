//! Email/password authentication against the hosted backend.
//!
//! Mirrors the hosted auth surface: sign-up, sign-in, sign-out,
//! current-session retrieval and an auth-state-change subscription.
//! The session is cached in a JSON file beside the inventory data so a
//! login survives between invocations. There is no permission model
//! beyond "is logged in".

use std::fs;
use std::path::PathBuf;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;
use uuid::Uuid;

use crate::config::SecureString;

/// Errors from authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Request to '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend rejected the credentials; its message is forwarded
    /// verbatim.
    #[error("{message}")]
    Rejected { message: String },

    #[error("Failed to access session cache '{path}': {source}")]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not signed in")]
    NoSession,
}

/// The authenticated user, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

/// An active session: the user plus their access token.
#[derive(Clone, Serialize, Deserialize)]
pub struct Session {
    access_token: String,
    pub user: AuthUser,
}

impl Session {
    /// Access token for request authorization, wrapped against
    /// accidental logging.
    pub fn token(&self) -> SecureString {
        SecureString::new(self.access_token.clone())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"••••••••")
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

/// Shape of backend error bodies; field names vary across endpoints.
#[derive(Deserialize, Default)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

pub struct AuthClient {
    http: Client,
    base_url: String,
    api_key: SecureString,
    cache_path: PathBuf,
    state_tx: watch::Sender<Option<AuthUser>>,
}

impl AuthClient {
    pub fn new(base_url: String, api_key: SecureString) -> Self {
        Self::with_cache_path(base_url, api_key, Self::default_cache_path())
    }

    pub fn with_cache_path(
        base_url: String,
        api_key: SecureString,
        cache_path: PathBuf,
    ) -> Self {
        let initial = load_cached(&cache_path).map(|s| s.user);
        let (state_tx, _) = watch::channel(initial);
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            cache_path,
            state_tx,
        }
    }

    /// Default session cache beside the inventory data file.
    pub fn default_cache_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("nexus-inventory").join("session.json")
    }

    /// Observe auth-state changes. Receivers see the current user (or
    /// `None`) immediately and every transition afterwards.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthUser>> {
        self.state_tx.subscribe()
    }

    /// The cached session, if a user is signed in.
    pub fn session(&self) -> Option<Session> {
        load_cached(&self.cache_path)
    }

    /// Create an account. The backend signs the new user in directly
    /// when email confirmation is disabled.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        self.token_request(&url, email, password).await
    }

    /// Password sign-in.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        self.token_request(&url, email, password).await
    }

    /// Sign out: best-effort revocation on the backend, then the local
    /// session is always cleared.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(session) = self.session() {
            let url = format!("{}/auth/v1/logout", self.base_url);
            let result = self
                .http
                .post(&url)
                .header("apikey", self.api_key.expose())
                .header(
                    "Authorization",
                    format!("Bearer {}", session.token().expose()),
                )
                .send()
                .await;
            if let Err(err) = result {
                tracing::warn!(error = %err, "logout revocation failed; clearing local session anyway");
            }
        }

        if self.cache_path.exists() {
            fs::remove_file(&self.cache_path).map_err(|e| AuthError::Cache {
                path: self.cache_path.clone(),
                source: e,
            })?;
        }
        let _ = self.state_tx.send(None);
        tracing::info!("signed out");
        Ok(())
    }

    async fn token_request(
        &self,
        url: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self
            .http
            .post(url)
            .header("apikey", self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::Http {
                url: url.to_string(),
                source: e,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let parsed: ErrorBody = response.json().await.unwrap_or_default();
            let message = parsed
                .error_description
                .or(parsed.msg)
                .or(parsed.message)
                .unwrap_or_else(|| format!("Authentication failed with status {}", status.as_u16()));
            return Err(AuthError::Rejected { message });
        }

        let token: TokenResponse = response.json().await.map_err(|e| AuthError::Http {
            url: url.to_string(),
            source: e,
        })?;

        let session = Session {
            access_token: token.access_token,
            user: token.user,
        };
        self.cache(&session)?;
        let _ = self.state_tx.send(Some(session.user.clone()));
        tracing::info!(email = %session.user.email, "signed in");
        Ok(session)
    }

    fn cache(&self, session: &Session) -> Result<(), AuthError> {
        let cache_err = |e: std::io::Error| AuthError::Cache {
            path: self.cache_path.clone(),
            source: e,
        };
        if let Some(parent) = self.cache_path.parent() {
            fs::create_dir_all(parent).map_err(cache_err)?;
        }
        let serialized = serde_json::to_vec(session).map_err(std::io::Error::other);
        fs::write(&self.cache_path, serialized.map_err(cache_err)?).map_err(cache_err)
    }
}

fn load_cached(path: &PathBuf) -> Option<Session> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}
