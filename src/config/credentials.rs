//! Credential resolution from configuration.
//!
//! Api keys and access tokens are resolved at runtime and wrapped so
//! they cannot leak through Debug or Display output.

use crate::config::types::RemoteConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building requests.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to the backend.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of api-key resolution for the remote backend.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// Key resolved successfully.
    Configured(SecureString),
    /// Key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl RemoteConfig {
    /// Resolve the project api key from the configured environment
    /// variable. Empty values count as unconfigured.
    pub fn resolve_api_key(&self) -> CredentialStatus {
        match std::env::var(&self.api_key_env) {
            Ok(value) if !value.trim().is_empty() => {
                CredentialStatus::Configured(SecureString::new(value))
            }
            Ok(_) => CredentialStatus::Unconfigured {
                reason: format!("Environment variable {} is empty", self.api_key_env),
            },
            Err(_) => CredentialStatus::Unconfigured {
                reason: format!("Environment variable {} not set", self.api_key_env),
            },
        }
    }
}
