//! Application configuration: storage backend selection and remote
//! backend settings, loaded from a TOML file.

mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{Config, RemoteConfig, StorageConfig};
