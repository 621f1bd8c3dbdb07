use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            remote: None,
        }
    }
}

/// Which storage backend holds the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// "local" (JSON file on this device) or "remote" (hosted backend).
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Override for the local data file; defaults to the platform data
    /// directory when absent.
    #[serde(default)]
    pub data_path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_path: None,
        }
    }
}

fn default_backend() -> String {
    "local".to_string()
}

/// Hosted backend settings, required when `storage.backend = "remote"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Project base URL (e.g. "https://abc.supabase.co").
    pub base_url: String,
    /// Environment variable name containing the project api key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_api_key_env() -> String {
    "NEXUS_API_KEY".to_string()
}
