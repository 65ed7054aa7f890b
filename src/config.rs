use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub nas: NasConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NasConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    #[serde(default)]
    pub otp_code: Option<SecretString>,
    #[serde(default = "default_use_tls")]
    pub use_tls: bool,
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
    /// Version sent with `SYNO.API.Auth` login requests.
    #[serde(default = "default_api_version")]
    pub api_version: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Session name the appliance associates with our login.
    #[serde(default = "default_application")]
    pub application: String,
    #[serde(default = "default_storage_method")]
    pub storage_method: String,
    #[serde(default)]
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            application: default_application(),
            storage_method: default_storage_method(),
            debug: false,
        }
    }
}

fn default_port() -> u16 {
    5000
}

fn default_use_tls() -> bool {
    false
}

fn default_verify_ssl() -> bool {
    true
}

fn default_api_version() -> u32 {
    6
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_application() -> String {
    "SynoStorageMonitor".to_string()
}

fn default_storage_method() -> String {
    "load_info".to_string()
}

impl NasConfig {
    /// Root of the DSM web API, e.g. `https://nas.local:5001/webapi/`.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{}://{}:{}/webapi/", scheme, self.host, self.port)
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SYNO_MONITOR").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
