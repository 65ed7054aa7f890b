//! Synology DSM Web API Client
//!
//! This module provides the client used to talk to a Synology NAS over its
//! HTTP management API (`/webapi/`).
//!
//! # Architecture
//!
//! - **Transport**: any [`HttpGateway`]; [`UreqGateway`] in production
//! - **Authentication**: `SYNO.API.Auth` login returning a session id (`sid`)
//! - **Discovery**: `SYNO.API.Info` maps logical API names to paths and versions
//! - **Queries**: functional APIs are called at the path/version discovery resolved
//!
//! The client holds only immutable state (gateway and credentials). The mutable
//! [`Session`](crate::synology::Session) is owned by the caller and passed to
//! [`login`](SynologyClient::login) / [`logout`](SynologyClient::logout).
//!
//! # Example
//!
//! ```no_run
//! use syno_storage_monitor::config::Config;
//! use syno_storage_monitor::synology::{Session, SynologyClient};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::load("config/Default.toml")?;
//! let client = SynologyClient::new(&config.nas);
//! let mut session = Session::new();
//!
//! let sid = client.login(&mut session, "monitor")?;
//! let catalog = client.discover_all()?;
//! let hostname = client.resolve_hostname(&catalog, &sid)?;
//! println!("{}", hostname);
//! client.logout(&mut session, "monitor")?;
//! # Ok(())
//! # }
//! ```

use crate::config::NasConfig;
use crate::error::{MonitorError, Result};
use crate::synology::gateway::{HttpGateway, UreqGateway};
use crate::synology::types::ApiDescriptor;
use secrecy::SecretString;
use serde_json::Value;
use tracing::debug;

/// Account used for `SYNO.API.Auth` logins.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
    /// One-time passcode for accounts with 2-step verification.
    pub otp_code: Option<SecretString>,
}

impl Credentials {
    pub fn from_config(config: &NasConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            otp_code: config.otp_code.clone(),
        }
    }
}

/// Client for the Synology DSM Web API
pub struct SynologyClient<G = UreqGateway> {
    pub(crate) gateway: G,
    pub(crate) credentials: Credentials,
    pub(crate) auth_version: u32,
}

impl SynologyClient<UreqGateway> {
    pub fn new(config: &NasConfig) -> Self {
        Self::with_gateway(
            UreqGateway::new(config),
            Credentials::from_config(config),
            config.api_version,
        )
    }
}

impl<G: HttpGateway> SynologyClient<G> {
    pub fn with_gateway(gateway: G, credentials: Credentials, auth_version: u32) -> Self {
        Self {
            gateway,
            credentials,
            auth_version,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Call a functional API at the path and minimum version its descriptor advertises.
    pub(crate) fn call_api(
        &self,
        descriptor: &ApiDescriptor,
        method: &str,
        sid: &str,
    ) -> Result<Value> {
        let version = descriptor.min_version.to_string();
        debug!(
            "Calling {} v{} method={} at {}",
            descriptor.name, version, method, descriptor.path
        );
        self.gateway.get(
            &descriptor.path,
            &[
                ("api", descriptor.name.as_str()),
                ("version", version.as_str()),
                ("method", method),
                ("_sid", sid),
            ],
        )
    }
}

/// Take the `data` member out of a DSM response envelope.
pub(crate) fn take_data(mut response: Value) -> Option<Value> {
    response.get_mut("data").map(Value::take)
}

/// Describe why a response carried no usable payload, including the DSM error code when present.
pub(crate) fn describe_failure(response: &Value) -> String {
    match response.pointer("/error/code").and_then(Value::as_i64) {
        Some(code) => format!("appliance returned error code {}", code),
        None => "response has no data field".to_string(),
    }
}

/// Pull `data` out of a functional API response or fail as malformed.
pub(crate) fn expect_data(response: Value, api_name: &str) -> Result<Value> {
    let failure = describe_failure(&response);
    take_data(response)
        .ok_or_else(|| MonitorError::MalformedResponse(format!("{}: {}", api_name, failure)))
}
