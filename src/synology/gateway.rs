//! HTTP Transport for the DSM Web API
//!
//! Every DSM call is a `GET` against `{base_url}{path}` with the request encoded in
//! query parameters, answered by a JSON envelope of the form
//! `{"success": bool, "data": {...}, "error": {"code": n}}`.
//!
//! [`HttpGateway`] is the seam between the client logic and the network. The
//! production implementation, [`UreqGateway`], wraps a blocking `ureq` agent; tests
//! substitute their own implementation.

use crate::config::NasConfig;
use crate::error::{MonitorError, Result};
use std::time::Duration;
use tracing::debug;
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::Agent;

/// Performs blocking `GET` requests relative to the appliance's web API root.
pub trait HttpGateway {
    /// Issue `GET {base_url}{path}?{params}` and return the parsed JSON body.
    ///
    /// Fails with [`MonitorError::Transport`] when the appliance is unreachable,
    /// answers with a non-2xx status, or returns a body that is not JSON.
    fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<serde_json::Value>;
}

/// [`HttpGateway`] backed by a `ureq` agent.
pub struct UreqGateway {
    agent: Agent,
    base_url: String,
}

impl UreqGateway {
    pub fn new(config: &NasConfig) -> Self {
        let tls = TlsConfig::builder()
            .provider(TlsProvider::NativeTls)
            .disable_verification(!config.verify_ssl)
            .build();

        let agent: Agent = Agent::config_builder()
            .tls_config(tls)
            .timeout_global(Some(Duration::from_secs(config.timeout_seconds)))
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl HttpGateway for UreqGateway {
    fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let mut request = self.agent.get(&url);
        for (key, value) in params {
            request = request.query(*key, *value);
        }

        let mut response = request
            .call()
            .map_err(|e| MonitorError::Transport(format!("GET {} failed: {}", path, e)))?;

        response
            .body_mut()
            .read_json::<serde_json::Value>()
            .map_err(|e| MonitorError::Transport(format!("invalid JSON body from {}: {}", path, e)))
    }
}
