//! Session Lifecycle
//!
//! Login and logout against `SYNO.API.Auth`.
//!
//! A [`Session`] is either expired (no session id) or active (holding the `sid`
//! returned by login). Logging in while active is a no-op that returns the current
//! `sid`. Logging out always expires the local session, whatever the appliance says.

use crate::error::{MonitorError, Result};
use crate::synology::client::{describe_failure, take_data, SynologyClient};
use crate::synology::gateway::HttpGateway;
use crate::synology::types::LoginData;
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, info, warn};

pub(crate) const AUTH_PATH: &str = "auth.cgi";
pub(crate) const AUTH_API: &str = "SYNO.API.Auth";
const LOGOUT_VERSION: &str = "2";

/// Local belief about the appliance session.
///
/// Invariant: an expired session never holds a session id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    sid: Option<String>,
    expired: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            sid: None,
            expired: true,
        }
    }

    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    fn active_sid(&self) -> Option<&str> {
        if self.expired {
            None
        } else {
            self.sid.as_deref()
        }
    }

    fn establish(&mut self, sid: String) {
        self.sid = Some(sid);
        self.expired = false;
    }

    fn expire(&mut self) {
        self.sid = None;
        self.expired = true;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// What the appliance reported on logout. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    LoggedOut,
    NoValidSession,
}

impl<G: HttpGateway> SynologyClient<G> {
    /// Open a session named `application`, or reuse the one already open.
    pub fn login(&self, session: &mut Session, application: &str) -> Result<String> {
        if let Some(sid) = session.active_sid() {
            debug!("Session for {} already open, reusing it", application);
            return Ok(sid.to_string());
        }

        let version = self.auth_version.to_string();
        let mut params = vec![
            ("api", AUTH_API),
            ("version", version.as_str()),
            ("method", "login"),
            ("account", self.credentials.username.as_str()),
            ("passwd", self.credentials.password.expose_secret()),
            ("session", application),
            ("format", "sid"),
        ];
        if let Some(otp) = &self.credentials.otp_code {
            params.push(("otp_code", otp.expose_secret()));
        }

        info!(
            "Logging in to DSM as {} (session {})",
            self.credentials.username, application
        );

        let sid = match self.gateway.get(AUTH_PATH, &params) {
            Ok(response) => extract_sid(response),
            Err(e) => Err(MonitorError::Auth(e.to_string())),
        };

        match sid {
            Ok(sid) => {
                session.establish(sid.clone());
                info!("New DSM session started");
                Ok(sid)
            }
            Err(e) => {
                session.expire();
                Err(e)
            }
        }
    }

    /// Close the session named `application`.
    ///
    /// The local session is expired before any error is returned.
    pub fn logout(&self, session: &mut Session, application: &str) -> Result<LogoutOutcome> {
        let result = self.gateway.get(
            AUTH_PATH,
            &[
                ("api", AUTH_API),
                ("version", LOGOUT_VERSION),
                ("method", "logout"),
                ("session", application),
            ],
        );
        session.expire();

        let response = result?;
        if response.get("success").and_then(Value::as_bool) == Some(true) {
            info!("Logged out of DSM session {}", application);
            Ok(LogoutOutcome::LoggedOut)
        } else {
            warn!("No valid DSM session was open for {}", application);
            Ok(LogoutOutcome::NoValidSession)
        }
    }
}

fn extract_sid(response: Value) -> Result<String> {
    let failure = describe_failure(&response);
    let data = take_data(response).ok_or(MonitorError::Auth(failure))?;
    let login: LoginData = serde_json::from_value(data)
        .map_err(|e| MonitorError::Auth(format!("login response has no session id: {}", e)))?;
    Ok(login.sid)
}
