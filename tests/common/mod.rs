//! Shared test helpers: a scripted, recording `HttpGateway` and DSM payload fixtures.

#![allow(dead_code)]

use secrecy::SecretString;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use syno_storage_monitor::error::{MonitorError, Result};
use syno_storage_monitor::synology::types::ApiDescriptor;
use syno_storage_monitor::synology::{ApiCatalog, Credentials, HttpGateway, SynologyClient};

/// One request seen by the fake gateway.
#[derive(Debug, Clone)]
pub struct Call {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl Call {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

enum Reply {
    Json(Value),
    Fail(String),
}

/// Replies are queued per path and consumed in order.
#[derive(Default)]
pub struct FakeGateway {
    replies: RefCell<HashMap<String, VecDeque<Reply>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, path: &str, body: Value) -> Self {
        self.push(path, Reply::Json(body));
        self
    }

    pub fn fail(self, path: &str, message: &str) -> Self {
        self.push(path, Reply::Fail(message.to_string()));
        self
    }

    fn push(&self, path: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn calls_with_method(&self, method: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.param("method") == Some(method))
            .count()
    }
}

impl HttpGateway for FakeGateway {
    fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        self.calls.borrow_mut().push(Call {
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        match self
            .replies
            .borrow_mut()
            .get_mut(path)
            .and_then(VecDeque::pop_front)
        {
            Some(Reply::Json(body)) => Ok(body),
            Some(Reply::Fail(message)) => Err(MonitorError::Transport(message)),
            None => Err(MonitorError::Transport(format!("no reply scripted for {}", path))),
        }
    }
}

pub fn credentials() -> Credentials {
    Credentials {
        username: "admin".to_string(),
        password: SecretString::new("s3cret".into()),
        otp_code: None,
    }
}

pub fn client(gateway: FakeGateway) -> SynologyClient<FakeGateway> {
    SynologyClient::with_gateway(gateway, credentials(), 6)
}

pub fn login_ok(sid: &str) -> Value {
    json!({"success": true, "data": {"sid": sid}})
}

pub fn logout_ok() -> Value {
    json!({"success": true})
}

pub fn api_info() -> Value {
    json!({
        "success": true,
        "data": {
            "SYNO.API.Auth": {"path": "auth.cgi", "minVersion": 1, "maxVersion": 7},
            "SYNO.FileStation.Info": {"path": "entry.cgi", "minVersion": 2, "maxVersion": 2, "requestFormat": "JSON"},
            "SYNO.Storage.CGI.Storage": {"path": "entry.cgi", "minVersion": 1, "maxVersion": 1},
            "SYNO.Storage.CGI.Pool": {"path": "entry.cgi", "minVersion": 1, "maxVersion": 1},
            "SYNO.DownloadStation.Task": {"path": "DownloadStation/task.cgi", "minVersion": 1, "maxVersion": 3}
        }
    })
}

pub fn hostname_response(hostname: &str) -> Value {
    json!({"success": true, "data": {"hostname": hostname}})
}

pub fn storage_response(disks: Value, volumes: Value) -> Value {
    json!({"success": true, "data": {"disks": disks, "volumes": volumes}})
}

pub fn disk(long_name: &str, size_total: &str) -> Value {
    json!({
        "id": "sda",
        "longName": long_name,
        "vendor": "WDC",
        "model": "WD40EFRX-68N32N0",
        "serial": format!("WD-{}", long_name.replace(' ', "")),
        "overview_status": "normal",
        "size_total": size_total
    })
}

pub fn volume(desc: &str, path: &str, total: &str, used: &str) -> Value {
    json!({
        "id": "volume_1",
        "vol_desc": desc,
        "vol_path": path,
        "size": {"total": total, "used": used}
    })
}

/// Catalog holding the two functional APIs the monitor uses.
pub fn storage_catalog() -> ApiCatalog {
    [
        ApiDescriptor {
            name: "SYNO.FileStation.Info".to_string(),
            path: "entry.cgi".to_string(),
            min_version: 2,
            max_version: 2,
        },
        ApiDescriptor {
            name: "SYNO.Storage.CGI.Storage".to_string(),
            path: "entry.cgi".to_string(),
            min_version: 1,
            max_version: 1,
        },
    ]
    .into_iter()
    .collect()
}
