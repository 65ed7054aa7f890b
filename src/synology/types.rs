//! DSM Web API Type Definitions
//!
//! Wire-level structs for the JSON payloads returned by the appliance, plus the
//! normalized records handed to callers.
//!
//! # Design Notes
//!
//! - **Wire vs. record**: `Raw*` structs mirror the appliance payload and are private
//!   to the client; [`DiskRecord`] and [`VolumeRecord`] are the uniform output.
//! - **Byte counts**: DSM reports sizes as decimal strings (`"3998831407104"`), older
//!   firmware sometimes as plain numbers. [`deserialize_byte_count`] accepts both.
//! - **Strict parsing**: missing fields are deserialization errors, surfaced by the
//!   client as [`MonitorError::MalformedResponse`](crate::error::MonitorError).
//!
//! # API Endpoints Covered
//!
//! - `SYNO.API.Auth` login → [`LoginData`]
//! - `SYNO.API.Info` query → [`ApiDescriptor`]
//! - `SYNO.FileStation.Info` get → [`HostnameData`]
//! - `SYNO.Storage.CGI.Storage` load_info → [`DiskRecord`], [`VolumeRecord`]

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Concrete location and version range of one logical DSM API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDescriptor {
    pub name: String,
    pub path: String,
    pub min_version: u32,
    pub max_version: u32,
}

impl ApiDescriptor {
    /// Whether `version` lies within `[min_version, max_version]`.
    pub fn supports(&self, version: u32) -> bool {
        (self.min_version..=self.max_version).contains(&version)
    }
}

/// One entry of the `SYNO.API.Info` response; the name is the map key.
#[derive(Debug, Deserialize)]
pub(crate) struct RawApiInfo {
    pub path: String,
    #[serde(rename = "minVersion")]
    pub min_version: u32,
    #[serde(rename = "maxVersion")]
    pub max_version: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    pub sid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HostnameData {
    pub hostname: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStorageInfo {
    pub disks: Vec<RawDisk>,
    pub volumes: Vec<RawVolume>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDisk {
    #[serde(rename = "longName")]
    pub long_name: String,
    pub vendor: String,
    pub model: String,
    pub serial: String,
    pub overview_status: String,
    #[serde(deserialize_with = "deserialize_byte_count")]
    pub size_total: u64,
}

/// Volume as reported by `load_info`.
///
/// Firmware differs in where the human description lives: `vol_desc` on most
/// releases, `desc` on some. Both are kept so the client can probe them in order.
/// `vol_desc` is `None` when the key is missing and `Some(None)` when it is `null`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawVolume {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub vol_desc: Option<Option<String>>,
    #[serde(default)]
    pub desc: Option<String>,
    pub vol_path: String,
    pub size: RawVolumeSize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawVolumeSize {
    #[serde(deserialize_with = "deserialize_byte_count")]
    pub total: u64,
    #[serde(deserialize_with = "deserialize_byte_count")]
    pub used: u64,
}

/// Marks a field as present, keeping a `null` value distinguishable from a missing key.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ByteCount {
    Number(u64),
    Text(String),
}

/// Accepts a non-negative integer given either as a JSON number or a decimal string.
pub fn deserialize_byte_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match ByteCount::deserialize(deserializer)? {
        ByteCount::Number(n) => Ok(n),
        ByteCount::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid byte count {:?}", s))),
    }
}

/// Physical disk health and capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskRecord {
    pub position: String,
    pub vendor: String,
    pub model: String,
    pub serial: String,
    pub status: String,
    pub total_size_bytes: u64,
}

/// Storage volume capacity and usage.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeRecord {
    pub description: String,
    pub mount_path: String,
    pub total_size_bytes: u64,
    pub used_size_bytes: u64,
    /// `used / total * 100`, rounded to two decimals.
    pub used_percent: f64,
}

/// Disks keyed by position, volumes keyed by description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageStatus {
    pub disks: BTreeMap<String, DiskRecord>,
    pub volumes: BTreeMap<String, VolumeRecord>,
}
