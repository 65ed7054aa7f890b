//! Storage Status Queries
//!
//! Hostname lookup through `SYNO.FileStation.Info` and disk/volume health through
//! `SYNO.Storage.CGI.Storage`, normalized into [`DiskRecord`] and [`VolumeRecord`].
//!
//! Parsing is strict: one malformed disk or volume fails the whole fetch.

use crate::error::{MonitorError, Result};
use crate::synology::catalog::ApiCatalog;
use crate::synology::client::{expect_data, SynologyClient};
use crate::synology::gateway::HttpGateway;
use crate::synology::types::{
    DiskRecord, HostnameData, RawDisk, RawStorageInfo, RawVolume, StorageStatus, VolumeRecord,
};
use crate::units::used_percent;
use std::collections::BTreeMap;
use tracing::{debug, info};

pub const FILE_STATION_INFO_API: &str = "SYNO.FileStation.Info";
pub const STORAGE_API: &str = "SYNO.Storage.CGI.Storage";

impl<G: HttpGateway> SynologyClient<G> {
    /// Hostname the appliance reports for itself.
    pub fn resolve_hostname(&self, catalog: &ApiCatalog, sid: &str) -> Result<String> {
        let descriptor = catalog.require(FILE_STATION_INFO_API)?;
        let response = self.call_api(descriptor, "get", sid)?;
        let data = expect_data(response, FILE_STATION_INFO_API)?;

        let info: HostnameData = serde_json::from_value(data).map_err(|e| {
            MonitorError::MalformedResponse(format!("{}: {}", FILE_STATION_INFO_API, e))
        })?;
        debug!("NAS hostname is {}", info.hostname);
        Ok(info.hostname)
    }

    /// Disks and volumes as returned by the storage manager's `method` (usually `load_info`).
    pub fn fetch_volume_status(
        &self,
        catalog: &ApiCatalog,
        sid: &str,
        method: &str,
    ) -> Result<StorageStatus> {
        let descriptor = catalog.require(STORAGE_API)?;
        let response = self.call_api(descriptor, method, sid)?;
        let data = expect_data(response, STORAGE_API)?;

        let raw: RawStorageInfo = serde_json::from_value(data)
            .map_err(|e| MonitorError::MalformedResponse(format!("{}: {}", STORAGE_API, e)))?;

        let mut disks = BTreeMap::new();
        for disk in raw.disks {
            let record = disk_record(disk);
            disks.insert(record.position.clone(), record);
        }

        let mut volumes = BTreeMap::new();
        for volume in raw.volumes {
            let record = volume_record(volume)?;
            volumes.insert(record.description.clone(), record);
        }

        info!(
            "Loaded storage status: {} disks, {} volumes",
            disks.len(),
            volumes.len()
        );
        Ok(StorageStatus { disks, volumes })
    }
}

fn disk_record(disk: RawDisk) -> DiskRecord {
    DiskRecord {
        position: disk.long_name,
        vendor: disk.vendor,
        model: disk.model,
        serial: disk.serial,
        status: disk.overview_status,
        total_size_bytes: disk.size_total,
    }
}

fn volume_record(volume: RawVolume) -> Result<VolumeRecord> {
    // `vol_desc` wins whenever the key is present, even if empty; `desc` only when it is missing.
    let description = match (volume.vol_desc, volume.desc) {
        (Some(Some(vol_desc)), _) => vol_desc,
        (Some(None), _) => {
            return Err(MonitorError::MalformedResponse(format!(
                "volume {} has a null vol_desc",
                volume.vol_path
            )))
        }
        (None, Some(desc)) => desc,
        (None, None) => {
            return Err(MonitorError::MalformedResponse(format!(
                "volume {} has neither vol_desc nor desc",
                volume.vol_path
            )))
        }
    };

    let used_percent = used_percent(volume.size.used, volume.size.total).ok_or_else(|| {
        MonitorError::DivisionByZero(format!("volume {} reports a total size of 0", description))
    })?;

    Ok(VolumeRecord {
        description,
        mount_path: volume.vol_path,
        total_size_bytes: volume.size.total,
        used_size_bytes: volume.size.used,
        used_percent,
    })
}
