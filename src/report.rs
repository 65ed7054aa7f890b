//! Console rendering of a [`StorageReport`].

use crate::monitor::StorageReport;
use crate::synology::types::{DiskRecord, VolumeRecord};
use crate::units;

const DISK_SEPARATOR: &str = "*****";

/// Render disks first, then the hostname and each volume.
pub fn render_report(report: &StorageReport) -> String {
    let mut out = String::new();

    for disk in report.status.disks.values() {
        render_disk(&mut out, disk);
        out.push_str(DISK_SEPARATOR);
        out.push('\n');
    }

    out.push_str(&report.hostname);
    out.push('\n');

    for volume in report.status.volumes.values() {
        render_volume(&mut out, volume);
    }

    out
}

fn render_disk(out: &mut String, disk: &DiskRecord) {
    out.push_str(&format!(
        "Disk position: {}\nVendor: {}\nModel: {}\nSerial: {}\nStatus: {}\nTotal size: {}\n",
        disk.position,
        disk.vendor,
        disk.model,
        disk.serial,
        disk.status,
        units::render(disk.total_size_bytes)
    ));
}

fn render_volume(out: &mut String, volume: &VolumeRecord) {
    out.push_str(&format!(
        "Volume: {}\nMount point: {}\nVolume size: {}\nUsed: {}\nUsed (%): {}%\n",
        volume.description,
        volume.mount_path,
        units::render(volume.total_size_bytes),
        units::render(volume.used_size_bytes),
        volume.used_percent
    ));
}
