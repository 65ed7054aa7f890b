//! One-shot Storage Collection
//!
//! Runs the full DSM conversation for a single report:
//!
//! 1. Log in (or reuse the open session)
//! 2. Discover the API catalog
//! 3. Resolve the hostname and load disk/volume status
//! 4. Log out
//!
//! Logout runs whenever login succeeded, including when a query in step 3 failed.
//! The query error takes precedence over a logout error.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::synology::types::StorageStatus;
use crate::synology::{HttpGateway, Session, SynologyClient};
use tracing::{info, warn};

/// Everything shown to the operator for one appliance.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageReport {
    pub hostname: String,
    pub status: StorageStatus,
}

pub fn collect_report<G: HttpGateway>(
    client: &SynologyClient<G>,
    session: &mut Session,
    config: &ClientConfig,
) -> Result<StorageReport> {
    let sid = client.login(session, &config.application)?;

    let report = query_report(client, &sid, &config.storage_method);

    let logout = client.logout(session, &config.application);
    if let Err(e) = &logout {
        warn!("Logout failed: {}", e);
    }

    let report = report?;
    logout?;
    info!(
        "Collected storage report for {} ({} disks, {} volumes)",
        report.hostname,
        report.status.disks.len(),
        report.status.volumes.len()
    );
    Ok(report)
}

fn query_report<G: HttpGateway>(
    client: &SynologyClient<G>,
    sid: &str,
    method: &str,
) -> Result<StorageReport> {
    let catalog = client.discover_all()?;
    let hostname = client.resolve_hostname(&catalog, sid)?;
    let status = client.fetch_volume_status(&catalog, sid, method)?;
    Ok(StorageReport { hostname, status })
}
