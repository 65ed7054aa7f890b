//! API Capability Discovery
//!
//! DSM publishes its API surface through `SYNO.API.Info`: each logical API name
//! (`SYNO.Storage.CGI.Storage`, ...) maps to the CGI path that serves it and the
//! range of versions it accepts. Paths move between firmware releases, so every
//! functional call goes through an [`ApiCatalog`] built here first.
//!
//! Each discovery call re-queries the appliance and returns a fresh catalog.

use crate::error::{MonitorError, Result};
use crate::synology::client::{describe_failure, take_data, SynologyClient};
use crate::synology::gateway::HttpGateway;
use crate::synology::types::{ApiDescriptor, RawApiInfo};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

const INFO_PATH: &str = "query.cgi";
const INFO_API: &str = "SYNO.API.Info";

/// Mapping from logical API name to its descriptor, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiCatalog {
    apis: BTreeMap<String, ApiDescriptor>,
}

impl ApiCatalog {
    pub fn get(&self, name: &str) -> Option<&ApiDescriptor> {
        self.apis.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.apis.contains_key(name)
    }

    /// Look up `name`, failing with [`MonitorError::ApiNotFound`] when absent.
    pub fn require(&self, name: &str) -> Result<&ApiDescriptor> {
        self.get(name)
            .ok_or_else(|| MonitorError::ApiNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.apis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apis.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ApiDescriptor> {
        self.apis.values()
    }
}

impl FromIterator<ApiDescriptor> for ApiCatalog {
    fn from_iter<I: IntoIterator<Item = ApiDescriptor>>(iter: I) -> Self {
        Self {
            apis: iter
                .into_iter()
                .map(|descriptor| (descriptor.name.clone(), descriptor))
                .collect(),
        }
    }
}

impl<G: HttpGateway> SynologyClient<G> {
    /// Every API the appliance advertises.
    pub fn discover_all(&self) -> Result<ApiCatalog> {
        let catalog = self.discover(|_| true)?;
        info!("Discovered {} DSM APIs", catalog.len());
        Ok(catalog)
    }

    /// APIs whose name contains `needle`, ignoring case.
    pub fn discover_filtered(&self, needle: &str) -> Result<ApiCatalog> {
        let needle = needle.to_lowercase();
        let catalog = self.discover(|name| name.to_lowercase().contains(&needle))?;
        info!("Discovered {} DSM APIs matching {:?}", catalog.len(), needle);
        Ok(catalog)
    }

    fn discover<F>(&self, keep: F) -> Result<ApiCatalog>
    where
        F: Fn(&str) -> bool,
    {
        let response = self
            .gateway
            .get(
                INFO_PATH,
                &[
                    ("api", INFO_API),
                    ("version", "1"),
                    ("method", "query"),
                    ("query", "all"),
                ],
            )
            .map_err(|e| MonitorError::ApiDiscovery(e.to_string()))?;

        let failure = describe_failure(&response);
        let data = match take_data(response) {
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(MonitorError::ApiDiscovery(
                    "data field is not an object".to_string(),
                ))
            }
            None => return Err(MonitorError::ApiDiscovery(failure)),
        };

        data.into_iter()
            .filter(|(name, _)| keep(name))
            .map(|(name, entry)| -> Result<ApiDescriptor> {
                let info: RawApiInfo = serde_json::from_value(entry).map_err(|e| {
                    MonitorError::ApiDiscovery(format!("invalid entry for {}: {}", name, e))
                })?;
                debug!(
                    "{} -> {} (v{}-v{})",
                    name, info.path, info.min_version, info.max_version
                );
                Ok(ApiDescriptor {
                    name,
                    path: info.path,
                    min_version: info.min_version,
                    max_version: info.max_version,
                })
            })
            .collect()
    }
}
