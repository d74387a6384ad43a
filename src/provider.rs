//! Provider for Azure IP networks: per-cloud cached datasets plus
//! membership and filtering queries.
//!
//! A provider owns one dataset source and one lazily-populated cache slot
//! per cloud. The first query for a cloud fetches and parses its dataset;
//! every later query reads the stored copy. Hold one long-lived provider and
//! query it from as many tasks as needed; concurrent first requests for the
//! same cloud coalesce into a single fetch.

use crate::error::{Error, Result};
use crate::known;
use crate::models::{AzureCloud, CloudDataset, IpNetwork, ServiceTag};
use crate::source::{DatasetSource, DirSource, LocalSource, RemoteSource};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Membership tests and range lookups against the Azure service tag data.
pub struct AzureIpProvider<S> {
    source: S,
    cache: [OnceCell<Arc<CloudDataset>>; AzureCloud::ALL.len()],
}

impl AzureIpProvider<LocalSource> {
    /// Provider over the snapshots bundled with this crate.
    ///
    /// Use this when speed matters more than freshness; the data is only as
    /// new as the crate release.
    pub fn local() -> AzureIpProvider<LocalSource> {
        AzureIpProvider::new(LocalSource)
    }
}

impl AzureIpProvider<RemoteSource> {
    /// Provider that downloads fresh data, once per cloud per instance.
    ///
    /// Prefer this when the process is long-lived and always online; the
    /// first query per cloud pays for two HTTP round-trips.
    pub fn remote() -> AzureIpProvider<RemoteSource> {
        AzureIpProvider::new(RemoteSource::new())
    }

    /// Remote provider reusing an existing HTTP client.
    pub fn remote_with_client(client: reqwest::Client) -> AzureIpProvider<RemoteSource> {
        AzureIpProvider::new(RemoteSource::with_client(client))
    }
}

impl AzureIpProvider<DirSource> {
    /// Provider reading `<Cloud>.json` files from a directory.
    pub fn from_dir(dir: impl Into<PathBuf>) -> AzureIpProvider<DirSource> {
        AzureIpProvider::new(DirSource::new(dir))
    }
}

impl<S: DatasetSource> AzureIpProvider<S> {
    pub fn new(source: S) -> AzureIpProvider<S> {
        AzureIpProvider {
            source,
            cache: Default::default(),
        }
    }

    async fn dataset(&self, cloud: AzureCloud) -> Result<&Arc<CloudDataset>> {
        self.cache[cloud.index()]
            .get_or_try_init(|| async {
                let bytes = self.source.fetch(cloud).await?;
                let dataset = parse_dataset(&bytes)?;
                log::info!(
                    "loaded {count} service tags for cloud {cloud}, change number {change}",
                    count = dataset.values.len(),
                    change = dataset.change_number,
                );
                Ok(Arc::new(dataset))
            })
            .await
    }

    /// All service tags for a cloud, fetched and parsed at most once per
    /// provider instance.
    pub async fn service_tags(&self, cloud: AzureCloud) -> Result<&[ServiceTag]> {
        Ok(&self.dataset(cloud).await?.values)
    }

    /// The networks of a cloud, optionally filtered by service and region.
    ///
    /// Filters are any-of and case-insensitive; an empty slice means no
    /// restriction. Prefixes keep their publication order and duplicates
    /// across tags are preserved. Free-text values that match no tag yield
    /// an empty result, not an error.
    pub async fn networks(
        &self,
        cloud: AzureCloud,
        services: &[&str],
        regions: &[&str],
    ) -> Result<Vec<IpNetwork>> {
        let tags = self.service_tags(cloud).await?;
        Ok(tags
            .iter()
            .filter(|tag| tag_matches(tag, services, regions))
            .flat_map(|tag| tag.properties.address_prefixes.iter().copied())
            .collect())
    }

    /// Check whether a network lies inside any matching Azure range.
    ///
    /// Stops at the first containing network.
    pub async fn is_azure_network(
        &self,
        network: &IpNetwork,
        cloud: AzureCloud,
        services: &[&str],
        regions: &[&str],
    ) -> Result<bool> {
        let tags = self.service_tags(cloud).await?;
        Ok(tags
            .iter()
            .filter(|tag| tag_matches(tag, services, regions))
            .flat_map(|tag| tag.properties.address_prefixes.iter())
            .any(|candidate| candidate.contains_network(network)))
    }

    /// Check whether an IP address is an Azure IP.
    pub async fn is_azure_ip(
        &self,
        address: IpAddr,
        cloud: AzureCloud,
        services: &[&str],
        regions: &[&str],
    ) -> Result<bool> {
        self.is_azure_network(&IpNetwork::host(address), cloud, services, regions)
            .await
    }

    /// Like [`networks`](Self::networks), but the filter values are checked
    /// against the known vocabulary first; an out-of-vocabulary value fails
    /// with [`Error::UnknownFilterValue`].
    pub async fn networks_checked(
        &self,
        cloud: AzureCloud,
        service: Option<&str>,
        region: Option<&str>,
    ) -> Result<Vec<IpNetwork>> {
        let (services, regions) = validate_filters(service, region)?;
        self.networks(cloud, &services, &regions).await
    }

    /// Validated variant of [`is_azure_network`](Self::is_azure_network).
    pub async fn is_azure_network_checked(
        &self,
        network: &IpNetwork,
        cloud: AzureCloud,
        service: Option<&str>,
        region: Option<&str>,
    ) -> Result<bool> {
        let (services, regions) = validate_filters(service, region)?;
        self.is_azure_network(network, cloud, &services, &regions)
            .await
    }

    /// Validated variant of [`is_azure_ip`](Self::is_azure_ip).
    pub async fn is_azure_ip_checked(
        &self,
        address: IpAddr,
        cloud: AzureCloud,
        service: Option<&str>,
        region: Option<&str>,
    ) -> Result<bool> {
        let (services, regions) = validate_filters(service, region)?;
        self.is_azure_ip(address, cloud, &services, &regions).await
    }

    /// Service names accepted by the checked query variants.
    pub fn known_service_names(&self) -> &'static [&'static str] {
        known::SERVICES
    }

    /// Region names accepted by the checked query variants.
    pub fn known_region_names(&self) -> &'static [&'static str] {
        known::REGIONS
    }
}

fn tag_matches(tag: &ServiceTag, services: &[&str], regions: &[&str]) -> bool {
    let props = &tag.properties;
    let service_ok = services.is_empty()
        || services
            .iter()
            .any(|s| props.system_service.eq_ignore_ascii_case(s));
    let region_ok = regions.is_empty()
        || regions.iter().any(|r| props.region.eq_ignore_ascii_case(r));
    service_ok && region_ok
}

fn validate_filters<'a>(
    service: Option<&'a str>,
    region: Option<&'a str>,
) -> Result<(Vec<&'a str>, Vec<&'a str>)> {
    if let Some(service) = service {
        if !known::is_known(known::SERVICES, service) {
            return Err(Error::UnknownFilterValue {
                kind: "service",
                value: service.to_string(),
            });
        }
    }
    if let Some(region) = region {
        if !known::is_known(known::REGIONS, region) {
            return Err(Error::UnknownFilterValue {
                kind: "region",
                value: region.to_string(),
            });
        }
    }
    Ok((
        service.into_iter().collect(),
        region.into_iter().collect(),
    ))
}

/// Parse a full dataset document, reporting the JSON path on failure.
fn parse_dataset(bytes: &[u8]) -> Result<CloudDataset> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| Error::MalformedDataset {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}
