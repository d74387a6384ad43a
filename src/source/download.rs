//! Download of the latest service tag files from the Microsoft download pages.
//!
//! Each cloud has a fixed download-page file id. The page itself only links
//! to the dated JSON file, so fetching is two round-trips: get the
//! confirmation page, extract the `download.microsoft.com` link, then fetch
//! the file. Both requests abort when the caller drops the future.

use crate::error::{Error, Result};
use crate::models::AzureCloud;
use crate::source::DatasetSource;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FILE_URL_RE: Regex = Regex::new(
        r"(?i)(https://download\.microsoft\.com/download/.*?/ServiceTags_[A-Za-z]+_[0-9]+\.json)"
    )
    .expect("Invalid Regex?");
}

fn file_id(cloud: AzureCloud) -> Option<&'static str> {
    match cloud {
        AzureCloud::Public => Some("56519"),
        AzureCloud::China => Some("57062"),
        AzureCloud::AzureGovernment => Some("57063"),
        AzureCloud::AzureGermany => Some("57064"),
    }
}

/// Locates and downloads the latest service tag file for a cloud.
#[derive(Debug, Clone)]
pub struct ServiceTagsDownloader {
    client: reqwest::Client,
}

impl ServiceTagsDownloader {
    pub fn new(client: reqwest::Client) -> ServiceTagsDownloader {
        ServiceTagsDownloader { client }
    }

    /// Download the latest service tags for `cloud`.
    ///
    /// Returns the resolved file URL together with the body, so callers can
    /// record where a snapshot came from.
    pub async fn download(&self, cloud: AzureCloud) -> Result<(String, Vec<u8>)> {
        let file_id = file_id(cloud).ok_or(Error::CloudNotSupported(cloud))?;
        let page_url =
            format!("https://www.microsoft.com/en-us/download/confirmation.aspx?id={file_id}");

        log::debug!("fetching download page {page_url}");
        let page = self
            .client
            .get(&page_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| transport_error(cloud, e))?
            .text()
            .await
            .map_err(|e| transport_error(cloud, e))?;

        let url = FILE_URL_RE
            .find(&page)
            .ok_or(Error::DownloadLinkNotFound(cloud))?
            .as_str()
            .to_string();

        log::info!("downloading service tags for cloud {cloud} from {url}");
        let bytes = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| transport_error(cloud, e))?
            .bytes()
            .await
            .map_err(|e| transport_error(cloud, e))?;

        Ok((url, bytes.to_vec()))
    }
}

impl Default for ServiceTagsDownloader {
    fn default() -> ServiceTagsDownloader {
        ServiceTagsDownloader::new(reqwest::Client::new())
    }
}

fn transport_error(cloud: AzureCloud, e: reqwest::Error) -> Error {
    Error::SourceUnavailable {
        cloud,
        reason: e.to_string(),
    }
}

/// Dataset source that downloads a fresh copy of each cloud's file.
///
/// The provider caches the parsed result, so each cloud is downloaded at
/// most once per provider instance and never re-validated for staleness.
#[derive(Debug, Clone, Default)]
pub struct RemoteSource {
    downloader: ServiceTagsDownloader,
}

impl RemoteSource {
    pub fn new() -> RemoteSource {
        RemoteSource::default()
    }

    pub fn with_client(client: reqwest::Client) -> RemoteSource {
        RemoteSource {
            downloader: ServiceTagsDownloader::new(client),
        }
    }
}

impl DatasetSource for RemoteSource {
    async fn fetch(&self, cloud: AzureCloud) -> Result<Vec<u8>> {
        let (_url, bytes) = self.downloader.download(cloud).await?;
        Ok(bytes)
    }
}
