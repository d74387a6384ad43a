//! Dataset sources: where the raw per-cloud service tag bytes come from.
//!
//! Three interchangeable implementations:
//! - [`LocalSource`] - snapshots embedded in the library at compile time
//! - [`RemoteSource`] - fresh downloads from the Microsoft download pages
//! - [`DirSource`] - `<Cloud>.json` files in a directory, for tooling and tests

mod download;

pub use download::{RemoteSource, ServiceTagsDownloader};

use crate::error::{Error, Result};
use crate::models::AzureCloud;
use std::future::Future;
use std::path::PathBuf;

/// Supplies the raw JSON bytes of a per-cloud service tag dataset.
///
/// Implementations are only asked for bytes; parsing and caching happen in
/// the provider. Dropping the returned future cancels any I/O in flight.
pub trait DatasetSource: Send + Sync {
    fn fetch(&self, cloud: AzureCloud) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Dataset source backed by the snapshots bundled with this crate.
///
/// Fast and always available, at the cost of data that goes stale between
/// releases. Refresh the snapshots with the `refresh-snapshots` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSource;

impl LocalSource {
    pub(crate) fn snapshot(cloud: AzureCloud) -> &'static str {
        match cloud {
            AzureCloud::Public => include_str!("../../data/Public.json"),
            AzureCloud::China => include_str!("../../data/China.json"),
            AzureCloud::AzureGovernment => include_str!("../../data/AzureGovernment.json"),
            AzureCloud::AzureGermany => include_str!("../../data/AzureGermany.json"),
        }
    }
}

impl DatasetSource for LocalSource {
    async fn fetch(&self, cloud: AzureCloud) -> Result<Vec<u8>> {
        log::debug!("reading embedded snapshot for cloud {cloud}");
        Ok(Self::snapshot(cloud).as_bytes().to_vec())
    }
}

/// Dataset source reading `<Cloud>.json` files from a directory.
///
/// Useful for tests and for tooling that works against a downloaded set of
/// files without re-fetching them.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> DirSource {
        DirSource { dir: dir.into() }
    }
}

impl DatasetSource for DirSource {
    async fn fetch(&self, cloud: AzureCloud) -> Result<Vec<u8>> {
        let path = self.dir.join(format!("{cloud}.json"));
        log::debug!("reading dataset file {}", path.display());
        tokio::fs::read(&path).await.map_err(|e| Error::SourceUnavailable {
            cloud,
            reason: format!("{}: {e}", path.display()),
        })
    }
}
