//! Lookup and membership tests against the published Azure IP ranges.
//!
//! Microsoft publishes one service tag file per Azure cloud, each a list of
//! (service, region) tags carrying CIDR prefixes. This crate bundles
//! snapshots of those files, can refresh them from the download pages, and
//! answers "is this address or network an Azure range?" with optional
//! service and region filters.
//!
//! ```no_run
//! use azure_ip_networks::{AzureCloud, AzureIpProvider};
//!
//! # async fn check() -> azure_ip_networks::Result<()> {
//! let provider = AzureIpProvider::local();
//! let addr: std::net::IpAddr = "52.233.184.181".parse().unwrap();
//! if provider.is_azure_ip(addr, AzureCloud::Public, &[], &[]).await? {
//!     println!("{addr} is an Azure IP");
//! }
//! # Ok(())
//! # }
//! ```

mod error;
pub mod known;
mod models;
mod provider;
mod source;

pub use error::{CidrParseError, Error, Result};
pub use models::{
    AzureCloud, CloudDataset, IpNetwork, ServiceTag, ServiceTagProperties, MAX_LENGTH_V4,
    MAX_LENGTH_V6,
};
pub use provider::AzureIpProvider;
pub use source::{DatasetSource, DirSource, LocalSource, RemoteSource, ServiceTagsDownloader};
