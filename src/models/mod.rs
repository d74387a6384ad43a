//! Domain models for Azure IP networks.
//!
//! This module contains the core data structures:
//! - [`IpNetwork`] - an IPv4/IPv6 network in CIDR notation
//! - [`AzureCloud`] - the closed set of published clouds
//! - [`ServiceTag`] and [`CloudDataset`] - the service tag dataset shapes

mod network;
mod tags;

// Re-export public types
pub use network::{IpNetwork, MAX_LENGTH_V4, MAX_LENGTH_V6};
pub use tags::{AzureCloud, CloudDataset, ServiceTag, ServiceTagProperties};
