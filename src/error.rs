//! Error types for dataset loading, parsing and querying.

use crate::models::AzureCloud;

/// Failure to interpret a piece of text as a CIDR network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CidrParseError {
    #[error("invalid CIDR format: {0}")]
    InvalidFormat(String),
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),
    #[error("invalid prefix length: {0}")]
    InvalidPrefix(String),
    #[error("prefix length {prefix} is too long for this address family (max {max})")]
    PrefixTooLong { prefix: u8, max: u8 },
}

/// Errors surfaced by dataset sources, the downloader and the provider.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Cidr(#[from] CidrParseError),

    /// The dataset bytes were obtained but do not have the expected shape.
    /// `path` is the JSON path at which deserialization failed.
    #[error("malformed service tag dataset at '{path}': {message}")]
    MalformedDataset { path: String, message: String },

    /// No bytes could be obtained for the requested cloud.
    #[error("no dataset available for cloud '{cloud}': {reason}")]
    SourceUnavailable { cloud: AzureCloud, reason: String },

    /// A validated filter value is outside the known vocabulary.
    #[error("'{value}' is not a known {kind}")]
    UnknownFilterValue {
        kind: &'static str,
        value: String,
    },

    /// The cloud has no download file identifier mapped.
    #[error("cloud '{0}' does not have a download file mapped")]
    CloudNotSupported(AzureCloud),

    /// The download confirmation page did not contain a service tag file link.
    #[error("failed to locate the service tag download link for cloud '{0}'")]
    DownloadLinkNotFound(AzureCloud),
}

pub type Result<T> = std::result::Result<T, Error>;
