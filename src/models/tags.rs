//! Service tag dataset model.
//!
//! Mirrors the JSON documents Microsoft publishes per cloud: a top-level
//! change number plus a list of service tags, each carrying the region,
//! service name and address prefixes. Optional fields default so older or
//! trimmed documents still parse.

use crate::models::network::IpNetwork;
use serde::{Deserialize, Serialize};

/// The Azure cloud a dataset belongs to.
///
/// Closed set: Microsoft publishes one service tag file per cloud.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AzureCloud {
    Public,
    China,
    AzureGovernment,
    AzureGermany,
}

impl AzureCloud {
    /// All clouds, in publication order.
    pub const ALL: [AzureCloud; 4] = [
        AzureCloud::Public,
        AzureCloud::China,
        AzureCloud::AzureGovernment,
        AzureCloud::AzureGermany,
    ];

    /// Stable index into per-cloud tables.
    pub(crate) fn index(self) -> usize {
        match self {
            AzureCloud::Public => 0,
            AzureCloud::China => 1,
            AzureCloud::AzureGovernment => 2,
            AzureCloud::AzureGermany => 3,
        }
    }

    /// The cloud name as used in dataset and snapshot file names.
    pub fn name(self) -> &'static str {
        match self {
            AzureCloud::Public => "Public",
            AzureCloud::China => "China",
            AzureCloud::AzureGovernment => "AzureGovernment",
            AzureCloud::AzureGermany => "AzureGermany",
        }
    }
}

impl std::fmt::Display for AzureCloud {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Properties of a [`ServiceTag`].
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceTagProperties {
    /// Version counter incremented whenever the tag changes upstream.
    pub change_number: u64,
    /// Region the tag applies to; empty for region-less tags.
    pub region: String,
    pub region_id: u64,
    /// Platform the tag belongs to, normally "Azure".
    pub platform: String,
    /// Service the tag applies to; empty for platform-wide tags.
    pub system_service: String,
    /// The CIDR prefixes in this tag, in publication order.
    pub address_prefixes: Vec<IpNetwork>,
    /// Capabilities advertised for the prefixes (API, NSG, UDR, FW, VSE).
    pub network_features: Vec<String>,
}

/// A single service tag: one (service, region) grouping of address prefixes.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTag {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: ServiceTagProperties,
}

/// A full per-cloud dataset as published by Microsoft.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudDataset {
    pub change_number: u64,
    /// Cloud name as recorded in the document itself.
    pub cloud: String,
    /// Service tags in publication order.
    pub values: Vec<ServiceTag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_tag() {
        let json = r#"{
            "changeNumber": 83,
            "cloud": "Public",
            "values": [
                {
                    "id": "AzureAppService.WestEurope",
                    "name": "AzureAppService.WestEurope",
                    "properties": {
                        "changeNumber": 12,
                        "region": "westeurope",
                        "regionId": 18,
                        "platform": "Azure",
                        "systemService": "AzureAppService",
                        "addressPrefixes": ["13.69.68.0/23", "2603:1020:206:402::/64"],
                        "networkFeatures": ["API", "NSG"]
                    }
                }
            ]
        }"#;
        let dataset: CloudDataset = serde_json::from_str(json).expect("valid dataset");
        assert_eq!(dataset.change_number, 83);
        assert_eq!(dataset.cloud, "Public");
        assert_eq!(dataset.values.len(), 1);
        let tag = &dataset.values[0];
        assert_eq!(tag.properties.system_service, "AzureAppService");
        assert_eq!(tag.properties.region, "westeurope");
        assert_eq!(tag.properties.address_prefixes.len(), 2);
        assert_eq!(
            tag.properties.address_prefixes[0],
            "13.69.68.0/23".parse().unwrap()
        );
    }

    #[test]
    fn test_missing_optional_fields_default() {
        // region, systemService and networkFeatures may be absent upstream
        let json = r#"{
            "cloud": "Public",
            "values": [
                {
                    "id": "AzureCloud",
                    "name": "AzureCloud",
                    "properties": {
                        "platform": "Azure",
                        "addressPrefixes": ["13.64.0.0/11"]
                    }
                }
            ]
        }"#;
        let dataset: CloudDataset = serde_json::from_str(json).expect("tolerant parse");
        let props = &dataset.values[0].properties;
        assert_eq!(props.region, "");
        assert_eq!(props.system_service, "");
        assert!(props.network_features.is_empty());
        assert_eq!(props.change_number, 0);
    }

    #[test]
    fn test_invalid_prefix_fails_parse() {
        let json = r#"{
            "cloud": "Public",
            "values": [
                {
                    "id": "Broken",
                    "name": "Broken",
                    "properties": { "addressPrefixes": ["13.64.0.0/99"] }
                }
            ]
        }"#;
        assert!(serde_json::from_str::<CloudDataset>(json).is_err());
    }

    #[test]
    fn test_cloud_serde_names() {
        assert_eq!(
            serde_json::to_string(&AzureCloud::AzureGovernment).unwrap(),
            "\"AzureGovernment\""
        );
        let cloud: AzureCloud = serde_json::from_str("\"China\"").unwrap();
        assert_eq!(cloud, AzureCloud::China);
        assert_eq!(AzureCloud::AzureGermany.to_string(), "AzureGermany");
    }
}
