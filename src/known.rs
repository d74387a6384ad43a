//! Known filter vocabulary derived from the bundled reference snapshot.
//!
//! The validated query overloads check caller-supplied service and region
//! names against these lists before filtering. The empty string is part of
//! both lists: platform-wide tags carry no region or service.

/// Region names present in the reference snapshot.
pub const REGIONS: &[&str] = &[
    "",
    "australiacentral",
    "australiacentral2",
    "australiaeast",
    "australiasoutheast",
    "brazilne",
    "brazilse",
    "brazilsouth",
    "canadacentral",
    "canadaeast",
    "centralfrance",
    "centralindia",
    "centralus",
    "centraluseuap",
    "chinaeast",
    "chinaeast2",
    "chinaeast3",
    "chinanorth",
    "chinanorth2",
    "chinanorth3",
    "eastasia",
    "eastus",
    "eastus2",
    "eastus2euap",
    "germanycentral",
    "germanyn",
    "germanynortheast",
    "germanywc",
    "indonesiacentral",
    "israelcentral",
    "italynorth",
    "japaneast",
    "japanwest",
    "jioindiacentral",
    "jioindiawest",
    "koreacentral",
    "koreasouth",
    "malaysiasouth",
    "mexicocentral",
    "newzealandnorth",
    "northcentralus",
    "northeurope",
    "northeurope2",
    "norwaye",
    "norwayw",
    "polandcentral",
    "qatarcentral",
    "southafricanorth",
    "southafricawest",
    "southcentralus",
    "southeastasia",
    "southfrance",
    "southindia",
    "spaincentral",
    "swedencentral",
    "swedensouth",
    "switzerlandn",
    "switzerlandw",
    "taiwannorth",
    "taiwannorthwest",
    "uaecentral",
    "uaenorth",
    "uksouth",
    "ukwest",
    "usdodcentral",
    "usdodeast",
    "usgovarizona",
    "usgoviowa",
    "usgovtexas",
    "usgovvirginia",
    "usstagec",
    "usstagee",
    "westcentralus",
    "westeurope",
    "westindia",
    "westus",
    "westus2",
    "westus3",
];

/// Service names present in the reference snapshot.
pub const SERVICES: &[&str] = &[
    "",
    "ActionGroup",
    "ApplicationInsightsAvailability",
    "AutonomousDevelopmentPlatform",
    "AzureAD",
    "AzureAdvancedThreatProtection",
    "AzureAPIForFHIR",
    "AzureApiManagement",
    "AzureAppConfiguration",
    "AzureAppService",
    "AzureAppServiceManagement",
    "AzureArcInfrastructure",
    "AzureAttestation",
    "AzureAutomation",
    "AzureBackup",
    "AzureBotService",
    "AzureCognitiveSearch",
    "AzureConnectors",
    "AzureContainerRegistry",
    "AzureCosmosDB",
    "AzureDatabricks",
    "AzureDataExplorerManagement",
    "AzureDataLake",
    "AzureDeviceUpdate",
    "AzureDevOps",
    "AzureDevSpaces",
    "AzureDigitalTwins",
    "AzureEventGrid",
    "AzureEventHub",
    "AzureFrontDoor",
    "AzureIdentity",
    "AzureInformationProtection",
    "AzureIoTHub",
    "AzureKeyVault",
    "AzureLoadTestingInstanceManagement",
    "AzureMachineLearning",
    "AzureMachineLearningInference",
    "AzureManagedGrafana",
    "AzureMonitor",
    "AzureMonitorForSAP",
    "AzureOpenDatasets",
    "AzurePortal",
    "AzureResourceManager",
    "AzureSecurityCenter",
    "AzureSentinel",
    "AzureServiceBus",
    "AzureSignalR",
    "AzureSiteRecovery",
    "AzureSphereSecureService_Prod",
    "AzureSpringCloud",
    "AzureSQL",
    "AzureStack",
    "AzureStorage",
    "AzureTrafficManager",
    "AzureUpdateDelivery",
    "AzureVideoAnalyzerForMedia",
    "AzureWebPubSub",
    "BatchNodeManagement",
    "ChaosStudio",
    "CognitiveServicesFrontend",
    "CognitiveServicesManagement",
    "DataFactory",
    "Dynamics365BusinessCentral",
    "Dynamics365ForMarketingEmail",
    "ElasticAFD",
    "EOPExtPublished",
    "GatewayManager",
    "Grafana",
    "HDInsight",
    "LogicApps",
    "M365ManagementActivityApi",
    "M365ManagementActivityApiWebhook",
    "Marketplace",
    "MicrosoftAzureFluidRelay",
    "MicrosoftCloudAppSecurity",
    "MicrosoftContainerRegistry",
    "MicrosoftDefenderForEndpoint",
    "MicrosoftPurviewPolicyDistribution",
    "OneDsCollector",
    "PowerBI",
    "PowerPlatformInfra",
    "PowerPlatformPlex",
    "PowerQueryOnline",
    "SCCservice",
    "Scuba",
    "SecurityCopilot",
    "SerialConsole",
    "ServiceFabric",
    "SqlManagement",
    "StorageMover",
    "StorageSyncService",
    "TridentKusto",
    "WindowsAdminCenter",
    "WindowsVirtualDesktop",
    "WVDRelays",
];

/// Case-insensitive lookup into a vocabulary list.
pub(crate) fn is_known(vocabulary: &[&str], value: &str) -> bool {
    vocabulary.iter().any(|v| v.eq_ignore_ascii_case(value))
}
