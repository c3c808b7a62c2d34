/// Azure service domains probed for `<base>.<suffix>` accounts.
const AZURE_SUFFIXES: &[(&str, &str)] = &[
    ("onmicrosoft.com", "Microsoft Hosted Domain"),
    ("scm.azurewebsites.net", "App Services - Management"),
    ("azurewebsites.net", "App Services"),
    ("p.azurewebsites.net", "App Services"),
    ("cloudapp.net", "App Services"),
    ("file.core.windows.net", "Storage Accounts - Files"),
    ("blob.core.windows.net", "Storage Accounts - Blobs"),
    ("queue.core.windows.net", "Storage Accounts - Queues"),
    ("table.core.windows.net", "Storage Accounts - Tables"),
    ("mail.protection.outlook.com", "Email"),
    ("sharepoint.com", "SharePoint"),
    ("redis.cache.windows.net", "Databases-Redis"),
    ("documents.azure.com", "Databases-Cosmos DB"),
    ("database.windows.net", "Databases-MSSQL"),
    ("vault.azure.net", "Key Vaults"),
    ("azureedge.net", "CDN"),
    ("search.windows.net", "Search Appliance"),
    ("azure-api.net", "API Services"),
    ("azurecr.io", "Azure Container Registry"),
    ("servicebus.windows.net", "Service Bus"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixEntry {
    pub suffix: String,
    pub label: String,
}

/// Immutable suffix -> service label mapping.
#[derive(Debug, Clone)]
pub struct SuffixCatalog {
    entries: Vec<SuffixEntry>,
}

impl SuffixCatalog {
    pub fn azure() -> Self {
        Self::from_pairs(AZURE_SUFFIXES.iter().copied())
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(suffix, label)| SuffixEntry {
                suffix: suffix.trim_matches('.').to_lowercase(),
                label: label.to_string(),
            })
            .collect();
        Self { entries }
    }

    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.suffix.as_str())
    }

    pub fn entries(&self) -> &[SuffixEntry] {
        &self.entries
    }

    pub fn label(&self, suffix: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.suffix == suffix)
            .map(|e| e.label.as_str())
    }

    /// Label of the longest suffix that `domain` ends with.
    pub fn service_for(&self, domain: &str) -> Option<&str> {
        self.entries
            .iter()
            .filter(|e| {
                domain
                    .strip_suffix(e.suffix.as_str())
                    .is_some_and(|head| head.ends_with('.'))
            })
            .max_by_key(|e| e.suffix.len())
            .map(|e| e.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SuffixCatalog {
    fn default() -> Self {
        Self::azure()
    }
}
