use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Everything a run discovered, in recording order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedResult {
    pub accounts: Vec<String>,
    pub containers: Vec<String>,
    pub files: Vec<String>,
}

impl AggregatedResult {
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.containers.is_empty() && self.files.is_empty()
    }
}

/// Shared sink for all probe tasks. One lock guards all three collections;
/// nothing is deduplicated.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    inner: Mutex<AggregatedResult>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_account(&self, domain: impl Into<String>) {
        self.inner.lock().accounts.push(domain.into());
    }

    pub fn record_container(&self, url: impl Into<String>) {
        self.inner.lock().containers.push(url.into());
    }

    pub fn record_files<I>(&self, uris: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.inner.lock().files.extend(uris);
    }

    pub fn accounts(&self) -> Vec<String> {
        self.inner.lock().accounts.clone()
    }

    pub fn containers(&self) -> Vec<String> {
        self.inner.lock().containers.clone()
    }

    pub fn files(&self) -> Vec<String> {
        self.inner.lock().files.clone()
    }

    pub fn snapshot(&self) -> AggregatedResult {
        self.inner.lock().clone()
    }
}
