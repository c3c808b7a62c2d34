use serde::Deserialize;
use tokio::sync::Semaphore;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Base identifier every candidate hostname is built from (e.g. `contoso`)
    pub base: String,
    /// Emit a line for every inactive candidate
    pub verbose: bool,
    /// Max in-flight DNS lookups / container probes. 0 = unbounded.
    pub concurrency: usize,
    /// Max in-flight listing requests. 1 keeps the file listing sequential.
    pub list_concurrency: usize,
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base: String::new(),
            verbose: false,
            concurrency: 50,
            list_concurrency: 1,
            timeout_secs: 10,
        }
    }
}

impl EngineConfig {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into(), ..Self::default() }
    }

    pub fn probe_permits(&self) -> usize {
        effective_limit(self.concurrency)
    }

    pub fn list_permits(&self) -> usize {
        effective_limit(self.list_concurrency)
    }
}

fn effective_limit(limit: usize) -> usize {
    if limit == 0 {
        Semaphore::MAX_PERMITS
    } else {
        limit.min(Semaphore::MAX_PERMITS)
    }
}
