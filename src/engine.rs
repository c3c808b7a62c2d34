use std::sync::Arc;

use crate::aggregator::{AggregatedResult, ResultAggregator};
use crate::catalog::SuffixCatalog;
use crate::concurrent::BoundedExecutor;
use crate::config::EngineConfig;
use crate::dns::Resolver;
use crate::error::{HunterError, Result};
use crate::http_client::ListingFetcher;
use crate::permutations::PermutationSource;
use crate::probe::{account, container, files, ProbeContext, StatsSnapshot};

/// Three-phase enumeration: accounts, then containers, then files. A phase
/// starts only after every task of the previous one has finished.
pub struct Engine {
    config: EngineConfig,
    catalog: SuffixCatalog,
    fragments: PermutationSource,
    ctx: ProbeContext,
}

impl Engine {
    pub fn new(
        config: EngineConfig,
        catalog: SuffixCatalog,
        fragments: PermutationSource,
        resolver: Arc<dyn Resolver>,
        fetcher: Arc<dyn ListingFetcher>,
    ) -> Result<Self> {
        if config.base.trim().is_empty() {
            return Err(HunterError::EmptyBase);
        }
        let ctx = ProbeContext::new(resolver, fetcher, config.verbose);
        Ok(Self { config, catalog, fragments, ctx })
    }

    pub async fn run(&self) -> AggregatedResult {
        self.probe_accounts().await;
        let accounts = self.ctx.results.accounts();
        tracing::info!(accounts = accounts.len(), "account phase done");

        self.probe_containers(&accounts).await;
        let containers = self.ctx.results.containers();
        tracing::info!(containers = containers.len(), "container phase done");

        self.list_files(&containers).await;
        tracing::info!(files = self.ctx.results.files().len(), "listing phase done");

        self.ctx.results.snapshot()
    }

    pub async fn probe_accounts(&self) {
        let exec = BoundedExecutor::new(self.config.probe_permits());
        account::probe_accounts(&self.ctx, self.config.base.trim(), &self.catalog, &self.fragments, &exec).await;
        log_executor("accounts", &exec);
    }

    pub async fn probe_containers(&self, accounts: &[String]) {
        let exec = BoundedExecutor::new(self.config.probe_permits());
        container::probe_containers(&self.ctx, accounts, &self.fragments, &exec).await;
        log_executor("containers", &exec);
    }

    pub async fn list_files(&self, containers: &[String]) {
        let exec = BoundedExecutor::new(self.config.list_permits());
        files::list_files(&self.ctx, containers, &exec).await;
        log_executor("files", &exec);
    }

    pub fn results(&self) -> &Arc<ResultAggregator> {
        &self.ctx.results
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.ctx.stats.snapshot()
    }

    pub fn catalog(&self) -> &SuffixCatalog {
        &self.catalog
    }
}

fn log_executor(phase: &str, exec: &BoundedExecutor) {
    let (completed, failed) = exec.get_stats();
    if failed > 0 {
        tracing::warn!(phase, completed, failed, "some probe tasks did not finish");
    } else {
        tracing::debug!(phase, completed, "phase tasks finished");
    }
}
