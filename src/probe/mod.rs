pub mod account;
pub mod container;
pub mod files;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::aggregator::ResultAggregator;
use crate::dns::Resolver;
use crate::http_client::ListingFetcher;

/// Request counters, bumped from inside probe tasks.
#[derive(Debug, Default)]
pub struct ProbeStats {
    dns_lookups: AtomicUsize,
    container_requests: AtomicUsize,
    listing_requests: AtomicUsize,
    transport_errors: AtomicUsize,
    inactive_reported: AtomicUsize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub dns_lookups: usize,
    pub container_requests: usize,
    pub listing_requests: usize,
    pub transport_errors: usize,
    /// Inactive-candidate lines printed; stays 0 unless verbose.
    pub inactive_reported: usize,
}

impl ProbeStats {
    pub(crate) fn dns_lookup(&self) {
        self.dns_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn container_request(&self) {
        self.container_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn listing_request(&self) {
        self.listing_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn transport_error(&self) {
        self.transport_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            dns_lookups: self.dns_lookups.load(Ordering::Relaxed),
            container_requests: self.container_requests.load(Ordering::Relaxed),
            listing_requests: self.listing_requests.load(Ordering::Relaxed),
            transport_errors: self.transport_errors.load(Ordering::Relaxed),
            inactive_reported: self.inactive_reported.load(Ordering::Relaxed),
        }
    }
}

/// Handles every probe task clones: network seams, the shared aggregator and counters.
#[derive(Clone)]
pub struct ProbeContext {
    pub resolver: Arc<dyn Resolver>,
    pub fetcher: Arc<dyn ListingFetcher>,
    pub results: Arc<ResultAggregator>,
    pub stats: Arc<ProbeStats>,
    pub verbose: bool,
}

impl ProbeContext {
    pub fn new(resolver: Arc<dyn Resolver>, fetcher: Arc<dyn ListingFetcher>, verbose: bool) -> Self {
        Self {
            resolver,
            fetcher,
            results: Arc::new(ResultAggregator::new()),
            stats: Arc::new(ProbeStats::default()),
            verbose,
        }
    }

    /// Inactive candidates are only mentioned in verbose mode.
    pub fn report_inactive(&self, line: fmt::Arguments<'_>) {
        if !self.verbose {
            return;
        }
        self.stats.inactive_reported.fetch_add(1, Ordering::Relaxed);
        println!("[-] {}", line);
    }
}
