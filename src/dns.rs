use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Answers "does this hostname resolve". Every failure (NXDOMAIN, timeout, ...) is `None`.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, host: &str) -> Option<IpAddr>;
}

/// OS resolver through `tokio::net::lookup_host`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

#[async_trait]
impl Resolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Option<IpAddr> {
        match tokio::net::lookup_host((host, 443)).await {
            Ok(mut addrs) => addrs.next().map(|a| a.ip()),
            Err(e) => {
                tracing::trace!(host, error = %e, "lookup failed");
                None
            }
        }
    }
}

pub struct HickoryResolver {
    inner: TokioAsyncResolver,
}

impl HickoryResolver {
    /// Uses the system resolv.conf when readable, public defaults otherwise.
    pub fn new() -> Self {
        let inner = TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "system resolver config unavailable, using defaults");
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        });
        Self { inner }
    }
}

impl Default for HickoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resolver for HickoryResolver {
    async fn resolve(&self, host: &str) -> Option<IpAddr> {
        // trailing dot keeps search domains out of the lookup
        let fqdn = format!("{}.", host.trim_end_matches('.'));
        match self.inner.lookup_ip(fqdn.as_str()).await {
            Ok(lookup) => lookup.iter().next(),
            Err(e) => {
                tracing::trace!(host, error = %e, "lookup failed");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ResolverKind {
    #[default]
    System,
    Hickory,
}

pub fn build_resolver(kind: ResolverKind) -> std::sync::Arc<dyn Resolver> {
    match kind {
        ResolverKind::System => std::sync::Arc::new(SystemResolver),
        ResolverKind::Hickory => std::sync::Arc::new(HickoryResolver::new()),
    }
}
