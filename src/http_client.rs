use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use url::Url;

use crate::error::{HunterError, Result};

/// Query string that asks the storage service for an anonymous container listing.
pub const LISTING_QUERY: &str = "restype=container&comp=list";

#[derive(Debug, Clone)]
pub struct ListingResponse {
    pub status: u16,
    pub body: String,
}

/// Anonymous GETs against the storage service.
#[async_trait]
pub trait ListingFetcher: Send + Sync {
    /// Status code only; the body is never read.
    async fn status(&self, url: &str) -> Result<u16>;

    /// Status plus the full body.
    async fn fetch(&self, url: &str) -> Result<ListingResponse>;
}

#[async_trait]
impl ListingFetcher for Client {
    async fn status(&self, url: &str) -> Result<u16> {
        let resp = self.get(url).send().await.map_err(|e| HunterError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(resp.status().as_u16())
    }

    async fn fetch(&self, url: &str) -> Result<ListingResponse> {
        let transport = |e: reqwest::Error| HunterError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        };
        let resp = self.get(url).send().await.map_err(transport)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(transport)?;
        Ok(ListingResponse { status, body })
    }
}

/// Fragments that would be rewritten by URL normalisation (dot segments,
/// query/fragment markers, extra path levels) cannot name a container.
pub fn is_container_name(fragment: &str) -> bool {
    !fragment.is_empty()
        && fragment != "."
        && fragment != ".."
        && !fragment.chars().any(|c| matches!(c, '/' | '\\' | '?' | '#') || c.is_whitespace())
}

/// `https://<account>/<container>` for a discovered account.
pub fn container_url(account: &str, container: &str) -> Result<String> {
    let url = format!("https://{}/{}", account, container);
    if !is_container_name(container) {
        return Err(HunterError::InvalidUrl(url));
    }
    Ok(url)
}

/// `<container-url>?restype=container&comp=list`, requested exactly as recorded.
pub fn listing_url(container: &str) -> Result<String> {
    let parsed = Url::parse(container).map_err(|_| HunterError::InvalidUrl(container.to_string()))?;
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(HunterError::InvalidUrl(container.to_string()));
    }
    Ok(format!("{}?{}", container, LISTING_QUERY))
}

/// Client used for container probes and listings: pooled, rustls, bounded timeouts.
pub fn create_listing_client(timeout_secs: u64, max_idle_connections: usize) -> anyhow::Result<Client> {
    let client = ClientBuilder::new()
        .pool_max_idle_per_host(max_idle_connections)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .tcp_nodelay(true)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(5))
        .gzip(true)
        .brotli(true)
        .use_rustls_tls()
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
        .build()?;
    Ok(client)
}
