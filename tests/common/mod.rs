#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use parking_lot::Mutex;

use blob_hunter::dns::Resolver;
use blob_hunter::error::{HunterError, Result};
use blob_hunter::http_client::{ListingFetcher, ListingResponse};

/// Resolves only the hosts it was seeded with and remembers every query.
#[derive(Default)]
pub struct FakeResolver {
    live: HashSet<String>,
    pub queries: Mutex<Vec<String>>,
}

impl FakeResolver {
    pub fn with_live<I: IntoIterator<Item = &'static str>>(hosts: I) -> Self {
        Self { live: hosts.into_iter().map(str::to_string).collect(), queries: Mutex::new(Vec::new()) }
    }

    pub fn queried(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl Resolver for FakeResolver {
    async fn resolve(&self, host: &str) -> Option<IpAddr> {
        self.queries.lock().push(host.to_string());
        tokio::task::yield_now().await;
        self.live
            .contains(host)
            .then_some(IpAddr::V4(Ipv4Addr::new(20, 60, 0, 1)))
    }
}

pub enum Reply {
    Status(u16, String),
    /// Headers arrive with this status, then the connection drops mid-body.
    BrokenBody(u16),
    Fail,
}

/// Canned HTTP replies keyed by full URL. Unknown URLs answer 404.
#[derive(Default)]
pub struct FakeFetcher {
    replies: HashMap<String, Reply>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, url: &str, status: u16, body: &str) -> Self {
        self.replies.insert(url.to_string(), Reply::Status(status, body.to_string()));
        self
    }

    pub fn broken_body(mut self, url: &str, status: u16) -> Self {
        self.replies.insert(url.to_string(), Reply::BrokenBody(status));
        self
    }

    pub fn fail(mut self, url: &str) -> Self {
        self.replies.insert(url.to_string(), Reply::Fail);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ListingFetcher for FakeFetcher {
    async fn status(&self, url: &str) -> Result<u16> {
        self.requests.lock().push(url.to_string());
        tokio::task::yield_now().await;
        match self.replies.get(url) {
            Some(Reply::Status(status, _)) | Some(Reply::BrokenBody(status)) => Ok(*status),
            Some(Reply::Fail) => Err(HunterError::Transport { url: url.to_string(), reason: "connection reset".into() }),
            None => Ok(404),
        }
    }

    async fn fetch(&self, url: &str) -> Result<ListingResponse> {
        self.requests.lock().push(url.to_string());
        tokio::task::yield_now().await;
        match self.replies.get(url) {
            Some(Reply::Status(status, body)) => Ok(ListingResponse { status: *status, body: body.clone() }),
            Some(Reply::BrokenBody(_)) => Err(HunterError::Transport {
                url: url.to_string(),
                reason: "end of file before message length reached".into(),
            }),
            Some(Reply::Fail) => Err(HunterError::Transport { url: url.to_string(), reason: "connection reset".into() }),
            None => Ok(ListingResponse { status: 404, body: String::new() }),
        }
    }
}

pub fn listing_xml(container: &str, names: &[&str]) -> String {
    let blobs: String = names
        .iter()
        .map(|n| format!("<Blob><Name>{}</Name><Properties><Content-Length>1</Content-Length></Properties></Blob>", n))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><EnumerationResults ContainerName="{}"><Blobs>{}</Blobs><NextMarker /></EnumerationResults>"#,
        container, blobs
    )
}
