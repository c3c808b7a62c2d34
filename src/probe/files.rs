use crate::concurrent::BoundedExecutor;
use crate::error::HunterError;
use crate::http_client::listing_url;
use crate::listing::EnumerationResults;

use super::ProbeContext;

pub fn file_uri(container: &str, blob_name: &str) -> String {
    format!("{}/{}", container.trim_end_matches('/'), blob_name)
}

/// One listing call for `container`. Returns the blob URIs it recorded; any
/// failure leaves the container with no files.
pub async fn list_container(ctx: &ProbeContext, container: &str) -> Vec<String> {
    match fetch_listing(ctx, container).await {
        Ok(doc) => {
            if doc.is_truncated() {
                tracing::warn!(container, "listing truncated, only the first page was recorded");
            }
            let uris: Vec<String> = doc
                .blobs()
                .iter()
                .map(|blob| {
                    tracing::debug!(container, blob = %blob.name, size = ?blob.size(), "blob");
                    file_uri(container, &blob.name)
                })
                .collect();
            ctx.results.record_files(uris.clone());
            uris
        }
        Err(HunterError::Transport { url, reason }) => {
            ctx.stats.transport_error();
            tracing::warn!(url = %url, reason = %reason, "listing request failed");
            Vec::new()
        }
        Err(e) => {
            tracing::debug!(container, error = %e, "no files recorded");
            Vec::new()
        }
    }
}

async fn fetch_listing(ctx: &ProbeContext, container: &str) -> crate::error::Result<EnumerationResults> {
    let url = listing_url(container)?;
    ctx.stats.listing_request();
    let resp = ctx.fetcher.fetch(&url).await?;
    if resp.status != 200 {
        return Err(HunterError::Status(resp.status));
    }
    EnumerationResults::parse(&resp.body)
}

pub async fn list_files(ctx: &ProbeContext, containers: &[String], executor: &BoundedExecutor) {
    if containers.is_empty() {
        return;
    }
    executor
        .run_all(containers.to_vec(), |container| {
            let ctx = ctx.clone();
            async move { list_container(&ctx, &container).await }
        })
        .await;
}
