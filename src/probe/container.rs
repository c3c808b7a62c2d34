use crate::concurrent::BoundedExecutor;
use crate::http_client::{container_url, listing_url};
use crate::permutations::PermutationSource;

use super::ProbeContext;

/// Ask `https://<account>/<fragment>` for an anonymous listing. Status 200 means
/// the container exists and is public.
pub async fn check_container(ctx: &ProbeContext, account: &str, fragment: &str) -> Option<String> {
    let (container, url) = match container_url(account, fragment).and_then(|c| listing_url(&c).map(|u| (c, u))) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::debug!(error = %e, "skipping container candidate");
            return None;
        }
    };

    ctx.stats.container_request();
    let status = match ctx.fetcher.status(&url).await {
        Ok(s) => s,
        Err(e) => {
            ctx.stats.transport_error();
            tracing::warn!(error = %e, "container probe failed");
            return None;
        }
    };

    if status == 200 {
        println!("[+] Container listable: {}", container);
        ctx.results.record_container(container.clone());
        Some(container)
    } else {
        ctx.report_inactive(format_args!("{} is not active ({})", url, status));
        None
    }
}

/// Every account x every fragment, one request each.
pub async fn probe_containers(
    ctx: &ProbeContext,
    accounts: &[String],
    fragments: &PermutationSource,
    executor: &BoundedExecutor,
) {
    let pairs: Vec<(String, String)> = accounts
        .iter()
        .flat_map(move |a| fragments.iter().map(move |f| (a.clone(), f.to_string())))
        .collect();
    if pairs.is_empty() {
        return;
    }
    tracing::debug!(requests = pairs.len(), "probing containers");

    executor
        .run_all(pairs, |(account, fragment)| {
            let ctx = ctx.clone();
            async move { check_container(&ctx, &account, &fragment).await }
        })
        .await;
}
