use crate::catalog::SuffixCatalog;
use crate::concurrent::BoundedExecutor;
use crate::permutations::PermutationSource;

use super::ProbeContext;

/// base (+ fragment) + suffix, composed into a hostname on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub base: String,
    pub fragment: Option<String>,
    pub suffix: String,
    pub service: String,
}

impl Candidate {
    pub fn domain(&self) -> String {
        match &self.fragment {
            Some(f) => format!("{}{}.{}", self.base, f, self.suffix),
            None => format!("{}.{}", self.base, self.suffix),
        }
    }
}

pub fn naked_candidates(base: &str, catalog: &SuffixCatalog) -> Vec<Candidate> {
    catalog
        .entries()
        .iter()
        .map(|e| Candidate {
            base: base.to_string(),
            fragment: None,
            suffix: e.suffix.clone(),
            service: e.label.clone(),
        })
        .collect()
}

/// suffix x fragment cross product.
pub fn permuted_candidates(base: &str, catalog: &SuffixCatalog, fragments: &PermutationSource) -> Vec<Candidate> {
    catalog
        .entries()
        .iter()
        .flat_map(move |e| {
            fragments.iter().map(move |f| Candidate {
                base: base.to_string(),
                fragment: Some(f.to_string()),
                suffix: e.suffix.clone(),
                service: e.label.clone(),
            })
        })
        .collect()
}

/// Resolve one candidate and record it when it answers.
pub async fn check_candidate(ctx: &ProbeContext, candidate: &Candidate) -> bool {
    let domain = candidate.domain();
    ctx.stats.dns_lookup();
    match ctx.resolver.resolve(&domain).await {
        Some(ip) => {
            println!("[+] Account active: {} ({}) [{}]", domain, ip, candidate.service);
            tracing::debug!(domain = %domain, ip = %ip, service = %candidate.service, "account active");
            ctx.results.record_account(domain);
            true
        }
        None => {
            ctx.report_inactive(format_args!("{} is not active", domain));
            false
        }
    }
}

/// Naked domains first, one at a time, then every permutation through the executor.
pub async fn probe_accounts(
    ctx: &ProbeContext,
    base: &str,
    catalog: &SuffixCatalog,
    fragments: &PermutationSource,
    executor: &BoundedExecutor,
) {
    for candidate in naked_candidates(base, catalog) {
        check_candidate(ctx, &candidate).await;
    }

    let permuted = permuted_candidates(base, catalog, fragments);
    if permuted.is_empty() {
        return;
    }
    tracing::debug!(candidates = permuted.len(), "probing permuted account names");

    executor
        .run_all(permuted, |candidate| {
            let ctx = ctx.clone();
            async move { check_candidate(&ctx, &candidate).await }
        })
        .await;
}
