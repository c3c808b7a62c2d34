use crate::aggregator::AggregatedResult;
use crate::catalog::SuffixCatalog;
use crate::probe::StatsSnapshot;

fn section(title: &str, items: &[String]) {
    println!("\n########## {} ({}) ##########", title, items.len());
    if items.is_empty() {
        println!("    (none)");
    }
    for it in items {
        println!("    {}", it);
    }
}

/// `domain [service]` for each account, the label taken from the catalog.
pub fn account_lines(accounts: &[String], catalog: &SuffixCatalog) -> Vec<String> {
    accounts
        .iter()
        .map(|a| match catalog.service_for(a) {
            Some(label) => format!("{} [{}]", a, label),
            None => a.clone(),
        })
        .collect()
}

pub fn print_results(result: &AggregatedResult, catalog: &SuffixCatalog) {
    if result.is_empty() {
        println!("\n[-] Nothing found");
        return;
    }
    section("Active Accounts", &account_lines(&result.accounts, catalog));
    section("Active Containers", &result.containers);
    section("Files Found", &result.files);
}

pub fn print_stats(stats: &StatsSnapshot) {
    println!(
        "\n[*] {} DNS lookups, {} container probes, {} listings, {} transport errors",
        stats.dns_lookups, stats.container_requests, stats.listing_requests, stats.transport_errors
    );
}
