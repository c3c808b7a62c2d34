use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use blob_hunter::catalog::SuffixCatalog;
use blob_hunter::config::EngineConfig;
use blob_hunter::dns::{build_resolver, ResolverKind};
use blob_hunter::engine::Engine;
use blob_hunter::http_client::create_listing_client;
use blob_hunter::output::{print_results, print_stats, write_json, write_tagged, JsonReport};
use blob_hunter::permutations::{PermutationSource, DEFAULT_WORDLIST};

fn print_ascii_logo() {
    println!(r#"
     ___  _     ___  ___   _  _ _   _ _  _ _____ ___ ___
    | _ )| |   / _ \| _ ) | || | | | | \| |_   _| __| _ \
    | _ \| |__| (_) | _ \ | __ | |_| | .` | | | | _||   /
    |___/|____|\___/|___/ |_||_|\___/|_|\_| |_| |___|_|_\

              Azure Tenant Asset Enumerator v0.1.0
    "#);
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    let verbose = matches!(cli.command, Commands::Scan { verbose: true, .. });
    init_tracing(cli.debug, verbose);

    match cli.command {
        Commands::Suffixes => {
            for entry in SuffixCatalog::azure().entries() {
                println!("{:<30} -> {}", entry.suffix, entry.label);
            }
            Ok(())
        }
        Commands::Scan { base, wordlist, verbose, output, json, concurrency, list_concurrency, timeout, resolver } => {
            let config = EngineConfig {
                base,
                verbose,
                concurrency,
                list_concurrency,
                timeout_secs: timeout,
            };
            run_scan(config, wordlist, output, json, resolver).await
        }
    }
}

// Keep reqwest/hyper/hickory quiet regardless of our own level.
fn init_tracing(debug: bool, verbose: bool) {
    use tracing_subscriber::EnvFilter;
    let crate_level = if debug { "debug" } else if verbose { "info" } else { "warn" };
    let filter_str = format!(
        "blob_hunter={level},reqwest=info,hyper=info,h2=info,rustls=warn,hickory_proto=warn,hickory_resolver=warn",
        level = crate_level
    );
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .init();
}

async fn run_scan(
    config: EngineConfig,
    wordlist: Option<String>,
    output: Option<String>,
    json: Option<String>,
    resolver: ResolverKind,
) -> anyhow::Result<()> {
    let wordlist = match wordlist {
        Some(w) => PathBuf::from(w),
        None => {
            println!("[*] Using default wordlist");
            PathBuf::from(DEFAULT_WORDLIST)
        }
    };
    // unreadable wordlist aborts before any probe goes out
    let fragments = PermutationSource::from_path(&wordlist)?;

    let client = create_listing_client(config.timeout_secs, config.probe_permits().min(500))?;
    let base = config.base.trim().to_string();
    let concurrency = config.concurrency;
    let permutations = fragments.len();

    let engine = Engine::new(config, SuffixCatalog::azure(), fragments, build_resolver(resolver), Arc::new(client))?;

    tracing::info!(base = %base, wordlist = %wordlist.display(), permutations, concurrency, "Starting scan");
    print_ascii_logo();
    println!("[>] Base: {}", base);
    println!("[~] {} permutations, concurrency {}", permutations, concurrency);
    println!("\n{}\n", "-".repeat(60));

    let started = Instant::now();
    let result = engine.run().await;
    let elapsed = started.elapsed();

    print_results(&result, engine.catalog());
    print_stats(&engine.stats());

    if let Some(path) = json {
        let report = JsonReport {
            base: &base,
            elapsed_ms: elapsed.as_millis() as u64,
            stats: engine.stats(),
            results: &result,
        };
        write_json(PathBuf::from(&path).as_path(), &report)?;
        println!("[+] JSON report written to {}", path);
    }

    if let Some(path) = output {
        if let Err(e) = write_tagged(PathBuf::from(&path).as_path(), &result) {
            eprintln!("[!] {}", e);
            return Err(e.into());
        }
        println!("[+] Results appended to {}", path);
    }

    println!("\n[*] Execution time: {:.2?}", elapsed);
    Ok(())
}
