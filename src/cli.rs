use clap::Parser;

use blob_hunter::dns::ResolverKind;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable detailed debug logging (global)
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Enumerate accounts, public containers and files for a base name
    Scan {
        /// Base name to permute (e.g. contoso)
        #[arg(short = 'b', long)]
        base: String,

        /// Wordlist of permutations, one per line (default: perm.txt)
        #[arg(short = 'w', long)]
        wordlist: Option<String>,

        /// Print every inactive account / container candidate
        #[arg(short = 'v', long, default_value_t = false)]
        verbose: bool,

        /// Append bucket:/url:/data: lines to this file
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Write a JSON report to this file
        #[arg(long, value_name = "FILE")]
        json: Option<String>,

        /// Max concurrent DNS lookups / container probes (0 = unbounded)
        #[arg(short = 'c', long, default_value_t = 50_usize)]
        concurrency: usize,

        /// Max concurrent container listings (1 = sequential)
        #[arg(long, default_value_t = 1_usize)]
        list_concurrency: usize,

        /// Request timeout in seconds (default: 10)
        #[arg(long, default_value_t = 10_u64)]
        timeout: u64,

        /// DNS backend
        #[arg(long, value_enum, default_value_t = ResolverKind::System)]
        resolver: ResolverKind,
    },

    /// List the provider domain suffixes that are probed
    Suffixes,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
