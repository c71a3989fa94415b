use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::vendor::DEFAULT_VENDOR_MARKER;

#[derive(Parser, Debug)]
#[command(
    name = "vendor-prune",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Cli {
    /// Directory relative paths and manifest entries are resolved against (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR", global = true)]
    pub base_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the manifest entries that would be pruned
    Entries(EntriesOptions),
    /// Prune the modules owning the given entry paths
    Prune(PruneOptions),
    /// Truncate the given files to zero bytes
    Stub(StubOptions),
    /// Prune every module in the bundle and stub its entries
    Clean(CleanOptions),
    /// Print a shell completion script
    Completions(CompletionsOptions),
}

#[derive(Args, Debug, Clone)]
pub struct FilterOptions {
    /// Vendor bundle manifest (JSON with a `content` map)
    #[arg(short, long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Module name to leave untouched (repeatable)
    #[arg(short, long = "allow", value_name = "NAME")]
    pub allow: Vec<String>,

    /// Directory name that marks vendored modules
    #[arg(long, value_name = "DIR", default_value = DEFAULT_VENDOR_MARKER)]
    pub marker: String,
}

#[derive(Args, Debug)]
pub struct EntriesOptions {
    #[command(flatten)]
    pub filter: FilterOptions,
}

#[derive(Args, Debug)]
pub struct PruneOptions {
    /// Entry paths whose owning module should be pruned
    #[arg(name = "ENTRY", required = true)]
    pub entries: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StubOptions {
    /// Files to truncate or create
    #[arg(name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CleanOptions {
    #[command(flatten)]
    pub filter: FilterOptions,

    /// Number of modules pruned in parallel
    #[arg(short, long, value_name = "N", default_value = "1")]
    pub jobs: NonZeroUsize,

    /// Do not leave empty stub files at the entry paths
    #[arg(long)]
    pub no_stubs: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsOptions {
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
