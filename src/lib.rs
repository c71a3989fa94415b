#![doc = include_str!("../README.md")]

pub mod cli;
pub mod completions;
pub mod engine;
pub mod error;
pub mod logger;
pub mod printer;
pub mod vendor;

pub use engine::{CleanConfig, CleanEngine, CleanReport};
pub use error::{PruneError, Result};
pub use vendor::{get_entries, prune, write_empty, EntryFilter, PruneOutcome};

use cli::{Cli, FilterOptions};
use logger::*;
use std::env;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = cli::parse_args();
    run_with_cli(cli)
}

pub fn run_with_cli(cli: Cli) -> Result<()> {
    logger::init(cli.verbose);
    info!("start");
    debug!("cli args: {:?}", cli);

    let base_dir = match cli.base_dir.clone() {
        Some(dir) => dir,
        None => env::current_dir().map_err(|err| PruneError::io(".", err))?,
    };

    dispatcher(cli.cmd, base_dir).map_err(|err| {
        error!("failed to execute command: {}", err);
        err
    })?;
    info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn dispatcher(cmd: cli::Commands, base_dir: PathBuf) -> Result<()> {
    debug!("dispatching command: {:?}", cmd);
    match cmd {
        cli::Commands::Entries(opts) => {
            let filter = entry_filter(&opts.filter);
            let entries = get_entries(&base_dir.join(&opts.filter.manifest), &filter)?;
            if entries.is_empty() {
                printer::warn("No prunable entries in manifest.");
            }
            printer::print_entries(&entries);
            Ok(())
        }
        cli::Commands::Prune(opts) => {
            let sink = LogSink;
            for entry in &opts.entries {
                let path = base_dir.join(entry);
                let outcome = prune(&sink, &path)?;
                printer::print_outcome(entry, outcome);
            }
            Ok(())
        }
        cli::Commands::Stub(opts) => {
            for path in &opts.paths {
                write_empty(&base_dir.join(path))?;
            }
            Ok(())
        }
        cli::Commands::Clean(opts) => {
            let config = CleanConfig {
                manifest: base_dir.join(&opts.filter.manifest),
                filter: entry_filter(&opts.filter),
                jobs: opts.jobs,
                write_stubs: !opts.no_stubs,
                base_dir,
            };
            let report = CleanEngine::new(config).run(&LogSink)?;
            printer::print_report(&report);
            Ok(())
        }
        cli::Commands::Completions(opts) => {
            completions::print(opts.shell);
            Ok(())
        }
    }
}

fn entry_filter(opts: &FilterOptions) -> EntryFilter {
    EntryFilter::new(opts.marker.clone(), opts.allow.clone())
}
