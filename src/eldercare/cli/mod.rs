//! # CLI Behavior
//!
//! One possible client of the eldercare library, and the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution
//!
//! Running `eldercare` with no subcommand starts the numbered menu shell
//! (`eldercare shell` does the same). The data file is loaded first unless
//! `load-on-start` is turned off in the config.
//!
//! ## One-shot Commands
//!
//! `add`, `list`, `show`, `search`, `edit`, `delete` and `config` run a single
//! operation. They always load the data file first, and the mutating ones save
//! it back after success, so the file is the only state between runs.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: dispatch and per-command handlers
//! - `shell`: the interactive menu
//! - `render`: output formatting (records, tables, messages)

mod commands;
mod render;
pub mod setup;
mod shell;

pub use commands::run;

use env_logger::Env;
use log::LevelFilter;

/// Logs go to stderr. `--verbose` turns on debug output for this crate;
/// otherwise `RUST_LOG` decides, defaulting to warnings only.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("eldercare", LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
