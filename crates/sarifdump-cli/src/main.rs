//! sarifdump CLI — print SARIF results as GCC-style diagnostics.
//!
//! `sarifdump <path>` finds every `*.sarif` file at or below `path` and writes
//! its results to stdout, one `file:line:col: level: message` line per result,
//! so they can be stepped through from an editor's compilation buffer.

use clap::Parser;

mod cli_args;
mod dump;

use cli_args::Cli;

fn main() {
    let cli = Cli::parse();
    std::process::exit(dump::run(&cli));
}
