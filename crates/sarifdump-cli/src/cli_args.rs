use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sarifdump",
    version,
    about = "Load SARIF file(s) at or below a PATH and dump to stdout in a GCC-like format"
)]
pub(crate) struct Cli {
    /// Directory to search for SARIF files, or a single SARIF file
    pub path: PathBuf,

    /// Skip documents that fail to load or render instead of stopping.
    /// `--keep-going=false` overrides `keep_going` in sarifdump.json
    #[arg(
        long,
        env = "SARIFDUMP_KEEP_GOING",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub keep_going: Option<bool>,

    /// File name pattern of documents to dump (default: *.sarif)
    #[arg(long, env = "SARIFDUMP_PATTERN")]
    pub pattern: Option<String>,

    /// Log progress to stderr
    #[arg(long, env = "SARIFDUMP_VERBOSE")]
    pub verbose: bool,
}
