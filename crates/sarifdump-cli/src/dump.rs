use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sarifdump_core::config::DumpConfig;
use sarifdump_core::walker::SarifWalker;
use sarifdump_core::LoadError;
use sarifdump_output::gcc::GccFormatter;
use sarifdump_output::{FormatError, RenderError, ResultFormatter};

use crate::cli_args::Cli;

#[derive(Debug, thiserror::Error)]
pub(crate) enum DumpError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Run `sarifdump <path>` — dump every SARIF document below `path`.
///
/// Exit codes: 0 when everything was dumped, 1 when `--keep-going` skipped
/// documents, 2 on a fatal error.
pub(crate) fn run(cli: &Cli) -> i32 {
    if !cli.path.exists() {
        eprintln!("sarifdump: {}: no such file or directory", cli.path.display());
        return 2;
    }

    let config = DumpConfig::load(&cli.path);
    let keep_going = cli.keep_going.unwrap_or(config.keep_going);
    let pattern = cli.pattern.clone().unwrap_or(config.pattern);

    let walker = match SarifWalker::new(&cli.path, &pattern) {
        Ok(w) => w.follow_links(config.follow_links).exclude(config.exclude),
        Err(e) => {
            eprintln!("sarifdump: invalid pattern {:?}: {}", pattern, e);
            return 2;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut skipped = 0usize;

    for entry in walker.walk() {
        if cli.verbose {
            eprintln!("sarifdump: reading {}", entry.path.display());
        }
        match dump_document(&entry.path, entry.base_path(), &mut out, cli.verbose) {
            Ok(_) => {}
            Err(DumpError::Write(e)) if e.kind() == io::ErrorKind::BrokenPipe => return 0,
            Err(e @ DumpError::Write(_)) => {
                eprintln!("sarifdump: {}", e);
                return 2;
            }
            Err(e) if keep_going => {
                eprintln!("sarifdump: warning: skipping rest of document: {}", e);
                skipped += 1;
            }
            Err(e) => {
                eprintln!("sarifdump: {}", e);
                return 2;
            }
        }
    }

    if let Err(e) = out.flush() {
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("sarifdump: failed to write output: {}", e);
            return 2;
        }
    }

    if skipped > 0 {
        eprintln!("sarifdump: {} document(s) skipped", skipped);
        return 1;
    }
    0
}

/// Load one document and write its results with a fresh formatter.
pub(crate) fn dump_document(
    path: &Path,
    base_path: &Path,
    out: &mut dyn Write,
    verbose: bool,
) -> Result<usize, DumpError> {
    let log = sarifdump_core::load(path)?;

    if verbose {
        eprintln!(
            "sarifdump: {}: SARIF {} with {} run(s), {} result(s)",
            path.display(),
            log.version.as_deref().unwrap_or("(unversioned)"),
            log.runs.len(),
            log.result_count(),
        );
        for (i, run) in log.runs.iter().enumerate() {
            eprintln!(
                "sarifdump: {}: run {} from {} with {} result(s)",
                path.display(),
                i,
                run.tool_name().unwrap_or("unknown tool"),
                run.results().len(),
            );
        }
    }

    let mut formatter = GccFormatter::new(base_path);
    formatter.write_document(&log, out).map_err(|e| match e {
        FormatError::Render(source) => DumpError::Render {
            path: path.to_path_buf(),
            source,
        },
        FormatError::Io(e) => DumpError::Write(e),
    })
}
