//! Output formatters for sarifdump.
//!
//! [`gcc::GccFormatter`] prints results the way GCC prints diagnostics, so an
//! editor's compilation buffer can jump to each location.

pub mod gcc;
pub(crate) mod gcc_helpers;

use std::io::Write;

use sarifdump_core::types::SarifResult;
use sarifdump_core::SarifLog;

/// Errors raised while rendering a single result.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("result {result}: missing required member `{field}`")]
    MissingField { result: usize, field: String },
}

/// Errors raised while writing a whole document.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub trait ResultFormatter {
    /// Render one result, including any trailing trace lines.
    ///
    /// `index` is the position of the result in the document, used in errors.
    fn format_result(&mut self, index: usize, result: &SarifResult) -> Result<String, RenderError>;

    /// Render every result of `log` to `out` in document order, returning the
    /// number of results written.
    ///
    /// Each result is written only once fully rendered, so a failing result
    /// leaves no partial line behind. Results before it stay written.
    fn write_document(&mut self, log: &SarifLog, out: &mut dyn Write) -> Result<usize, FormatError> {
        let mut written = 0;
        for (index, result) in log.results().enumerate() {
            let text = self.format_result(index, result)?;
            out.write_all(text.as_bytes())?;
            written += 1;
        }
        Ok(written)
    }
}
