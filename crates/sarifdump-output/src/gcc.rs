use std::path::PathBuf;

use sarifdump_core::types::{CodeFlow, Location, LogicalLocation, SarifResult};

use crate::gcc_helpers::{format_physical_location, format_taxon, function_header};
use crate::{RenderError, ResultFormatter};

/// Prints results in the shape of GCC diagnostics:
///
/// ```text
/// In function 'main':
/// src/foo.c:42:5: warning: dereference of NULL 'p' [CWE-476] [-Wanalyzer-null-dereference]
/// src/foo.c:40:9: (1) 'p' is NULL
/// src/foo.c:42:5: (2) dereference of NULL 'p'
/// ```
///
/// Only the first location, the first code flow and its first thread flow of a
/// result are rendered; the rest are ignored.
///
/// The formatter remembers the last logical location it saw so that a run of
/// results (or trace steps) in the same function prints the `In function`
/// header once. Use one formatter per document.
pub struct GccFormatter {
    base_path: PathBuf,
    last_logical_location: Option<LogicalLocation>,
}

impl GccFormatter {
    /// `base_path` is the directory of the document; artifact URIs are joined onto it.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            last_logical_location: None,
        }
    }

    fn write_result(&mut self, out: &mut String, result: &SarifResult) -> Result<(), String> {
        if let Some(location) = result.primary_location() {
            self.write_location(out, location, "locations[0]")?;
        }

        if let Some(level) = &result.level {
            out.push_str(&format!("{}: ", level));
        }

        let text = result
            .message_text()
            .ok_or_else(|| "message.text".to_string())?;
        out.push_str(text);

        for (i, taxon) in result.taxa.iter().enumerate() {
            if let Some(annotation) = format_taxon(taxon).map_err(|f| format!("taxa[{i}].{f}"))? {
                out.push_str(&annotation);
            }
        }

        if let Some(rule_id) = &result.rule_id {
            out.push_str(&format!(" [{}]", rule_id));
        }
        out.push('\n');

        if let Some(flow) = result.primary_code_flow() {
            self.write_code_flow(out, flow)?;
        }
        Ok(())
    }

    /// `at` names the location within the result, for error messages.
    fn write_location(&mut self, out: &mut String, location: &Location, at: &str) -> Result<(), String> {
        if let Some(logical) = location.primary_logical_location() {
            self.write_logical_location(out, logical)
                .map_err(|f| format!("{at}.logicalLocations[0].{f}"))?;
        }
        if let Some(phys) = &location.physical_location {
            let prefix = format_physical_location(&self.base_path, phys)
                .map_err(|f| format!("{at}.{f}"))?;
            out.push_str(&prefix);
        }
        Ok(())
    }

    fn write_logical_location(
        &mut self,
        out: &mut String,
        logical: &LogicalLocation,
    ) -> Result<(), &'static str> {
        if self.last_logical_location.as_ref() == Some(logical) {
            return Ok(());
        }
        self.last_logical_location = Some(logical.clone());
        if let Some(header) = function_header(logical)? {
            out.push_str(&header);
        }
        Ok(())
    }

    fn write_code_flow(&mut self, out: &mut String, flow: &CodeFlow) -> Result<(), String> {
        let Some(thread_flow) = flow.primary_thread_flow() else {
            return Ok(());
        };

        for (i, step) in thread_flow.locations.iter().enumerate() {
            let at = format!("codeFlows[0].threadFlows[0].locations[{i}].location");
            let location = step.location.as_ref().ok_or_else(|| at.clone())?;
            self.write_location(out, location, &at)?;
            out.push_str(&format!("({}) ", i + 1));
            let text = location
                .message_text()
                .ok_or_else(|| format!("{at}.message.text"))?;
            out.push_str(text);
            out.push('\n');
        }
        Ok(())
    }
}

impl ResultFormatter for GccFormatter {
    fn format_result(&mut self, index: usize, result: &SarifResult) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_result(&mut out, result)
            .map_err(|field| RenderError::MissingField {
                result: index,
                field,
            })?;
        Ok(out)
    }
}
