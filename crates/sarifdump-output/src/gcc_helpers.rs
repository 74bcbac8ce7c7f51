use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

use sarifdump_core::types::{LogicalLocation, PhysicalLocation, ReportingDescriptorReference};

/// Tool component name of the Common Weakness Enumeration taxonomy.
pub(crate) const CWE_TOOL_COMPONENT: &str = "cwe";

/// Join an artifact URI onto the document's directory for display.
///
/// `file://` URIs are reduced to their percent-decoded path (left encoded if the
/// decoded bytes are not UTF-8). `.` components are dropped, so a document in
/// the current directory yields `foo.c` rather than `./foo.c`.
pub(crate) fn display_path(base: &Path, uri: &str) -> PathBuf {
    let uri = match uri.strip_prefix("file://") {
        Some(path) => urlencoding::decode(path).unwrap_or(Cow::Borrowed(path)),
        None => Cow::Borrowed(uri),
    };
    let joined = base.join(uri.as_ref());
    let cleaned: PathBuf = joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        joined
    } else {
        cleaned
    }
}

/// `path:line:[col:] `, the prefix the message is appended to.
///
/// On failure returns the path of the missing member, relative to the physical location.
pub(crate) fn format_physical_location(
    base: &Path,
    phys: &PhysicalLocation,
) -> Result<String, &'static str> {
    let uri = phys.uri().ok_or("physicalLocation.artifactLocation.uri")?;
    let line = phys.start_line().ok_or("physicalLocation.region.startLine")?;

    let mut out = format!("{}:{}:", display_path(base, uri).display(), line);
    if let Some(column) = phys.start_column() {
        out.push_str(&format!("{}:", column));
    }
    out.push(' ');
    Ok(out)
}

/// `In function 'NAME':` line for function locations, nothing for other kinds.
pub(crate) fn function_header(logical: &LogicalLocation) -> Result<Option<String>, &'static str> {
    if !logical.is_function() {
        return Ok(None);
    }
    let name = logical.display_name().ok_or("fullyQualifiedName")?;
    Ok(Some(format!("In function '{}':\n", name)))
}

/// ` [CWE-<id>]` for references into the CWE taxonomy, nothing for other taxonomies.
pub(crate) fn format_taxon(taxon: &ReportingDescriptorReference) -> Result<Option<String>, &'static str> {
    if taxon.tool_component_name() != Some(CWE_TOOL_COMPONENT) {
        return Ok(None);
    }
    let id = taxon.id.as_deref().ok_or("id")?;
    Ok(Some(format!(" [CWE-{}]", id)))
}
