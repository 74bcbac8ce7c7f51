//! SARIF 2.1.0 records consumed by the formatter.
//!
//! Only the members the formatter reads are modelled; everything else in a
//! document is ignored on load. [`LogicalLocation`] is the exception: it keeps
//! every member so that equality compares the whole record.
//!
//! Members the format marks as required (`message.text`, `region.startLine`)
//! are still `Option` here. Their absence is reported by the formatter with the
//! index of the offending result instead of failing the whole load.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level SARIF log (§3.13).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SarifLog {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl SarifLog {
    /// Every result of every run, flattened in document order.
    pub fn results(&self) -> impl Iterator<Item = &SarifResult> {
        self.runs.iter().flat_map(|run| run.results())
    }

    pub fn result_count(&self) -> usize {
        self.runs.iter().map(|run| run.results().len()).sum()
    }
}

/// One invocation of one analysis tool (§3.14).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Run {
    #[serde(default)]
    pub tool: Option<Tool>,
    /// `null` means the tool did not run; treated the same as no results.
    #[serde(default)]
    pub results: Option<Vec<SarifResult>>,
}

impl Run {
    pub fn results(&self) -> &[SarifResult] {
        self.results.as_deref().unwrap_or(&[])
    }

    pub fn tool_name(&self) -> Option<&str> {
        self.tool.as_ref()?.driver.name.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Tool {
    #[serde(default)]
    pub driver: ToolComponent,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToolComponent {
    #[serde(default)]
    pub name: Option<String>,
}

/// A single finding (§3.27).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    #[serde(default)]
    pub rule_id: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub taxa: Vec<ReportingDescriptorReference>,
    #[serde(default)]
    pub code_flows: Vec<CodeFlow>,
}

impl SarifResult {
    /// The location the finding is reported at. Further locations are not rendered.
    pub fn primary_location(&self) -> Option<&Location> {
        self.locations.first()
    }

    /// The trace shown under the finding. Further code flows are not rendered.
    pub fn primary_code_flow(&self) -> Option<&CodeFlow> {
        self.code_flows.first()
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.as_ref()?.text.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub text: Option<String>,
}

/// §3.28
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub logical_locations: Vec<LogicalLocation>,
    #[serde(default)]
    pub physical_location: Option<PhysicalLocation>,
    /// Only read for thread flow steps, where it carries the step description.
    #[serde(default)]
    pub message: Option<Message>,
}

impl Location {
    pub fn primary_logical_location(&self) -> Option<&LogicalLocation> {
        self.logical_locations.first()
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.as_ref()?.text.as_deref()
    }
}

/// A symbolic location such as an enclosing function (§3.33).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalLocation {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub fully_qualified_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Remaining members (`decoratedName`, `index`, `parentIndex`, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl LogicalLocation {
    pub fn is_function(&self) -> bool {
        self.kind.as_deref() == Some("function")
    }

    /// Name shown in headers: the fully qualified name, else the short name.
    pub fn display_name(&self) -> Option<&str> {
        self.fully_qualified_name.as_deref().or(self.name.as_deref())
    }
}

/// §3.29
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalLocation {
    #[serde(default)]
    pub artifact_location: Option<ArtifactLocation>,
    #[serde(default)]
    pub region: Option<Region>,
}

impl PhysicalLocation {
    pub fn uri(&self) -> Option<&str> {
        self.artifact_location.as_ref()?.uri.as_deref()
    }

    pub fn start_line(&self) -> Option<u64> {
        self.region.as_ref()?.start_line
    }

    pub fn start_column(&self) -> Option<u64> {
        self.region.as_ref()?.start_column
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactLocation {
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    #[serde(default)]
    pub start_line: Option<u64>,
    #[serde(default)]
    pub start_column: Option<u64>,
}

/// A taxonomy entry a result belongs to, e.g. a CWE id (§3.52).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingDescriptorReference {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub tool_component: Option<ToolComponentReference>,
}

impl ReportingDescriptorReference {
    pub fn tool_component_name(&self) -> Option<&str> {
        self.tool_component.as_ref()?.name.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToolComponentReference {
    #[serde(default)]
    pub name: Option<String>,
}

/// §3.36
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFlow {
    #[serde(default)]
    pub thread_flows: Vec<ThreadFlow>,
}

impl CodeFlow {
    /// Only the first thread flow is rendered.
    pub fn primary_thread_flow(&self) -> Option<&ThreadFlow> {
        self.thread_flows.first()
    }
}

/// Ordered execution steps (§3.37).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThreadFlow {
    #[serde(default)]
    pub locations: Vec<ThreadFlowLocation>,
}

/// §3.38
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThreadFlowLocation {
    #[serde(default)]
    pub location: Option<Location>,
}
