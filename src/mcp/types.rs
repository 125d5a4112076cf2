use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scanner::{ComponentReport, ScanSummary};

/// Parameters for the translate_components operation
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateComponentsParams {
    /// Absolute path to the project to localize; config is read from its
    /// `.hanlocrc.json`
    pub project_root_path: String,
}

/// Result of the translate_components operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateComponentsResult {
    /// Directory that was scanned
    pub components_root: String,
    pub translated: usize,
    pub skipped: usize,
    pub errors: usize,
    pub components: Vec<ComponentDto>,
}

/// Outcome for a single component
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDto {
    pub name: String,
    /// "translated", "skipped", or "error"
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TranslateComponentsResult {
    pub fn from_scan(components_root: String, scan: ScanSummary) -> Self {
        Self {
            components_root,
            translated: scan.translated,
            skipped: scan.skipped,
            errors: scan.errors,
            components: scan.components.into_iter().map(ComponentDto::from).collect(),
        }
    }
}

impl From<ComponentReport> for ComponentDto {
    fn from(report: ComponentReport) -> Self {
        Self {
            name: report.name,
            outcome: report.outcome.as_str().to_string(),
            detail: report.detail,
        }
    }
}
