use crate::core::types::*;
use anyhow::Result;
use async_trait::async_trait;

/// Trait for format conversion
#[async_trait]
pub trait FormatConverter {
    /// Normalize a raw extraction payload from any Figma exporter
    async fn normalize(
        &self,
        raw: RawExtraction,
    ) -> Result<ExtractionSnapshot, crate::core::errors::ParseError>;

    /// Convert a component payload to the unified record format
    fn convert_to_components(
        &self,
        payload: &serde_json::Value,
    ) -> Result<Vec<RawComponent>, crate::core::errors::ParseError>;

    /// Convert a token payload to the unified token format
    fn convert_to_tokens(
        &self,
        payload: &serde_json::Value,
    ) -> Result<Vec<DesignToken>, crate::core::errors::ParseError>;
}

/// Trait for exporting documentation
pub trait ExportService {
    /// Export to JSON format
    fn export_to_json(
        &self,
        snapshot: &ExtractionSnapshot,
        config: &ExportConfig,
    ) -> Result<String, crate::core::errors::ExportError>;

    /// Export to Markdown format
    fn export_to_markdown(
        &self,
        snapshot: &ExtractionSnapshot,
        config: &ExportConfig,
    ) -> Result<String, crate::core::errors::ExportError>;

    /// Generate a summary of the documented system
    fn generate_summary(&self, snapshot: &ExtractionSnapshot) -> DocSummary;
}

/// Configuration for export settings
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub include_summary: bool,
    pub include_scaffolds: bool,
    pub max_icons_shown: usize,
    pub sort_by: SortBy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Priority,
    Usage,
    Name,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Markdown,
            include_summary: true,
            include_scaffolds: true,
            max_icons_shown: 5,
            sort_by: SortBy::Priority,
        }
    }
}
