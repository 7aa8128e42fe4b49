use crate::core::constants::{category_icons, category_labels};
use crate::core::errors::ExportError;
use crate::core::{
    ComponentCategory, ComponentRecord, ConsistencyReport, DocSummary, ExportConfig,
    ExportService as ExportServiceTrait, ExtractionSnapshot, SemanticMapping, SortBy,
    TokenFormatResult,
};
use std::collections::HashMap;

use super::scaffold::ScaffoldGenerator;

/// Service for exporting extraction snapshots to documentation formats.
///
/// Renders classified component records into grouped markdown sections with
/// scaffold snippets, serializes the same document model to JSON, and turns
/// formatted token sets and consistency reports into their own markdown
/// pages.
///
/// # Features
///
/// - **Grouped Sections**: one titled section per non-empty category, in
///   fixed Ui, Icon, Layout, Feedback order
/// - **Icon Capping**: the icon section shows only the top entries by
///   priority, with a note naming how many were hidden
/// - **Scaffold Blocks**: each component carries a generated TSX snippet
///   unless scaffolds are disabled
/// - **Token Pages**: formatted token tables with the per-tool naming guide,
///   and standalone audit reports
///
/// # Examples
///
/// ```rust
/// use fig_bridge::core::{ExportConfig, ExportService as _, ExtractionSnapshot};
/// use fig_bridge::export::ExportService;
///
/// let service = ExportService::new();
/// let snapshot = ExtractionSnapshot::new("figma", vec![], vec![]);
/// let markdown = service
///     .export_to_markdown(&snapshot, &ExportConfig::default())
///     .expect("markdown export");
/// assert!(markdown.starts_with("# Design System Documentation"));
/// ```
pub struct ExportService {
    scaffolds: ScaffoldGenerator,
}

impl ExportService {
    pub fn new() -> Self {
        Self {
            scaffolds: ScaffoldGenerator::new(),
        }
    }

    fn category_label(category: ComponentCategory) -> &'static str {
        match category {
            ComponentCategory::Ui => category_labels::UI,
            ComponentCategory::Icon => category_labels::ICON,
            ComponentCategory::Layout => category_labels::LAYOUT,
            ComponentCategory::Feedback => category_labels::FEEDBACK,
        }
    }

    fn category_icon(category: ComponentCategory) -> &'static str {
        match category {
            ComponentCategory::Ui => category_icons::UI,
            ComponentCategory::Icon => category_icons::ICON,
            ComponentCategory::Layout => category_icons::LAYOUT,
            ComponentCategory::Feedback => category_icons::FEEDBACK,
        }
    }

    fn sort_components<'a>(
        &self,
        components: &'a [ComponentRecord],
        sort_by: &SortBy,
    ) -> Vec<&'a ComponentRecord> {
        let mut sorted: Vec<&ComponentRecord> = components.iter().collect();
        match sort_by {
            SortBy::Priority => sorted.sort_by(|a, b| {
                b.priority
                    .cmp(&a.priority)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            SortBy::Usage => {
                sorted.sort_by(|a, b| b.usage.cmp(&a.usage).then_with(|| a.name.cmp(&b.name)))
            }
            SortBy::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        }
        sorted
    }

    /// Group sorted records into the fixed category order, skipping empty
    /// categories.
    fn group_by_category<'a>(
        &self,
        components: &[&'a ComponentRecord],
    ) -> Vec<(ComponentCategory, Vec<&'a ComponentRecord>)> {
        ComponentCategory::ALL
            .iter()
            .map(|category| {
                let members: Vec<&ComponentRecord> = components
                    .iter()
                    .filter(|record| record.category == *category)
                    .copied()
                    .collect();
                (*category, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }

    fn render_component(
        &self,
        record: &ComponentRecord,
        config: &ExportConfig,
        lines: &mut Vec<String>,
    ) {
        lines.push(format!("### {}", record.name));
        lines.push(String::new());
        lines.push(format!("- **Usage**: {} instances", record.usage));
        if !record.variants.is_empty() {
            lines.push(format!("- **Variants**: {}", record.variants.join(", ")));
        }
        if !record.contexts.is_empty() {
            lines.push(format!("- **Contexts**: {}", record.contexts.join(", ")));
        }
        lines.push(String::new());

        if config.include_scaffolds {
            lines.push("```tsx".to_string());
            lines.push(self.scaffolds.generate(record));
            lines.push("```".to_string());
            lines.push(String::new());
        }
    }

    /// Render formatted tokens and their naming guide as one markdown page.
    pub fn render_token_guide(&self, result: &TokenFormatResult) -> String {
        let mut lines = Vec::new();

        lines.push("# Design Token Reference".to_string());
        lines.push(String::new());

        if result.tokens.is_empty() {
            lines.push("No tokens were found in the extraction.".to_string());
            lines.push(String::new());
        } else {
            lines.push("| Token | Type | Value |".to_string());
            lines.push("|-------|------|-------|".to_string());
            for token in &result.tokens {
                let value = token.value.as_deref().unwrap_or("-");
                lines.push(format!("| `{}` | {} | {} |", token.name, token.kind, value));
            }
            lines.push(String::new());
        }

        lines.push(result.naming_guide.clone());

        lines.join("\n")
    }

    /// Render a consistency report and any semantic suggestions as one
    /// markdown page. Only mappings that actually rename a token are shown.
    pub fn render_consistency_report(
        &self,
        report: &ConsistencyReport,
        mappings: &[SemanticMapping],
    ) -> String {
        let mut lines = Vec::new();

        lines.push("# Token Naming Audit".to_string());
        lines.push(String::new());
        lines.push(format!(
            "- **Score**: {}%",
            (report.score * 100.0).round() as u32
        ));
        lines.push(String::new());

        lines.push("## Issues".to_string());
        lines.push(String::new());
        if report.issues.is_empty() {
            lines.push("No issues detected.".to_string());
        } else {
            for issue in &report.issues {
                lines.push(format!("- {}", issue));
            }
        }
        lines.push(String::new());

        lines.push("## Recommendations".to_string());
        lines.push(String::new());
        for recommendation in &report.recommendations {
            lines.push(format!("- {}", recommendation));
        }

        let suggestions: Vec<&SemanticMapping> = mappings
            .iter()
            .filter(|mapping| mapping.semantic_name != mapping.original_name)
            .collect();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push("## Semantic Suggestions".to_string());
            lines.push(String::new());
            lines.push("| Token | Suggested name | Confidence | Reasoning |".to_string());
            lines.push("|-------|----------------|------------|-----------|".to_string());
            for mapping in suggestions {
                lines.push(format!(
                    "| `{}` | `{}` | {:.0}% | {} |",
                    mapping.original_name,
                    mapping.semantic_name,
                    mapping.confidence * 100.0,
                    mapping.reasoning
                ));
            }
        }

        lines.join("\n")
    }
}

impl ExportServiceTrait for ExportService {
    fn export_to_json(
        &self,
        snapshot: &ExtractionSnapshot,
        config: &ExportConfig,
    ) -> Result<String, ExportError> {
        let components = self.sort_components(&snapshot.components, &config.sort_by);
        let mut document = serde_json::json!({
            "source": snapshot.source,
            "timestamp": snapshot.timestamp.to_rfc3339(),
            "components": components,
            "tokens": snapshot.tokens,
        });

        if config.include_summary {
            let summary = self.generate_summary(snapshot);
            let value =
                serde_json::to_value(&summary).map_err(|e| ExportError::DataTransformation {
                    from_format: "summary".to_string(),
                    to_format: "json".to_string(),
                    reason: e.to_string(),
                })?;
            document["summary"] = value;
        }

        serde_json::to_string_pretty(&document).map_err(|e| ExportError::DataTransformation {
            from_format: "snapshot".to_string(),
            to_format: "json".to_string(),
            reason: e.to_string(),
        })
    }

    fn export_to_markdown(
        &self,
        snapshot: &ExtractionSnapshot,
        config: &ExportConfig,
    ) -> Result<String, ExportError> {
        let mut lines = Vec::new();

        lines.push(format!(
            "# Design System Documentation - {}",
            snapshot.source
        ));
        lines.push(String::new());
        lines.push(format!(
            "Generated: {}",
            snapshot.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        lines.push(String::new());

        if config.include_summary {
            let summary = self.generate_summary(snapshot);
            lines.push("## Summary".to_string());
            lines.push(String::new());
            lines.push(format!(
                "- **Total Components**: {}",
                summary.total_components
            ));
            for category in ComponentCategory::ALL {
                let count = summary
                    .category_breakdown
                    .get(&category.to_string())
                    .copied()
                    .unwrap_or(0);
                lines.push(format!("- **{}**: {}", Self::category_label(category), count));
            }
            lines.push(format!(
                "- **Multi-variant Components**: {}",
                summary.multi_variant_count
            ));
            lines.push(format!("- **Total Instances**: {}", summary.total_instances));
            lines.push(format!("- **Design Tokens**: {}", summary.token_count));
            lines.push(String::new());
        }

        let sorted = self.sort_components(&snapshot.components, &config.sort_by);
        for (category, members) in self.group_by_category(&sorted) {
            lines.push(format!(
                "## {} {}",
                Self::category_icon(category),
                Self::category_label(category)
            ));
            lines.push(String::new());

            // Only the icon section is capped; every other category lists
            // all of its members.
            let shown: &[&ComponentRecord] = if category == ComponentCategory::Icon
                && members.len() > config.max_icons_shown
            {
                lines.push(format!(
                    "_Showing top {} of {} icons by priority._",
                    config.max_icons_shown,
                    members.len()
                ));
                lines.push(String::new());
                &members[..config.max_icons_shown]
            } else {
                &members
            };

            for record in shown {
                self.render_component(record, config, &mut lines);
            }
        }

        Ok(lines.join("\n"))
    }

    fn generate_summary(&self, snapshot: &ExtractionSnapshot) -> DocSummary {
        let mut category_breakdown: HashMap<String, usize> = HashMap::new();
        let mut multi_variant_count = 0;
        let mut total_instances: u64 = 0;

        for record in &snapshot.components {
            *category_breakdown
                .entry(record.category.to_string())
                .or_insert(0) += 1;
            if record.variants.len() > 1 {
                multi_variant_count += 1;
            }
            total_instances += u64::from(record.usage);
        }

        DocSummary {
            total_components: snapshot.components.len(),
            category_breakdown,
            multi_variant_count,
            total_instances,
            token_count: snapshot.tokens.len(),
        }
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
