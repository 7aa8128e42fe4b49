//! Integration tests for the token side of the pipeline: formatting,
//! consistency auditing, and semantic analysis over extracted tokens.

use fig_bridge::core::{DesignToken, FormatConverter as _, RawExtraction};
use fig_bridge::export::ExportService;
use fig_bridge::format::FormatConverter;
use fig_bridge::naming::{ConsistencyAuditor, NamingFormatter, SemanticAnalyzer, TargetTool};

use super::extraction_payload;

async fn extracted_tokens() -> Vec<DesignToken> {
    let converter = FormatConverter::new();
    let snapshot = converter
        .normalize(RawExtraction::new("figma", extraction_payload()))
        .await
        .unwrap();
    snapshot.tokens
}

#[tokio::test]
async fn test_bolt_formatting_over_extracted_tokens() {
    let tokens = extracted_tokens().await;
    let result = NamingFormatter::new(TargetTool::Bolt).format_tokens(&tokens);

    let names: Vec<&str> = result.tokens.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "color-primary-brand-color",
            "spacing-space-xl",
            "text-heading-large",
            "color-red-500",
        ]
    );

    // Values survive the rename, including absent ones
    assert_eq!(result.tokens[0].value.as_deref(), Some("#0044CC"));
    assert_eq!(result.tokens[2].value, None);
    assert!(result.naming_guide.contains("## Token Naming Guide: bolt"));
}

#[tokio::test]
async fn test_tool_presets_disagree_on_the_same_token() {
    let tokens = extracted_tokens().await;
    let brand = &tokens[0];

    let cases = [
        (TargetTool::Cursor, "color_primary_brand_color"),
        (TargetTool::Lovable, "primaryBrandColor"),
        (TargetTool::V0, "primary-brand-color"),
        (TargetTool::Windsurf, "ColorPrimaryBrandColor"),
    ];
    for (tool, expected) in cases {
        let formatted = NamingFormatter::new(tool).format_token(brand);
        assert_eq!(formatted.name, expected, "tool {}", tool);
    }
}

#[tokio::test]
async fn test_audit_scores_mixed_convention_token_set() {
    let tokens = extracted_tokens().await;
    let report = ConsistencyAuditor::new().audit(&tokens);

    // Three space-separated names and one kebab name, no semantic names:
    // consistency 0.75, coverage 0.0, no anti-pattern penalty.
    assert_eq!(report.score, 0.375);
    assert!(report.issues.is_empty());
    assert!(report.recommendations[0].contains("Adopt a single naming convention"));
}

#[tokio::test]
async fn test_semantic_analysis_suggests_role_names() {
    let tokens = extracted_tokens().await;
    let mappings = SemanticAnalyzer::new().analyze_token_semantics(&tokens);

    assert_eq!(mappings.len(), 4);
    assert_eq!(mappings[0].semantic_name, "primary");
    assert_eq!(mappings[0].confidence, 0.9);
    assert_eq!(mappings[1].semantic_name, "xl");
    assert_eq!(mappings[2].semantic_name, "heading");

    // The host-assigned role wins over name analysis
    assert_eq!(mappings[3].original_name, "red-500");
    assert_eq!(mappings[3].semantic_name, "error-500");
    assert!(mappings[3].confidence >= 0.8);
}

#[tokio::test]
async fn test_audit_page_renders_report_and_suggestions() {
    let tokens = extracted_tokens().await;
    let report = ConsistencyAuditor::new().audit(&tokens);
    let mappings = SemanticAnalyzer::new().analyze_token_semantics(&tokens);

    let page = ExportService::new().render_consistency_report(&report, &mappings);

    assert!(page.starts_with("# Token Naming Audit"));
    assert!(page.contains("- **Score**: 38%"));
    assert!(page.contains("No issues detected."));
    assert!(page.contains("Adopt a single naming convention"));
    assert!(page.contains("## Semantic Suggestions"));
    assert!(page.contains("| `Primary Brand Color` | `primary` | 90% | Primary brand color naming |"));
    assert!(page.contains("| `red-500` | `error-500` | 80% | Host-assigned semantic role 'error' |"));
}

#[tokio::test]
async fn test_token_guide_renders_formatted_table() {
    let tokens = extracted_tokens().await;
    let result = NamingFormatter::new(TargetTool::Bolt).format_tokens(&tokens);

    let page = ExportService::new().render_token_guide(&result);

    assert!(page.starts_with("# Design Token Reference"));
    assert!(page.contains("| Token | Type | Value |"));
    assert!(page.contains("| `color-primary-brand-color` | color | #0044CC |"));
    // Missing values render as a placeholder instead of an empty cell
    assert!(page.contains("| `text-heading-large` | typography | - |"));
    assert!(page.contains("## Token Naming Guide: bolt"));
}
