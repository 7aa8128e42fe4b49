//! End-to-end pipeline tests over realistic extraction payloads.
//!
//! Each test drives the same path the CLI does: raw payload in, normalized
//! snapshot, optional supplementation, rendered document out.

use fig_bridge::core::{
    ExportConfig, ExportService as _, FormatConverter as _, PatternSupplementer, RawExtraction,
};
use fig_bridge::export::ExportService;
use fig_bridge::format::FormatConverter;
use serde_json::json;

use super::extraction_payload;

#[tokio::test]
async fn test_generate_markdown_from_payload() {
    let converter = FormatConverter::new();
    let raw = RawExtraction::new("figma", extraction_payload());
    let snapshot = converter.normalize(raw).await.unwrap();

    let service = ExportService::new();
    let markdown = service
        .export_to_markdown(&snapshot, &ExportConfig::default())
        .unwrap();

    assert!(markdown.starts_with("# Design System Documentation - figma"));
    assert!(markdown.contains("## Summary"));
    assert!(markdown.contains("- **Total Components**: 7"));
    assert!(markdown.contains("- **Total Instances**: 213"));

    let ui = markdown.find("## 🧩 UI Components").unwrap();
    let icons = markdown.find("## 🎨 Icons").unwrap();
    let layout = markdown.find("## 📐 Layout Components").unwrap();
    let feedback = markdown.find("## 💬 Feedback Components").unwrap();
    assert!(ui < icons && icons < layout && layout < feedback);

    // Priority order inside the ui section: 160, 85, 45
    let primary = markdown.find("### Button/Primary").unwrap();
    let secondary = markdown.find("### Button/Secondary").unwrap();
    let text_field = markdown.find("### Input/Text Field").unwrap();
    assert!(primary < secondary && secondary < text_field);
}

#[tokio::test]
async fn test_scaffolds_reproduce_generation_rules() {
    let converter = FormatConverter::new();
    let snapshot = converter
        .normalize(RawExtraction::new("figma", extraction_payload()))
        .await
        .unwrap();

    let service = ExportService::new();
    let markdown = service
        .export_to_markdown(&snapshot, &ExportConfig::default())
        .unwrap();

    assert!(markdown.contains("```tsx"));
    assert!(markdown.contains("variant?: 'default' | 'loading' | 'disabled';"));
    // The input element keeps its closing tag and children
    assert!(markdown.contains("<input className={className}>{children}</input>"));
    // Icon scaffolds carry no interaction props
    let arrow = markdown.find("interface LucideArrowRightProps").unwrap();
    let check = markdown[arrow..].find("interface LucideCheckProps").unwrap();
    let icon_block = &markdown[arrow..arrow + check];
    assert!(!icon_block.contains("disabled?: boolean;"));
    assert!(!icon_block.contains("onClick?: () => void;"));
}

#[tokio::test]
async fn test_missing_fields_degrade_to_defaults() {
    let converter = FormatConverter::new();
    let payload = json!({ "components": [{ "name": "Mystery Widget" }] });
    let snapshot = converter
        .normalize(RawExtraction::new("figma", payload))
        .await
        .unwrap();

    assert_eq!(snapshot.components.len(), 1);
    let record = &snapshot.components[0];
    assert_eq!(record.usage, 0);
    assert_eq!(record.variants, vec!["default".to_string()]);
    assert!(record.contexts.is_empty());
    assert_eq!(record.priority, 0);
}

#[tokio::test]
async fn test_icon_heavy_extraction_is_supplemented() {
    let mut components = Vec::new();
    for i in 0..12 {
        components.push(json!({
            "name": format!("lucide/glyph-{i}"),
            "instanceCount": 5
        }));
    }
    components.push(json!({
        "name": "Button/Primary",
        "instanceCount": 3,
        "variants": ["default"]
    }));

    let converter = FormatConverter::new();
    let snapshot = converter
        .normalize(RawExtraction::new("figma", json!({ "components": components })))
        .await
        .unwrap();

    let supplementer = PatternSupplementer::new();
    let supplemented = supplementer.supplement(snapshot.components);

    let names: Vec<&str> = supplemented.iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"Button/Secondary"));
    assert!(names.contains(&"Input/Text Field"));
    assert!(names.contains(&"Card/Content"));
    assert!(names.contains(&"Navigation/Menu"));
    // The existing Button/Primary is kept, not duplicated
    assert_eq!(
        supplemented
            .iter()
            .filter(|c| c.name == "Button/Primary")
            .count(),
        1
    );
    assert_eq!(supplemented.len(), 17);
}

#[tokio::test]
async fn test_balanced_extraction_is_left_alone() {
    let converter = FormatConverter::new();
    let snapshot = converter
        .normalize(RawExtraction::new("figma", extraction_payload()))
        .await
        .unwrap();

    let before = snapshot.components.len();
    let supplemented = PatternSupplementer::new().supplement(snapshot.components);
    assert_eq!(supplemented.len(), before);
}

#[tokio::test]
async fn test_json_export_round_trips() {
    let converter = FormatConverter::new();
    let snapshot = converter
        .normalize(RawExtraction::new("figma", extraction_payload()))
        .await
        .unwrap();

    let service = ExportService::new();
    let exported = service
        .export_to_json(&snapshot, &ExportConfig::default())
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(value["source"], "figma");
    assert_eq!(value["summary"]["total_components"], 7);
    assert_eq!(value["summary"]["token_count"], 4);

    // Components are sorted by priority in the document model
    let components = value["components"].as_array().unwrap();
    assert_eq!(components[0]["name"], "Button/Primary");
    assert_eq!(components[0]["priority"], 160);
    assert_eq!(components[1]["name"], "lucide/arrow-right");
    assert_eq!(components[1]["priority"], 140);
}
