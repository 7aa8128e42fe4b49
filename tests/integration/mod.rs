// Integration test modules
pub mod token_pipeline_tests;
pub mod workflow_tests;

// Test utilities
use serde_json::{json, Value};

/// A realistic host extraction payload shared across the integration suite.
///
/// Mirrors the shape the Figma-side exporter emits: optional fields are
/// genuinely absent on some entries, not null.
pub fn extraction_payload() -> Value {
    json!({
        "components": [
            {
                "name": "Button/Primary",
                "instanceCount": 45,
                "variants": ["default", "loading", "disabled"],
                "usageContexts": ["header", "checkout"]
            },
            {
                "name": "Button/Secondary",
                "instanceCount": 10,
                "variants": ["default"]
            },
            {
                "name": "Input/Text Field",
                "variants": ["default", "focused"]
            },
            {
                "name": "lucide/arrow-right",
                "instanceCount": 80
            },
            {
                "name": "lucide/check",
                "instanceCount": 60
            },
            {
                "name": "Grid/Container",
                "instanceCount": 12,
                "usageContexts": ["layout"]
            },
            {
                "name": "Toast/Success",
                "instanceCount": 6
            }
        ],
        "tokens": [
            {
                "name": "Primary Brand Color",
                "type": "color",
                "value": "#0044CC"
            },
            {
                "name": "Space XL",
                "type": "spacing",
                "value": "32px"
            },
            {
                "name": "Heading Large",
                "type": "typography"
            },
            {
                "name": "red-500",
                "type": "color",
                "value": "#EF4444",
                "semanticRole": "error"
            }
        ]
    })
}
