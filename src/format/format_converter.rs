use crate::core::errors::ParseError;
use crate::core::{
    ColorRole, ComponentClassifier, ComponentPrioritizer, DesignToken, ExtractionSnapshot,
    FormatConverter as FormatConverterTrait, RawComponent, RawExtraction, TokenKind,
};
use async_trait::async_trait;
use serde_json::Value;

/// Converts raw Figma extraction payloads into the unified record format.
///
/// Conversion is lenient: absent or mistyped fields degrade to defaults
/// rather than failing, matching what the host exporters actually emit.
/// Only a structurally wrong top level (neither object nor array) is an
/// error.
pub struct FormatConverter {
    classifier: ComponentClassifier,
    prioritizer: ComponentPrioritizer,
}

impl FormatConverter {
    pub fn new() -> Self {
        Self {
            classifier: ComponentClassifier::new(),
            prioritizer: ComponentPrioritizer::new(),
        }
    }

    fn convert_single_component(&self, c: &Value) -> RawComponent {
        let name = c
            .get("name")
            .and_then(|n| n.as_str())
            .unwrap_or("")
            .to_string();

        let instance_count = c
            .get("instanceCount")
            .or_else(|| c.get("instances"))
            .and_then(|n| n.as_u64())
            .map(|n| n as u32);

        let usage_contexts = c
            .get("usageContexts")
            .or_else(|| c.get("contexts"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            });

        let variants = c.get("variants").and_then(|v| v.as_array()).map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        });

        RawComponent {
            name,
            instance_count,
            usage_contexts,
            variants,
        }
    }

    fn convert_single_token(&self, t: &Value) -> DesignToken {
        let name = t
            .get("name")
            .and_then(|n| n.as_str())
            .unwrap_or("")
            .to_string();

        let kind = t
            .get("type")
            .or_else(|| t.get("kind"))
            .and_then(|k| k.as_str())
            .and_then(|k| k.parse::<TokenKind>().ok())
            .unwrap_or(TokenKind::Color);

        let semantic_name = t
            .get("semanticName")
            .and_then(|s| s.as_str())
            .map(String::from);

        let value = match t.get("value") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };

        let semantic_role = t
            .get("semanticRole")
            .and_then(|r| r.as_str())
            .and_then(|r| r.parse::<ColorRole>().ok());

        DesignToken {
            name,
            semantic_name,
            kind,
            value,
            semantic_role,
        }
    }

    /// Detect whether a payload carries components or tokens.
    ///
    /// Objects are sniffed by key; bare arrays by the shape of their first
    /// entry. Token entries carry a `type`/`value` pair, component entries
    /// carry usage metadata or just a name.
    pub fn detect_payload_kind(data: &Value) -> String {
        if let Some(obj) = data.as_object() {
            if obj.contains_key("components") {
                return "components".to_string();
            }
            if obj.contains_key("tokens") {
                return "tokens".to_string();
            }
        }

        if let Some(first) = data.as_array().and_then(|arr| arr.first()) {
            if first.get("instanceCount").is_some()
                || first.get("usageContexts").is_some()
                || first.get("variants").is_some()
            {
                return "components".to_string();
            }
            if first.get("type").is_some() || first.get("value").is_some() {
                return "tokens".to_string();
            }
            if first.get("name").is_some() {
                return "components".to_string();
            }
        }

        "unknown".to_string()
    }
}

#[async_trait]
impl FormatConverterTrait for FormatConverter {
    async fn normalize(&self, raw: RawExtraction) -> Result<ExtractionSnapshot, ParseError> {
        tracing::debug!("Normalizing extraction from source: {}", raw.source);

        let (component_payload, token_payload) = match &raw.data {
            Value::Object(obj) => (obj.get("components"), obj.get("tokens")),
            Value::Array(_) => match Self::detect_payload_kind(&raw.data).as_str() {
                "tokens" => (None, Some(&raw.data)),
                _ => (Some(&raw.data), None),
            },
            other => {
                return Err(ParseError::InvalidFormat {
                    context: "extraction payload".to_string(),
                    expected: "object or array".to_string(),
                    found: format!("{:?}", other),
                })
            }
        };

        let raw_components = match component_payload {
            Some(payload) => self.convert_to_components(payload)?,
            None => Vec::new(),
        };
        let tokens = match token_payload {
            Some(payload) => self.convert_to_tokens(payload)?,
            None => Vec::new(),
        };

        let components = self
            .prioritizer
            .prioritize(self.classifier.classify_all(&raw_components));

        tracing::debug!(
            "Normalized {} components and {} tokens",
            components.len(),
            tokens.len()
        );

        Ok(ExtractionSnapshot {
            source: raw.source,
            timestamp: raw.timestamp,
            components,
            tokens,
        })
    }

    fn convert_to_components(&self, payload: &Value) -> Result<Vec<RawComponent>, ParseError> {
        let entries = payload
            .as_array()
            .ok_or_else(|| ParseError::InvalidFormat {
                context: "component extraction".to_string(),
                expected: "array of component records".to_string(),
                found: format!("{:?}", payload),
            })?;

        Ok(entries
            .iter()
            .map(|c| self.convert_single_component(c))
            .collect())
    }

    fn convert_to_tokens(&self, payload: &Value) -> Result<Vec<DesignToken>, ParseError> {
        let entries = payload
            .as_array()
            .ok_or_else(|| ParseError::InvalidFormat {
                context: "token extraction".to_string(),
                expected: "array of design tokens".to_string(),
                found: format!("{:?}", payload),
            })?;

        Ok(entries
            .iter()
            .map(|t| self.convert_single_token(t))
            .collect())
    }
}

impl Default for FormatConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComponentCategory, ComponentType};
    use serde_json::json;

    #[tokio::test]
    async fn test_normalize_full_extraction_payload() {
        let converter = FormatConverter::new();
        let raw = RawExtraction::new(
            "figma",
            json!({
                "components": [
                    { "name": "Button/Primary", "instanceCount": 10 },
                    { "name": "lucide/earth" }
                ],
                "tokens": [
                    { "name": "Primary Brand Color", "type": "color", "value": "#3B82F6" }
                ]
            }),
        );

        let snapshot = converter.normalize(raw).await.unwrap();
        assert_eq!(snapshot.components.len(), 2);
        assert_eq!(snapshot.tokens.len(), 1);

        // Classified, scored, and sorted highest first
        assert_eq!(snapshot.components[0].name, "Button/Primary");
        assert_eq!(snapshot.components[0].component_type, ComponentType::Button);
        assert_eq!(snapshot.components[0].priority, 90);
        assert_eq!(snapshot.components[1].category, ComponentCategory::Icon);
        assert_eq!(snapshot.components[1].priority, 10);
    }

    #[tokio::test]
    async fn test_normalize_bare_component_array() {
        let converter = FormatConverter::new();
        let raw = RawExtraction::new("figma", json!([{ "name": "Card/Content" }]));

        let snapshot = converter.normalize(raw).await.unwrap();
        assert_eq!(snapshot.components.len(), 1);
        assert!(snapshot.tokens.is_empty());
    }

    #[tokio::test]
    async fn test_normalize_bare_token_array() {
        let converter = FormatConverter::new();
        let raw = RawExtraction::new(
            "figma-tokens",
            json!([{ "name": "spacing-md", "type": "spacing", "value": "16px" }]),
        );

        let snapshot = converter.normalize(raw).await.unwrap();
        assert!(snapshot.components.is_empty());
        assert_eq!(snapshot.tokens.len(), 1);
        assert_eq!(snapshot.tokens[0].kind, TokenKind::Spacing);
        assert_eq!(snapshot.tokens[0].value.as_deref(), Some("16px"));
    }

    #[tokio::test]
    async fn test_normalize_rejects_scalar_payload() {
        let converter = FormatConverter::new();
        let raw = RawExtraction::new("figma", json!("not an extraction"));

        let result = converter.normalize(raw).await;
        assert!(matches!(result, Err(ParseError::InvalidFormat { .. })));
    }

    #[test]
    fn test_component_fields_degrade_to_defaults() {
        let converter = FormatConverter::new();
        let components = converter
            .convert_to_components(&json!([{ "name": "Avatar", "instanceCount": "not a number" }]))
            .unwrap();

        assert_eq!(components[0].name, "Avatar");
        assert_eq!(components[0].instance_count, None);
        assert_eq!(components[0].usage_contexts, None);
        assert_eq!(components[0].variants, None);
    }

    #[test]
    fn test_token_kind_aliases_and_numeric_values() {
        let converter = FormatConverter::new();
        let tokens = converter
            .convert_to_tokens(&json!([
                { "name": "font-body", "type": "font" },
                { "name": "opacity-50", "type": "opacity", "value": 0.5 },
                { "name": "mystery", "type": "gradient" }
            ]))
            .unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Typography);
        assert_eq!(tokens[1].value.as_deref(), Some("0.5"));
        // Unknown kinds fall back to color
        assert_eq!(tokens[2].kind, TokenKind::Color);
    }

    #[test]
    fn test_token_semantic_role_parsing() {
        let converter = FormatConverter::new();
        let tokens = converter
            .convert_to_tokens(&json!([
                { "name": "red-500", "type": "color", "semanticRole": "danger" }
            ]))
            .unwrap();

        assert_eq!(tokens[0].semantic_role, Some(ColorRole::Error));
    }

    #[test]
    fn test_detect_payload_kind() {
        assert_eq!(
            FormatConverter::detect_payload_kind(&json!({ "components": [] })),
            "components"
        );
        assert_eq!(
            FormatConverter::detect_payload_kind(&json!({ "tokens": [] })),
            "tokens"
        );
        assert_eq!(
            FormatConverter::detect_payload_kind(&json!([{ "name": "x", "variants": [] }])),
            "components"
        );
        assert_eq!(
            FormatConverter::detect_payload_kind(&json!([{ "name": "x", "type": "color" }])),
            "tokens"
        );
        assert_eq!(
            FormatConverter::detect_payload_kind(&json!([{ "name": "x" }])),
            "components"
        );
        assert_eq!(FormatConverter::detect_payload_kind(&json!(42)), "unknown");
    }
}
