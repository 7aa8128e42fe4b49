use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw extraction data from a Figma exporter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawExtraction {
    /// Source of the extraction (e.g., "figma", "figma-tokens")
    pub source: String,
    /// Raw payload (shape depends on the exporter)
    pub data: serde_json::Value,
    /// Timestamp when the extraction was captured
    pub timestamp: DateTime<Utc>,
}

impl RawExtraction {
    pub fn new(source: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            source: source.into(),
            data,
            timestamp: Utc::now(),
        }
    }
}

/// A raw component row as emitted by the design tool's extraction step.
///
/// Every field except `name` is optional in the host format; absent fields
/// degrade to defaults during classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawComponent {
    pub name: String,
    pub instance_count: Option<u32>,
    pub usage_contexts: Option<Vec<String>>,
    pub variants: Option<Vec<String>>,
}

impl RawComponent {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Semantic tag assigned to a component by the first matching type rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Button,
    Input,
    Card,
    Modal,
    Navigation,
    Icon,
    Component,
}

/// Coarse grouping used for documentation sections and the icon penalty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Ui,
    Icon,
    Layout,
    Feedback,
}

impl ComponentCategory {
    /// Fixed rendering order for documentation sections.
    pub const ALL: [ComponentCategory; 4] = [
        ComponentCategory::Ui,
        ComponentCategory::Icon,
        ComponentCategory::Layout,
        ComponentCategory::Feedback,
    ];
}

/// A classified design-system component ready for documentation.
///
/// Immutable once produced by the classifier. Identity across records is
/// case-insensitive name equality only; there is no separate id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub variants: Vec<String>,
    pub usage: u32,
    pub contexts: Vec<String>,
    pub category: ComponentCategory,
    pub priority: u32,
}

/// The value classes a design token can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Color,
    Spacing,
    Typography,
    Shadow,
    Border,
    Opacity,
}

/// Host-assigned semantic role for color tokens. `Neutral` never triggers
/// the role-based semantic override.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Neutral,
    Success,
    Warning,
    Error,
    Info,
}

/// A named design value (color, spacing step, type scale entry, ...).
///
/// The naming formatter never mutates a token; it returns a new value with
/// `name` and `semantic_name` rewritten for the target tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesignToken {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_role: Option<ColorRole>,
}

impl DesignToken {
    pub fn new(name: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            name: name.into(),
            semantic_name: None,
            kind,
            value: None,
            semantic_role: None,
        }
    }
}

/// Derived semantic analysis for a single token. Read-only result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SemanticMapping {
    pub original_name: String,
    pub semantic_name: String,
    /// 0.0 - 1.0, higher means a more specific rule matched.
    pub confidence: f32,
    pub reasoning: String,
}

/// Aggregate naming health for a token set. Recomputed fresh on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// 0.0 - 1.0 overall naming quality.
    pub score: f32,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Formatted tokens plus the generated naming guide for one target tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenFormatResult {
    pub tokens: Vec<DesignToken>,
    pub naming_guide: String,
}

/// One captured extraction: the unit the export surface consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSnapshot {
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub components: Vec<ComponentRecord>,
    pub tokens: Vec<DesignToken>,
}

impl ExtractionSnapshot {
    pub fn new(
        source: impl Into<String>,
        components: Vec<ComponentRecord>,
        tokens: Vec<DesignToken>,
    ) -> Self {
        Self {
            source: source.into(),
            timestamp: Utc::now(),
            components,
            tokens,
        }
    }
}

/// Headline numbers for the generated document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocSummary {
    pub total_components: usize,
    pub category_breakdown: HashMap<String, usize>,
    pub multi_variant_count: usize,
    pub total_instances: u64,
    pub token_count: usize,
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ComponentType::Button => "button",
            ComponentType::Input => "input",
            ComponentType::Card => "card",
            ComponentType::Modal => "modal",
            ComponentType::Navigation => "navigation",
            ComponentType::Icon => "icon",
            ComponentType::Component => "component",
        };
        write!(f, "{}", tag)
    }
}

impl std::str::FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "button" => Ok(ComponentType::Button),
            "input" => Ok(ComponentType::Input),
            "card" => Ok(ComponentType::Card),
            "modal" => Ok(ComponentType::Modal),
            "navigation" | "nav" => Ok(ComponentType::Navigation),
            "icon" => Ok(ComponentType::Icon),
            "component" => Ok(ComponentType::Component),
            _ => Err(format!("Unknown component type: {}", s)),
        }
    }
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ComponentCategory::Ui => "ui",
            ComponentCategory::Icon => "icon",
            ComponentCategory::Layout => "layout",
            ComponentCategory::Feedback => "feedback",
        };
        write!(f, "{}", tag)
    }
}

impl std::str::FromStr for ComponentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ui" => Ok(ComponentCategory::Ui),
            "icon" => Ok(ComponentCategory::Icon),
            "layout" => Ok(ComponentCategory::Layout),
            "feedback" => Ok(ComponentCategory::Feedback),
            _ => Err(format!("Unknown component category: {}", s)),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            TokenKind::Color => "color",
            TokenKind::Spacing => "spacing",
            TokenKind::Typography => "typography",
            TokenKind::Shadow => "shadow",
            TokenKind::Border => "border",
            TokenKind::Opacity => "opacity",
        };
        write!(f, "{}", tag)
    }
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "color" | "colour" => Ok(TokenKind::Color),
            "spacing" | "space" => Ok(TokenKind::Spacing),
            "typography" | "text" | "font" => Ok(TokenKind::Typography),
            "shadow" | "effect" => Ok(TokenKind::Shadow),
            "border" | "stroke" => Ok(TokenKind::Border),
            "opacity" => Ok(TokenKind::Opacity),
            _ => Err(format!("Unknown token kind: {}", s)),
        }
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Neutral => "neutral",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
            ColorRole::Info => "info",
        };
        write!(f, "{}", tag)
    }
}

impl std::str::FromStr for ColorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(ColorRole::Primary),
            "secondary" => Ok(ColorRole::Secondary),
            "accent" => Ok(ColorRole::Accent),
            "neutral" => Ok(ColorRole::Neutral),
            "success" => Ok(ColorRole::Success),
            "warning" => Ok(ColorRole::Warning),
            "error" | "danger" => Ok(ColorRole::Error),
            "info" => Ok(ColorRole::Info),
            _ => Err(format!("Unknown color role: {}", s)),
        }
    }
}
