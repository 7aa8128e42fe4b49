use crate::core::constants::defaults;
use crate::core::types::{ColorRole, DesignToken, SemanticMapping, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// One first-match-wins semantic rule
#[derive(Debug)]
struct SemanticRule {
    pattern: Regex,
    label: &'static str,
    confidence: f32,
    rationale: &'static str,
}

fn build_rules(specs: &[(&'static str, &'static str, f32, &'static str)]) -> Vec<SemanticRule> {
    specs
        .iter()
        .filter_map(|(pattern, label, confidence, rationale)| {
            Regex::new(pattern).ok().map(|re| SemanticRule {
                pattern: re,
                label,
                confidence: *confidence,
                rationale,
            })
        })
        .collect()
}

// Rule order is precedence. Specific roles are tested before generic ones,
// so "primary-brand" resolves to primary rather than brand, and sized
// keywords before their substrings ("xl" before "large" catches "xlarge").
static COLOR_RULES: Lazy<Vec<SemanticRule>> = Lazy::new(|| {
    build_rules(&[
        ("primary|main", "primary", 0.9, "Primary brand color naming"),
        ("secondary|accent", "secondary", 0.85, "Secondary color naming"),
        (
            "error|danger|destructive",
            "error",
            0.9,
            "Error state color naming",
        ),
        (
            "success|positive|valid",
            "success",
            0.9,
            "Success state color naming",
        ),
        (
            "warning|caution|alert",
            "warning",
            0.9,
            "Warning state color naming",
        ),
        ("info", "info", 0.85, "Informational color naming"),
        (
            "background|bg|surface",
            "background",
            0.8,
            "Background surface naming",
        ),
        ("text|foreground|fg", "text", 0.8, "Text color naming"),
        ("border|outline|stroke", "border", 0.8, "Border color naming"),
        ("neutral|gray|grey", "neutral", 0.75, "Neutral scale naming"),
        ("brand", "brand", 0.7, "Generic brand color naming"),
    ])
});

static SPACING_RULES: Lazy<Vec<SemanticRule>> = Lazy::new(|| {
    build_rules(&[
        ("xs|extra-?small", "xs", 0.85, "Extra-small step naming"),
        ("xl|extra-?large", "xl", 0.85, "Extra-large step naming"),
        ("sm|small", "sm", 0.85, "Small step naming"),
        ("md|medium|base", "md", 0.85, "Medium step naming"),
        ("lg|large", "lg", 0.85, "Large step naming"),
        ("gap", "gap", 0.8, "Gap spacing naming"),
        ("margin", "margin", 0.8, "Margin spacing naming"),
        ("padding", "padding", 0.8, "Padding spacing naming"),
    ])
});

static TYPOGRAPHY_RULES: Lazy<Vec<SemanticRule>> = Lazy::new(|| {
    build_rules(&[
        ("display|hero", "display", 0.85, "Display scale naming"),
        ("heading|title|h[1-6]", "heading", 0.85, "Heading scale naming"),
        ("caption|footnote", "caption", 0.8, "Caption scale naming"),
        ("label|overline", "label", 0.8, "Label scale naming"),
        ("code|mono", "code", 0.8, "Code typeface naming"),
        ("body|paragraph|text", "body", 0.75, "Body copy naming"),
    ])
});

static SHADOW_RULES: Lazy<Vec<SemanticRule>> = Lazy::new(|| {
    build_rules(&[
        ("inner|inset", "inner", 0.8, "Inner shadow naming"),
        ("sm|small", "sm", 0.8, "Small elevation naming"),
        ("lg|large", "lg", 0.8, "Large elevation naming"),
        ("md|medium", "md", 0.8, "Medium elevation naming"),
        ("focus|ring", "focus", 0.75, "Focus ring naming"),
    ])
});

static BORDER_RULES: Lazy<Vec<SemanticRule>> = Lazy::new(|| {
    build_rules(&[
        ("thin|hairline", "thin", 0.8, "Thin border naming"),
        ("thick|heavy", "thick", 0.8, "Thick border naming"),
        ("radius|rounded", "radius", 0.75, "Corner radius naming"),
        ("dashed|dotted", "dashed", 0.7, "Dashed border naming"),
    ])
});

static OPACITY_RULES: Lazy<Vec<SemanticRule>> = Lazy::new(|| {
    build_rules(&[
        ("disabled|muted", "disabled", 0.8, "Disabled state naming"),
        ("hover", "hover", 0.8, "Hover state naming"),
        ("overlay|scrim", "overlay", 0.8, "Overlay layer naming"),
        ("subtle|faint", "subtle", 0.7, "Subtle emphasis naming"),
    ])
});

static INTENSITY_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(\d+|light|dark|bright|deep|pale|vivid)").ok());

/// Derives role-based semantic names for tokens from their original names
pub struct SemanticAnalyzer;

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn rules_for(kind: TokenKind) -> &'static [SemanticRule] {
        match kind {
            TokenKind::Color => &COLOR_RULES,
            TokenKind::Spacing => &SPACING_RULES,
            TokenKind::Typography => &TYPOGRAPHY_RULES,
            TokenKind::Shadow => &SHADOW_RULES,
            TokenKind::Border => &BORDER_RULES,
            TokenKind::Opacity => &OPACITY_RULES,
        }
    }

    /// Pull an intensity qualifier out of a color token name
    fn extract_intensity(lower_name: &str) -> String {
        INTENSITY_PATTERN
            .as_ref()
            .and_then(|re| re.find(lower_name))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "base".to_string())
    }

    /// Analyze one token's name against its kind's rule list.
    ///
    /// First matching rule wins; an unmatched name keeps itself as its
    /// semantic name at confidence 0.5. Color tokens carrying a non-neutral
    /// host role are overridden to `<role>-<intensity>`; the override raises
    /// confidence to at least 0.8, never lowers it.
    pub fn analyze_token(&self, token: &DesignToken) -> SemanticMapping {
        let lower = token.name.to_lowercase();

        let mut mapping = Self::rules_for(token.kind)
            .iter()
            .find(|rule| rule.pattern.is_match(&lower))
            .map(|rule| SemanticMapping {
                original_name: token.name.clone(),
                semantic_name: rule.label.to_string(),
                confidence: rule.confidence,
                reasoning: rule.rationale.to_string(),
            })
            .unwrap_or_else(|| SemanticMapping {
                original_name: token.name.clone(),
                semantic_name: token.name.clone(),
                confidence: 0.5,
                reasoning: defaults::SEMANTIC_REASONING.to_string(),
            });

        if token.kind == TokenKind::Color {
            if let Some(role) = token.semantic_role {
                if role != ColorRole::Neutral {
                    let intensity = Self::extract_intensity(&lower);
                    mapping.semantic_name = format!("{}-{}", role, intensity);
                    mapping.confidence = mapping.confidence.max(0.8);
                    mapping.reasoning = format!("Host-assigned semantic role '{}'", role);
                }
            }
        }

        mapping
    }

    /// Analyze a whole token set, one mapping per token in input order
    pub fn analyze_token_semantics(&self, tokens: &[DesignToken]) -> Vec<SemanticMapping> {
        tokens.iter().map(|token| self.analyze_token(token)).collect()
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
