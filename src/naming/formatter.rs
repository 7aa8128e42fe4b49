use super::presets::{CaseConvention, NamingPreset, TargetTool};
use crate::core::types::{DesignToken, TokenFormatResult, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static STRIP_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[^a-z0-9\s_-]").ok());
static WHITESPACE_RUNS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\s+").ok());
static SEPARATOR_RUNS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[-_]+").ok());

/// Rewrites token names into a target tool's naming convention.
///
/// Formatting always builds a new token value; the input set is never
/// mutated. Repeated formatting with different tools is therefore not
/// cumulative: each call rewrites `name` from the chosen base again.
pub struct NamingFormatter {
    tool: TargetTool,
    preset: NamingPreset,
}

impl NamingFormatter {
    pub fn new(tool: TargetTool) -> Self {
        Self {
            tool,
            preset: tool.preset(),
        }
    }

    pub fn tool(&self) -> TargetTool {
        self.tool
    }

    /// Reduce a raw name to lowercase kebab form.
    ///
    /// Lowercase, strip everything outside `[a-z0-9 _-]`, collapse
    /// whitespace and separator runs to single hyphens, trim edge hyphens.
    fn sanitize(name: &str) -> String {
        let mut cleaned = name.to_lowercase();

        if let Some(re) = STRIP_PATTERN.as_ref() {
            cleaned = re.replace_all(&cleaned, "").into_owned();
        }
        if let Some(re) = WHITESPACE_RUNS.as_ref() {
            cleaned = re.replace_all(&cleaned, "-").into_owned();
        }
        if let Some(re) = SEPARATOR_RUNS.as_ref() {
            cleaned = re.replace_all(&cleaned, "-").into_owned();
        }

        cleaned.trim_matches('-').to_string()
    }

    fn capitalize(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Re-case a sanitized kebab name per the preset's convention
    fn apply_convention(&self, base: &str) -> String {
        match self.preset.convention {
            CaseConvention::Kebab => base.to_string(),
            CaseConvention::Snake => base.replace('-', "_"),
            CaseConvention::Camel => {
                let mut words = base.split('-').filter(|w| !w.is_empty());
                let first = words.next().unwrap_or_default().to_string();
                words.fold(first, |mut acc, word| {
                    acc.push_str(&Self::capitalize(word));
                    acc
                })
            }
            CaseConvention::Pascal => base
                .split('-')
                .filter(|w| !w.is_empty())
                .map(Self::capitalize)
                .collect(),
        }
    }

    fn prefix_for(&self, kind: TokenKind) -> &'static str {
        match kind {
            TokenKind::Color => self.preset.color_prefix,
            TokenKind::Spacing => self.preset.spacing_prefix,
            TokenKind::Typography => self.preset.text_prefix,
            _ => "",
        }
    }

    /// Format one token for the target tool, returning a new token.
    ///
    /// The base is the existing semantic name when the preset prioritizes
    /// semantics and one is present, else the raw name. The output's
    /// `semantic_name` carries the cased, unprefixed base.
    pub fn format_token(&self, token: &DesignToken) -> DesignToken {
        let base = if self.preset.semantic_priority {
            token
                .semantic_name
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(&token.name)
        } else {
            &token.name
        };

        let cased = self.apply_convention(&Self::sanitize(base));
        let name = format!("{}{}", self.prefix_for(token.kind), cased);

        DesignToken {
            name,
            semantic_name: Some(cased),
            kind: token.kind,
            value: token.value.clone(),
            semantic_role: token.semantic_role,
        }
    }

    /// Format a whole token set and produce the naming guide.
    ///
    /// Semantic names are taken as found on the tokens; deriving new ones
    /// is the semantic analyzer's job, surfaced through the audit report.
    pub fn format_tokens(&self, tokens: &[DesignToken]) -> TokenFormatResult {
        TokenFormatResult {
            tokens: tokens.iter().map(|token| self.format_token(token)).collect(),
            naming_guide: self.naming_guide(),
        }
    }

    /// Render the markdown naming guide for the target tool
    pub fn naming_guide(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## Token Naming Guide: {}", self.tool));
        lines.push(String::new());
        lines.push(format!("- Convention: `{}`", self.preset.convention));
        lines.push(format!(
            "- Semantic names: {}",
            if self.preset.semantic_priority {
                "preferred when available"
            } else {
                "raw names are kept"
            }
        ));
        lines.push(String::new());
        lines.push("| Token type | Prefix | Example |".to_string());
        lines.push("|------------|--------|---------|".to_string());

        let examples = [
            (TokenKind::Color, "Primary Brand Color"),
            (TokenKind::Spacing, "Gap Medium"),
            (TokenKind::Typography, "Heading Large"),
        ];
        for (kind, sample) in examples {
            let formatted = self.format_token(&DesignToken::new(sample, kind));
            let prefix = self.prefix_for(kind);
            lines.push(format!(
                "| {} | `{}` | `{}` |",
                kind,
                if prefix.is_empty() { "(none)" } else { prefix },
                formatted.name
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Unprefixed types (shadow, border, opacity) use plain `{}` names.",
            self.preset.convention
        ));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn color_token(name: &str) -> DesignToken {
        DesignToken::new(name, TokenKind::Color)
    }

    #[test]
    fn test_bolt_formats_color_token() {
        let formatter = NamingFormatter::new(TargetTool::Bolt);
        let formatted = formatter.format_token(&color_token("Primary Brand Color"));

        assert_eq!(formatted.name, "color-primary-brand-color");
        assert_eq!(formatted.semantic_name.as_deref(), Some("primary-brand-color"));
    }

    #[test]
    fn test_input_token_is_not_mutated() {
        let formatter = NamingFormatter::new(TargetTool::Bolt);
        let original = color_token("Primary Brand Color");
        let _ = formatter.format_token(&original);

        assert_eq!(original.name, "Primary Brand Color");
        assert_eq!(original.semantic_name, None);
    }

    #[test]
    fn test_sanitize_strips_and_collapses() {
        assert_eq!(NamingFormatter::sanitize("  Primary  (Brand)  Color! "), "primary-brand-color");
        assert_eq!(NamingFormatter::sanitize("font__size--lg"), "font-size-lg");
        assert_eq!(NamingFormatter::sanitize("--edge-case--"), "edge-case");
    }

    #[test]
    fn test_case_conventions_per_tool() {
        let token = color_token("Primary Brand Color");

        assert_eq!(
            NamingFormatter::new(TargetTool::Cursor).format_token(&token).name,
            "color_primary_brand_color"
        );
        assert_eq!(
            NamingFormatter::new(TargetTool::Lovable).format_token(&token).name,
            "primaryBrandColor"
        );
        assert_eq!(
            NamingFormatter::new(TargetTool::Windsurf).format_token(&token).name,
            "ColorPrimaryBrandColor"
        );
        assert_eq!(
            NamingFormatter::new(TargetTool::V0).format_token(&token).name,
            "primary-brand-color"
        );
    }

    #[test]
    fn test_semantic_priority_uses_existing_semantic_name() {
        let formatter = NamingFormatter::new(TargetTool::Bolt);
        let mut token = color_token("Blue 500");
        token.semantic_name = Some("primary".to_string());

        assert_eq!(formatter.format_token(&token).name, "color-primary");
    }

    #[test]
    fn test_non_semantic_preset_ignores_semantic_name() {
        let formatter = NamingFormatter::new(TargetTool::Lovable);
        let mut token = color_token("Blue 500");
        token.semantic_name = Some("primary".to_string());

        assert_eq!(formatter.format_token(&token).name, "blue500");
    }

    #[test]
    fn test_only_color_spacing_typography_get_prefixes() {
        let formatter = NamingFormatter::new(TargetTool::Bolt);

        let spacing = formatter.format_token(&DesignToken::new("Gap Large", TokenKind::Spacing));
        assert_eq!(spacing.name, "spacing-gap-large");

        let typography =
            formatter.format_token(&DesignToken::new("Heading XL", TokenKind::Typography));
        assert_eq!(typography.name, "text-heading-xl");

        let shadow = formatter.format_token(&DesignToken::new("Card Shadow", TokenKind::Shadow));
        assert_eq!(shadow.name, "card-shadow");
    }

    #[test]
    fn test_format_tokens_maps_the_whole_set() {
        let formatter = NamingFormatter::new(TargetTool::Bolt);
        let mut labelled = color_token("Blue 500");
        labelled.semantic_name = Some("primary".to_string());

        let result = formatter.format_tokens(&[color_token("Main Blue"), labelled]);

        // Without an existing semantic name the raw name is the base
        assert_eq!(result.tokens[0].name, "color-main-blue");
        assert_eq!(result.tokens[1].name, "color-primary");
        assert!(result.naming_guide.contains("kebab-case"));
    }

    #[test]
    fn test_naming_guide_shows_real_examples() {
        let guide = NamingFormatter::new(TargetTool::Bolt).naming_guide();
        assert!(guide.contains("## Token Naming Guide: bolt"));
        assert!(guide.contains("`color-`"));
        assert!(guide.contains("`color-primary-brand-color`"));

        let guide = NamingFormatter::new(TargetTool::Lovable).naming_guide();
        assert!(guide.contains("(none)"));
        assert!(guide.contains("camelCase"));
    }

    #[test]
    fn test_value_and_role_are_carried_over() {
        let formatter = NamingFormatter::new(TargetTool::Bolt);
        let mut token = color_token("Accent Purple");
        token.value = Some("#7C3AED".to_string());

        let formatted = formatter.format_token(&token);
        assert_eq!(formatted.value.as_deref(), Some("#7C3AED"));
    }
}
