use crate::core::types::{ConsistencyReport, DesignToken};
use once_cell::sync::Lazy;
use regex::Regex;

static KEBAB_NAME: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").ok());
static CAMEL_NAME: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[a-z]+([A-Z][a-z0-9]*)+$").ok());
static SNAKE_NAME: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)*$").ok());
static GENERIC_NUMBERED: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(color|colour|item|token|style)\d+$").ok());
static CAMEL_TRANSITION: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[a-z][A-Z]").ok());

fn matches(pattern: &'static Lazy<Option<Regex>>, name: &str) -> bool {
    pattern
        .as_ref()
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}

/// Scores a token set's naming consistency and semantic coverage.
///
/// Reports are recomputed fresh on every call; nothing is persisted.
pub struct ConsistencyAuditor;

impl ConsistencyAuditor {
    pub fn new() -> Self {
        Self
    }

    /// Share of tokens in the dominant naming convention.
    ///
    /// Names are bucketed first-match into kebab, camel, snake, or other;
    /// the measure is the largest bucket over the total. This deliberately
    /// measures dominant-convention share, not pairwise agreement. Empty
    /// sets score 0.0.
    fn naming_consistency(names: &[&str]) -> f32 {
        if names.is_empty() {
            return 0.0;
        }

        let mut buckets = [0usize; 4];
        for name in names {
            let bucket = if matches(&KEBAB_NAME, name) {
                0
            } else if matches(&CAMEL_NAME, name) {
                1
            } else if matches(&SNAKE_NAME, name) {
                2
            } else {
                3
            };
            buckets[bucket] += 1;
        }

        let largest = buckets.iter().max().copied().unwrap_or(0);
        largest as f32 / names.len() as f32
    }

    /// Share of tokens whose semantic name exists and differs from the
    /// raw name. Empty sets score 0.0.
    fn semantic_coverage(tokens: &[DesignToken]) -> f32 {
        if tokens.is_empty() {
            return 0.0;
        }

        let covered = tokens
            .iter()
            .filter(|t| {
                t.semantic_name
                    .as_deref()
                    .map(|semantic| !semantic.is_empty() && semantic != t.name)
                    .unwrap_or(false)
            })
            .count();

        covered as f32 / tokens.len() as f32
    }

    fn detect_anti_patterns(names: &[&str]) -> Vec<String> {
        let mut issues = Vec::new();

        if let Some(example) = names.iter().find(|name| matches(&GENERIC_NUMBERED, name)) {
            issues.push(format!(
                "Generic numbered names like '{}' carry no meaning",
                example
            ));
        }

        let trailing_digit_count = names
            .iter()
            .filter(|name| name.chars().last().map(|c| c.is_ascii_digit()).unwrap_or(false))
            .count();
        if trailing_digit_count * 2 > names.len() {
            issues.push("More than half of the token names end in digits".to_string());
        }

        let has_hyphen = names.iter().any(|name| name.contains('-'));
        let has_underscore = names.iter().any(|name| name.contains('_'));
        let has_camel = names.iter().any(|name| matches(&CAMEL_TRANSITION, name));
        let style_count = [has_hyphen, has_underscore, has_camel]
            .iter()
            .filter(|present| **present)
            .count();
        if style_count > 1 {
            issues.push("Mixed separator conventions across the token set".to_string());
        }

        issues
    }

    fn recommendation_for(score: f32) -> String {
        if score >= 0.9 {
            "Naming is consistent. Keep the current conventions.".to_string()
        } else if score >= 0.7 {
            "Mostly consistent. Align the remaining outliers with the dominant convention."
                .to_string()
        } else {
            "Adopt a single naming convention and add semantic names before exporting."
                .to_string()
        }
    }

    /// Audit a token set.
    ///
    /// Score is the average of consistency and coverage, minus 0.1 per
    /// detected anti-pattern capped at 0.3, floored at 0.
    pub fn audit(&self, tokens: &[DesignToken]) -> ConsistencyReport {
        let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();

        let consistency = Self::naming_consistency(&names);
        let coverage = Self::semantic_coverage(tokens);
        let issues = Self::detect_anti_patterns(&names);

        let penalty = (0.1 * issues.len() as f32).min(0.3);
        let score = ((consistency + coverage) / 2.0 - penalty).max(0.0);

        ConsistencyReport {
            score,
            recommendations: vec![Self::recommendation_for(score)],
            issues,
        }
    }
}

impl Default for ConsistencyAuditor {
    fn default() -> Self {
        Self::new()
    }
}
