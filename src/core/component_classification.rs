use super::constants::defaults;
use super::types::{ComponentCategory, ComponentRecord, ComponentType, RawComponent};
use once_cell::sync::Lazy;
use regex::Regex;

/// Keywords identifying icon components and icon-library exports.
///
/// Shared between the type rules, the category rules, and the scorer's icon
/// penalty so all three agree on what counts as an icon.
const ICON_KEYWORDS: &str = r"icon|glyph|lucide|feather|heroicons|material|tabler|phosphor";

static ICON_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(ICON_KEYWORDS).ok());

// Lazy static initialization of the classification rule tables. Order is
// precedence: the first matching rule wins.
static TYPE_RULES: Lazy<Vec<(ComponentType, Regex)>> = Lazy::new(|| {
    [
        (ComponentType::Button, r"button|btn"),
        (ComponentType::Input, r"input|field|form"),
        (ComponentType::Card, r"card|tile"),
        (ComponentType::Modal, r"modal|dialog|popup|overlay"),
        (ComponentType::Navigation, r"nav|menu|tab|breadcrumb"),
        (ComponentType::Icon, ICON_KEYWORDS),
    ]
    .into_iter()
    .filter_map(|(component_type, pattern)| Regex::new(pattern).ok().map(|re| (component_type, re)))
    .collect()
});

static CATEGORY_RULES: Lazy<Vec<(ComponentCategory, Regex)>> = Lazy::new(|| {
    [
        (ComponentCategory::Icon, ICON_KEYWORDS),
        (
            ComponentCategory::Layout,
            r"grid|container|layout|stack|row|column|flex|spacer|divider|frame",
        ),
        (
            ComponentCategory::Feedback,
            r"toast|alert|snackbar|notification|banner|progress|spinner|loader|skeleton|tooltip",
        ),
    ]
    .into_iter()
    .filter_map(|(category, pattern)| Regex::new(pattern).ok().map(|re| (category, re)))
    .collect()
});

/// Whether a component name hits the icon keyword set.
pub fn is_icon_name(name: &str) -> bool {
    ICON_PATTERN
        .as_ref()
        .map(|re| re.is_match(&name.to_lowercase()))
        .unwrap_or(false)
}

/// Service for classifying raw component records into documented components
pub struct ComponentClassifier {
    /// Ordered name rules assigning the semantic type tag
    type_rules: Vec<(ComponentType, Regex)>,
    /// Ordered name rules assigning the documentation category
    category_rules: Vec<(ComponentCategory, Regex)>,
}

impl ComponentClassifier {
    pub fn new() -> Self {
        Self {
            type_rules: TYPE_RULES.clone(),
            category_rules: CATEGORY_RULES.clone(),
        }
    }

    /// Classify a single raw record into a fully-populated component record.
    ///
    /// Never fails: absent fields degrade to defaults (usage 0, empty
    /// contexts, a single `default` variant) and unmatched names fall back
    /// to the generic `component`/`ui` tags. Priority is assigned later by
    /// the prioritizer and starts at 0 here.
    pub fn classify(&self, raw: &RawComponent) -> ComponentRecord {
        let lower = raw.name.to_lowercase();

        let component_type = self
            .type_rules
            .iter()
            .find(|(_, re)| re.is_match(&lower))
            .map(|(component_type, _)| *component_type)
            .unwrap_or(ComponentType::Component);

        let category = self
            .category_rules
            .iter()
            .find(|(_, re)| re.is_match(&lower))
            .map(|(category, _)| *category)
            .unwrap_or(ComponentCategory::Ui);

        let variants = match &raw.variants {
            Some(variants) if !variants.is_empty() => variants.clone(),
            _ => vec![defaults::VARIANT.to_string()],
        };

        ComponentRecord {
            name: raw.name.clone(),
            component_type,
            variants,
            usage: raw.instance_count.unwrap_or(0),
            contexts: raw.usage_contexts.clone().unwrap_or_default(),
            category,
            priority: 0,
        }
    }

    /// Classify a batch of raw records, preserving input order
    pub fn classify_all(&self, raws: &[RawComponent]) -> Vec<ComponentRecord> {
        raws.iter().map(|raw| self.classify(raw)).collect()
    }
}

impl Default for ComponentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
