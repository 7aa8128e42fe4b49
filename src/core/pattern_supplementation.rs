use super::component_classification::ComponentClassifier;
use super::component_prioritization::ComponentPrioritizer;
use super::types::{ComponentCategory, ComponentRecord, RawComponent};
use std::collections::HashSet;
use tracing::debug;

/// Icon share above which a set is considered icon-dominated.
pub const DEFAULT_ICON_HEAVY_THRESHOLD: f32 = 0.7;

/// Canonical UI patterns merged into icon-dominated sets so the generated
/// documentation still covers structural primitives.
const CANONICAL_PATTERNS: [&str; 5] = [
    "Button/Primary",
    "Button/Secondary",
    "Input/Text Field",
    "Card/Content",
    "Navigation/Menu",
];

/// Service for supplementing icon-heavy component sets with canonical
/// UI patterns
pub struct PatternSupplementer {
    classifier: ComponentClassifier,
    prioritizer: ComponentPrioritizer,
    threshold: f32,
}

impl PatternSupplementer {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_ICON_HEAVY_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            classifier: ComponentClassifier::new(),
            prioritizer: ComponentPrioritizer::new(),
            threshold,
        }
    }

    /// Whether icons dominate the classified set.
    ///
    /// An empty set is never icon-heavy.
    pub fn is_icon_heavy(&self, records: &[ComponentRecord]) -> bool {
        if records.is_empty() {
            return false;
        }

        let icon_count = records
            .iter()
            .filter(|r| r.category == ComponentCategory::Icon)
            .count();

        icon_count as f32 / records.len() as f32 > self.threshold
    }

    /// Merge the canonical patterns into an icon-heavy set.
    ///
    /// Patterns whose name already exists (case-insensitive) are skipped,
    /// so supplementing an already-supplemented set is a no-op. The merged
    /// set is re-sorted by priority, highest first.
    pub fn supplement(&self, records: Vec<ComponentRecord>) -> Vec<ComponentRecord> {
        if !self.is_icon_heavy(&records) {
            return records;
        }

        self.merge_canonical(records)
    }

    fn merge_canonical(&self, mut records: Vec<ComponentRecord>) -> Vec<ComponentRecord> {
        let existing: HashSet<String> = records.iter().map(|r| r.name.to_lowercase()).collect();

        let mut added = 0usize;
        for name in CANONICAL_PATTERNS {
            if existing.contains(&name.to_lowercase()) {
                continue;
            }

            let mut record = self.classifier.classify(&RawComponent::named(name));
            record.priority = self.prioritizer.score(&record);
            records.push(record);
            added += 1;
        }

        debug!("Supplemented icon-heavy set with {} canonical patterns", added);

        records.sort_by(|a, b| b.priority.cmp(&a.priority));
        records
    }
}

impl Default for PatternSupplementer {
    fn default() -> Self {
        Self::new()
    }
}
