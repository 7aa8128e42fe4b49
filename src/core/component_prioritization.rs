use super::component_classification::is_icon_name;
use super::types::ComponentRecord;

/// Priority never drops below this floor, so icons stay visible in the
/// generated documentation even after the penalty.
const PRIORITY_FLOOR: u32 = 10;

/// Subtracted from icon-named components so UI primitives rank first.
const ICON_PENALTY: u32 = 20;

/// Keyword groups and their additive bonus weights. Each group counts at
/// most once per name; groups are independent of each other.
const KEYWORD_BONUSES: &[(&[&str], u32)] = &[
    (&["button", "btn"], 50),
    (&["input", "field"], 45),
    (&["card"], 40),
    (&["modal", "dialog"], 35),
    (&["nav"], 30),
    (&["primary"], 20),
    (&["secondary"], 15),
];

/// Service for scoring and ordering classified components
pub struct ComponentPrioritizer;

impl ComponentPrioritizer {
    pub fn new() -> Self {
        Self
    }

    /// Compute the display priority for a single record.
    ///
    /// Usage-weighted base (`usage * 2`) plus editorial keyword bonuses,
    /// then the icon penalty with its floor of 10.
    pub fn score(&self, record: &ComponentRecord) -> u32 {
        let lower = record.name.to_lowercase();

        let mut priority = record.usage.saturating_mul(2);
        for (keywords, weight) in KEYWORD_BONUSES {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                priority += weight;
            }
        }

        if is_icon_name(&record.name) {
            priority = priority.saturating_sub(ICON_PENALTY).max(PRIORITY_FLOOR);
        }

        priority
    }

    /// Assign priorities to every record and sort highest first.
    ///
    /// The sort is stable, so records with equal priority keep their
    /// classification order.
    pub fn prioritize(&self, mut records: Vec<ComponentRecord>) -> Vec<ComponentRecord> {
        for record in &mut records {
            record.priority = self.score(record);
        }

        records.sort_by(|a, b| b.priority.cmp(&a.priority));
        records
    }
}

impl Default for ComponentPrioritizer {
    fn default() -> Self {
        Self::new()
    }
}
