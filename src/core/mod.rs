pub mod component_classification;
pub mod component_prioritization;
pub mod constants;
pub mod errors;
pub mod pattern_supplementation;
pub mod traits;
pub mod types;

pub use component_classification::{is_icon_name, ComponentClassifier};
pub use component_prioritization::ComponentPrioritizer;
pub use errors::{ConfigError, ExportError, FigBridgeError, ParseError};
pub use pattern_supplementation::{PatternSupplementer, DEFAULT_ICON_HEAVY_THRESHOLD};
pub use traits::*;
pub use types::*;
