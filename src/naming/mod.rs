pub mod consistency;
pub mod formatter;
pub mod presets;
pub mod semantics;

pub use consistency::ConsistencyAuditor;
pub use formatter::NamingFormatter;
pub use presets::{CaseConvention, NamingPreset, TargetTool};
pub use semantics::SemanticAnalyzer;
