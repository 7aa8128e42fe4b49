/// String constants to avoid repeated allocations throughout the codebase.
///
/// This module contains frequently used string literals that would otherwise
/// be allocated repeatedly via .to_string() or String::from() calls.
/// Category section labels used in export formatting
pub mod category_labels {
    pub const UI: &str = "UI Components";
    pub const ICON: &str = "Icons";
    pub const LAYOUT: &str = "Layout Components";
    pub const FEEDBACK: &str = "Feedback Components";
}

/// Emoji icons shown next to category headings in markdown exports
pub mod category_icons {
    pub const UI: &str = "🧩";
    pub const ICON: &str = "🎨";
    pub const LAYOUT: &str = "📐";
    pub const FEEDBACK: &str = "💬";
}

/// AI tool identifiers accepted by the naming formatter
pub mod tools {
    pub const BOLT: &str = "bolt";
    pub const V0: &str = "v0";
    pub const LOVABLE: &str = "lovable";
    pub const CURSOR: &str = "cursor";
    pub const WINDSURF: &str = "windsurf";

    pub const ALL: [&str; 5] = [BOLT, V0, LOVABLE, CURSOR, WINDSURF];
}

/// HTML element tags used when scaffolding component snippets
pub mod element_tags {
    pub const BUTTON: &str = "button";
    pub const INPUT: &str = "input";
    pub const DIV: &str = "div";
    pub const NAV: &str = "nav";
    pub const SPAN: &str = "span";
}

/// Fallback values applied when extraction payloads omit fields
pub mod defaults {
    pub const VARIANT: &str = "default";
    pub const SOURCE: &str = "figma";
    pub const SEMANTIC_REASONING: &str = "Basic name analysis";
}

/// File names and environment variables for configuration discovery
pub mod config_files {
    pub const PROJECT_CONFIG: &str = ".figbridge.toml";
    pub const USER_CONFIG: &str = "config.toml";
    pub const CONFIG_DIR_ENV: &str = "FIG_BRIDGE_CONFIG_DIR";
}
