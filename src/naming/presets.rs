use crate::core::constants::tools;
use crate::core::errors::ParseError;
use serde::{Deserialize, Serialize};

/// Case style applied to sanitized token names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseConvention {
    Kebab,
    Camel,
    Pascal,
    Snake,
}

/// AI tool targeted by the naming formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetTool {
    Bolt,
    V0,
    Lovable,
    Cursor,
    Windsurf,
}

/// Naming convention preset for one target tool.
///
/// Read-only for the process lifetime; every tool maps to exactly one
/// preset via [`TargetTool::preset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingPreset {
    pub color_prefix: &'static str,
    pub spacing_prefix: &'static str,
    pub text_prefix: &'static str,
    pub convention: CaseConvention,
    /// Prefer an existing semantic name over the raw name as the base
    pub semantic_priority: bool,
}

const BOLT: NamingPreset = NamingPreset {
    color_prefix: "color-",
    spacing_prefix: "spacing-",
    text_prefix: "text-",
    convention: CaseConvention::Kebab,
    semantic_priority: true,
};

const V0: NamingPreset = NamingPreset {
    color_prefix: "",
    spacing_prefix: "",
    text_prefix: "",
    convention: CaseConvention::Kebab,
    semantic_priority: true,
};

const LOVABLE: NamingPreset = NamingPreset {
    color_prefix: "",
    spacing_prefix: "",
    text_prefix: "",
    convention: CaseConvention::Camel,
    semantic_priority: false,
};

const CURSOR: NamingPreset = NamingPreset {
    color_prefix: "color_",
    spacing_prefix: "spacing_",
    text_prefix: "text_",
    convention: CaseConvention::Snake,
    semantic_priority: true,
};

const WINDSURF: NamingPreset = NamingPreset {
    color_prefix: "Color",
    spacing_prefix: "Space",
    text_prefix: "Text",
    convention: CaseConvention::Pascal,
    semantic_priority: false,
};

impl TargetTool {
    pub const ALL: [TargetTool; 5] = [
        TargetTool::Bolt,
        TargetTool::V0,
        TargetTool::Lovable,
        TargetTool::Cursor,
        TargetTool::Windsurf,
    ];

    /// Look up the naming preset for this tool
    pub fn preset(&self) -> NamingPreset {
        match self {
            TargetTool::Bolt => BOLT,
            TargetTool::V0 => V0,
            TargetTool::Lovable => LOVABLE,
            TargetTool::Cursor => CURSOR,
            TargetTool::Windsurf => WINDSURF,
        }
    }
}

impl std::fmt::Display for TargetTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            TargetTool::Bolt => tools::BOLT,
            TargetTool::V0 => tools::V0,
            TargetTool::Lovable => tools::LOVABLE,
            TargetTool::Cursor => tools::CURSOR,
            TargetTool::Windsurf => tools::WINDSURF,
        };
        write!(f, "{}", tag)
    }
}

impl std::str::FromStr for TargetTool {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            tools::BOLT => Ok(TargetTool::Bolt),
            tools::V0 => Ok(TargetTool::V0),
            tools::LOVABLE => Ok(TargetTool::Lovable),
            tools::CURSOR => Ok(TargetTool::Cursor),
            tools::WINDSURF => Ok(TargetTool::Windsurf),
            _ => Err(ParseError::UnknownTool {
                name: s.to_string(),
                available: tools::ALL.iter().map(|t| t.to_string()).collect(),
            }),
        }
    }
}

impl std::fmt::Display for CaseConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            CaseConvention::Kebab => "kebab-case",
            CaseConvention::Camel => "camelCase",
            CaseConvention::Pascal => "PascalCase",
            CaseConvention::Snake => "snake_case",
        };
        write!(f, "{}", tag)
    }
}
