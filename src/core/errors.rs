/// Domain-specific error types for figbridge using thiserror
///
/// The classification, scoring, and rendering core never fails for any
/// documented input; these types cover the crate's two real error surfaces,
/// parsing host extraction payloads and writing exports, plus configuration
/// handling. The CLI layer wraps them in `anyhow::Error` for display.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for figbridge operations
#[derive(Error, Debug)]
pub enum FigBridgeError {
    #[error("Parsing failed")]
    Parse(#[from] ParseError),

    #[error("Export operation failed")]
    Export(#[from] ExportError),

    #[error("Configuration error")]
    Config(#[from] ConfigError),
}

/// Parsing errors for host extraction payloads
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON parsing failed in {context}: {message}")]
    Json {
        context: String,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid format in {context}: expected {expected}, found {found}")]
    InvalidFormat {
        context: String,
        expected: String,
        found: String,
    },

    #[error("Unknown target tool '{name}'. Available tools: {available:?}")]
    UnknownTool {
        name: String,
        available: Vec<String>,
    },
}

/// Export operation errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Export format not supported: {format}")]
    UnsupportedFormat { format: String },

    #[error("Data transformation failed from {from_format} to {to_format}: {reason}")]
    DataTransformation {
        from_format: String,
        to_format: String,
        reason: String,
    },

    #[error("Failed to write export to {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read configuration from {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write configuration to {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("TOML parsing failed in {context}: {message}")]
    Toml {
        context: String,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML serialization failed: {message}")]
    TomlSerialize {
        message: String,
        #[source]
        source: toml::ser::Error,
    },

    #[error("Invalid configuration value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },
}

impl ParseError {
    /// Wrap a serde_json error with the payload context it occurred in.
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            message: source.to_string(),
            source,
        }
    }
}
