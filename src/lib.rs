//! # figbridge
//!
//! A documentation bridge that turns Figma extraction payloads into design
//! system docs for AI coding tools.
//!
//! figbridge consumes the component/token JSON emitted by a design-tool
//! extraction step, classifies and prioritizes components, formats design
//! tokens for a target AI tool preset, audits token naming consistency, and
//! renders everything as markdown with TSX scaffold snippets.
//!
//! ## Core Features
//!
//! - **Component Classification**: ordered regex rules assign semantic types
//!   and documentation categories
//! - **Priority Scoring**: usage-weighted ranking with keyword boosts and an
//!   icon penalty
//! - **Pattern Supplementation**: icon-heavy extractions get the canonical UI
//!   patterns added back
//! - **Token Naming**: per-tool presets (bolt, v0, lovable, cursor, windsurf)
//!   with semantic analysis
//! - **Consistency Auditing**: convention detection, anti-pattern flags, and
//!   a naming score
//! - **Export Capabilities**: markdown documentation, TSX scaffolds, and JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use fig_bridge::cli::run_cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     run_cli().await
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration management and validation
//! - [`core`] - Core types, classification, and prioritization
//! - [`export`] - Markdown/JSON export and scaffold generation
//! - [`format`] - Extraction payload conversion
//! - [`naming`] - Token naming presets, semantics, and auditing

/// Command-line interface and argument parsing
pub mod cli;
/// Configuration management and validation
pub mod config;
/// Core types, classification, and prioritization
pub mod core;
/// Markdown/JSON export and scaffold generation
pub mod export;
/// Extraction payload conversion
pub mod format;
/// Token naming presets, semantics, and auditing
pub mod naming;

// Re-export core functionality for easy access
pub use crate::core::*;
