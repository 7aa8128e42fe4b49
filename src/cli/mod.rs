use crate::config::{ConfigAction, FigBridgeConfig};
use crate::core::errors::ParseError;
use crate::core::traits::{ExportService as ExportServiceTrait, FormatConverter as _};
use crate::core::{ExportConfig, ExportFormat, PatternSupplementer, RawExtraction};
use crate::export::ExportService;
use crate::format::FormatConverter;
use crate::naming::{ConsistencyAuditor, NamingFormatter, SemanticAnalyzer, TargetTool};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tokio::fs;

#[derive(Parser)]
#[command(name = "figbridge")]
#[command(about = "Turn Figma extraction payloads into design system docs for AI coding tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate component documentation from an extraction payload
    Generate {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (default: from config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the summary section
        #[arg(long)]
        no_summary: bool,

        /// Skip the TSX scaffold blocks
        #[arg(long)]
        no_scaffolds: bool,

        /// Maximum number of icons shown in the icon section
        #[arg(long)]
        max_icons: Option<usize>,
    },

    /// Format design tokens for a target AI tool
    Tokens {
        /// Target tool preset (default: from config)
        #[arg(short, long, value_enum)]
        tool: Option<ToolArg>,

        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Audit token naming consistency
    Audit {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    fn to_export_format(self) -> ExportFormat {
        match self {
            OutputFormat::Markdown => ExportFormat::Markdown,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

/// Target tool presets exposed on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ToolArg {
    Bolt,
    V0,
    Lovable,
    Cursor,
    Windsurf,
}

impl ToolArg {
    fn to_target_tool(self) -> TargetTool {
        match self {
            ToolArg::Bolt => TargetTool::Bolt,
            ToolArg::V0 => TargetTool::V0,
            ToolArg::Lovable => TargetTool::Lovable,
            ToolArg::Cursor => TargetTool::Cursor,
            ToolArg::Windsurf => TargetTool::Windsurf,
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("fig_bridge={}", log_level))
        .init();

    let config = FigBridgeConfig::discover().await?;

    match cli.command {
        Commands::Generate {
            input,
            format,
            output,
            no_summary,
            no_scaffolds,
            max_icons,
        } => {
            generate_docs(
                GenerateArgs {
                    input,
                    format,
                    output,
                    no_summary,
                    no_scaffolds,
                    max_icons,
                },
                &config,
            )
            .await?;
        }

        Commands::Tokens {
            tool,
            input,
            format,
            output,
        } => {
            format_tokens(
                TokensArgs {
                    tool,
                    input,
                    format,
                    output,
                },
                &config,
            )
            .await?;
        }

        Commands::Audit {
            input,
            format,
            output,
        } => {
            audit_tokens(
                AuditArgs {
                    input,
                    format,
                    output,
                },
            )
            .await?;
        }

        Commands::Config { action } => {
            manage_config(action, &config).await?;
        }
    }

    Ok(())
}

struct GenerateArgs {
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    no_summary: bool,
    no_scaffolds: bool,
    max_icons: Option<usize>,
}

struct TokensArgs {
    tool: Option<ToolArg>,
    input: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
}

struct AuditArgs {
    input: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
}

async fn generate_docs(args: GenerateArgs, config: &FigBridgeConfig) -> Result<()> {
    let converter = FormatConverter::new();
    let export_service = ExportService::new();

    let raw = read_extraction(&args.input).await?;
    let mut snapshot = converter.normalize(raw).await?;

    if config.classification.supplement_patterns {
        let supplementer =
            PatternSupplementer::with_threshold(config.classification.icon_heavy_threshold);
        snapshot.components = supplementer.supplement(snapshot.components);
    }

    let export_config = create_export_config(&args, config);

    let content = match export_config.format {
        ExportFormat::Markdown => export_service.export_to_markdown(&snapshot, &export_config)?,
        ExportFormat::Json => export_service.export_to_json(&snapshot, &export_config)?,
    };

    write_output(&args.output, &content, "Documentation").await
}

async fn format_tokens(args: TokensArgs, config: &FigBridgeConfig) -> Result<()> {
    let converter = FormatConverter::new();
    let export_service = ExportService::new();

    let raw = read_extraction(&args.input).await?;
    let snapshot = converter.normalize(raw).await?;

    let tool = match args.tool {
        Some(tool_arg) => tool_arg.to_target_tool(),
        None => config.naming.default_tool.parse::<TargetTool>()?,
    };

    let formatter = NamingFormatter::new(tool);
    let result = formatter.format_tokens(&snapshot.tokens);

    let content = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Markdown => export_service.render_token_guide(&result),
    };

    write_output(&args.output, &content, "Token reference").await
}

async fn audit_tokens(args: AuditArgs) -> Result<()> {
    let converter = FormatConverter::new();
    let export_service = ExportService::new();

    let raw = read_extraction(&args.input).await?;
    let snapshot = converter.normalize(raw).await?;

    let auditor = ConsistencyAuditor::new();
    let report = auditor.audit(&snapshot.tokens);
    let analyzer = SemanticAnalyzer::new();
    let mappings = analyzer.analyze_token_semantics(&snapshot.tokens);

    let content = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "report": report,
            "suggestions": mappings,
        }))?,
        OutputFormat::Markdown => export_service.render_consistency_report(&report, &mappings),
    };

    write_output(&args.output, &content, "Audit report").await
}

async fn manage_config(action: ConfigAction, config: &FigBridgeConfig) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let config_path = crate::config::project_config_path();
            FigBridgeConfig::default().save(&config_path).await?;
            println!("Configuration initialized at {}", config_path.display());
        }

        ConfigAction::Show => {
            let content = toml::to_string_pretty(config)
                .context("Failed to render the active configuration")?;
            print!("{}", content);
        }
    }

    Ok(())
}

fn create_export_config(args: &GenerateArgs, config: &FigBridgeConfig) -> ExportConfig {
    let mut export_config = config.export_config();

    if let Some(format) = args.format {
        export_config.format = format.to_export_format();
    }
    if args.no_summary {
        export_config.include_summary = false;
    }
    if args.no_scaffolds {
        export_config.include_scaffolds = false;
    }
    if let Some(max_icons) = args.max_icons {
        export_config.max_icons_shown = max_icons;
    }

    export_config
}

/// Read the host extraction payload from a file or piped stdin.
async fn read_extraction(input: &Option<PathBuf>) -> Result<RawExtraction> {
    let (source, payload) = match input {
        Some(path) => {
            let content = fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
            (path.display().to_string(), content)
        }
        None => {
            if atty::is(atty::Stream::Stdin) {
                return Err(anyhow!(
                    "No input file given and stdin is a terminal. Pipe an extraction payload or pass --input."
                ));
            }
            ("stdin".to_string(), read_stdin().await?)
        }
    };

    let data: serde_json::Value =
        serde_json::from_str(&payload).map_err(|e| ParseError::json(source.clone(), e))?;
    Ok(RawExtraction::new(source, data))
}

async fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    let mut stdin = std::io::stdin();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer)
}

async fn write_output(output: &Option<PathBuf>, content: &str, label: &str) -> Result<()> {
    if let Some(path) = output {
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!("{} written to {}", label, path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}
