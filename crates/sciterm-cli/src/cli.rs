//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

/// Sciterm CLI - Explain scientific terms and find related ones.
#[derive(Debug, Parser)]
#[command(name = "sciterm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SCITERM_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (terms only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Explain a term and list three related terms
    Explain(ExplainArgs),

    /// List three related terms only
    Related(RelatedArgs),

    /// Extract related terms from text without calling a model
    Extract(ExtractArgs),
}

/// Audience level argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LevelArg {
    /// Two short, simple sentences
    Student,
    /// A few accurate sentences for a curious learner
    Enthusiast,
    /// A precise, technical paragraph
    Expert,
}

impl LevelArg {
    /// Level name as accepted by the explainer
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelArg::Student => "student",
            LevelArg::Enthusiast => "enthusiast",
            LevelArg::Expert => "expert",
        }
    }
}

/// Arguments for the explain command.
#[derive(Debug, Parser)]
pub struct ExplainArgs {
    /// Scientific term to explain
    pub term: String,

    /// Audience level
    #[arg(short, long, value_enum, default_value = "student")]
    pub level: LevelArg,

    /// Response language code (en, hi, mr)
    #[arg(short = 'L', long, default_value = "en")]
    pub language: String,
}

/// Arguments for the related command.
#[derive(Debug, Parser)]
pub struct RelatedArgs {
    /// Scientific term to find related terms for
    pub term: String,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Term used for fallback placeholders
    #[arg(short, long)]
    pub term: String,

    /// Model output to extract from (reads stdin when omitted)
    #[arg(long)]
    pub text: Option<String>,
}
