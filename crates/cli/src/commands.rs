//! CLI command definitions for Newslens.
//!
//! Provides the command-line interface for running the HTTP API server and
//! for one-shot analyses against a local engine or a remote server.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI application.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Logging verbosity
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, env = "NEWSLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),

    /// Run a single analysis from the command line
    Analyze(AnalyzeArgs),

    /// List the available analysis tools
    Tools(ToolsArgs),
}

/// API server arguments.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Analysis engine executable
    #[arg(long, env = "NEWSLENS_ENGINE")]
    pub engine: Option<String>,

    /// Fixed argument passed to the engine before the tool id (repeatable)
    #[arg(long = "engine-arg")]
    pub engine_args: Vec<String>,

    /// Working directory for the engine process
    #[arg(long)]
    pub engine_dir: Option<PathBuf>,

    /// Disable CORS
    #[arg(long, default_value_t = false)]
    pub no_cors: bool,
}

/// One-shot analysis arguments.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Analysis tool id (summarizer, sentiment, plagiarism, fake-news)
    #[arg(short, long)]
    pub tool: String,

    /// Input text; read from --file or stdin when omitted
    pub text: Option<String>,

    /// Read input text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Send the request to a running server instead of spawning the engine locally
    #[arg(long)]
    pub remote: Option<String>,

    /// Analysis engine executable
    #[arg(long, env = "NEWSLENS_ENGINE")]
    pub engine: Option<String>,

    /// Fixed argument passed to the engine before the tool id (repeatable)
    #[arg(long = "engine-arg")]
    pub engine_args: Vec<String>,

    /// Working directory for the engine process
    #[arg(long)]
    pub engine_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Tool listing arguments.
#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Output format
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,

    /// JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
