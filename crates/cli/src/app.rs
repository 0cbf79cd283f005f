//! CLI application entry point and configuration.
//!
//! This module provides the main CLI application logic, including argument
//! parsing, configuration loading, and command dispatch.

use crate::commands::{AnalyzeArgs, Cli, Commands, OutputFormat, ServeArgs, ToolsArgs};
use crate::error::{CliError, Result};
use clap::Parser;
use newslens_api::{start_server, ApiConfig, Dispatcher};
use newslens_core::config::{default_config_path, EngineConfig, LogFormat};
use newslens_core::tools::{analysis_tools, parse_tool_id, tool_display_name, tool_id};
use newslens_core::{Analysis, AnalysisRequest, NewslensConfig};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for the CLI application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the configuration file, if one was loaded.
    pub config_path: Option<PathBuf>,
    /// Logging verbosity level.
    pub verbosity: u8,
    /// Loaded Newslens configuration.
    pub newslens: NewslensConfig,
}

/// Main CLI application.
#[derive(Debug)]
pub struct App {
    /// Application configuration.
    pub config: AppConfig,
    /// Parsed CLI arguments.
    pub cli: Cli,
}

/// Parse arguments, load configuration, and execute the chosen command.
pub fn run() -> Result<()> {
    let app = App::new()?;
    app.setup_logging();
    app.execute()
}

impl App {
    /// Create a new application instance from command line arguments.
    pub fn new() -> Result<Self> {
        let cli = Cli::parse();
        let config = Self::load_config(&cli)?;
        Ok(Self { config, cli })
    }

    /// Load configuration from file and environment.
    fn load_config(cli: &Cli) -> Result<AppConfig> {
        let mut newslens = NewslensConfig::default();
        let mut config_path = None;

        if let Some(path) = &cli.config {
            if path.exists() {
                newslens =
                    NewslensConfig::load(path).map_err(|e| CliError::Config(e.to_string()))?;
                config_path = Some(path.clone());
            } else {
                return Err(CliError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
        } else if let Ok(path) = default_config_path() {
            if path.exists() {
                newslens =
                    NewslensConfig::load(&path).map_err(|e| CliError::Config(e.to_string()))?;
                config_path = Some(path);
            }
        }

        Ok(AppConfig {
            config_path,
            verbosity: cli.verbose,
            newslens,
        })
    }

    /// Set up logging based on verbosity level.
    fn setup_logging(&self) {
        let level = match self.config.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_module_path(false)
            .format_target(false)
            .format_timestamp(None)
            .try_init()
            .ok(); // Ignore errors if logger already initialized
    }

    /// Dispatch the parsed subcommand.
    pub fn execute(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Serve(args) => self.handle_serve(args),
            Commands::Analyze(args) => self.handle_analyze(args),
            Commands::Tools(args) => self.handle_tools(args),
        }
    }

    fn handle_serve(&self, args: &ServeArgs) -> Result<()> {
        let mut core_config = self.config.newslens.clone();
        if let Some(host) = &args.host {
            core_config.http.host = host.clone();
        }
        if let Some(port) = args.port {
            core_config.http.port = port;
        }
        if args.no_cors {
            core_config.http.enable_cors = false;
        }

        let engine_config =
            self.engine_config(&args.engine, &args.engine_args, &args.engine_dir);
        let api_config =
            ApiConfig::from_core(&core_config).map_err(|e| CliError::Config(e.to_string()))?;

        self.init_tracing();
        log::info!(
            "newslens {} ({})",
            env!("CARGO_PKG_VERSION"),
            option_env!("CLI_GIT_COMMIT").unwrap_or("unknown")
        );

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(async move {
            let dispatcher = Arc::new(Dispatcher::from_engine_config(&engine_config));
            start_server(api_config, dispatcher)
                .await
                .map_err(|e| CliError::Api(e.to_string()))
        })
    }

    fn handle_analyze(&self, args: &AnalyzeArgs) -> Result<()> {
        let text = self.read_input(args)?;
        let runtime = tokio::runtime::Runtime::new()?;

        if let Some(server) = &args.remote {
            let body = runtime.block_on(remote_analyze(server, &args.tool, &text))?;
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&body)?),
                OutputFormat::Text => {
                    println!("{}", body["result"].as_str().unwrap_or_default())
                }
            }
            return Ok(());
        }

        let tool = parse_tool_id(&args.tool)
            .ok_or_else(|| CliError::Argument(format!("unknown analysis tool: {}", args.tool)))?;
        let engine_config =
            self.engine_config(&args.engine, &args.engine_args, &args.engine_dir);
        let dispatcher = Dispatcher::from_engine_config(&engine_config);

        let dispatched = runtime
            .block_on(dispatcher.dispatch(&AnalysisRequest { tool, text }))
            .map_err(|e| CliError::Analysis(e.to_string()))?;

        match args.format {
            OutputFormat::Json => {
                let body = serde_json::json!({
                    "result": dispatched.raw,
                    "analysis": dispatched.analysis,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
            OutputFormat::Text => print_analysis(&dispatched.analysis, &dispatched.raw),
        }
        Ok(())
    }

    fn handle_tools(&self, args: &ToolsArgs) -> Result<()> {
        match args.format {
            OutputFormat::Json => {
                let tools: Vec<_> = analysis_tools()
                    .into_iter()
                    .map(|tool| {
                        serde_json::json!({
                            "id": tool_id(&tool),
                            "name": tool_display_name(&tool),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&tools)?);
            }
            OutputFormat::Text => {
                for tool in analysis_tools() {
                    println!("{:<12} {}", tool_id(&tool), tool_display_name(&tool));
                }
            }
        }
        Ok(())
    }

    /// Engine configuration with command-line overrides applied.
    fn engine_config(
        &self,
        command: &Option<String>,
        args: &[String],
        working_dir: &Option<PathBuf>,
    ) -> EngineConfig {
        let mut engine = self.config.newslens.engine.clone();
        if let Some(command) = command {
            engine.command = command.clone();
        }
        if !args.is_empty() {
            engine.args = args.to_vec();
        }
        if let Some(dir) = working_dir {
            engine.working_dir = Some(dir.clone());
        }
        engine
    }

    /// Read the analysis input from the argument, a file, or stdin.
    fn read_input(&self, args: &AnalyzeArgs) -> Result<String> {
        if let Some(text) = &args.text {
            return Ok(text.clone());
        }
        if let Some(path) = &args.file {
            return std::fs::read_to_string(path).map_err(CliError::Io);
        }
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }

    /// Install the tracing subscriber used by the server path.
    fn init_tracing(&self) {
        let level = match self.config.verbosity {
            0 => self.config.newslens.logging.level.as_str(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        match self.config.newslens.logging.format {
            LogFormat::Pretty => builder.pretty().try_init().ok(),
            LogFormat::Text => builder.try_init().ok(),
        };
    }
}

/// Render a typed analysis for terminal display.
fn print_analysis(analysis: &Analysis, raw: &str) {
    match analysis {
        Analysis::Sentiment(breakdown) => {
            println!("Dominant sentiment: {}", breakdown.dominant().as_str());
            println!("  positive: {}%", breakdown.positive);
            println!("  neutral:  {}%", breakdown.neutral);
            println!("  negative: {}%", breakdown.negative);
        }
        Analysis::Summarizer(summary) => {
            for sentence in &summary.summary {
                println!("- {}", sentence);
            }
        }
        Analysis::Plagiarism(report) => {
            println!("Plagiarism detected: {}%", report.plagiarism_percentage);
        }
        Analysis::FakeNews(report) => {
            println!("Fake news probability: {}%", report.fake_news_probability);
        }
        Analysis::Unparsed(_) => {
            println!("Engine output did not match the expected pattern:");
            println!("{}", raw);
        }
    }
}

/// POST an analysis request to a running Newslens server.
async fn remote_analyze(server: &str, tool: &str, text: &str) -> Result<serde_json::Value> {
    let url = format!("{}/api/analyze", server.trim_end_matches('/'));
    let client = reqwest::Client::new();

    let response = client
        .post(&url)
        .json(&serde_json::json!({ "text": text, "tool": tool }))
        .send()
        .await
        .map_err(|e| CliError::Network(e.to_string()))?;

    let status = response.status();
    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| CliError::Network(e.to_string()))?;

    if !status.is_success() {
        let message = body["error"].as_str().unwrap_or("unknown error");
        return Err(CliError::Api(format!(
            "server returned {}: {}",
            status, message
        )));
    }

    Ok(body)
}
