//! CLI Command Handlers
//!
//! Argument parsing and the top-level run for both quote programs.

use clap::{CommandFactory, FromArgMatches, Parser};
use anyhow::{anyhow, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use crate::adapters::output::{emit, OutputFormat};
use crate::adapters::zerox::ZeroExClient;
use crate::application::{PipelineError, QuotePipeline};
use crate::config::{load_or_default, Config};
use crate::domain::QuoteMode;

/// Fetch a 0x swap quote and emit it ABI-encoded on stdout
#[derive(Parser, Debug)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    long_about = "Decodes ABI-encoded positional arguments, fetches a quote from the 0x \
                  swap API and writes the selected fields back out ABI-encoded."
)]
pub struct QuoteCli {
    /// ABI-encoded arguments as hex words
    #[arg(value_name = "ABI_WORD")]
    pub args: Vec<String>,

    /// Path to an optional configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the payload as 0x-prefixed hex instead of raw bytes
    #[arg(long)]
    pub hex: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Program name for each mode
pub fn bin_name(mode: QuoteMode) -> &'static str {
    match mode {
        QuoteMode::MintAware => "fetch-0x-quote",
        QuoteMode::Plain => "fetch-full-0x-quote",
    }
}

/// What the argument parser decided
#[derive(Debug)]
pub enum ParseOutcome {
    Run(QuoteCli),
    /// Help or version was requested and printed
    Exit,
}

/// Parse `argv` (including the program name) for `mode`
pub fn parse_args<I, T>(mode: QuoteMode, argv: I) -> Result<ParseOutcome, PipelineError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let command = QuoteCli::command()
        .name(bin_name(mode))
        .override_usage(format!("{} [OPTIONS] {}", bin_name(mode), mode.param_names().join(" ")));

    match command.try_get_matches_from(argv) {
        Ok(matches) => QuoteCli::from_arg_matches(&matches)
            .map(ParseOutcome::Run)
            .map_err(|e| PipelineError::Usage(format!("{}\n{}", e, mode.usage()))),
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                e.print()?;
                Ok(ParseOutcome::Exit)
            }
            _ => Err(PipelineError::Usage(format!("{}\n{}", e.render(), mode.usage()))),
        },
    }
}

fn init_logging(verbose: bool, debug: bool, config: &Config) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new(&config.logging.level)
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

/// Run one invocation, writing the payload to `stdout` on success
pub async fn execute<W: Write>(mode: QuoteMode, cli: QuoteCli, stdout: &mut W) -> Result<(), PipelineError> {
    // Count is checked before config or network are touched
    if cli.args.len() != mode.arg_count() {
        return Err(PipelineError::Usage(mode.usage()));
    }

    let config = load_or_default(cli.config.as_ref())?;
    if let Err(e) = init_logging(cli.verbose, cli.debug, &config) {
        eprintln!("warning: {}", e);
    }

    let client = ZeroExClient::with_config(config.zerox.client_config())?;
    let pipeline = QuotePipeline::new(client, mode, config.zerox.slippage_percentage);

    let payload = pipeline.run(&cli.args).await?;
    emit(stdout, &payload, OutputFormat::from_hex_flag(cli.hex))?;
    Ok(())
}

/// Entry point shared by both binaries; returns the process exit code
pub async fn run(mode: QuoteMode) -> i32 {
    let result = match parse_args(mode, std::env::args_os()) {
        Ok(ParseOutcome::Run(cli)) => {
            let mut stdout = std::io::stdout().lock();
            execute(mode, cli, &mut stdout).await
        }
        Ok(ParseOutcome::Exit) => Ok(()),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => 0,
        Err(PipelineError::Usage(usage)) => {
            eprintln!("{}", usage);
            1
        }
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code()
        }
    }
}
