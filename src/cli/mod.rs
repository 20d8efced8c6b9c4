//! CLI layer: argument parsing, command dispatch, and subcommand implementations.

pub mod args;

pub use args::*;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use namebind::corpus::{build_corpus, write_jsonl};
use namebind::{tokenize_identifier, BindingError};

// ─── CLI ─────────────────────────────────────────────────────────────

/// Name-binding occurrence and feature extraction for Java method invocations
#[derive(Parser, Debug)]
#[command(name = "namebind", version, about, after_help = "\
Run 'namebind <COMMAND> --help' for detailed options and examples.\n\
Common options: -d <DIR> (directory), -e <EXT> (extension filter), -o <FILE> (output)")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Extract method-invocation bindings and features as JSON Lines
    Extract(ExtractArgs),

    /// Split identifiers into lowercase word parts
    Tokenize(TokenizeArgs),
}

// ─── Main entry point ───────────────────────────────────────────────

pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract(args) => cmd_extract(args),
        Commands::Tokenize(args) => cmd_tokenize(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn level_filter(level: &str) -> Result<LevelFilter, BindingError> {
    match level {
        "error" => Ok(LevelFilter::ERROR),
        "warn" => Ok(LevelFilter::WARN),
        "info" => Ok(LevelFilter::INFO),
        "debug" => Ok(LevelFilter::DEBUG),
        "trace" => Ok(LevelFilter::TRACE),
        other => Err(BindingError::InvalidArgs(format!(
            "Unknown log level '{}' (expected error, warn, info, debug or trace)",
            other
        ))),
    }
}

/// `--log-level` sets the default directive; `RUST_LOG` directives override it.
fn init_logging(level: &str) -> Result<(), BindingError> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(level)?.into())
        .from_env_lossy();
    // stdout carries the corpus, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

// ─── Commands ───────────────────────────────────────────────────────

fn cmd_extract(args: ExtractArgs) -> Result<(), BindingError> {
    init_logging(&args.log_level)?;

    let corpus = build_corpus(&args.corpus)?;
    let rows = match &args.output {
        Some(path) => write_jsonl(&corpus, BufWriter::new(File::create(path)?))?,
        None => write_jsonl(&corpus, BufWriter::new(io::stdout().lock()))?,
    };

    info!(
        rows,
        files = corpus.files.len(),
        output = args.output.as_deref().unwrap_or("<stdout>"),
        "Done"
    );
    Ok(())
}

fn cmd_tokenize(args: TokenizeArgs) -> Result<(), BindingError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for identifier in &args.identifiers {
        writeln!(out, "{}", tokenize_identifier(identifier).join(" "))?;
    }
    Ok(())
}
