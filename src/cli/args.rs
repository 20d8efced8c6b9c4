//! CLI argument structs for all subcommands.

use clap::Parser;

use namebind::corpus::CorpusArgs;

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Write JSON Lines to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Parser, Debug)]
pub struct TokenizeArgs {
    /// Identifiers to split into word parts
    #[arg(required = true)]
    pub identifiers: Vec<String>,
}
