use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// dirtally - Rank the subdirectories of a tree by disk usage
#[derive(Parser, Debug)]
#[command(name = "dirtally")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze disk usage per subdirectory
    Analyze(AnalyzeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Directory whose subdirectories are ranked
    #[arg(default_value = "/")]
    pub path: String,

    /// Path to skip (can be specified multiple times)
    #[arg(short, long, value_name = "PATH")]
    pub ignore: Vec<String>,

    /// Treat PATH as relative to the working directory
    #[arg(short, long)]
    pub local_root: bool,

    /// Match ignore paths against full paths instead of paths
    /// relative to each subdirectory
    #[arg(short, long)]
    pub absolute_ignore: bool,

    /// Report directories that could not be read
    #[arg(short = 'e', long)]
    pub show_errors: bool,

    /// Largest directories first
    #[arg(short, long)]
    pub reverse: bool,

    /// Show top N entries
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Omit the total and timing lines
    #[arg(long)]
    pub no_summary: bool,
}
