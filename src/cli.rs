use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docpager")]
#[command(
    about = "A CLI tool for extracting text from documents and web pages and splitting it into bounded-size pages"
)]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output directory for extracted page files
    #[arg(short, long, global = true, default_value = "./pages")]
    pub output: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract text from sources and write paginated output
    Extract(ExtractArgs),

    /// Analyze sources without writing pages
    Analyze(AnalyzeArgs),

    /// Validate input sources
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct ExtractArgs {
    /// Input sources (file paths or URLs)
    #[arg(required = true, value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Approximate maximum characters per page
    #[arg(short = 'm', long, default_value = "5000")]
    pub max_page_length: usize,

    /// Drop units that are blank after trimming before pagination
    #[arg(long)]
    pub filter_empty: bool,

    /// Include metadata file
    #[arg(long, default_value = "true")]
    pub include_metadata: bool,

    /// Force overwrite existing output files
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input sources (file paths or URLs)
    #[arg(required = true, value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Approximate maximum characters per page
    #[arg(short = 'm', long, default_value = "5000")]
    pub max_page_length: usize,

    /// Drop units that are blank after trimming before pagination
    #[arg(long)]
    pub filter_empty: bool,

    /// Output analysis to JSON file
    #[arg(long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// Show detailed page information
    #[arg(long)]
    pub detailed: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Input sources (file paths or URLs)
    #[arg(required = true, value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Check if sources are accessible
    #[arg(long)]
    pub check_access: bool,
}
