pub mod report;

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for sonoset
#[derive(Parser, Debug)]
#[command(name = "sonoset")]
#[command(about = "Build a labeled ultrasound image dataset from study metadata and clinical scores")]
#[command(version)]
pub struct Cli {
    /// Settings file providing the required environment values
    #[arg(short, long, default_value = "settings.env")]
    pub settings: PathBuf,

    /// Override the cancer score threshold from the settings file
    #[arg(short, long)]
    pub threshold: Option<i64>,

    /// Override the manifest root folder from the settings file
    #[arg(short, long)]
    pub manifest_root: Option<PathBuf>,

    /// Slice indices to extract from each volume
    #[arg(long, value_delimiter = ',')]
    pub slices: Option<Vec<usize>>,

    /// Study metadata CSV path
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Clinical scoring spreadsheet path
    #[arg(long)]
    pub scores: Option<PathBuf>,

    /// Root directory for the labeled output buckets
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Skip the pauses that give a human time to read the summary
    #[arg(long)]
    pub no_pause: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
