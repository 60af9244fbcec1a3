use clap::Parser;
use log::error;
use sonoset_core::cli::Cli;
use sonoset_core::{
    ConfigOverrides, DatasetBuilder, DistributionReport, LabelCounts, PipelineConfig,
};
use std::process;
use std::thread;
use std::time::Duration;

/// Seconds the console summary stays up before the bulk step starts
const READ_PAUSE_SECS: u64 = 5;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let overrides = ConfigOverrides {
        threshold: cli.threshold,
        manifest_root: cli.manifest_root.clone(),
        slice_indices: cli.slices.clone(),
        metadata_csv: cli.metadata.clone(),
        scores_xlsx: cli.scores.clone(),
        output_root: cli.output_dir.clone(),
    };

    let config = match PipelineConfig::from_env_with(&cli.settings, overrides) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let builder = DatasetBuilder::new(config);

    println!("Generating cancer/non-malignant labels...");
    let rows = match builder.label_series() {
        Ok(rows) => rows,
        Err(e) => {
            error!("failed to build the labeled table: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let counts = LabelCounts::from_rows(&rows);
    println!("{}", DistributionReport::new(&counts));
    pause(&cli);

    println!("Creating image dataset now...");
    pause(&cli);

    match builder.materialize(&rows) {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            error!("materialization failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn pause(cli: &Cli) {
    if !cli.no_pause {
        thread::sleep(Duration::from_secs(READ_PAUSE_SECS));
    }
}
