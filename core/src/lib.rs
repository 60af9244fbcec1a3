pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod labeling;
pub mod materialize;
pub mod tables;
pub mod types;

pub use api::DatasetBuilder;
pub use cli::report::DistributionReport;
pub use config::{ConfigOverrides, PipelineConfig};
pub use error::{Result, SonosetError};
pub use labeling::{join_labels, LabelCounts, LabeledSeriesRow};
pub use materialize::{materialize_dataset, MaterializeSummary};
pub use types::Label;
