use crate::config::PipelineConfig;
use crate::error::Result;
use crate::labeling::{join_labels, LabeledSeriesRow};
use crate::materialize::{materialize_dataset, MaterializeSummary};
use crate::tables::{load_scores, load_study_metadata};
use log::info;

/// High-level entry point for building the labeled dataset
///
/// Owns a validated [`PipelineConfig`] and sequences the three pipeline
/// steps: load and project the two metadata tables, join them into a
/// labeled table, and materialize the slice images.
///
/// # Example
///
/// ```no_run
/// use sonoset_core::{DatasetBuilder, PipelineConfig};
/// use std::path::Path;
///
/// let config = PipelineConfig::from_env(Path::new("settings.env"))?;
/// let builder = DatasetBuilder::new(config);
/// let summary = builder.run()?;
/// println!("{}", summary);
/// # Ok::<(), sonoset_core::SonosetError>(())
/// ```
pub struct DatasetBuilder {
    config: PipelineConfig,
}

impl DatasetBuilder {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Loads both metadata sources and joins them into labeled rows
    ///
    /// # Errors
    ///
    /// Returns an error if either table cannot be read; these are fatal
    /// for the whole run.
    pub fn label_series(&self) -> Result<Vec<LabeledSeriesRow>> {
        let studies = load_study_metadata(&self.config.metadata_csv)?;
        info!("loaded {} ultrasound series rows", studies.len());

        let scores = load_scores(&self.config.scores_xlsx, &self.config.scores_sheet)?;
        info!("loaded {} score rows", scores.len());

        let rows = join_labels(&studies, &scores, self.config.cancer_threshold);
        info!("joined into {} labeled series", rows.len());

        Ok(rows)
    }

    /// Writes the slice images for an already-labeled table
    pub fn materialize(&self, rows: &[LabeledSeriesRow]) -> Result<MaterializeSummary> {
        materialize_dataset(rows, &self.config)
    }

    /// Runs the whole pipeline
    pub fn run(&self) -> Result<MaterializeSummary> {
        let rows = self.label_series()?;
        self.materialize(&rows)
    }
}
