//! Tabular metadata sources
//!
//! Loads the study metadata CSV and the clinical scoring spreadsheet,
//! projected to the columns the labeling step needs.

pub mod scores;
pub mod study;

pub use scores::{load_scores, ScoreRow};
pub use study::{load_study_metadata, StudyMetadataRow};
