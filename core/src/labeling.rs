//! Label derivation and table join
//!
//! Joins the study metadata projection against the scoring projection on
//! Series UID and derives the binary label from the score threshold.

use crate::tables::{ScoreRow, StudyMetadataRow};
use crate::types::Label;
use log::warn;
use std::collections::HashMap;

/// One joined, labeled series
#[derive(Debug, Clone)]
pub struct LabeledSeriesRow {
    pub subject_id: String,
    pub patient_id: String,
    pub series_uid: String,

    /// Relative series directory from the study metadata table
    pub file_location: String,

    /// Score that produced the label
    pub score: f64,

    pub label: Label,
}

impl LabeledSeriesRow {
    pub fn is_cancer(&self) -> bool {
        self.label == Label::Cancer
    }
}

/// Inner-joins study rows against score rows on Series UID
///
/// Output preserves study-table order. A series present in only one
/// source is dropped. Duplicate Series UIDs fan out to one output row
/// per matching pair; the multiplicity is logged because it multiplies
/// the dataset silently otherwise.
pub fn join_labels(
    studies: &[StudyMetadataRow],
    scores: &[ScoreRow],
    threshold: i64,
) -> Vec<LabeledSeriesRow> {
    let mut by_uid: HashMap<&str, Vec<&ScoreRow>> = HashMap::new();
    for score in scores {
        by_uid.entry(score.series_uid.as_str()).or_default().push(score);
    }

    let mut rows = Vec::new();
    for study in studies {
        let matches = match by_uid.get(study.series_uid.as_str()) {
            Some(matches) => matches,
            None => continue,
        };

        if matches.len() > 1 {
            warn!(
                "series UID {} matches {} score rows; emitting one labeled row per match",
                study.series_uid,
                matches.len()
            );
        }

        for score in matches {
            rows.push(LabeledSeriesRow {
                subject_id: study.subject_id.clone(),
                patient_id: score.patient_id.clone(),
                series_uid: study.series_uid.clone(),
                file_location: study.file_location.clone(),
                score: score.score,
                label: Label::from_score(score.score, threshold),
            });
        }
    }

    rows
}

/// Distribution of labels across the joined table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub cancer: usize,
    pub non_malignant: usize,
}

impl LabelCounts {
    pub fn from_rows(rows: &[LabeledSeriesRow]) -> Self {
        let cancer = rows.iter().filter(|row| row.is_cancer()).count();
        Self {
            cancer,
            non_malignant: rows.len() - cancer,
        }
    }

    pub fn total(&self) -> usize {
        self.cancer + self.non_malignant
    }
}
