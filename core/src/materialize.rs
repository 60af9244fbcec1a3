//! Dataset materialization
//!
//! Walks the labeled table row by row, reads each series' volume, and
//! writes the configured slice indices as JPEGs into the per-label
//! buckets. Per-row and per-write failures are logged and skipped; only
//! output-root creation failures are fatal.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::extraction::{read_volume, resolve_series_dir, select_series_file, write_slice_jpeg};
use crate::labeling::LabeledSeriesRow;
use crate::types::Label;
use log::{info, warn};
use std::fmt;
use std::fs;

/// Outcome counts for one materialization run
///
/// The final dataset size depends on file-system state at run time, so
/// the run reports what actually happened instead of assuming row count
/// times slice count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeSummary {
    /// JPEG files written
    pub written: usize,

    /// Rows dropped because their series could not be read
    pub skipped_rows: usize,

    /// Individual slice writes that failed on rows otherwise processed
    pub failed_writes: usize,
}

impl fmt::Display for MaterializeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} images written, {} rows skipped, {} writes failed",
            self.written, self.skipped_rows, self.failed_writes
        )
    }
}

/// Writes the labeled slice dataset under the configured output root
///
/// Rows are processed in table order and output files are named by
/// global row index and slice index, so no two rows collide. Slice
/// indices beyond a volume's frame count produce no file and no error.
///
/// # Errors
///
/// Returns an error only if the output bucket directories cannot be
/// created; everything after that is skip-and-log.
pub fn materialize_dataset(
    rows: &[LabeledSeriesRow],
    config: &PipelineConfig,
) -> Result<MaterializeSummary> {
    for label in [Label::Cancer, Label::NonMalignant] {
        fs::create_dir_all(config.output_root.join(label.dir_name()))?;
    }

    let mut summary = MaterializeSummary::default();

    for (index, row) in rows.iter().enumerate() {
        let series_dir = resolve_series_dir(&config.manifest_root, &row.file_location);

        let source = match select_series_file(&series_dir) {
            Ok(Some(path)) => path,
            Ok(None) => {
                warn!(
                    "no DICOM file in {}; skipping row {}",
                    series_dir.display(),
                    index
                );
                summary.skipped_rows += 1;
                continue;
            }
            Err(e) => {
                warn!(
                    "unable to read series directory {}: {}; skipping row {}",
                    series_dir.display(),
                    e,
                    index
                );
                summary.skipped_rows += 1;
                continue;
            }
        };

        let volume = match read_volume(&source) {
            Ok(volume) => volume,
            Err(e) => {
                warn!("unable to decode {}: {}; skipping row {}", source.display(), e, index);
                summary.skipped_rows += 1;
                continue;
            }
        };

        let bucket = config.output_root.join(row.label.dir_name());
        for &slice_index in &config.slice_indices {
            let slice = match volume.slice(slice_index) {
                Some(slice) => slice,
                None => continue,
            };

            let target = bucket.join(format!("image_{}_{}.jpg", index, slice_index));
            match write_slice_jpeg(slice, &target) {
                Ok(()) => {
                    info!("wrote {}", target.display());
                    summary.written += 1;
                }
                Err(e) => {
                    warn!("failed to write {}: {}", target.display(), e);
                    summary.failed_writes += 1;
                }
            }
        }
    }

    Ok(summary)
}
