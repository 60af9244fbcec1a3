use crate::error::{Result, SonosetError};
use std::env;
use std::path::{Path, PathBuf};

/// Environment value holding the inclusive cancer score threshold
pub const THRESHOLD_VAR: &str = "UCLA_CANCER_THRESHOLD";

/// Environment value holding the manifest root directory
pub const MANIFEST_VAR: &str = "PATH_TO_MANIFEST_FOLDER";

/// Optional environment value overriding the extracted slice indices
pub const SLICE_INDICES_VAR: &str = "SLICE_INDICES";

pub const DEFAULT_METADATA_CSV: &str = "datasets/metadata.csv";
pub const DEFAULT_SCORES_XLSX: &str = "datasets/Target Data_2019-12-05.xlsx";
pub const DEFAULT_SCORES_SHEET: &str = "Sheet1";
pub const DEFAULT_OUTPUT_ROOT: &str = "images";

/// Slice indices extracted when none are configured
pub const DEFAULT_SLICE_INDICES: [usize; 2] = [130, 134];

/// Validated configuration for a dataset build run
///
/// Required values come from a dotenv-style settings file (or the real
/// environment); every missing or malformed value is collected and
/// reported in a single [`SonosetError::Config`].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Inclusive score threshold above which a series is labeled cancer
    pub cancer_threshold: i64,

    /// Root directory under which each series' File Location resolves
    pub manifest_root: PathBuf,

    /// Slice indices to extract from each volume
    pub slice_indices: Vec<usize>,

    /// Study metadata CSV path
    pub metadata_csv: PathBuf,

    /// Clinical scoring spreadsheet path
    pub scores_xlsx: PathBuf,

    /// Worksheet name inside the scoring spreadsheet
    pub scores_sheet: String,

    /// Root directory for the labeled output buckets
    pub output_root: PathBuf,
}

/// Values that take precedence over the settings file when present
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub threshold: Option<i64>,
    pub manifest_root: Option<PathBuf>,
    pub slice_indices: Option<Vec<usize>>,
    pub metadata_csv: Option<PathBuf>,
    pub scores_xlsx: Option<PathBuf>,
    pub output_root: Option<PathBuf>,
}

impl PipelineConfig {
    /// Loads configuration from a settings file and the environment
    pub fn from_env(settings: &Path) -> Result<Self> {
        Self::from_env_with(settings, ConfigOverrides::default())
    }

    /// Loads configuration, letting explicit overrides win over the
    /// settings file
    ///
    /// # Errors
    ///
    /// Returns [`SonosetError::Config`] naming every missing or invalid
    /// value at once.
    pub fn from_env_with(settings: &Path, overrides: ConfigOverrides) -> Result<Self> {
        // Values already present in the environment are not overwritten.
        dotenv::from_filename(settings).ok();

        Self::from_parts(
            env::var(THRESHOLD_VAR).ok(),
            env::var(MANIFEST_VAR).ok(),
            env::var(SLICE_INDICES_VAR).ok(),
            overrides,
        )
    }

    fn from_parts(
        threshold_env: Option<String>,
        manifest_env: Option<String>,
        slices_env: Option<String>,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let mut problems = Vec::new();

        let cancer_threshold = match overrides.threshold {
            Some(threshold) => Some(threshold),
            None => match threshold_env {
                Some(raw) => match raw.trim().parse::<i64>() {
                    Ok(threshold) => Some(threshold),
                    Err(_) => {
                        problems.push(format!("{} is not an integer: {:?}", THRESHOLD_VAR, raw));
                        None
                    }
                },
                None => {
                    problems.push(format!("{} is not set", THRESHOLD_VAR));
                    None
                }
            },
        };

        let manifest_root = match overrides.manifest_root {
            Some(root) => Some(root),
            None => match manifest_env {
                Some(raw) => Some(PathBuf::from(raw)),
                None => {
                    problems.push(format!("{} is not set", MANIFEST_VAR));
                    None
                }
            },
        };

        let slice_indices = match overrides.slice_indices {
            Some(indices) => Some(indices),
            None => match slices_env {
                Some(raw) => match parse_slice_indices(&raw) {
                    Ok(indices) => Some(indices),
                    Err(problem) => {
                        problems.push(problem);
                        None
                    }
                },
                None => Some(DEFAULT_SLICE_INDICES.to_vec()),
            },
        };

        match (cancer_threshold, manifest_root, slice_indices) {
            (Some(cancer_threshold), Some(manifest_root), Some(slice_indices))
                if problems.is_empty() =>
            {
                Ok(Self {
                    cancer_threshold,
                    manifest_root,
                    slice_indices,
                    metadata_csv: overrides
                        .metadata_csv
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_METADATA_CSV)),
                    scores_xlsx: overrides
                        .scores_xlsx
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_XLSX)),
                    scores_sheet: DEFAULT_SCORES_SHEET.to_string(),
                    output_root: overrides
                        .output_root
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_ROOT)),
                })
            }
            _ => Err(SonosetError::Config { problems }),
        }
    }
}

/// Parses a comma-separated list of slice indices
fn parse_slice_indices(raw: &str) -> std::result::Result<Vec<usize>, String> {
    let mut indices = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        match part.parse::<usize>() {
            Ok(index) => indices.push(index),
            Err(_) => {
                return Err(format!(
                    "{} contains an invalid slice index: {:?}",
                    SLICE_INDICES_VAR, part
                ));
            }
        }
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides() -> ConfigOverrides {
        ConfigOverrides::default()
    }

    #[test]
    fn test_complete_configuration() {
        let config = PipelineConfig::from_parts(
            Some("3".to_string()),
            Some("/data/manifest".to_string()),
            None,
            overrides(),
        )
        .unwrap();

        assert_eq!(config.cancer_threshold, 3);
        assert_eq!(config.manifest_root, PathBuf::from("/data/manifest"));
        assert_eq!(config.slice_indices, vec![130, 134]);
        assert_eq!(config.metadata_csv, PathBuf::from(DEFAULT_METADATA_CSV));
        assert_eq!(config.scores_sheet, "Sheet1");
    }

    #[test]
    fn test_missing_values_reported_together() {
        let err = PipelineConfig::from_parts(None, None, None, overrides()).unwrap_err();

        match err {
            SonosetError::Config { problems } => {
                assert_eq!(problems.len(), 2);
                assert!(problems[0].contains(THRESHOLD_VAR));
                assert!(problems[1].contains(MANIFEST_VAR));
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_threshold_reported() {
        let err = PipelineConfig::from_parts(
            Some("three".to_string()),
            Some("/data/manifest".to_string()),
            None,
            overrides(),
        )
        .unwrap_err();

        let message = format!("{}", err);
        assert!(message.contains(THRESHOLD_VAR));
        assert!(message.contains("three"));
    }

    #[test]
    fn test_slice_indices_from_environment_value() {
        let config = PipelineConfig::from_parts(
            Some("3".to_string()),
            Some("/data/manifest".to_string()),
            Some("10, 20,30".to_string()),
            overrides(),
        )
        .unwrap();

        assert_eq!(config.slice_indices, vec![10, 20, 30]);
    }

    #[test]
    fn test_invalid_slice_indices_reported() {
        let err = PipelineConfig::from_parts(
            Some("3".to_string()),
            Some("/data/manifest".to_string()),
            Some("10,abc".to_string()),
            overrides(),
        )
        .unwrap_err();

        assert!(format!("{}", err).contains("abc"));
    }

    #[test]
    fn test_overrides_win_over_environment_values() {
        let config = PipelineConfig::from_parts(
            Some("3".to_string()),
            Some("/data/manifest".to_string()),
            None,
            ConfigOverrides {
                threshold: Some(4),
                manifest_root: Some(PathBuf::from("/other/manifest")),
                slice_indices: Some(vec![1, 2]),
                metadata_csv: Some(PathBuf::from("meta.csv")),
                scores_xlsx: Some(PathBuf::from("scores.xlsx")),
                output_root: Some(PathBuf::from("out")),
            },
        )
        .unwrap();

        assert_eq!(config.cancer_threshold, 4);
        assert_eq!(config.manifest_root, PathBuf::from("/other/manifest"));
        assert_eq!(config.slice_indices, vec![1, 2]);
        assert_eq!(config.metadata_csv, PathBuf::from("meta.csv"));
        assert_eq!(config.scores_xlsx, PathBuf::from("scores.xlsx"));
        assert_eq!(config.output_root, PathBuf::from("out"));
    }

    #[test]
    fn test_overrides_alone_satisfy_required_values() {
        let config = PipelineConfig::from_parts(
            None,
            None,
            None,
            ConfigOverrides {
                threshold: Some(3),
                manifest_root: Some(PathBuf::from("/data/manifest")),
                ..ConfigOverrides::default()
            },
        )
        .unwrap();

        assert_eq!(config.cancer_threshold, 3);
    }
}
