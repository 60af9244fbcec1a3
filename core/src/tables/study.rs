use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Modality kept by the projection; everything else is dropped
pub const ULTRASOUND_MODALITY: &str = "US";

/// One row of the study metadata table
///
/// Deserialized by header name; columns outside this projection are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StudyMetadataRow {
    #[serde(rename = "Subject ID")]
    pub subject_id: String,

    #[serde(rename = "Modality")]
    pub modality: String,

    #[serde(rename = "SOP Class Name")]
    pub sop_class_name: String,

    /// Relative path of the series directory under the manifest root
    #[serde(rename = "File Location")]
    pub file_location: String,

    #[serde(rename = "Series UID")]
    pub series_uid: String,
}

/// Loads the study metadata CSV, keeping only ultrasound rows
///
/// # Errors
///
/// Read and parse failures are fatal and propagate to the caller.
pub fn load_study_metadata(path: &Path) -> Result<Vec<StudyMetadataRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();

    for record in reader.deserialize() {
        let row: StudyMetadataRow = record?;
        if row.modality == ULTRASOUND_MODALITY {
            rows.push(row);
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("metadata.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_only_ultrasound_rows_survive() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Subject ID,Modality,SOP Class Name,File Location,Series UID,Number of Images\n\
             P-001,US,Ultrasound Multi-frame Image Storage,./studyA,1.2.3,140\n\
             P-001,MR,MR Image Storage,./studyB,1.2.4,30\n\
             P-002,US,Ultrasound Multi-frame Image Storage,./studyC,1.2.5,140\n",
        );

        let rows = load_study_metadata(&path).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].subject_id, "P-001");
        assert_eq!(rows[0].file_location, "./studyA");
        assert_eq!(rows[0].series_uid, "1.2.3");
        assert_eq!(rows[1].series_uid, "1.2.5");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Series UID,Collection,Subject ID,Modality,SOP Class Name,File Location\n\
             1.2.3,Prostate-US,P-001,US,Ultrasound Multi-frame Image Storage,./studyA\n",
        );

        let rows = load_study_metadata(&path).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sop_class_name, "Ultrasound Multi-frame Image Storage");
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Subject ID,Modality\n\
             P-001,US\n",
        );

        assert!(load_study_metadata(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.csv");

        assert!(load_study_metadata(&path).is_err());
    }
}
