use thiserror::Error;

/// Result type for sonoset operations
pub type Result<T> = std::result::Result<T, SonosetError>;

/// Error types for sonoset operations
#[derive(Error, Debug)]
pub enum SonosetError {
    /// Invalid or incomplete configuration, with every problem collected
    #[error("invalid configuration: {}", .problems.join("; "))]
    Config { problems: Vec<String> },

    /// Metadata CSV reading error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Scoring spreadsheet reading error
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    /// Expected column missing from the scoring spreadsheet
    #[error("column not found in spreadsheet: {0}")]
    MissingColumn(String),

    /// DICOM reading or decoding error
    #[error("DICOM error: {0}")]
    Dicom(String),

    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Convert dicom-object and dicom-pixeldata errors
impl From<dicom_object::ReadError> for SonosetError {
    fn from(e: dicom_object::ReadError) -> Self {
        SonosetError::Dicom(format!("{}", e))
    }
}

impl From<dicom_pixeldata::Error> for SonosetError {
    fn from(e: dicom_pixeldata::Error) -> Self {
        SonosetError::Dicom(format!("{}", e))
    }
}
