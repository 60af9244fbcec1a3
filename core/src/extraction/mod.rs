//! Series location and pixel extraction
//!
//! Resolves each joined row to an on-disk DICOM file, decodes its pixel
//! data into a volumetric array, and renders individual slices.

pub mod series;
pub mod slices;
pub mod volume;

pub use series::{resolve_series_dir, select_series_file};
pub use slices::write_slice_jpeg;
pub use volume::{read_volume, VolumetricImage};
