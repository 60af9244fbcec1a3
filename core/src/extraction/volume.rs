use crate::error::Result;
use dicom_object::open_file;
use dicom_pixeldata::PixelDecoder;
use ndarray::{Array4, ArrayView2, Axis};
use std::path::Path;

/// Decoded pixel data for one series
///
/// A stack of 2-D slices held as frames × rows × columns × samples.
/// Loaded fully into memory, sliced, and discarded per row; nothing is
/// cached across rows.
#[derive(Debug, Clone)]
pub struct VolumetricImage {
    data: Array4<f32>,
}

impl VolumetricImage {
    pub fn from_array(data: Array4<f32>) -> Self {
        Self { data }
    }

    /// Number of slices (frames) in the volume
    pub fn num_slices(&self) -> usize {
        self.data.shape()[0]
    }

    pub fn rows(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn columns(&self) -> usize {
        self.data.shape()[2]
    }

    /// Returns the 2-D slice at `index`, or `None` past the end
    ///
    /// Multi-sample volumes yield the first sample plane.
    pub fn slice(&self, index: usize) -> Option<ArrayView2<'_, f32>> {
        if index >= self.num_slices() {
            return None;
        }
        Some(
            self.data
                .index_axis(Axis(0), index)
                .index_axis_move(Axis(2), 0),
        )
    }
}

/// Reads a DICOM file and decodes its pixel data as a volume
///
/// # Errors
///
/// Returns an error if the file cannot be opened as DICOM or its pixel
/// data cannot be decoded.
pub fn read_volume(path: &Path) -> Result<VolumetricImage> {
    let obj = open_file(path)?;
    let decoded = obj.decode_pixel_data()?;
    let data = decoded.to_ndarray::<f32>()?;
    Ok(VolumetricImage::from_array(data))
}
