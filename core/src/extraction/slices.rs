use crate::error::Result;
use image::{GrayImage, Luma};
use ndarray::ArrayView2;
use std::path::Path;

/// Renders a floating-point slice as an 8-bit grayscale image
///
/// Pixel values are min/max normalized to the full 0-255 range. A
/// constant slice maps to black.
pub fn slice_to_image(slice: ArrayView2<'_, f32>) -> GrayImage {
    let (rows, columns) = slice.dim();

    let min = slice.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = slice.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let range = if (max - min).abs() < f32::EPSILON {
        1.0
    } else {
        max - min
    };

    GrayImage::from_fn(columns as u32, rows as u32, |x, y| {
        let value = slice[[y as usize, x as usize]];
        Luma([(((value - min) / range) * 255.0) as u8])
    })
}

/// Writes one slice as a JPEG file
pub fn write_slice_jpeg(slice: ArrayView2<'_, f32>, path: &Path) -> Result<()> {
    slice_to_image(slice).save(path)?;
    Ok(())
}
