use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use ndarray::Array2;
use tracing::debug;

use crate::error::Result;
use crate::field::IntensityField;
use crate::gray::intensity_from_image;

/// Load an image file into a normalized intensity field.
///
/// Channels are averaged per [`crate::gray::intensity_from_image`]; the
/// decoded format (JPEG, PNG, ...) is whatever the `image` crate detects.
pub fn load_image(path: &Path) -> Result<IntensityField> {
    let img = image::open(path)?;
    debug!(path = %path.display(), color = ?img.color(), "decoded image");
    Ok(intensity_from_image(&img))
}

/// Save a field as 8-bit grayscale PNG, clamping values to [0, 1].
///
/// Used to render an edge map (or any normalized field) for viewing.
pub fn save_png(data: &Array2<f32>, path: &Path) -> Result<()> {
    let (h, w) = data.dim();

    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = (data[[row, col]].clamp(0.0, 1.0) * 255.0) as u8;
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
