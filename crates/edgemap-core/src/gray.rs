use image::DynamicImage;
use ndarray::Array2;
use tracing::debug;

use crate::consts::U8_SCALE;
use crate::field::IntensityField;

/// Convert a decoded image to a single-channel intensity field.
///
/// Each pixel becomes the unweighted arithmetic mean of its channel values —
/// 1 (Luma), 2 (LumaA), 3 (Rgb) or 4 (Rgba) channels, alpha included. This
/// is plain channel averaging, not perceptual luminance weighting. Storage
/// formats outside those four are converted to Rgb8 first.
///
/// The result is normalized to [0.0, 1.0] via [`normalize_intensity`].
pub fn intensity_from_image(img: &DynamicImage) -> IntensityField {
    let raw = match img {
        DynamicImage::ImageLuma8(buf) => channel_mean(buf, 1),
        DynamicImage::ImageLumaA8(buf) => channel_mean(buf, 2),
        DynamicImage::ImageRgb8(buf) => channel_mean(buf, 3),
        DynamicImage::ImageRgba8(buf) => channel_mean(buf, 4),
        other => {
            debug!(color = ?other.color(), "converting to Rgb8 before averaging");
            channel_mean(&other.to_rgb8(), 3)
        }
    };
    normalize_intensity(raw)
}

/// Scale a raw intensity field into [0.0, 1.0].
///
/// If the field's maximum exceeds 1.0 the source is taken to be 8-bit
/// integer data and every value is divided by 255; otherwise the values are
/// assumed already normalized and pass through unchanged.
pub fn normalize_intensity(mut data: Array2<f32>) -> IntensityField {
    let max = data.iter().fold(0.0f32, |m, &v| m.max(v));
    if max > 1.0 {
        data.mapv_inplace(|v| v / U8_SCALE);
    }
    data
}

fn channel_mean<P>(buf: &image::ImageBuffer<P, Vec<u8>>, channels: usize) -> Array2<f32>
where
    P: image::Pixel<Subpixel = u8>,
{
    let (w, h) = buf.dimensions();
    let mut data = Array2::<f32>::zeros((h as usize, w as usize));

    for (x, y, pixel) in buf.enumerate_pixels() {
        let sum: f32 = pixel.channels().iter().map(|&c| c as f32).sum();
        data[[y as usize, x as usize]] = sum / channels as f32;
    }

    data
}
