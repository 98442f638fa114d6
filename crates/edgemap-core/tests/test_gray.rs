use approx::assert_abs_diff_eq;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use ndarray::Array2;

use edgemap_core::gray::{intensity_from_image, normalize_intensity};

#[test]
fn test_normalize_divides_integer_data_by_255() {
    let data = Array2::from_elem((4, 4), 128.0f32);
    let normalized = normalize_intensity(data);
    for &v in normalized.iter() {
        assert_abs_diff_eq!(v, 128.0 / 255.0, epsilon = 1e-6);
    }
}

#[test]
fn test_normalize_passes_through_unit_range_data() {
    let mut data = Array2::from_elem((3, 3), 0.25f32);
    data[[1, 1]] = 1.0;
    let normalized = normalize_intensity(data.clone());
    assert_eq!(normalized, data);
}

#[test]
fn test_luma_image_maps_directly() {
    let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([51])));
    let field = intensity_from_image(&img);
    assert_eq!(field.dim(), (4, 4));
    for &v in field.iter() {
        assert_abs_diff_eq!(v, 51.0 / 255.0, epsilon = 1e-6);
    }
}

#[test]
fn test_rgb_image_uses_unweighted_channel_mean() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 3, Rgb([30, 60, 90])));
    let field = intensity_from_image(&img);
    // (30 + 60 + 90) / 3 = 60, then / 255
    assert_eq!(field.dim(), (3, 5));
    for &v in field.iter() {
        assert_abs_diff_eq!(v, 60.0 / 255.0, epsilon = 1e-6);
    }
}

#[test]
fn test_alpha_channel_is_included_in_the_mean() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 3, Rgba([100, 50, 150, 200])));
    let field = intensity_from_image(&img);
    // (100 + 50 + 150 + 200) / 4 = 125, then / 255
    for &v in field.iter() {
        assert_abs_diff_eq!(v, 125.0 / 255.0, epsilon = 1e-6);
    }
}

#[test]
fn test_black_image_stays_zero() {
    let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(6, 6, Luma([0])));
    let field = intensity_from_image(&img);
    assert!(field.iter().all(|&v| v == 0.0));
}
