use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::{PARALLEL_PIXEL_THRESHOLD, SOBEL_X, SOBEL_Y};
use crate::field::GradientField;

/// Compute the Sobel gradient magnitude of an intensity field.
///
/// Returns an `Array2<f32>` of the same dimensions as input. The 1-pixel
/// border is zero (the Sobel kernels need a full 3x3 neighborhood); no
/// padding, wrapping, or clamping is performed. Inputs smaller than 3x3
/// have no interior pixels and come back all zero.
///
/// The result is unnormalized; see [`normalize_magnitude`].
pub fn gradient_magnitude(data: &Array2<f32>) -> GradientField {
    let (h, w) = data.dim();
    let mut result = Array2::<f32>::zeros((h, w));

    if h < 3 || w < 3 {
        return result;
    }

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            result[[row, col]] = magnitude_at(data, row, col);
        }
    }

    result
}

/// Same as [`gradient_magnitude`] with per-row progress reporting.
///
/// Rows are computed with Rayon when the field is large enough to be worth
/// it; each output cell depends only on the immutable input, so row order
/// does not matter. Calls `on_progress(rows_done)` as each interior row
/// completes.
pub fn gradient_magnitude_with_progress(
    data: &Array2<f32>,
    on_progress: impl Fn(usize) + Send + Sync,
) -> GradientField {
    let (h, w) = data.dim();
    let mut result = Array2::<f32>::zeros((h, w));

    if h < 3 || w < 3 {
        return result;
    }

    if h * w < PARALLEL_PIXEL_THRESHOLD {
        for row in 1..h - 1 {
            for col in 1..w - 1 {
                result[[row, col]] = magnitude_at(data, row, col);
            }
            on_progress(row);
        }
        return result;
    }

    let done = AtomicUsize::new(0);
    let rows: Vec<(usize, Vec<f32>)> = (1..h - 1)
        .into_par_iter()
        .map(|row| {
            let values: Vec<f32> = (1..w - 1).map(|col| magnitude_at(data, row, col)).collect();
            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            on_progress(completed);
            (row, values)
        })
        .collect();

    for (row, values) in rows {
        for (col, v) in values.into_iter().enumerate() {
            result[[row, col + 1]] = v;
        }
    }

    result
}

/// Rescale a gradient field so its maximum is exactly 1.0.
///
/// An all-zero field is returned unchanged rather than dividing by zero:
/// a uniform input has no edges, and that should read as an empty map,
/// not a NaN field.
pub fn normalize_magnitude(mut grad: Array2<f32>) -> GradientField {
    let max = grad.iter().fold(0.0f32, |m, &v| m.max(v));
    if max > 0.0 {
        grad.mapv_inplace(|v| v / max);
    }
    grad
}

fn magnitude_at(data: &Array2<f32>, row: usize, col: usize) -> f32 {
    let mut gx = 0.0f64;
    let mut gy = 0.0f64;

    for (ki, (kx, ky)) in SOBEL_X.iter().zip(SOBEL_Y.iter()).enumerate() {
        for kj in 0..3 {
            let v = data[[row + ki - 1, col + kj - 1]] as f64;
            gx += kx[kj] as f64 * v;
            gy += ky[kj] as f64 * v;
        }
    }

    (gx * gx + gy * gy).sqrt() as f32
}
