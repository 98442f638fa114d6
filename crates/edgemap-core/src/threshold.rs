use ndarray::Array2;

use crate::field::EdgeMap;

/// Binarize a gradient field: 1.0 where the magnitude is strictly greater
/// than `threshold`, else 0.0. Pure elementwise comparison; a value exactly
/// equal to the threshold is not an edge.
pub fn apply_threshold(grad: &Array2<f32>, threshold: f32) -> EdgeMap {
    grad.mapv(|v| if v > threshold { 1.0 } else { 0.0 })
}
