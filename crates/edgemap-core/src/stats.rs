use ndarray::Array2;

use crate::field::EdgeStats;

/// Compute mean, max and min over an edge map, in that order.
///
/// An empty map yields all zeros rather than NaN.
pub fn compute_stats(edge_map: &Array2<f32>) -> EdgeStats {
    let n = edge_map.len();
    if n == 0 {
        return EdgeStats {
            mean: 0.0,
            max: 0.0,
            min: 0.0,
        };
    }

    let mut sum = 0.0f64;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;

    for &v in edge_map.iter() {
        let v = v as f64;
        sum += v;
        max = max.max(v);
        min = min.min(v);
    }

    EdgeStats {
        mean: sum / n as f64,
        max,
        min,
    }
}
