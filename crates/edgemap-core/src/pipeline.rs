use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EdgeMapError, Result};
use crate::field::{EdgeMap, EdgeStats, IntensityField};
use crate::gradient::{gradient_magnitude, gradient_magnitude_with_progress, normalize_magnitude};
use crate::stats::compute_stats;
use crate::threshold::apply_threshold;

/// Default binarization threshold.
pub const DEFAULT_THRESHOLD: f32 = 0.3;

/// Edge detection settings, TOML-serializable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectConfig {
    /// Gradient magnitude cutoff in [0, 1].
    pub threshold: f32,
    /// Directory the text edge map is written under (created if absent).
    pub output_dir: PathBuf,
    /// Optional path for a grayscale PNG rendering of the edge map.
    pub preview: Option<PathBuf>,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            output_dir: PathBuf::from("output"),
            preview: None,
        }
    }
}

/// Result of one detection run.
#[derive(Clone, Debug)]
pub struct DetectOutput {
    pub edges: EdgeMap,
    pub stats: EdgeStats,
}

/// Run the full pipeline on a normalized intensity field:
/// gradient magnitude, max-normalization, thresholding, statistics.
///
/// The field must be at least 3x3 so at least one interior pixel exists.
pub fn detect_edges(intensity: &IntensityField, threshold: f32) -> Result<DetectOutput> {
    check_dims(intensity)?;
    let grad = normalize_magnitude(gradient_magnitude(intensity));
    Ok(finish(&grad, threshold))
}

/// [`detect_edges`] with per-row progress reporting for the gradient stage.
pub fn detect_edges_with_progress(
    intensity: &IntensityField,
    threshold: f32,
    on_progress: impl Fn(usize) + Send + Sync,
) -> Result<DetectOutput> {
    check_dims(intensity)?;
    let grad = normalize_magnitude(gradient_magnitude_with_progress(intensity, on_progress));
    Ok(finish(&grad, threshold))
}

fn check_dims(intensity: &IntensityField) -> Result<()> {
    let (h, w) = intensity.dim();
    if h < 3 || w < 3 {
        return Err(EdgeMapError::ImageTooSmall {
            width: w,
            height: h,
        });
    }
    Ok(())
}

fn finish(grad: &ndarray::Array2<f32>, threshold: f32) -> DetectOutput {
    let edges = apply_threshold(grad, threshold);
    let stats = compute_stats(&edges);
    debug!(
        edge_fraction = stats.mean,
        threshold, "edge map thresholded"
    );
    DetectOutput { edges, stats }
}
