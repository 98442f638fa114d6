use ndarray::Array2;

/// Single-channel intensity image, row-major, shape = (rows, cols).
/// Values are f32 in [0.0, 1.0] after normalization.
pub type IntensityField = Array2<f32>;

/// Per-pixel gradient magnitude, same shape as the intensity field it was
/// derived from. Non-negative; max is exactly 1.0 after normalization
/// unless the field is entirely zero. The 1-pixel border is always 0.
pub type GradientField = Array2<f32>;

/// Binary edge map: values are exactly 0.0 or 1.0, same shape as the input.
pub type EdgeMap = Array2<f32>;

/// Summary statistics over an edge map.
///
/// For a binary map, `mean` is the fraction of pixels marked as edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

impl EdgeStats {
    /// The ordered (name, value) record: mean, max, min.
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [("mean", self.mean), ("max", self.max), ("min", self.min)]
    }
}
