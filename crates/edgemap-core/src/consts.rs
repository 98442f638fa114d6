/// Horizontal-edge Sobel kernel (responds to left/right intensity change).
pub const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical-edge Sobel kernel (responds to up/down intensity change).
pub const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Scale applied when source pixel data is 8-bit integer rather than
/// already-normalized floats.
pub const U8_SCALE: f32 = 255.0;
