use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdgeMapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image too small for a 3x3 neighborhood: {width}x{height}")]
    ImageTooSmall { width: usize, height: usize },

    #[error("Unsupported channel count: {0}")]
    UnsupportedChannelCount(u8),
}

pub type Result<T> = std::result::Result<T, EdgeMapError>;
