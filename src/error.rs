use bitonal_convert::PixelFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("No conversion route from {from} to {to}")]
    NoRoute { from: PixelFormat, to: PixelFormat },

    #[error("Compose is not supported from {from} to {to}")]
    ComposeUnsupported { from: PixelFormat, to: PixelFormat },

    #[error("Source buffer too small: {format} needs {needed} bytes for {count} pixels, got {actual}")]
    SourceTooSmall {
        format: PixelFormat,
        count: usize,
        needed: usize,
        actual: usize,
    },

    #[error("Destination buffer too small: {format} needs {needed} bytes for {count} pixels, got {actual}")]
    DestinationTooSmall {
        format: PixelFormat,
        count: usize,
        needed: usize,
        actual: usize,
    },

    #[error("Too many pixels: {count} (max {max})")]
    TooManyPixels { count: usize, max: usize },

    #[error("Invalid preview width: {0}")]
    PreviewWidth(u32),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
