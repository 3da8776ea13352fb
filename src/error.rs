use thiserror::Error;

/// Errors that can occur while setting up or exporting a sketch
#[derive(Debug, Error)]
pub enum SketchError {
    /// The host could not provide a drawing surface
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// An off-screen surface of this size cannot be allocated
    #[error("Invalid export size: {width}x{height}")]
    InvalidExportSize { width: u32, height: u32 },

    #[error("Failed to load glyph font: {0}")]
    Font(String),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The browser refused to start a download
    #[error("Download failed: {0}")]
    Download(String),
}

/// Result type for fallible sketchpad operations
pub type SketchResult<T> = Result<T, SketchError>;
