use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with [`LineTraceError`].
pub type LineTraceResult<T> = std::result::Result<T, LineTraceError>;

/// Error types that can occur while turning a raster into line art.
///
/// This enum covers errors from image decoding, SVG rendering, and writing
/// the output document.
#[derive(Debug, Error)]
pub enum LineTraceError {
    /// The input image is missing, unreadable, or in an unsupported format.
    #[error("Unable to load image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// File system I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Formatting the SVG text failed.
    #[error("Rendering SVG failed: {0}")]
    Render(#[from] std::fmt::Error),
    /// A contour point lies outside the document canvas.
    #[error("Contour point {point:?} lies outside the {canvas:?} canvas")]
    ContourOutOfBounds {
        point: (u32, u32),
        canvas: (u32, u32),
    },
}

impl LineTraceError {
    /// The input path when this error came from decoding the source image.
    pub fn decode_path(&self) -> Option<&std::path::Path> {
        match self {
            LineTraceError::Decode { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}
