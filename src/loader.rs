use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::{LineTraceError, LineTraceResult};

/// Decode the image at `path`, guessing the format from its content.
///
/// Every failure (missing file, unreadable data, unknown encoding) is reported as
/// [`LineTraceError::Decode`] naming the path.
pub fn load_image(path: &Path) -> LineTraceResult<DynamicImage> {
    let decode_error = |source: ImageError| LineTraceError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded input image"
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    mod load_image {
        use super::*;

        mod unit {
            use super::*;

            #[test]
            fn missing_file_is_decode_error() {
                let dir = tempfile::tempdir().unwrap();
                let path = dir.path().join("absent.png");

                let err = load_image(&path).unwrap_err();
                assert_eq!(err.decode_path(), Some(path.as_path()));
            }

            #[test]
            fn garbage_bytes_are_decode_error() {
                let dir = tempfile::tempdir().unwrap();
                let path = dir.path().join("noise.png");
                std::fs::write(&path, b"definitely not an image").unwrap();

                let err = load_image(&path).unwrap_err();
                assert!(matches!(err, LineTraceError::Decode { .. }));
            }

            #[test]
            fn png_round_trips_dimensions() {
                let dir = tempfile::tempdir().unwrap();
                let path = dir.path().join("gray.png");
                GrayImage::from_pixel(7, 3, Luma([42])).save(&path).unwrap();

                let image = load_image(&path).unwrap();
                assert_eq!((image.width(), image.height()), (7, 3));
            }

            #[test]
            fn format_guessed_from_content() {
                let dir = tempfile::tempdir().unwrap();
                let png = dir.path().join("source.png");
                GrayImage::from_pixel(2, 2, Luma([0])).save(&png).unwrap();
                let renamed = dir.path().join("source.data");
                std::fs::rename(&png, &renamed).unwrap();

                let image = load_image(&renamed).unwrap();
                assert_eq!((image.width(), image.height()), (2, 2));
            }
        }
    }
}
