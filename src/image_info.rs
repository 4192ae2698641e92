//! Native pixel dimensions of image files.
//!
//! Only the header is read; pixels are never decoded.

use std::path::Path;

use image::ImageError;
use thiserror::Error;

/// Errors reading image dimensions.
#[derive(Error, Debug)]
pub enum ImageInfoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown format or corrupt header
    #[error("Failed to read image header: {0}")]
    Decode(ImageError),
}

impl From<ImageError> for ImageInfoError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(io) => Self::Io(io),
            other => Self::Decode(other),
        }
    }
}

/// Read `(width, height)` of the image at `path`.
pub fn read_dimensions(path: impl AsRef<Path>) -> Result<(u32, u32), ImageInfoError> {
    let path = path.as_ref();
    let dimensions = image::image_dimensions(path)?;
    log::debug!(
        "Image {:?} is {}x{}",
        path,
        dimensions.0,
        dimensions.1
    );
    Ok(dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = read_dimensions(dir.path().join("missing.png"));
        assert!(matches!(result, Err(ImageInfoError::Io(_))));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let mut file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .expect("tempfile");
        file.write_all(b"definitely not an image").expect("write");

        let result = read_dimensions(file.path());
        assert!(matches!(result, Err(ImageInfoError::Decode(_))));
    }

    #[test]
    fn test_reads_png_dimensions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("blank.png");
        image::RgbImage::new(64, 48).save(&path).expect("save png");

        assert_eq!(read_dimensions(&path).expect("dimensions"), (64, 48));
    }
}
