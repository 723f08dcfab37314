use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ExtendedColorType, ImageError, ImageFormat};
use std::path::Path;

/// Lossless 8-bit RGB PNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngFilePresenter;

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgb8,
            ImageFormat::Png,
        )
        .map_err(|err| match err {
            ImageError::IoError(source) => ExportError::Io {
                path: filepath.to_path_buf(),
                source,
            },
            other => ExportError::Encode {
                path: filepath.to_path_buf(),
                message: other.to_string(),
            },
        })
    }

    fn format_name(&self) -> &str {
        "PNG"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_view::FractalRenderer;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::view::ViewState;
    use tempfile::tempdir;

    #[test]
    fn test_png_is_lossless() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pic.png");
        let buffer = FractalRenderer::new(16, 9)
            .unwrap()
            .render(&ViewState::default())
            .unwrap();

        PngFilePresenter::new().present(&buffer, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (16, 9));
        assert_eq!(decoded.as_raw().as_slice(), buffer.buffer());
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("pic.png");
        let buffer = PixelBuffer::from_data(PixelRect::from_size(2, 2).unwrap(), vec![0; 12]).unwrap();

        let result = PngFilePresenter::new().present(&buffer, &path);

        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
