use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary P6 portable pixmap.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn write(buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        // P6: binary RGB, then width, height and max colour value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;
        file.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
        Self::write(buffer, filepath).map_err(|source| ExportError::Io {
            path: filepath.to_path_buf(),
            source,
        })
    }

    fn format_name(&self) -> &str {
        "PPM"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;
    use tempfile::tempdir;

    #[test]
    fn test_writes_header_and_pixels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        let buffer =
            PixelBuffer::from_data(PixelRect::from_size(2, 1).unwrap(), vec![0, 0, 0, 1, 2, 3])
                .unwrap();

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..11], b"P6\n2 1\n255\n");
        assert_eq!(&bytes[11..], &[0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.ppm");
        let buffer = PixelBuffer::from_data(PixelRect::from_size(2, 2).unwrap(), vec![0; 12]).unwrap();

        let result = PpmFilePresenter::new().present(&buffer, &path);

        assert!(matches!(result, Err(ExportError::Io { path: p, .. }) if p == path));
    }
}
