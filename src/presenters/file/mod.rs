pub mod png;
pub mod ppm;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use png::PngFilePresenter;
use ppm::PpmFilePresenter;
use std::path::Path;
use std::sync::Arc;

/// Chooses an encoder from the file extension, falling back to PNG.
#[must_use]
pub fn file_presenter_for_path(path: &Path) -> Arc<dyn FilePresenterPort> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("ppm") => Arc::new(PpmFilePresenter::new()),
        _ => Arc::new(PngFilePresenter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_presenter_by_extension() {
        assert_eq!(file_presenter_for_path(Path::new("pic.png")).format_name(), "PNG");
        assert_eq!(file_presenter_for_path(Path::new("out/pic.PPM")).format_name(), "PPM");
        assert_eq!(file_presenter_for_path(Path::new("pic")).format_name(), "PNG");
        assert_eq!(file_presenter_for_path(Path::new("pic.jpg")).format_name(), "PNG");
    }
}
