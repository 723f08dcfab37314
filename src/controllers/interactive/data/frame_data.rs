use std::time::Duration;
use crate::core::data::pixel_buffer::PixelBuffer;

/// A completed render. Shared read-only between display and export.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
