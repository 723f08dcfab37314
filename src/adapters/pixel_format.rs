//! Pixel format conversion helpers for presentation adapters.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    RgbLengthNotMultipleOfThree { len: usize },
    RgbaLengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RgbLengthNotMultipleOfThree { len } => {
                write!(f, "rgb length {} is not a multiple of 3", len)
            }
            Self::RgbaLengthMismatch { expected, actual } => {
                write!(f, "rgba length {} does not match expected {}", actual, expected)
            }
        }
    }
}

impl Error for PixelFormatError {}

/// Copies packed RGB into an RGBA frame, setting alpha to 255.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::RgbLengthNotMultipleOfThree { len: src.len() });
    }

    let expected = (src.len() / 3) * 4;

    if dst.len() != expected {
        return Err(PixelFormatError::RgbaLengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
