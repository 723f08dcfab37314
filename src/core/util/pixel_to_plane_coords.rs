use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToPlaneCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToPlaneCoordsError {}

/// Maps a pixel to the plane coordinate of its top-left corner.
///
/// The fraction is `px / width` (not `width - 1`), so the last column stops one
/// pixel short of `cx_max`.
pub fn pixel_to_plane_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    viewport: &Viewport,
) -> Result<Complex, PixelToPlaneCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToPlaneCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = (pixel_position.x - pixel_rect.top_left().x) as f64;
    let relative_pixel_y = (pixel_position.y - pixel_rect.top_left().y) as f64;

    Ok(viewport.map_fraction(
        relative_pixel_x / pixel_rect.width() as f64,
        relative_pixel_y / pixel_rect.height() as f64,
    ))
}
