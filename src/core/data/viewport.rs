use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Side length, in plane units, of the unzoomed square window.
pub const DEFAULT_PLANE_EXTENT: f64 = 5.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidScale { scale: f64 },
    InvalidExtent { extent: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "viewport scale must be positive and finite: {}", scale)
            }
            Self::InvalidExtent { extent } => {
                write!(f, "viewport extent must be positive and finite: {}", extent)
            }
        }
    }
}

impl Error for ViewportError {}

/// Pan/zoom description of which part of the plane a buffer shows.
///
/// A fraction `(fx, fy)` of the buffer maps to
/// `((origin + f·extent) / scale) + offset` on each axis, so zoom divides the
/// window and the offset is applied afterwards in unscaled plane units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    origin: Complex,
    extent: f64,
    scale: f64,
    offset: Complex,
}

impl Viewport {
    pub fn new(
        origin: Complex,
        extent: f64,
        scale: f64,
        offset: Complex,
    ) -> Result<Self, ViewportError> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ViewportError::InvalidScale { scale });
        }

        if !(extent > 0.0 && extent.is_finite()) {
            return Err(ViewportError::InvalidExtent { extent });
        }

        Ok(Self {
            origin,
            extent,
            scale,
            offset,
        })
    }

    #[must_use]
    pub fn map_fraction(&self, fraction_x: f64, fraction_y: f64) -> Complex {
        Complex {
            real: ((self.origin.real + fraction_x * self.extent) / self.scale) + self.offset.real,
            imag: ((self.origin.imag + fraction_y * self.extent) / self.scale) + self.offset.imag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_viewport() -> Viewport {
        Viewport::new(Complex::new(-2.5, -2.5), DEFAULT_PLANE_EXTENT, 1.0, Complex::ZERO).unwrap()
    }

    #[test]
    fn test_default_window_is_five_unit_square() {
        let viewport = default_viewport();

        assert_eq!(viewport.map_fraction(0.0, 0.0), Complex::new(-2.5, -2.5));
        assert_eq!(viewport.map_fraction(1.0, 1.0), Complex::new(2.5, 2.5));
        assert_eq!(viewport.map_fraction(0.5, 0.5), Complex::ZERO);
    }

    #[test]
    fn test_zoom_divides_then_offset_shifts() {
        let viewport =
            Viewport::new(Complex::new(-2.5, -2.5), DEFAULT_PLANE_EXTENT, 2.0, Complex::new(0.5, -0.25))
                .unwrap();

        assert_eq!(viewport.map_fraction(0.0, 0.0), Complex::new(-0.75, -1.5));
        assert_eq!(viewport.map_fraction(1.0, 1.0), Complex::new(1.75, 1.0));
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let zero = Viewport::new(Complex::ZERO, 5.0, 0.0, Complex::ZERO);
        let negative = Viewport::new(Complex::ZERO, 5.0, -1.0, Complex::ZERO);

        assert_eq!(zero, Err(ViewportError::InvalidScale { scale: 0.0 }));
        assert_eq!(negative, Err(ViewportError::InvalidScale { scale: -1.0 }));
    }

    #[test]
    fn test_rejects_nan_scale() {
        assert!(Viewport::new(Complex::ZERO, 5.0, f64::NAN, Complex::ZERO).is_err());
    }

    #[test]
    fn test_rejects_non_positive_extent() {
        assert_eq!(
            Viewport::new(Complex::ZERO, 0.0, 1.0, Complex::ZERO),
            Err(ViewportError::InvalidExtent { extent: 0.0 })
        );
    }
}
