use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::pixel_to_plane_coords::{PixelToPlaneCoordsError, pixel_to_plane_coords};

/// Escape-time iteration of `z ↦ z² + c` seeded with `z = c`.
///
/// Returns the index of the first iteration whose result lies outside the
/// escape radius, or `max_iterations` if the point never escapes.
#[must_use]
pub fn escape_iteration(c: Complex, max_iterations: u32, escape_radius_squared: f64) -> u32 {
    let mut z = c;

    for iteration in 0..max_iterations {
        z = z.square() + c;

        if z.magnitude_squared() > escape_radius_squared {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    params: MandelbrotParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToPlaneCoordsError;

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_plane_coords(pixel, self.pixel_rect, &self.params.viewport())?;

        Ok(escape_iteration(
            c,
            self.params.max_iterations(),
            self.params.escape_radius_squared(),
        ))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, params: MandelbrotParams) -> Self {
        Self { pixel_rect, params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::{DEFAULT_PLANE_EXTENT, Viewport};

    fn default_params(max_iterations: u32) -> MandelbrotParams {
        let viewport =
            Viewport::new(Complex::new(-2.5, -2.5), DEFAULT_PLANE_EXTENT, 1.0, Complex::ZERO).unwrap();
        MandelbrotParams::new(viewport, max_iterations, 4.0, 1.0, 0.65).unwrap()
    }

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 50, 1000] {
            assert_eq!(escape_iteration(Complex::ZERO, max_iterations, 4.0), max_iterations);
        }
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        assert_eq!(escape_iteration(Complex::new(3.0, 3.0), 50, 4.0), 0);
    }

    #[test]
    fn test_period_two_cycle_stays_bounded() {
        // -1 → 0 → -1 → ...
        assert_eq!(escape_iteration(Complex::new(-1.0, 0.0), 50, 4.0), 50);
    }

    #[test]
    fn test_slow_escape_on_real_axis() {
        // 0.5 → 0.75 → 1.0625 → 1.6289… → 3.1533…, |z|² first exceeds 4 on the fourth step
        assert_eq!(escape_iteration(Complex::new(0.5, 0.0), 50, 4.0), 3);
    }

    #[test]
    fn test_larger_escape_radius_delays_escape() {
        let c = Complex::new(0.5, 0.0);

        assert!(escape_iteration(c, 50, 64.0) > escape_iteration(c, 50, 4.0));
    }

    #[test]
    fn test_compute_uses_pixel_mapping() {
        let pixel_rect = PixelRect::from_size(4, 4).unwrap();
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, default_params(50));

        // pixel (0,0) → c = -2.5 - 2.5i, first step gives -2.5 + 10i
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), Ok(0));
        // pixel (2,2) → c = 0 + 0i
        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), Ok(50));
    }

    #[test]
    fn test_compute_rejects_pixel_outside_rect() {
        let pixel_rect = PixelRect::from_size(4, 4).unwrap();
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, default_params(50));

        assert!(algorithm.compute(Point { x: 4, y: 0 }).is_err());
    }
}
