use crate::core::data::complex::Complex;

/// The region of the complex plane covered by a render.
///
/// `min` is the plane coordinate of the top-left pixel edge and `max` the
/// coordinate one full buffer width/height away from it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRect {
    min: Complex,
    max: Complex,
}

impl PlaneRect {
    #[must_use]
    pub const fn new(min: Complex, max: Complex) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn cx_min(&self) -> f64 {
        self.min.real
    }

    #[must_use]
    pub fn cx_max(&self) -> f64 {
        self.max.real
    }

    #[must_use]
    pub fn cy_min(&self) -> f64 {
        self.min.imag
    }

    #[must_use]
    pub fn cy_max(&self) -> f64 {
        self.max.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}
