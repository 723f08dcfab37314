use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Immutable snapshot of everything a single render reads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    viewport: Viewport,
    max_iterations: u32,
    escape_radius_squared: f64,
    hue_offset: f32,
    saturation: f32,
}

impl MandelbrotParams {
    pub fn new(
        viewport: Viewport,
        max_iterations: u32,
        escape_radius_squared: f64,
        hue_offset: f32,
        saturation: f32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !(escape_radius_squared > 0.0 && escape_radius_squared.is_finite()) {
            return Err(MandelbrotError::InvalidEscapeRadiusError { escape_radius_squared });
        }

        if !(0.0..=1.0).contains(&saturation) {
            return Err(MandelbrotError::InvalidSaturationError { saturation });
        }

        Ok(Self {
            viewport,
            max_iterations,
            escape_radius_squared,
            hue_offset,
            saturation,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius_squared
    }

    #[must_use]
    pub fn hue_offset(&self) -> f32 {
        self.hue_offset
    }

    #[must_use]
    pub fn saturation(&self) -> f32 {
        self.saturation
    }
}
