use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::{
    MandelbrotHsbColourMap, MandelbrotHsbColourMapError,
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::pixel_to_plane_coords::PixelToPlaneCoordsError;
use crate::core::view::ViewState;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderViewError {
    InvalidParams(MandelbrotError),
    Algorithm(PixelToPlaneCoordsError),
    PixelBuffer(GeneratePixelBufferError<MandelbrotHsbColourMapError>),
}

impl fmt::Display for RenderViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams(err) => write!(f, "invalid render parameters: {}", err),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidParams(err) => Some(err),
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderViewError {
    fn from(err: MandelbrotError) -> Self {
        Self::InvalidParams(err)
    }
}

impl From<PixelToPlaneCoordsError> for RenderViewError {
    fn from(err: PixelToPlaneCoordsError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<GeneratePixelBufferError<MandelbrotHsbColourMapError>> for RenderViewError {
    fn from(err: GeneratePixelBufferError<MandelbrotHsbColourMapError>) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders `params` into a fresh buffer covering `pixel_rect`.
///
/// Pure: the same params and rect always give byte-identical buffers.
pub fn render_view(
    params: &MandelbrotParams,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, RenderViewError> {
    let algorithm = MandelbrotAlgorithm::new(pixel_rect, *params);
    let escape_iterations = generate_fractal_parallel_rayon(&algorithm)?;
    let colour_map = MandelbrotHsbColourMap::new(
        params.max_iterations(),
        params.hue_offset(),
        params.saturation(),
    );

    Ok(generate_pixel_buffer(escape_iterations, &colour_map, pixel_rect)?)
}

/// Fixed-size renderer for [`ViewState`] snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractalRenderer {
    pixel_rect: PixelRect,
}

impl FractalRenderer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        Ok(Self {
            pixel_rect: PixelRect::from_size(width, height)?,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    pub fn render(&self, state: &ViewState) -> Result<PixelBuffer, RenderViewError> {
        render_view(&state.render_params()?, self.pixel_rect)
    }
}
