
use crate::core::data::complex::Complex;
use crate::core::data::plane_rect::PlaneRect;
use crate::core::data::viewport::{DEFAULT_PLANE_EXTENT, Viewport};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::view::view_command::ViewCommand;

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
pub const DEFAULT_ESCAPE_RADIUS_SQUARED: f64 = 4.0;
pub const DEFAULT_SCALE: f64 = 1.0;
pub const DEFAULT_HUE_OFFSET: f32 = 1.0;
pub const DEFAULT_SATURATION: f32 = 0.65;
pub const DEFAULT_PAN_STEP: f64 = 0.1;
pub const DEFAULT_VIEWPORT_ORIGIN: f64 = -2.5;

pub const MIN_MAX_ITERATIONS: u32 = 1;
pub const MIN_ESCAPE_RADIUS_SQUARED: f64 = 2.0;
pub const MIN_SATURATION: f32 = 0.1;
pub const MAX_SATURATION: f32 = 1.0;

const ITERATIONS_STEP: u32 = 25;
const HUE_STEP: f32 = 0.01;
const SATURATION_STEP: f32 = 0.05;
const ZOOM_FACTOR: f64 = 2.0;
const PAN_STEP_FACTOR: f64 = 10.0;
const ACCURACY_FACTOR: f64 = 2.0;

fn is_usable_step(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

/// Every tunable rendering parameter of an interactive session.
///
/// Mutated only through [`ViewState::apply`], which keeps `scale > 0`,
/// `max_iterations >= 1`, `escape_radius_squared >= 2` (after halving) and
/// `saturation` within `[0.1, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    scale: f64,
    horizontal_offset: f64,
    vertical_offset: f64,
    horizontal_step: f64,
    vertical_step: f64,
    viewport_origin_x: f64,
    viewport_origin_y: f64,
    max_iterations: u32,
    escape_radius_squared: f64,
    hue_offset: f32,
    saturation: f32,
    overlay_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            horizontal_offset: 0.0,
            vertical_offset: 0.0,
            horizontal_step: DEFAULT_PAN_STEP,
            vertical_step: DEFAULT_PAN_STEP,
            viewport_origin_x: DEFAULT_VIEWPORT_ORIGIN,
            viewport_origin_y: DEFAULT_VIEWPORT_ORIGIN,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
            hue_offset: DEFAULT_HUE_OFFSET,
            saturation: DEFAULT_SATURATION,
            overlay_visible: true,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one command. Save has no effect on the view itself.
    pub fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::PanLeft => {
                self.horizontal_offset = Self::checked_offset(
                    self.horizontal_offset,
                    self.horizontal_offset - self.horizontal_step,
                )
            }
            ViewCommand::PanRight => {
                self.horizontal_offset = Self::checked_offset(
                    self.horizontal_offset,
                    self.horizontal_offset + self.horizontal_step,
                )
            }
            ViewCommand::PanUp => {
                self.vertical_offset =
                    Self::checked_offset(self.vertical_offset, self.vertical_offset - self.vertical_step)
            }
            ViewCommand::PanDown => {
                self.vertical_offset =
                    Self::checked_offset(self.vertical_offset, self.vertical_offset + self.vertical_step)
            }
            ViewCommand::ZoomIn => self.rescale(
                self.scale * ZOOM_FACTOR,
                self.horizontal_step / ZOOM_FACTOR,
                self.vertical_step / ZOOM_FACTOR,
            ),
            ViewCommand::ZoomOut => self.rescale(
                self.scale / ZOOM_FACTOR,
                self.horizontal_step * ZOOM_FACTOR,
                self.vertical_step * ZOOM_FACTOR,
            ),
            ViewCommand::HueUp => self.hue_offset += HUE_STEP,
            ViewCommand::HueDown => self.hue_offset -= HUE_STEP,
            ViewCommand::PanStepXUp => {
                self.horizontal_step =
                    Self::checked_step(self.horizontal_step, self.horizontal_step * PAN_STEP_FACTOR)
            }
            ViewCommand::PanStepXDown => {
                self.horizontal_step =
                    Self::checked_step(self.horizontal_step, self.horizontal_step / PAN_STEP_FACTOR)
            }
            ViewCommand::PanStepYUp => {
                self.vertical_step =
                    Self::checked_step(self.vertical_step, self.vertical_step * PAN_STEP_FACTOR)
            }
            ViewCommand::PanStepYDown => {
                self.vertical_step =
                    Self::checked_step(self.vertical_step, self.vertical_step / PAN_STEP_FACTOR)
            }
            ViewCommand::IterationsUp => {
                self.max_iterations = self.max_iterations.saturating_add(ITERATIONS_STEP)
            }
            ViewCommand::IterationsDown => {
                self.max_iterations = self.max_iterations.saturating_sub(ITERATIONS_STEP)
            }
            ViewCommand::SaturationUp => self.saturation += SATURATION_STEP,
            ViewCommand::SaturationDown => self.saturation -= SATURATION_STEP,
            ViewCommand::AccuracyUp => {
                let next = self.escape_radius_squared * ACCURACY_FACTOR;
                if next.is_finite() {
                    self.escape_radius_squared = next;
                } else {
                    log::debug!("accuracy already at its ceiling: {}", self.escape_radius_squared);
                }
            }
            ViewCommand::AccuracyDown => self.escape_radius_squared /= ACCURACY_FACTOR,
            ViewCommand::Reset => *self = Self::default(),
            ViewCommand::ToggleOverlay => self.overlay_visible = !self.overlay_visible,
            ViewCommand::Save => {}
        }

        self.enforce_invariants();
    }

    /// Zoom moves scale and both pan steps together, so one pan keeps moving
    /// the same fraction of the visible window. All three change or none do.
    fn rescale(&mut self, scale: f64, horizontal_step: f64, vertical_step: f64) {
        if is_usable_step(scale) && is_usable_step(horizontal_step) && is_usable_step(vertical_step) {
            self.scale = scale;
            self.horizontal_step = horizontal_step;
            self.vertical_step = vertical_step;
        } else {
            log::debug!("zoom to scale {} refused at scale {}", scale, self.scale);
        }
    }

    fn checked_offset(current: f64, next: f64) -> f64 {
        if next.is_finite() {
            next
        } else {
            log::debug!("pan to offset {} refused at offset {}", next, current);
            current
        }
    }

    fn checked_step(current: f64, next: f64) -> f64 {
        if is_usable_step(next) {
            next
        } else {
            log::debug!("pan step change to {} refused at step {}", next, current);
            current
        }
    }

    fn enforce_invariants(&mut self) {
        if self.max_iterations < MIN_MAX_ITERATIONS {
            log::debug!("max iterations clamped to {}", MIN_MAX_ITERATIONS);
            self.max_iterations = MIN_MAX_ITERATIONS;
        }

        if self.escape_radius_squared <= MIN_ESCAPE_RADIUS_SQUARED {
            self.escape_radius_squared = MIN_ESCAPE_RADIUS_SQUARED;
        }

        self.saturation = self.saturation.clamp(MIN_SATURATION, MAX_SATURATION);
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn horizontal_offset(&self) -> f64 {
        self.horizontal_offset
    }

    #[must_use]
    pub fn vertical_offset(&self) -> f64 {
        self.vertical_offset
    }

    #[must_use]
    pub fn horizontal_step(&self) -> f64 {
        self.horizontal_step
    }

    #[must_use]
    pub fn vertical_step(&self) -> f64 {
        self.vertical_step
    }

    #[must_use]
    pub fn viewport_origin(&self) -> Complex {
        Complex::new(self.viewport_origin_x, self.viewport_origin_y)
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

    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        1.0 / self.scale
    }

    /// The plane rectangle a render of this state covers.
    #[must_use]
    pub fn plane_bounds(&self) -> PlaneRect {
        let offset = Complex::new(self.horizontal_offset, self.vertical_offset);
        let min = Complex::new(
            self.viewport_origin_x / self.scale + offset.real,
            self.viewport_origin_y / self.scale + offset.imag,
        );
        let max = Complex::new(
            (self.viewport_origin_x + DEFAULT_PLANE_EXTENT) / self.scale + offset.real,
            (self.viewport_origin_y + DEFAULT_PLANE_EXTENT) / self.scale + offset.imag,
        );

        PlaneRect::new(min, max)
    }

    pub fn render_params(&self) -> Result<MandelbrotParams, MandelbrotError> {
        let viewport = Viewport::new(
            self.viewport_origin(),
            DEFAULT_PLANE_EXTENT,
            self.scale,
            Complex::new(self.horizontal_offset, self.vertical_offset),
        )?;

        MandelbrotParams::new(
            viewport,
            self.max_iterations,
            self.escape_radius_squared,
            self.hue_offset,
            self.saturation,
        )
    }
}
