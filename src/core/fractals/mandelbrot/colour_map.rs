use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::util::hsb_to_rgb::hsb_to_rgb;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotHsbColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for MandelbrotHsbColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for MandelbrotHsbColourMapError {}

/// Colours escaping points by escape speed on the hue wheel.
///
/// `hue = i / max_iterations + hue_offset` at fixed saturation and full
/// brightness; points inside the set are black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotHsbColourMap {
    max_iterations: u32,
    hue_offset: f32,
    saturation: f32,
}

impl ColourMap for MandelbrotHsbColourMap {
    type Value = u32;
    type Failure = MandelbrotHsbColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        if iterations > self.max_iterations {
            return Err(MandelbrotHsbColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let escape_speed = iterations as f32 / self.max_iterations as f32;

        Ok(hsb_to_rgb(escape_speed + self.hue_offset, self.saturation, 1.0))
    }
}

impl MandelbrotHsbColourMap {
    #[must_use]
    pub fn new(max_iterations: u32, hue_offset: f32, saturation: f32) -> Self {
        Self {
            max_iterations,
            hue_offset,
            saturation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_in_set_are_black() {
        let colour_map = MandelbrotHsbColourMap::new(50, 1.0, 0.65);

        assert_eq!(colour_map.map(50), Ok(Colour::BLACK));
    }

    #[test]
    fn test_immediate_escape_uses_hue_offset_only() {
        let colour_map = MandelbrotHsbColourMap::new(50, 1.0, 0.65);

        assert_eq!(colour_map.map(0), Ok(Colour { r: 255, g: 89, b: 89 }));
    }

    #[test]
    fn test_escape_speed_shifts_hue() {
        let colour_map = MandelbrotHsbColourMap::new(4, 0.0, 1.0);

        // 1/4 of the hue wheel past red is in the yellow→green sector
        assert_eq!(colour_map.map(1), Ok(hsb_to_rgb(0.25, 1.0, 1.0)));
        assert_ne!(colour_map.map(1), colour_map.map(0));
    }

    #[test]
    fn test_hue_offset_of_one_is_a_full_turn() {
        let shifted = MandelbrotHsbColourMap::new(50, 1.0, 0.65);
        let unshifted = MandelbrotHsbColourMap::new(50, 0.0, 0.65);

        assert_eq!(shifted.map(0), unshifted.map(0));
    }

    #[test]
    fn test_rejects_iterations_above_max() {
        let colour_map = MandelbrotHsbColourMap::new(50, 1.0, 0.65);

        assert_eq!(
            colour_map.map(51),
            Err(MandelbrotHsbColourMapError::IterationsExceedMax {
                iterations: 51,
                max_iterations: 50
            })
        );
    }
}
