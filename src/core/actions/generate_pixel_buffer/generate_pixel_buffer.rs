use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError<E> {
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Colours row-major `input` values into a buffer covering `pixel_rect`.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    input: Vec<CMap::Value>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * 3);

    for value in input {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    PixelBuffer::from_data(pixel_rect, buffer).map_err(GeneratePixelBufferError::PixelBuffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    #[derive(Debug, PartialEq)]
    struct StubColourMapError {}

    impl fmt::Display for StubColourMapError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubColourMapError")
        }
    }

    impl Error for StubColourMapError {}

    struct StubColourMap {
        fail_on: Option<u8>,
    }

    impl ColourMap for StubColourMap {
        type Value = u8;
        type Failure = StubColourMapError;

        fn map(&self, value: u8) -> Result<Colour, Self::Failure> {
            if self.fail_on == Some(value) {
                return Err(StubColourMapError {});
            }

            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMap { fail_on: None };
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 2, y: 1 }).unwrap();

        let results = generate_pixel_buffer(input, &mapper, pixel_rect).unwrap();

        assert_eq!(
            results.buffer(),
            &[1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6]
        );
        assert_eq!(results.pixel_rect(), pixel_rect);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let mapper = StubColourMap { fail_on: Some(4) };
        let pixel_rect = PixelRect::from_size(3, 2).unwrap();

        let results = generate_pixel_buffer(vec![1, 2, 3, 4, 5, 6], &mapper, pixel_rect);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::ColourMap(StubColourMapError {}))
        );
    }

    #[test]
    fn test_pixel_rect_input_size_mismatch_returns_err() {
        let mapper = StubColourMap { fail_on: None };
        let pixel_rect = PixelRect::from_size(2, 2).unwrap();

        let results = generate_pixel_buffer(vec![1, 2, 3, 4, 5, 6], &mapper, pixel_rect);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    pixel_rect_size: 12,
                    buffer_size: 18
                }
            ))
        );
    }

    #[test]
    fn test_error_display() {
        let err: GeneratePixelBufferError<StubColourMapError> =
            GeneratePixelBufferError::ColourMap(StubColourMapError {});

        assert_eq!(err.to_string(), "colour map error: StubColourMapError");
    }
}
