use std::{error::Error, fmt};

use crate::core::data::viewport::ViewportError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidEscapeRadiusError { escape_radius_squared: f64 },
    InvalidSaturationError { saturation: f32 },
    Viewport(ViewportError),
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeRadiusError { escape_radius_squared } => {
                write!(
                    f,
                    "Squared escape radius must be positive and finite: {}",
                    escape_radius_squared
                )
            }
            Self::InvalidSaturationError { saturation } => {
                write!(f, "Saturation must lie within [0, 1]: {}", saturation)
            }
            Self::Viewport(err) => write!(f, "{}", err),
        }
    }
}

impl Error for MandelbrotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewportError> for MandelbrotError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
