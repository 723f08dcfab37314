use crate::core::data::colour::Colour;
use std::error::Error;

pub trait ColourMap {
    type Value;
    type Failure: Error;

    fn map(&self, value: Self::Value) -> Result<Colour, Self::Failure>;
}
