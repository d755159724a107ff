use crate::core::data::colour::Colour;
use std::error::Error;

pub trait ColourMap {
    type Failure: Error;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure>;

    fn display_name(&self) -> &str;
}
