pub mod palette;
pub mod spark;

pub use palette::{Orientation, Palette};
pub use spark::{quantize, render, summary};
