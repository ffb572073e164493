pub mod codec;
pub mod generators;
pub mod grid;
/// Braille engine for unispin.
///
/// Encodes dot grids to braille text and back, upscales spinners, and holds
/// the registry of built-in animations.
pub mod registry;
pub mod scale;

pub use codec::{braille_to_grid, grid_to_braille};
pub use grid::{DotGrid, make_grid};
pub use registry::SpinnerName;
pub use scale::scale_spinner;
