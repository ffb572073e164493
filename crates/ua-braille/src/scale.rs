use rayon::prelude::*;
use ua_core::error::{CoreError, DecodeError};
use ua_core::spinner::{ScaleFactor, Spinner};

use crate::codec::{braille_to_grid, grid_to_braille};
use crate::grid::DotGrid;

/// Agrandit une grille par réplication plus-proche-voisin.
///
/// Each dot `(r, c)` becomes the `factor × factor` block starting at
/// `(r * factor, c * factor)`. Multiples of 4×2 stay multiples of 4×2.
///
/// # Example
/// ```
/// use ua_braille::grid::DotGrid;
/// use ua_braille::scale::upscale_grid;
/// use ua_core::spinner::ScaleFactor;
///
/// let mut grid = DotGrid::new(4, 2).unwrap();
/// grid.set(0, 0, true);
/// let big = upscale_grid(&grid, ScaleFactor::Two);
/// assert_eq!((big.rows(), big.cols()), (8, 4));
/// assert_eq!(big.count_on(), 4);
/// ```
#[must_use]
pub fn upscale_grid(grid: &DotGrid, factor: ScaleFactor) -> DotGrid {
    let f = factor.get();
    DotGrid::build(grid.rows() * f, grid.cols() * f, |r, c| grid.get(r / f, c / f))
}

/// Agrandit une frame braille : décodage, réplication, ré-encodage.
///
/// # Errors
/// Propagates the codec's [`DecodeError`] for non-braille or ragged frames.
pub fn scale_frame(frame: &str, factor: ScaleFactor) -> Result<String, DecodeError> {
    let grid = braille_to_grid(frame)?;
    Ok(grid_to_braille(&upscale_grid(&grid, factor)))
}

/// Scale every frame of `spinner` by `factor`, keeping the interval.
///
/// Frames are independent and scaled in parallel; their order is preserved.
///
/// # Errors
/// Returns a [`DecodeError`] if any frame is not a rectangular braille block.
pub fn scale(spinner: &Spinner, factor: ScaleFactor) -> Result<Spinner, CoreError> {
    let frames = spinner
        .frames()
        .par_iter()
        .map(|frame| scale_frame(frame, factor))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!(
        "Spinner agrandi ×{factor} : {} frames, {}ms",
        frames.len(),
        spinner.interval_ms()
    );
    Ok(Spinner::new(frames, spinner.interval_ms())?)
}

/// Return a new spinner whose frames are `factor` times larger.
///
/// Only factors 2 and 3 are accepted; anything else, including 1, is a
/// validation error rather than a silent no-op.
///
/// # Errors
/// - [`ValidationError::UnsupportedScale`](ua_core::error::ValidationError::UnsupportedScale)
///   for factors outside `{2, 3}`.
/// - [`DecodeError`] if a frame is not a rectangular braille block.
///
/// # Example
/// ```
/// use ua_braille::scale_spinner;
/// use ua_core::spinner::Spinner;
///
/// let sp = Spinner::new(vec!["\u{2801}".into()], 100).unwrap();
/// let big = scale_spinner(&sp, 2).unwrap();
/// assert_eq!(big.frames()[0], "\u{281B}\u{2800}\n\u{2800}\u{2800}");
/// assert_eq!(big.interval_ms(), 100);
/// assert!(scale_spinner(&sp, 5).is_err());
/// ```
pub fn scale_spinner(spinner: &Spinner, factor: u32) -> Result<Spinner, CoreError> {
    scale(spinner, ScaleFactor::try_from(factor)?)
}
