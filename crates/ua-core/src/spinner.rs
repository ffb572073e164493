use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Animation immuable : une suite de frames et l'intervalle entre deux frames.
///
/// Each frame is a block of braille text, possibly several lines tall once
/// scaled. A `Spinner` is never mutated after construction; the scaler builds
/// a new one.
///
/// # Example
/// ```
/// use ua_core::spinner::Spinner;
/// let sp = Spinner::new(vec!["⠋".into(), "⠙".into()], 80).unwrap();
/// assert_eq!(sp.len(), 2);
/// assert_eq!(sp.interval_ms(), 80);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spinner {
    frames: Vec<String>,
    interval_ms: u32,
}

impl Spinner {
    /// Build a spinner.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidSpinner`] if `frames` is empty or
    /// `interval_ms` is zero.
    pub fn new(frames: Vec<String>, interval_ms: u32) -> Result<Self, ValidationError> {
        if frames.is_empty() {
            return Err(ValidationError::InvalidSpinner("aucune frame".into()));
        }
        if interval_ms == 0 {
            return Err(ValidationError::InvalidSpinner("intervalle nul".into()));
        }
        Ok(Self { frames, interval_ms })
    }

    /// Frames dans l'ordre d'animation.
    #[inline]
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Frame at `index`, wrapping around the sequence.
    ///
    /// # Example
    /// ```
    /// use ua_core::spinner::Spinner;
    /// let sp = Spinner::new(vec!["a".into(), "b".into()], 10).unwrap();
    /// assert_eq!(sp.frame(3), "b");
    /// ```
    #[inline]
    #[must_use]
    pub fn frame(&self, index: usize) -> &str {
        &self.frames[index % self.frames.len()]
    }

    /// Number of frames (never zero).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` if there are no frames, which `new` never allows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Intervalle entre deux frames, en millisecondes.
    #[inline]
    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Intervalle entre deux frames.
    #[inline]
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.interval_ms))
    }

    /// Largeur maximale (en caractères) et hauteur maximale (en lignes) des frames.
    ///
    /// # Example
    /// ```
    /// use ua_core::spinner::Spinner;
    /// let sp = Spinner::new(vec!["⠁⠁\n⠁⠁".into(), "⠁".into()], 10).unwrap();
    /// assert_eq!(sp.extent(), (2, 2));
    /// ```
    #[must_use]
    pub fn extent(&self) -> (usize, usize) {
        let mut width = 0;
        let mut height = 1;
        for frame in &self.frames {
            let mut lines = 0;
            for line in frame.lines() {
                width = width.max(line.chars().count());
                lines += 1;
            }
            height = height.max(lines);
        }
        (width, height)
    }
}

impl Default for Spinner {
    /// Une seule cellule braille vide, 100ms.
    fn default() -> Self {
        Self {
            frames: vec!["\u{2800}".to_string()],
            interval_ms: 100,
        }
    }
}

/// Facteur d'agrandissement accepté par le scaler.
///
/// Only 2 and 3 are supported; the identity factor is expressed by not
/// scaling at all (`Option<ScaleFactor>::None`).
///
/// # Example
/// ```
/// use ua_core::spinner::ScaleFactor;
/// assert_eq!(ScaleFactor::try_from(3u32).unwrap(), ScaleFactor::Three);
/// assert!(ScaleFactor::try_from(1u32).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ScaleFactor {
    /// Each dot becomes a 2×2 block.
    Two,
    /// Each dot becomes a 3×3 block.
    Three,
}

impl ScaleFactor {
    /// Facteur numérique.
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl TryFrom<u32> for ScaleFactor {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(ValidationError::UnsupportedScale(other)),
        }
    }
}

impl From<ScaleFactor> for u32 {
    fn from(factor: ScaleFactor) -> Self {
        factor.get() as u32
    }
}

impl std::str::FromStr for ScaleFactor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::UnsupportedScale(0))?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}
