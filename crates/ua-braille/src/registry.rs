use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use ua_core::error::ValidationError;
use ua_core::spinner::Spinner;

use crate::generators;

/// Nom d'un spinner intégré.
///
/// The declaration order is the canonical listing order.
///
/// # Example
/// ```
/// use ua_braille::registry::SpinnerName;
/// let name: SpinnerName = "helix".parse().unwrap();
/// assert_eq!(name, SpinnerName::Helix);
/// assert_eq!(name.as_str(), "helix");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpinnerName {
    Braille,
    BrailleWave,
    Dna,
    Scan,
    Rain,
    ScanLine,
    Pulse,
    Snake,
    Sparkle,
    Cascade,
    Columns,
    Orbit,
    Breathe,
    WaveRows,
    Checkerboard,
    Helix,
    FillSweep,
    DiagSwipe,
}

impl SpinnerName {
    /// All built-in spinners, in listing order.
    pub const ALL: [Self; 18] = [
        Self::Braille,
        Self::BrailleWave,
        Self::Dna,
        Self::Scan,
        Self::Rain,
        Self::ScanLine,
        Self::Pulse,
        Self::Snake,
        Self::Sparkle,
        Self::Cascade,
        Self::Columns,
        Self::Orbit,
        Self::Breathe,
        Self::WaveRows,
        Self::Checkerboard,
        Self::Helix,
        Self::FillSweep,
        Self::DiagSwipe,
    ];

    /// Nom tel qu'accepté par la CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Braille => "braille",
            Self::BrailleWave => "braillewave",
            Self::Dna => "dna",
            Self::Scan => "scan",
            Self::Rain => "rain",
            Self::ScanLine => "scanline",
            Self::Pulse => "pulse",
            Self::Snake => "snake",
            Self::Sparkle => "sparkle",
            Self::Cascade => "cascade",
            Self::Columns => "columns",
            Self::Orbit => "orbit",
            Self::Breathe => "breathe",
            Self::WaveRows => "waverows",
            Self::Checkerboard => "checkerboard",
            Self::Helix => "helix",
            Self::FillSweep => "fillsweep",
            Self::DiagSwipe => "diagswipe",
        }
    }

    /// Intervalle entre frames, en millisecondes.
    #[must_use]
    pub const fn interval_ms(self) -> u32 {
        match self {
            Self::Braille | Self::Dna | Self::Snake | Self::Helix => 80,
            Self::BrailleWave
            | Self::Rain
            | Self::Orbit
            | Self::Breathe
            | Self::FillSweep => 100,
            Self::Scan => 70,
            Self::ScanLine => 120,
            Self::Pulse => 180,
            Self::Sparkle => 150,
            Self::Cascade | Self::Columns | Self::DiagSwipe => 60,
            Self::WaveRows => 90,
            Self::Checkerboard => 250,
        }
    }

    /// Spinner enregistré sous ce nom.
    #[must_use]
    pub fn spinner(self) -> &'static Spinner {
        get(self)
    }

    fn frames(self) -> Vec<String> {
        match self {
            Self::Braille => literal(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
            Self::BrailleWave => literal(&[
                "⠁⠂⠄⡀", "⠂⠄⡀⢀", "⠄⡀⢀⠠", "⡀⢀⠠⠐", "⢀⠠⠐⠈", "⠠⠐⠈⠁", "⠐⠈⠁⠂", "⠈⠁⠂⠄",
            ]),
            Self::Dna => literal(&[
                "⠋⠉⠙⠚", "⠉⠙⠚⠒", "⠙⠚⠒⠂", "⠚⠒⠂⠂", "⠒⠂⠂⠒", "⠂⠂⠒⠲", "⠂⠒⠲⠴", "⠒⠲⠴⠤",
                "⠲⠴⠤⠄", "⠴⠤⠄⠋", "⠤⠄⠋⠉", "⠄⠋⠉⠙",
            ]),
            Self::Scan => generators::scan(),
            Self::Rain => generators::rain(),
            Self::ScanLine => generators::scanline(),
            Self::Pulse => generators::pulse(),
            Self::Snake => generators::snake(),
            Self::Sparkle => generators::sparkle(),
            Self::Cascade => generators::cascade(),
            Self::Columns => generators::columns(),
            Self::Orbit => generators::orbit(),
            Self::Breathe => generators::breathe(),
            Self::WaveRows => generators::waverows(),
            Self::Checkerboard => generators::checkerboard(),
            Self::Helix => generators::helix(),
            Self::FillSweep => generators::fillsweep(),
            Self::DiagSwipe => generators::diagswipe(),
        }
    }
}

impl fmt::Display for SpinnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpinnerName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSpinner(s.to_string()))
    }
}

fn literal(frames: &[&str]) -> Vec<String> {
    frames.iter().map(ToString::to_string).collect()
}

/// Table en lecture seule, construite au premier accès puis jamais modifiée.
///
/// Indexée par `SpinnerName as usize`.
static REGISTRY: LazyLock<Vec<Spinner>> = LazyLock::new(|| {
    let table: Vec<Spinner> = SpinnerName::ALL
        .into_iter()
        .map(|name| {
            Spinner::new(name.frames(), name.interval_ms()).unwrap_or_else(|e| {
                // Fallback : cellule vide plutôt qu'un trou dans la table.
                log::error!("Spinner {name} invalide : {e}");
                Spinner::default()
            })
        })
        .collect();
    log::debug!("Registre initialisé : {} spinners", table.len());
    table
});

/// Spinner for a known name.
///
/// # Example
/// ```
/// use ua_braille::registry::{get, SpinnerName};
/// assert_eq!(get(SpinnerName::Braille).frames()[0], "⠋");
/// assert_eq!(get(SpinnerName::Braille).interval_ms(), 80);
/// ```
#[must_use]
pub fn get(name: SpinnerName) -> &'static Spinner {
    &REGISTRY[name as usize]
}

/// Spinner for a name given as text.
///
/// # Errors
/// Returns [`ValidationError::UnknownSpinner`] for names not in the registry.
pub fn lookup(name: &str) -> Result<&'static Spinner, ValidationError> {
    name.parse::<SpinnerName>().map(get)
}

/// Every built-in spinner with its name, in listing order.
pub fn iter() -> impl Iterator<Item = (SpinnerName, &'static Spinner)> {
    SpinnerName::ALL.into_iter().map(|name| (name, get(name)))
}

/// Noms disponibles, séparés par des virgules.
#[must_use]
pub fn available_names() -> String {
    SpinnerName::ALL
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_order_matches_all() {
        for (i, name) in SpinnerName::ALL.iter().enumerate() {
            assert_eq!(*name as usize, i);
        }
    }

    #[test]
    fn unknown_name_rejected() {
        assert_eq!(
            lookup("nope"),
            Err(ValidationError::UnknownSpinner("nope".into()))
        );
    }

    #[test]
    fn lookup_matches_get() {
        let sp = lookup("dna").unwrap();
        assert!(std::ptr::eq(sp, get(SpinnerName::Dna)));
    }

    #[test]
    fn available_names_lists_all() {
        let names = available_names();
        assert!(names.starts_with("braille, braillewave, dna"));
        assert!(names.ends_with("diagswipe"));
    }
}
