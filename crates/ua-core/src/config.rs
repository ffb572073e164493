use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::AnsiColor;
use crate::spinner::ScaleFactor;

/// Durée de prévisualisation minimale, en secondes.
pub const MIN_DURATION_SECS: f64 = 0.1;
/// Durée de prévisualisation maximale, en secondes.
pub const MAX_DURATION_SECS: f64 = 600.0;

/// Réglages de prévisualisation, chargés depuis TOML puis surchargés par la CLI.
///
/// Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use ua_core::config::PreviewConfig;
/// let config = PreviewConfig::default();
/// assert!((config.duration - 3.0).abs() < f64::EPSILON);
/// assert!(config.scale.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Durée de prévisualisation par spinner, en secondes.
    pub duration: f64,
    /// Couleur appliquée aux frames (TTY uniquement).
    pub color: Option<AnsiColor>,
    /// Agrandissement des frames. `None` = taille native.
    pub scale: Option<ScaleFactor>,
    /// Texte affiché à côté du spinner par la démo.
    pub text: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            duration: 3.0,
            color: None,
            scale: None,
            text: "Loading...".to_string(),
        }
    }
}

impl PreviewConfig {
    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization and after CLI overrides.
    pub fn clamp_all(&mut self) {
        if !self.duration.is_finite() {
            self.duration = Self::default().duration;
        }
        self.duration = self.duration.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    preview: Option<PreviewSection>,
}

/// Preview section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct PreviewSection {
    duration: Option<f64>,
    color: Option<AnsiColor>,
    scale: Option<ScaleFactor>,
    text: Option<String>,
}

/// Parse a TOML document into a [`PreviewConfig`].
///
/// Absent fields keep their default value.
///
/// # Errors
/// Returns an error if the TOML is malformed or a value is out of its domain
/// (unknown color, unsupported scale).
///
/// # Example
/// ```
/// use ua_core::config::parse_config;
/// use ua_core::color::AnsiColor;
/// let config = parse_config("[preview]\ncolor = \"green\"\n").unwrap();
/// assert_eq!(config.color, Some(AnsiColor::Green));
/// ```
pub fn parse_config(content: &str) -> Result<PreviewConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;
    let mut config = PreviewConfig::default();

    if let Some(p) = file.preview {
        if let Some(v) = p.duration {
            config.duration = v;
        }
        if let Some(v) = p.color {
            config.color = Some(v);
        }
        if let Some(v) = p.scale {
            config.scale = Some(v);
        }
        if let Some(v) = p.text {
            config.text = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge une configuration depuis un fichier TOML.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<PreviewConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Configuration invalide : {}", path.display()))?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, PreviewConfig::default());
    }

    #[test]
    fn partial_section_overrides_only_given_fields() {
        let config = parse_config("[preview]\nscale = 3\n").unwrap();
        assert_eq!(config.scale, Some(ScaleFactor::Three));
        assert!(config.color.is_none());
        assert_eq!(config.text, "Loading...");
    }

    #[test]
    fn unsupported_scale_is_rejected() {
        assert!(parse_config("[preview]\nscale = 5\n").is_err());
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(parse_config("[preview]\ncolor = \"purple\"\n").is_err());
    }

    #[test]
    fn duration_is_clamped() {
        let config = parse_config("[preview]\nduration = 0.0\n").unwrap();
        assert!((config.duration - MIN_DURATION_SECS).abs() < f64::EPSILON);

        let config = parse_config("[preview]\nduration = 1e9\n").unwrap();
        assert!((config.duration - MAX_DURATION_SECS).abs() < f64::EPSILON);
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[preview]\nduration = 1.5\ncolor = \"cyan\"\ntext = \"Working\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert!((config.duration - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.color, Some(AnsiColor::Cyan));
        assert_eq!(config.text, "Working");
    }

    #[test]
    fn load_config_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn shipped_default_config_matches_defaults() {
        let config = parse_config(include_str!("../../../config/default.toml")).unwrap();
        assert_eq!(config, PreviewConfig::default());
    }
}
