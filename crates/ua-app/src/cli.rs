use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ua_core::color::AnsiColor;
use ua_core::spinner::ScaleFactor;

/// unispin : animated braille spinners for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Agrandissement des frames : 2 ou 3.
    #[arg(short, long, global = true)]
    pub scale: Option<ScaleFactor>,

    /// Couleur : red, green, yellow, blue, magenta, cyan, white.
    #[arg(long, global = true)]
    pub color: Option<AnsiColor>,

    /// Durée de prévisualisation par spinner, en secondes.
    #[arg(short, long, global = true)]
    pub duration: Option<f64>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Lister les spinners avec leur première frame.
    List,
    /// Prévisualiser un spinner.
    Show {
        /// Nom du spinner (voir `unispin list`).
        name: String,
    },
    /// Prévisualiser tous les spinners à la suite (défaut).
    All,
    /// Démonstration du driver live.
    Demo {
        /// Démo raccourcie (environ 3× plus rapide).
        #[arg(long, default_value_t = false)]
        fast: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["unispin"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
    }

    #[test]
    fn show_with_global_flags() {
        let cli = Cli::try_parse_from(["unispin", "show", "helix", "--scale", "2", "--color", "cyan"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Show {
                name: "helix".into()
            })
        );
        assert_eq!(cli.scale, Some(ScaleFactor::Two));
        assert_eq!(cli.color, Some(AnsiColor::Cyan));
    }

    #[test]
    fn demo_fast_flag() {
        let cli = Cli::try_parse_from(["unispin", "demo", "--fast"]).unwrap();
        assert_eq!(cli.command, Some(Command::Demo { fast: true }));
    }

    #[test]
    fn invalid_scale_rejected() {
        assert!(Cli::try_parse_from(["unispin", "--scale", "4"]).is_err());
        assert!(Cli::try_parse_from(["unispin", "--scale", "1"]).is_err());
    }

    #[test]
    fn invalid_color_rejected() {
        assert!(Cli::try_parse_from(["unispin", "list", "--color", "purple"]).is_err());
    }
}
