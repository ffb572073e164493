use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Result, anyhow};
use clap::Parser;
use ua_braille::registry::{self, SpinnerName};
use ua_core::config::PreviewConfig;

pub mod cli;
pub mod demo;
pub mod preview;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let mut config = resolve_config(&cli)?;

    // 3b. Appliquer les overrides CLI
    if let Some(duration) = cli.duration {
        config.duration = duration;
    }
    if cli.color.is_some() {
        config.color = cli.color;
    }
    if cli.scale.is_some() {
        config.scale = cli.scale;
    }
    config.clamp_all();

    // 4. Ctrl+C : drapeau observé par les boucles d'aperçu et la démo
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)) {
        log::warn!("Handler Ctrl+C non installé : {e}");
    }

    // 5. Dispatcher la commande
    let colorize = io::stdout().is_terminal();
    let mut out = io::stdout().lock();
    match cli.command.as_ref().unwrap_or(&cli::Command::All) {
        cli::Command::List => preview::list(&mut out, config.scale),
        cli::Command::Show { name } => {
            let name: SpinnerName = name.parse().map_err(|e| {
                anyhow!("{e}\nDisponibles : {}", registry::available_names())
            })?;
            preview::preview(&mut out, name, &config, colorize, &interrupted)
        }
        cli::Command::All => preview::preview_all(&mut out, &config, colorize, &interrupted),
        cli::Command::Demo { fast } => {
            drop(out);
            demo::run_demo(*fast, &config, &interrupted)
        }
    }
}

/// Resolve config: missing file falls back to defaults.
fn resolve_config(cli: &cli::Cli) -> Result<PreviewConfig> {
    if cli.config.exists() {
        ua_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(PreviewConfig::default())
    }
}
