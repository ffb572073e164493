use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use ua_braille::registry::SpinnerName;
use ua_core::color::AnsiColor;
use ua_core::config::PreviewConfig;
use ua_core::spinner::ScaleFactor;
use ua_live::{LiveOptions, LiveSpinner, live_spinner};

/// Étapes colorées de la démo : spinner, couleur, texte.
const TOUR: [(SpinnerName, AnsiColor, &str); 5] = [
    (SpinnerName::Dna, AnsiColor::Green, "Sequencing DNA"),
    (SpinnerName::Orbit, AnsiColor::Yellow, "Calculating orbit"),
    (SpinnerName::Rain, AnsiColor::Blue, "Fetching weather data"),
    (SpinnerName::Pulse, AnsiColor::Magenta, "Scanning network"),
    (SpinnerName::Snake, AnsiColor::Red, "Defragmenting"),
];

/// Durée d'une étape, raccourcie en mode rapide (jamais sous 0.2s).
fn step(secs: f64, fast: bool) -> Duration {
    let secs = if fast { (secs * 0.3).max(0.2) } else { secs };
    Duration::from_secs_f64(secs)
}

/// Attend `d` par tranches de 50ms. `false` si interrompu.
fn pause(d: Duration, stop: &AtomicBool) -> bool {
    let end = Instant::now() + d;
    loop {
        if stop.load(Ordering::Relaxed) {
            return false;
        }
        let now = Instant::now();
        if now >= end {
            return true;
        }
        thread::sleep((end - now).min(Duration::from_millis(50)));
    }
}

/// Anime `name` pendant `d` sur stderr. `false` si interrompu.
fn spin_for(
    name: SpinnerName,
    options: LiveOptions,
    d: Duration,
    stop: &AtomicBool,
) -> Result<bool> {
    let mut sp = live_spinner(name, options, io::stderr())?;
    sp.run(|| pause(d, stop))
}

/// Vitrine du driver live : texte, couleurs, symbole final, agrandissement,
/// galerie complète.
///
/// Spinners render on stderr, progress messages go to stdout.
///
/// # Errors
/// Returns an error if a spinner cannot be built or a write fails.
pub fn run_demo(fast: bool, config: &PreviewConfig, stop: &AtomicBool) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "\n  === unispin demo ===\n")?;
    out.flush()?;

    // 1. Spinner simple avec texte
    let options = LiveOptions {
        text: config.text.clone(),
        color: Some(config.color.unwrap_or(AnsiColor::Cyan)),
        scale: None,
    };
    if !spin_for(SpinnerName::Helix, options, step(3.0, fast), stop)? {
        return Ok(());
    }
    writeln!(out, "  ✓ Complete\n")?;

    // 2. Tour de quelques spinners colorés
    for (name, color, label) in TOUR {
        let options = LiveOptions {
            text: format!("{label}..."),
            color: Some(color),
            scale: None,
        };
        if !spin_for(name, options, step(2.0, fast), stop)? {
            return Ok(());
        }
        writeln!(out, "  ✓ {label}: done\n")?;
    }
    out.flush()?;

    // 3. start/stop manuels avec symbole final
    let mut sp = LiveSpinner::new(
        SpinnerName::Cascade,
        LiveOptions {
            text: "Deploying to production...".into(),
            color: Some(AnsiColor::Green),
            scale: None,
        },
        io::stderr(),
    )?;
    sp.start()?;
    let completed = pause(step(3.0, fast), stop);
    sp.stop(completed.then_some("✓"))?;
    if !completed {
        return Ok(());
    }

    // 4. Spinner agrandi
    let factor = config.scale.unwrap_or(ScaleFactor::Two);
    writeln!(out, "\n  --- {factor}x scaled spinner ---\n")?;
    out.flush()?;
    let options = LiveOptions {
        text: "Processing...".into(),
        color: Some(AnsiColor::Cyan),
        scale: Some(factor),
    };
    if !spin_for(SpinnerName::Helix, options, step(3.0, fast), stop)? {
        return Ok(());
    }
    writeln!(out, "  ✓ Done\n")?;

    // 5. Galerie
    writeln!(out, "  --- spinner gallery ---\n")?;
    out.flush()?;
    for name in SpinnerName::ALL {
        let options = LiveOptions {
            text: name.as_str().into(),
            color: Some(config.color.unwrap_or(AnsiColor::Cyan)),
            scale: None,
        };
        if !spin_for(name, options, step(1.5, fast), stop)? {
            return Ok(());
        }
        writeln!(out, "  ✓ {name}\n")?;
        out.flush()?;
    }

    writeln!(out, "  === demo complete ===\n")?;
    out.flush()?;
    Ok(())
}
