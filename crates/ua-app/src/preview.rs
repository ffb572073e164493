use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ua_braille::registry::{self, SpinnerName};
use ua_braille::scale::scale;
use ua_core::color::AnsiColor;
use ua_core::config::PreviewConfig;
use ua_core::spinner::{ScaleFactor, Spinner};
use ua_live::render::PreviewLayout;
use ua_live::term;

/// Largeur de la colonne des noms dans `list`.
const NAME_COLUMN: usize = 16;

/// Spinner du registre, agrandi si demandé.
fn resolve(name: SpinnerName, factor: Option<ScaleFactor>) -> Result<Cow<'static, Spinner>> {
    let base = name.spinner();
    match factor {
        Some(f) => Ok(Cow::Owned(
            scale(base, f).with_context(|| format!("Agrandissement de {name} impossible"))?,
        )),
        None => Ok(Cow::Borrowed(base)),
    }
}

/// Écrit la liste des spinners avec leur première frame.
///
/// # Errors
/// Returns an error on scaling failure or write failure.
pub fn list(out: &mut impl Write, factor: Option<ScaleFactor>) -> Result<()> {
    for (name, _) in registry::iter() {
        let spinner = resolve(name, factor)?;
        let mut lines = spinner.frames()[0].lines();
        let first = lines.next().unwrap_or("");
        writeln!(out, "  {:<NAME_COLUMN$} {first}", name.as_str())?;
        for line in lines {
            writeln!(out, "  {:<NAME_COLUMN$} {line}", "")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Anime un spinner pendant `config.duration` secondes ou jusqu'à `stop`.
///
/// The cursor is hidden for the whole preview and restored afterwards, even
/// when a write fails midway.
///
/// # Errors
/// Returns an error on scaling failure or write failure.
pub fn preview(
    out: &mut impl Write,
    name: SpinnerName,
    config: &PreviewConfig,
    colorize: bool,
    stop: &AtomicBool,
) -> Result<()> {
    let spinner = resolve(name, config.scale)?;
    let layout = PreviewLayout::new(name.as_str(), &spinner);
    let color = config.color.filter(|_| colorize);
    let deadline = Instant::now() + Duration::from_secs_f64(config.duration);
    log::debug!("Aperçu {name} : {:.1}s", config.duration);

    term::hide_cursor(out)?;
    let mut rendered = 0;
    let animated = animate(
        out,
        &layout,
        color,
        spinner.interval(),
        deadline,
        stop,
        &mut rendered,
    );

    // Restauration TOUJOURS, même si l'animation a échoué.
    term::clear_rendered(out, rendered)?;
    term::show_cursor(out)?;
    writeln!(out)?;
    out.flush()?;
    animated.context("Écriture de l'aperçu impossible")
}

fn animate(
    out: &mut impl Write,
    layout: &PreviewLayout,
    color: Option<AnsiColor>,
    interval: Duration,
    deadline: Instant,
    stop: &AtomicBool,
    rendered: &mut usize,
) -> io::Result<()> {
    let mut index = 0;
    while Instant::now() < deadline && !stop.load(Ordering::Relaxed) {
        term::clear_rendered(out, *rendered)?;
        out.write_all(layout.render(index, color).as_bytes())?;
        out.flush()?;
        *rendered = layout.height();
        thread::sleep(interval);
        index += 1;
    }
    Ok(())
}

/// Prévisualise tous les spinners dans l'ordre du registre.
///
/// # Errors
/// See [`preview`].
pub fn preview_all(
    out: &mut impl Write,
    config: &PreviewConfig,
    colorize: bool,
    stop: &AtomicBool,
) -> Result<()> {
    for name in SpinnerName::ALL {
        if stop.load(Ordering::Relaxed) {
            break;
        }
        preview(out, name, config, colorize, stop)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn list_aligns_names() {
        let mut out = Vec::new();
        list(&mut out, None).unwrap();
        let s = text(out);
        assert_eq!(s.lines().count(), 18);
        assert!(s.starts_with("  braille          \u{280b}\n"));
        assert!(s.contains("\n  helix            \u{288c}\u{28c9}\u{288e}\u{28c9}\n"));
    }

    #[test]
    fn scaled_list_indents_continuation_lines() {
        let mut out = Vec::new();
        list(&mut out, Some(ScaleFactor::Two)).unwrap();
        let s = text(out);
        assert_eq!(s.lines().count(), 36);
        let continuation = format!("  {:<16} ", "");
        assert!(s.lines().nth(1).unwrap().starts_with(&continuation));
    }

    #[test]
    fn preview_hides_then_restores_cursor() {
        let config = PreviewConfig {
            duration: 0.1,
            ..PreviewConfig::default()
        };
        let mut out = Vec::new();
        preview(&mut out, SpinnerName::Braille, &config, false, &AtomicBool::new(false)).unwrap();
        let s = text(out);
        assert!(s.starts_with("\x1b[?25l  braille: \u{280b}"));
        assert!(s.ends_with("\x1b[?25h\n"));
    }

    #[test]
    fn preview_color_only_when_colorized() {
        let config = PreviewConfig {
            duration: 0.1,
            color: Some(AnsiColor::Magenta),
            ..PreviewConfig::default()
        };
        let mut plain = Vec::new();
        preview(&mut plain, SpinnerName::Dna, &config, false, &AtomicBool::new(false)).unwrap();
        assert!(!text(plain).contains("\x1b[35m"));

        let mut colored = Vec::new();
        preview(&mut colored, SpinnerName::Dna, &config, true, &AtomicBool::new(false)).unwrap();
        assert!(text(colored).contains("  dna: \x1b[35m"));
    }

    #[test]
    fn interrupted_preview_draws_nothing() {
        let mut out = Vec::new();
        let stop = AtomicBool::new(true);
        preview_all(&mut out, &PreviewConfig::default(), false, &stop).unwrap();
        assert!(out.is_empty());

        preview(&mut out, SpinnerName::Pulse, &PreviewConfig::default(), false, &stop).unwrap();
        assert_eq!(text(out), "\x1b[?25l\x1b[?25h\n");
    }
}
