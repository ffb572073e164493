// Architecture :
//   - `LiveSpinner::start` : fallback texte hors TTY, sinon spawn du worker
//   - `spin_loop`          : thread dédié, possède le flux tant qu'il tourne
//   - `LiveSpinner::stop`  : Quit → join → nettoyage → symbole final
//
// Le flux est déplacé dans le worker puis rendu au join : aucune écriture
// concurrente possible, et rien n'est écrit après le retour de `stop`.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use flume::{Receiver, RecvTimeoutError, Sender};
use ua_braille::registry::SpinnerName;
use ua_braille::scale::scale;
use ua_core::color::AnsiColor;
use ua_core::error::CoreError;
use ua_core::spinner::{ScaleFactor, Spinner};
use ua_core::traits::TermStream;

use crate::render::{format_frame, line_count};
use crate::term;

/// Commandes envoyées au worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Arrêter l'animation avant la prochaine écriture.
    Quit,
}

/// Spinner intégré ou personnalisé.
#[derive(Debug, Clone, Copy)]
pub enum SpinnerSource<'a> {
    Named(SpinnerName),
    Custom(&'a Spinner),
}

impl From<SpinnerName> for SpinnerSource<'_> {
    fn from(name: SpinnerName) -> Self {
        Self::Named(name)
    }
}

impl<'a> From<&'a Spinner> for SpinnerSource<'a> {
    fn from(spinner: &'a Spinner) -> Self {
        Self::Custom(spinner)
    }
}

/// Options d'affichage d'un [`LiveSpinner`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveOptions {
    /// Texte affiché à droite de la première ligne.
    pub text: String,
    /// Couleur des frames, appliquée seulement sur un TTY.
    pub color: Option<AnsiColor>,
    /// Agrandissement appliqué une fois, à la construction.
    pub scale: Option<ScaleFactor>,
}

impl LiveOptions {
    /// Options with only a text.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

struct Worker<W> {
    cmd_tx: Sender<Command>,
    handle: thread::JoinHandle<(W, usize)>,
}

/// Spinner animé dans un thread de fond.
///
/// On a TTY, `start` spawns one worker that redraws the current frame every
/// interval until `stop`. On any other stream, `start` prints the text once
/// and no thread runs. Dropping a running spinner stops it.
///
/// # Example
/// ```
/// use ua_braille::SpinnerName;
/// use ua_live::{LiveOptions, LiveSpinner};
///
/// // stderr n'est pas un TTY sous `cargo test` : fallback texte.
/// let mut sp = LiveSpinner::new(
///     SpinnerName::Helix,
///     LiveOptions::with_text("Chargement..."),
///     std::io::stderr(),
/// )
/// .unwrap();
/// sp.start().unwrap();
/// sp.stop(Some("✓")).unwrap();
/// ```
pub struct LiveSpinner<W: TermStream> {
    spinner: Spinner,
    text: String,
    color: Option<AnsiColor>,
    tty: bool,
    stream: Option<W>,
    worker: Option<Worker<W>>,
}

impl<W: TermStream> LiveSpinner<W> {
    /// Construit un driver sur `stream`.
    ///
    /// # Errors
    /// Returns the scaler's [`CoreError`] when `options.scale` is set and a
    /// frame cannot be decoded.
    pub fn new<'a>(
        source: impl Into<SpinnerSource<'a>>,
        options: LiveOptions,
        stream: W,
    ) -> Result<Self, CoreError> {
        let base: &Spinner = match source.into() {
            SpinnerSource::Named(name) => name.spinner(),
            SpinnerSource::Custom(spinner) => spinner,
        };
        let spinner = match options.scale {
            Some(factor) => scale(base, factor)?,
            None => base.clone(),
        };
        let tty = stream.is_tty();
        log::debug!(
            "LiveSpinner : {} frames, {}ms, tty={tty}",
            spinner.len(),
            spinner.interval_ms()
        );
        Ok(Self {
            spinner,
            text: options.text,
            color: options.color,
            tty,
            stream: Some(stream),
            worker: None,
        })
    }

    /// Spinner effectivement animé (après agrandissement).
    #[must_use]
    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// Texte affiché à côté des frames.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `true` tant qu'un worker anime le spinner.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Démarre l'animation.
    ///
    /// Idempotent while running. Off a TTY, writes `text` once (nothing if
    /// empty) and returns without spawning.
    ///
    /// # Errors
    /// Returns an error if the fallback write fails or the worker thread
    /// cannot be spawned.
    pub fn start(&mut self) -> Result<()> {
        if self.worker.is_some() {
            return Ok(());
        }

        if !self.tty {
            if self.text.is_empty() {
                return Ok(());
            }
            let Some(stream) = self.stream.as_mut() else {
                log::warn!("LiveSpinner : flux perdu, start ignoré");
                return Ok(());
            };
            writeln!(stream, "{}", self.text).context("Écriture du texte impossible")?;
            stream.flush().context("Flush du flux impossible")?;
            return Ok(());
        }

        let Some(stream) = self.stream.take() else {
            log::warn!("LiveSpinner : flux perdu, start ignoré");
            return Ok(());
        };

        // Frames mises en forme une seule fois : la boucle ne fait qu'écrire.
        let frames: Vec<String> = self
            .spinner
            .frames()
            .iter()
            .map(|f| format_frame(f, &self.text, self.color, true))
            .collect();
        let interval = self.spinner.interval();
        let (cmd_tx, cmd_rx) = flume::bounded(1);

        let handle = thread::Builder::new()
            .name("ua-spinner".to_string())
            .spawn(move || spin_loop(stream, &frames, interval, &cmd_rx))
            .context("Impossible de spawner le thread du spinner")?;

        self.worker = Some(Worker { cmd_tx, handle });
        log::debug!("LiveSpinner démarré");
        Ok(())
    }

    /// Arrête l'animation et affiche éventuellement un symbole final.
    ///
    /// With a non-empty `symbol`, writes `"{symbol} {text}\n"` (or just the
    /// symbol when the text is empty) where the spinner was. No-op when not
    /// running. The spinner can be started again afterwards.
    ///
    /// # Errors
    /// Returns an error if the worker panicked or the final writes fail.
    pub fn stop(&mut self, symbol: Option<&str>) -> Result<()> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };

        // Le worker a pu sortir seul sur erreur d'écriture : canal fermé.
        worker.cmd_tx.send(Command::Quit).ok();
        let (mut stream, rendered) = worker
            .handle
            .join()
            .map_err(|_| anyhow!("Le thread du spinner a paniqué"))?;

        let result = finish(&mut stream, rendered, symbol, &self.text);
        self.stream = Some(stream);
        log::debug!("LiveSpinner arrêté");
        result
    }

    /// Exécute `f` pendant que le spinner tourne, puis l'arrête sans symbole.
    ///
    /// # Errors
    /// Propagates errors from [`start`](Self::start) and [`stop`](Self::stop).
    pub fn run<R>(&mut self, f: impl FnOnce() -> R) -> Result<R> {
        self.start()?;
        let out = f();
        self.stop(None)?;
        Ok(out)
    }
}

impl<W: TermStream> Drop for LiveSpinner<W> {
    fn drop(&mut self) {
        if let Err(e) = self.stop(None) {
            log::warn!("LiveSpinner : arrêt au drop échoué : {e}");
        }
    }
}

/// Raccourci pour [`LiveSpinner::new`].
///
/// # Errors
/// See [`LiveSpinner::new`].
pub fn live_spinner<'a, W: TermStream>(
    source: impl Into<SpinnerSource<'a>>,
    options: LiveOptions,
    stream: W,
) -> Result<LiveSpinner<W>, CoreError> {
    LiveSpinner::new(source, options, stream)
}

/// Boucle du worker. Rend le flux et le nombre de lignes affichées.
fn spin_loop<W: Write>(
    mut stream: W,
    frames: &[String],
    interval: Duration,
    cmd_rx: &Receiver<Command>,
) -> (W, usize) {
    let mut rendered = 0;
    if let Err(e) = term::hide_cursor(&mut stream) {
        log::warn!("Spinner : masquage du curseur impossible : {e}");
    }

    for frame in frames.iter().cycle() {
        let written = term::clear_rendered(&mut stream, rendered)
            .and_then(|()| stream.write_all(frame.as_bytes()))
            .and_then(|()| stream.flush());
        if let Err(e) = written {
            log::warn!("Spinner : écriture impossible, arrêt de l'animation : {e}");
            break;
        }
        rendered = line_count(frame);

        match cmd_rx.recv_timeout(interval) {
            Ok(Command::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
    (stream, rendered)
}

/// Nettoyage après le join : efface, symbole, curseur.
fn finish<W: Write>(
    stream: &mut W,
    rendered: usize,
    symbol: Option<&str>,
    text: &str,
) -> Result<()> {
    term::clear_rendered(stream, rendered).context("Effacement du spinner impossible")?;
    if let Some(symbol) = symbol.filter(|s| !s.is_empty()) {
        if text.is_empty() {
            writeln!(stream, "{symbol}")?;
        } else {
            writeln!(stream, "{symbol} {text}")?;
        }
    }
    term::show_cursor(stream).context("Restauration du curseur impossible")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_stops_on_quit_and_reports_lines() {
        let (tx, rx) = flume::bounded(1);
        tx.send(Command::Quit).unwrap();
        let frames = vec!["⠁\n⠂ x".to_string()];
        let (out, rendered) = spin_loop(Vec::new(), &frames, Duration::from_secs(5), &rx);
        assert_eq!(rendered, 2);
        let s = String::from_utf8(out).unwrap();
        assert_eq!(s, "\x1b[?25l⠁\n⠂ x");
    }

    #[test]
    fn loop_stops_when_sender_dropped() {
        let (tx, rx) = flume::bounded::<Command>(1);
        drop(tx);
        let frames = vec!["⠁".to_string()];
        let (_, rendered) = spin_loop(Vec::new(), &frames, Duration::from_secs(5), &rx);
        assert_eq!(rendered, 1);
    }

    #[test]
    fn finish_writes_symbol_then_cursor() {
        let mut out = Vec::new();
        finish(&mut out, 1, Some("✓"), "Terminé").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\r\x1b[2K✓ Terminé\n\x1b[?25h"
        );
    }

    #[test]
    fn finish_without_text_or_symbol() {
        let mut out = Vec::new();
        finish(&mut out, 0, Some("✓"), "").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "✓\n\x1b[?25h");

        let mut out = Vec::new();
        finish(&mut out, 0, Some(""), "x").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[?25h");
    }
}
