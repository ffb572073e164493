//! Séquences de contrôle du terminal, émises via crossterm.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveUp, Show};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

/// Masque le curseur.
///
/// # Errors
/// Propagates write errors from `out`.
pub fn hide_cursor(out: &mut impl Write) -> io::Result<()> {
    queue!(out, Hide)?;
    out.flush()
}

/// Réaffiche le curseur.
///
/// # Errors
/// Propagates write errors from `out`.
pub fn show_cursor(out: &mut impl Write) -> io::Result<()> {
    queue!(out, Show)?;
    out.flush()
}

/// Efface les `lines` dernières lignes écrites, curseur laissé en colonne 0
/// de la première.
///
/// Does not flush; the caller writes the next frame right after.
///
/// # Errors
/// Propagates write errors from `out`.
///
/// # Example
/// ```
/// let mut out = Vec::new();
/// ua_live::term::clear_rendered(&mut out, 2).unwrap();
/// assert_eq!(out, b"\r\x1b[2K\x1b[1A\r\x1b[2K");
/// ```
pub fn clear_rendered(out: &mut impl Write, lines: usize) -> io::Result<()> {
    for i in 0..lines {
        out.write_all(b"\r")?;
        queue!(out, Clear(ClearType::CurrentLine))?;
        if i + 1 < lines {
            queue!(out, MoveUp(1))?;
        }
    }
    Ok(())
}
