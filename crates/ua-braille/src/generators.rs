//! Générateurs procéduraux des animations braille.
//!
//! Chaque générateur dessine ses frames sur une [`DotGrid`] puis les encode
//! avec [`grid_to_braille`]. Toutes les frames d'un générateur ont la même
//! taille de grille.

use std::f64::consts::PI;

use crate::codec::grid_to_braille;
use crate::grid::DotGrid;

/// Encode une grille `rows × cols` dont le point `(r, c)` vaut `f(r, c)`.
fn frame(rows: usize, cols: usize, f: impl FnMut(usize, usize) -> bool) -> String {
    grid_to_braille(&DotGrid::build(rows, cols, f))
}

/// Rangée de points pour une position sinusoïdale dans `[0, h - 1]`.
#[inline]
fn sine_row(value: f64, h: usize) -> usize {
    ((value + 1.0) / 2.0 * (h - 1) as f64).round_ties_even() as usize
}

/// Deux colonnes pleines qui balaient la grille de gauche à droite.
#[must_use]
pub fn scan() -> Vec<String> {
    let (w, h) = (8_i32, 4);
    (-1..=w)
        .map(|pos| {
            frame(h, w as usize, |_, c| {
                let c = c as i32;
                c == pos || c == pos - 1
            })
        })
        .collect()
}

/// Gouttes qui tombent avec un décalage par colonne.
#[must_use]
pub fn rain() -> Vec<String> {
    const OFFSETS: [usize; 8] = [0, 3, 1, 5, 2, 7, 4, 6];
    let (w, h, total) = (8, 4, 12);
    (0..total)
        .map(|f| frame(h, w, |r, c| (f + OFFSETS[c]) % (h + 2) == r))
        .collect()
}

/// Horizontal line bouncing top to bottom with a dotted trail.
#[must_use]
pub fn scanline() -> Vec<String> {
    const POSITIONS: [usize; 6] = [0, 1, 2, 3, 2, 1];
    let (w, h) = (6, 4);
    POSITIONS
        .iter()
        .map(|&row| frame(h, w, |r, c| r == row || (row > 0 && r == row - 1 && c % 2 == 0)))
        .collect()
}

/// Anneau qui s'élargit depuis le centre.
#[must_use]
pub fn pulse() -> Vec<String> {
    const RADII: [f64; 5] = [0.5, 1.2, 2.0, 3.0, 3.5];
    let (w, h) = (6, 4);
    let cx = w as f64 / 2.0 - 0.5;
    let cy = h as f64 / 2.0 - 0.5;
    RADII
        .iter()
        .map(|&radius| {
            frame(h, w, |r, c| {
                let dist = (c as f64 - cx).hypot(r as f64 - cy);
                (dist - radius).abs() < 0.9
            })
        })
        .collect()
}

/// Serpent de 4 points sur un parcours en boustrophédon.
#[must_use]
pub fn snake() -> Vec<String> {
    let (w, h) = (4, 4);
    let mut path = Vec::with_capacity(w * h);
    for r in 0..h {
        if r % 2 == 0 {
            path.extend((0..w).map(|c| (r, c)));
        } else {
            path.extend((0..w).rev().map(|c| (r, c)));
        }
    }
    let len = path.len();
    (0..len)
        .map(|i| {
            let body: Vec<(usize, usize)> = (0..4).map(|t| path[(i + len - t) % len]).collect();
            frame(h, w, |r, c| body.contains(&(r, c)))
        })
        .collect()
}

/// Scintillement pseudo-aléatoire, motifs fixes.
#[must_use]
pub fn sparkle() -> Vec<String> {
    #[rustfmt::skip]
    const PATTERNS: [[u8; 32]; 6] = [
        [1,0,0,1,0,0,1,0, 0,0,1,0,0,1,0,0, 0,1,0,0,1,0,0,1, 1,0,0,0,0,1,0,0],
        [0,1,0,0,1,0,0,1, 1,0,0,1,0,0,0,1, 0,0,0,1,0,1,0,0, 0,0,1,0,1,0,1,0],
        [0,0,1,0,0,1,0,0, 0,1,0,0,0,0,1,0, 1,0,1,0,0,0,0,1, 0,1,0,1,0,0,0,1],
        [1,0,0,0,0,0,1,1, 0,0,1,0,1,0,0,0, 0,0,0,0,1,0,1,0, 1,0,0,1,0,0,1,0],
        [0,0,0,1,1,0,0,0, 0,1,0,0,0,1,0,1, 1,0,0,1,0,0,0,0, 0,1,0,0,0,1,0,1],
        [0,1,1,0,0,0,0,1, 0,0,0,1,0,0,1,0, 0,1,0,0,0,1,0,0, 0,0,1,0,1,0,0,0],
    ];
    let (w, h) = (8, 4);
    PATTERNS
        .iter()
        .map(|pat| frame(h, w, |r, c| pat[r * w + c] == 1))
        .collect()
}

/// Double diagonale qui traverse la grille.
#[must_use]
pub fn cascade() -> Vec<String> {
    let (w, h) = (8_i32, 4_i32);
    (-2..w + h)
        .map(|offset| {
            frame(h as usize, w as usize, |r, c| {
                let diag = (c + r) as i32;
                diag == offset || diag == offset - 1
            })
        })
        .collect()
}

/// Columns filling bottom-up one after the other, then a full and an empty frame.
#[must_use]
pub fn columns() -> Vec<String> {
    let (w, h) = (6, 4);
    let mut frames = Vec::with_capacity(w * h + 2);
    for col in 0..w {
        for fill_to in (0..h).rev() {
            frames.push(frame(h, w, |r, c| c < col || (c == col && r >= fill_to)));
        }
    }
    frames.push(frame(h, w, |_, _| true));
    frames.push(frame(h, w, |_, _| false));
    frames
}

/// Deux points qui tournent autour d'une seule cellule.
#[must_use]
pub fn orbit() -> Vec<String> {
    const PATH: [(usize, usize); 8] = [
        (0, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (3, 1),
        (3, 0),
        (2, 0),
        (1, 0),
    ];
    let len = PATH.len();
    (0..len)
        .map(|i| {
            let head = PATH[i];
            let tail = PATH[(i + len - 1) % len];
            frame(4, 2, |r, c| (r, c) == head || (r, c) == tail)
        })
        .collect()
}

/// Cellule qui se remplit puis se vide, en aller-retour.
#[must_use]
pub fn breathe() -> Vec<String> {
    const STAGES: [&[(usize, usize)]; 9] = [
        &[],
        &[(1, 0)],
        &[(0, 1), (2, 0)],
        &[(0, 0), (1, 1), (3, 0)],
        &[(0, 0), (1, 1), (2, 0), (3, 1)],
        &[(0, 0), (0, 1), (1, 1), (2, 0), (3, 1)],
        &[(0, 0), (0, 1), (1, 0), (2, 1), (3, 0), (3, 1)],
        &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (3, 0), (3, 1)],
        &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1)],
    ];
    STAGES
        .iter()
        .chain(STAGES.iter().rev().skip(1))
        .map(|dots| frame(4, 2, |r, c| dots.contains(&(r, c))))
        .collect()
}

/// Onde sinusoïdale avec une crête clairsemée.
#[must_use]
pub fn waverows() -> Vec<String> {
    let (w, h, total) = (8, 4, 16);
    (0..total)
        .map(|f| {
            let rows: Vec<usize> = (0..w)
                .map(|c| {
                    let phase = f as f64 - c as f64 * 0.5;
                    sine_row((phase * 0.8).sin(), h)
                })
                .collect();
            frame(h, w, |r, c| {
                let row = rows[c];
                r == row || (row > 0 && r == row - 1 && (f + c) % 3 == 0)
            })
        })
        .collect()
}

/// Damier alterné, puis un motif en tiers.
#[must_use]
pub fn checkerboard() -> Vec<String> {
    let (w, h) = (6, 4);
    (0..4)
        .map(|phase| {
            let modulo = if phase < 2 { 2 } else { 3 };
            frame(h, w, |r, c| (r + c + phase) % modulo == 0)
        })
        .collect()
}

/// Double hélice : deux sinusoïdes en opposition de phase.
#[must_use]
pub fn helix() -> Vec<String> {
    let (w, h, total) = (8, 4, 16);
    (0..total)
        .map(|f| {
            let strands: Vec<(usize, usize)> = (0..w)
                .map(|c| {
                    let phase = (f + c) as f64 * (PI / 4.0);
                    (sine_row(phase.sin(), h), sine_row((phase + PI).sin(), h))
                })
                .collect();
            frame(h, w, |r, c| r == strands[c].0 || r == strands[c].1)
        })
        .collect()
}

/// Remplissage par le bas, pause pleine, puis vidage par le haut.
#[must_use]
pub fn fillsweep() -> Vec<String> {
    let (w, h) = (4, 4);
    let mut frames = Vec::with_capacity(2 * h + 3);
    for row in (0..h).rev() {
        frames.push(frame(h, w, |r, _| r >= row));
    }
    frames.push(frame(h, w, |_, _| true));
    frames.push(frame(h, w, |_, _| true));
    for row in 0..h {
        frames.push(frame(h, w, |r, _| r > row));
    }
    frames.push(frame(h, w, |_, _| false));
    frames
}

/// Balayage diagonal qui remplit puis efface la grille.
#[must_use]
pub fn diagswipe() -> Vec<String> {
    let (w, h) = (4, 4);
    let max_diag = w + h - 2;
    let mut frames = Vec::with_capacity(2 * max_diag + 4);
    for d in 0..=max_diag {
        frames.push(frame(h, w, |r, c| r + c <= d));
    }
    frames.push(frame(h, w, |_, _| true));
    for d in 0..=max_diag {
        frames.push(frame(h, w, |r, c| r + c > d));
    }
    frames.push(frame(h, w, |_, _| false));
    frames
}
