use ua_core::error::DecodeError;

use crate::grid::{CELL_COLS, CELL_ROWS, DotGrid};

/// Braille base codepoint (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;
/// Dernier codepoint du bloc braille (U+28FF).
pub const BRAILLE_LAST: u32 = 0x28FF;

/// Bit value of each dot position, indexed `[row][col]`.
///
/// Braille dot numbering:
/// ```text
///  1 4      0x01 0x08
///  2 5      0x02 0x10
///  3 6      0x04 0x20
///  7 8      0x40 0x80
/// ```
///
/// Dots 7 and 8 were added after the 6-dot layout, hence the bottom row
/// taking the two high bits instead of following the columns.
pub const DOT_BITS: [[u8; CELL_COLS]; CELL_ROWS] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Map un masque 8 bits vers le caractère braille `U+2800 + mask`.
///
/// # Example
/// ```
/// use ua_braille::codec::braille_char;
/// assert_eq!(braille_char(0x00), '\u{2800}');
/// assert_eq!(braille_char(0xFF), '\u{28FF}');
/// ```
#[must_use]
#[inline]
pub const fn braille_char(mask: u8) -> char {
    // Le bloc braille couvre exactement les 256 masques possibles.
    match char::from_u32(BRAILLE_BASE + mask as u32) {
        Some(c) => c,
        None => ' ',
    }
}

/// Masque de points d'un caractère braille, `None` hors du bloc U+2800..=U+28FF.
///
/// # Example
/// ```
/// use ua_braille::codec::braille_mask;
/// assert_eq!(braille_mask('\u{2880}'), Some(0x80));
/// assert_eq!(braille_mask('a'), None);
/// ```
#[must_use]
#[inline]
pub fn braille_mask(ch: char) -> Option<u8> {
    let code = u32::from(ch);
    if (BRAILLE_BASE..=BRAILLE_LAST).contains(&code) {
        u8::try_from(code - BRAILLE_BASE).ok()
    } else {
        None
    }
}

/// Encode a 4×2 dot block into one braille character.
///
/// # Example
/// ```
/// use ua_braille::codec::encode_cell;
/// let mut dots = [[false; 2]; 4];
/// dots[0][0] = true;
/// assert_eq!(encode_cell(dots), '⠁');
/// ```
#[must_use]
pub fn encode_cell(dots: [[bool; CELL_COLS]; CELL_ROWS]) -> char {
    let mut mask = 0u8;
    for (row, bits) in dots.iter().zip(DOT_BITS.iter()) {
        for (&on, &bit) in row.iter().zip(bits.iter()) {
            if on {
                mask |= bit;
            }
        }
    }
    braille_char(mask)
}

/// Decode one braille character into its 4×2 dot block.
///
/// Returns `None` for characters outside the braille block.
#[must_use]
pub fn decode_cell(ch: char) -> Option<[[bool; CELL_COLS]; CELL_ROWS]> {
    let mask = braille_mask(ch)?;
    let mut dots = [[false; CELL_COLS]; CELL_ROWS];
    for (row, bits) in dots.iter_mut().zip(DOT_BITS.iter()) {
        for (dot, &bit) in row.iter_mut().zip(bits.iter()) {
            *dot = mask & bit != 0;
        }
    }
    Some(dots)
}

/// Masque de la cellule `(cell_row, cell_col)` d'une grille.
#[inline]
fn cell_mask(grid: &DotGrid, cell_row: usize, cell_col: usize) -> u8 {
    let base_r = cell_row * CELL_ROWS;
    let base_c = cell_col * CELL_COLS;
    let mut mask = 0u8;
    for (dr, bits) in DOT_BITS.iter().enumerate() {
        for (dc, &bit) in bits.iter().enumerate() {
            if grid.get(base_r + dr, base_c + dc) {
                mask |= bit;
            }
        }
    }
    mask
}

/// Encode a whole grid as braille text.
///
/// Cells are visited row-major; the cells of one cell-row are concatenated
/// and cell-rows are joined with `\n`. A 4×2 grid yields exactly one char.
///
/// # Example
/// ```
/// use ua_braille::{grid_to_braille, make_grid};
/// let mut grid = make_grid(8, 4).unwrap();
/// grid.set(0, 0, true);
/// grid.set(7, 3, true);
/// assert_eq!(grid_to_braille(&grid), "\u{2801}\u{2800}\n\u{2800}\u{2880}");
/// ```
#[must_use]
pub fn grid_to_braille(grid: &DotGrid) -> String {
    let cell_rows = grid.cell_rows();
    let cell_cols = grid.cell_cols();
    // 3 octets UTF-8 par caractère braille + un saut de ligne par ligne.
    let mut out = String::with_capacity(cell_rows * (cell_cols * 3 + 1));
    for cr in 0..cell_rows {
        if cr > 0 {
            out.push('\n');
        }
        for cc in 0..cell_cols {
            out.push(braille_char(cell_mask(grid, cr, cc)));
        }
    }
    out
}

/// Découpe sur `\n`, `\r\n` et `\r` seul, sans ligne vide finale.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator('\n').flat_map(|line| {
        line.strip_suffix('\r').unwrap_or(line).split('\r')
    })
}

/// Decode braille text (one or more lines) into a dot grid.
///
/// Lines may end with `\n`, `\r\n` or a lone `\r`.
///
/// # Errors
/// - [`DecodeError::EmptyBlock`] for empty input or an empty first line.
/// - [`DecodeError::RaggedBlock`] if lines have different lengths.
/// - [`DecodeError::NotBraille`] for any character outside U+2800..=U+28FF.
///
/// # Example
/// ```
/// use ua_braille::braille_to_grid;
/// let grid = braille_to_grid("⣿").unwrap();
/// assert_eq!((grid.rows(), grid.cols()), (4, 2));
/// assert_eq!(grid.count_on(), 8);
/// ```
pub fn braille_to_grid(text: &str) -> Result<DotGrid, DecodeError> {
    let lines: Vec<Vec<char>> = split_lines(text).map(|l| l.chars().collect()).collect();
    let width = lines.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(DecodeError::EmptyBlock);
    }

    let mut grid = DotGrid::new(lines.len() * CELL_ROWS, width * CELL_COLS)
        .map_err(|_| DecodeError::EmptyBlock)?;

    for (line_idx, line) in lines.iter().enumerate() {
        if line.len() != width {
            return Err(DecodeError::RaggedBlock {
                line: line_idx,
                expected: width,
                found: line.len(),
            });
        }
        for (col_idx, &ch) in line.iter().enumerate() {
            let dots = decode_cell(ch).ok_or(DecodeError::NotBraille {
                ch,
                line: line_idx,
                column: col_idx,
            })?;
            for (dr, row) in dots.iter().enumerate() {
                for (dc, &on) in row.iter().enumerate() {
                    if on {
                        grid.set(line_idx * CELL_ROWS + dr, col_idx * CELL_COLS + dc, true);
                    }
                }
            }
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::make_grid;

    fn single_dot(row: usize, col: usize) -> String {
        let mut g = make_grid(4, 2).unwrap();
        g.set(row, col, true);
        grid_to_braille(&g)
    }

    #[test]
    fn blank_and_full_cells() {
        assert_eq!(grid_to_braille(&make_grid(4, 2).unwrap()), "\u{2800}");
        let full = DotGrid::from_fn(4, 2, |_, _| true).unwrap();
        assert_eq!(grid_to_braille(&full), "\u{28FF}");
    }

    #[test]
    fn individual_dots_follow_braille_numbering() {
        assert_eq!(single_dot(0, 0), "\u{2801}"); // dot 1
        assert_eq!(single_dot(1, 0), "\u{2802}"); // dot 2
        assert_eq!(single_dot(2, 0), "\u{2804}"); // dot 3
        assert_eq!(single_dot(0, 1), "\u{2808}"); // dot 4
        assert_eq!(single_dot(1, 1), "\u{2810}"); // dot 5
        assert_eq!(single_dot(2, 1), "\u{2820}"); // dot 6
        assert_eq!(single_dot(3, 0), "\u{2840}"); // dot 7
        assert_eq!(single_dot(3, 1), "\u{2880}"); // dot 8
    }

    #[test]
    fn multiple_characters_on_one_line() {
        let mut g = make_grid(4, 4).unwrap();
        g.set(0, 0, true);
        g.set(0, 2, true);
        assert_eq!(grid_to_braille(&g), "\u{2801}\u{2801}");
    }

    #[test]
    fn tall_grid_is_multiline() {
        let g = make_grid(12, 2).unwrap();
        assert_eq!(grid_to_braille(&g), "\u{2800}\n\u{2800}\n\u{2800}");
    }

    #[test]
    fn decode_blank_char() {
        let g = braille_to_grid("\u{2800}").unwrap();
        assert_eq!((g.rows(), g.cols()), (4, 2));
        assert_eq!(g.count_on(), 0);
    }

    #[test]
    fn decode_places_cells_by_line_and_column() {
        let g = braille_to_grid("\u{2800}\u{2801}\n\u{2880}\u{2800}").unwrap();
        assert_eq!((g.rows(), g.cols()), (8, 4));
        assert!(g.get(0, 2));
        assert!(g.get(7, 1));
        assert_eq!(g.count_on(), 2);
    }

    #[test]
    fn roundtrip_single_cell() {
        let mut g = make_grid(4, 2).unwrap();
        g.set(0, 0, true);
        g.set(2, 1, true);
        assert_eq!(braille_to_grid(&grid_to_braille(&g)).unwrap(), g);
    }

    #[test]
    fn roundtrip_multiline() {
        let mut g = make_grid(8, 4).unwrap();
        g.set(0, 0, true);
        g.set(3, 3, true);
        g.set(4, 1, true);
        g.set(7, 2, true);
        let text = grid_to_braille(&g);
        assert!(text.contains('\n'));
        assert_eq!(braille_to_grid(&text).unwrap(), g);
    }

    #[test]
    fn every_mask_roundtrips() {
        for mask in 0..=u8::MAX {
            let ch = braille_char(mask);
            assert_eq!(braille_mask(ch), Some(mask));
            let dots = decode_cell(ch).unwrap();
            assert_eq!(encode_cell(dots), ch, "mask {mask:#04x}");
        }
    }

    #[test]
    fn non_braille_rejected() {
        assert_eq!(
            braille_to_grid("a"),
            Err(DecodeError::NotBraille { ch: 'a', line: 0, column: 0 })
        );
        assert_eq!(
            braille_to_grid("\u{2801}\u{2801}\n\u{2801}x"),
            Err(DecodeError::NotBraille { ch: 'x', line: 1, column: 1 })
        );
    }

    #[test]
    fn ragged_block_rejected() {
        assert_eq!(
            braille_to_grid("\u{2801}\u{2801}\n\u{2801}"),
            Err(DecodeError::RaggedBlock { line: 1, expected: 2, found: 1 })
        );
    }

    #[test]
    fn carriage_returns_split_lines() {
        let expected = braille_to_grid("\u{2801}\n\u{2880}").unwrap();
        assert_eq!(braille_to_grid("\u{2801}\r\u{2880}").unwrap(), expected);
        assert_eq!(braille_to_grid("\u{2801}\r\n\u{2880}").unwrap(), expected);
        assert_eq!(braille_to_grid("\u{2801}\r\n\u{2880}\r\n").unwrap(), expected);
        assert_eq!((expected.rows(), expected.cols()), (8, 2));
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        let g = braille_to_grid("\u{2801}\n").unwrap();
        assert_eq!((g.rows(), g.cols()), (4, 2));
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(braille_to_grid(""), Err(DecodeError::EmptyBlock));
    }
}
