use std::fmt;

use ua_core::error::ValidationError;

/// Hauteur d'une cellule braille, en points.
pub const CELL_ROWS: usize = 4;
/// Largeur d'une cellule braille, en points.
pub const CELL_COLS: usize = 2;

/// Matrice de points booléens, row-major.
///
/// Invariant : `rows` est un multiple non nul de 4 et `cols` un multiple non
/// nul de 2, donc la grille se découpe exactement en cellules braille.
///
/// # Example
/// ```
/// use ua_braille::grid::DotGrid;
/// let mut grid = DotGrid::new(4, 8).unwrap();
/// grid.set(0, 3, true);
/// assert!(grid.get(0, 3));
/// assert_eq!(grid.count_on(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DotGrid {
    dots: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl DotGrid {
    /// All-`false` grid of `rows × cols` dots.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidDimensions`] unless `rows` is a
    /// positive multiple of 4 and `cols` a positive multiple of 2.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ValidationError> {
        if rows == 0 || cols == 0 || rows % CELL_ROWS != 0 || cols % CELL_COLS != 0 {
            return Err(ValidationError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            dots: vec![false; rows * cols],
            rows,
            cols,
        })
    }

    /// Grid whose dot `(r, c)` is `f(r, c)`.
    ///
    /// # Errors
    /// Same dimension rules as [`DotGrid::new`].
    ///
    /// # Example
    /// ```
    /// use ua_braille::grid::DotGrid;
    /// let diag = DotGrid::from_fn(4, 4, |r, c| r == c).unwrap();
    /// assert_eq!(diag.count_on(), 4);
    /// ```
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self, ValidationError> {
        let mut grid = Self::new(rows, cols)?;
        for r in 0..rows {
            for c in 0..cols {
                grid.dots[r * cols + c] = f(r, c);
            }
        }
        Ok(grid)
    }

    /// Build without dimension checks, for callers that derive valid
    /// dimensions from an existing grid.
    pub(crate) fn build(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        debug_assert!(rows % CELL_ROWS == 0 && cols % CELL_COLS == 0 && rows > 0 && cols > 0);
        let mut dots = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                dots.push(f(r, c));
            }
        }
        Self { dots, rows, cols }
    }

    /// Nombre de lignes de points.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Nombre de colonnes de points.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Nombre de lignes de cellules braille (lignes de texte).
    #[inline]
    #[must_use]
    pub fn cell_rows(&self) -> usize {
        self.rows / CELL_ROWS
    }

    /// Nombre de cellules braille par ligne de texte.
    #[inline]
    #[must_use]
    pub fn cell_cols(&self) -> usize {
        self.cols / CELL_COLS
    }

    /// Dot at `(row, col)`. Out-of-range positions read as `false`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.dots[row * self.cols + col]
    }

    /// Set dot at `(row, col)`. Out-of-range positions are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, on: bool) {
        debug_assert!(row < self.rows && col < self.cols, "dot out of bounds");
        if row < self.rows && col < self.cols {
            self.dots[row * self.cols + col] = on;
        }
    }

    /// Set every dot to `on`.
    pub fn fill(&mut self, on: bool) {
        self.dots.fill(on);
    }

    /// Nombre de points allumés.
    #[must_use]
    pub fn count_on(&self) -> usize {
        self.dots.iter().filter(|&&d| d).count()
    }

    /// Rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.dots.chunks_exact(self.cols)
    }
}

/// Convenience alias matching the codec vocabulary.
///
/// # Errors
/// See [`DotGrid::new`].
///
/// # Example
/// ```
/// use ua_braille::grid::make_grid;
/// assert!(make_grid(4, 2).is_ok());
/// assert!(make_grid(3, 2).is_err());
/// ```
pub fn make_grid(rows: usize, cols: usize) -> Result<DotGrid, ValidationError> {
    DotGrid::new(rows, cols)
}

impl fmt::Debug for DotGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DotGrid {}×{}", self.rows, self.cols)?;
        for row in self.iter_rows() {
            let line: String = row.iter().map(|&d| if d { '#' } else { '.' }).collect();
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
