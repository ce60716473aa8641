//! Module matrix and finder region geometry.
//!
//! A [`ModuleMatrix`] is the square grid of dark (`true`) and light (`false`) cells that the
//! renderer walks. It is produced once by a matrix source and never mutated by rendering.

use core::str::FromStr;

use crate::error::{RenderError, Result};

/// Width and height, in cells, of each of the three corner finder blocks.
pub const FINDER_SIZE: usize = 7;

/// The standard locator pattern stamped into each finder block: a dark outer ring, a light
/// ring, and a dark 3×3 core.
const FINDER_PATTERN: [[bool; FINDER_SIZE]; FINDER_SIZE] = {
    const X: bool = true;
    const O: bool = false;
    [
        [X, X, X, X, X, X, X],
        [X, O, O, O, O, O, X],
        [X, O, X, X, X, O, X],
        [X, O, X, X, X, O, X],
        [X, O, X, X, X, O, X],
        [X, O, O, O, O, O, X],
        [X, X, X, X, X, X, X],
    ]
};

/// Returns whether `(row, col)` lies in one of the three 7×7 corner finder blocks of an
/// `n`×`n` matrix (top-left, top-right, bottom-left).
///
/// The predicate is purely geometric and does not look at matrix contents. The blocks never
/// overlap for `n >= 14`.
pub fn is_finder(row: usize, col: usize, n: usize) -> bool {
    let far = n.saturating_sub(FINDER_SIZE);
    (row < FINDER_SIZE && col < FINDER_SIZE)
        || (row < FINDER_SIZE && col >= far)
        || (row >= far && col < FINDER_SIZE)
}

/// An immutable N×N grid of boolean modules.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Creates an all-light matrix of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::EmptyMatrix`] when `size` is zero and
    /// [`RenderError::MatrixTooLarge`] when `size * size` overflows.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(RenderError::EmptyMatrix);
        }
        let cells = size
            .checked_mul(size)
            .ok_or(RenderError::MatrixTooLarge(size))?;
        Ok(Self {
            size,
            modules: vec![false; cells],
        })
    }

    /// Builds a matrix from rows of cells, checking that every row is as long as there are rows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qrstyle::matrix::ModuleMatrix;
    ///
    /// let m = ModuleMatrix::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
    /// assert_eq!(m.size(), 2);
    /// assert!(m.get(1, 1));
    /// ```
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let expected = rows.len();
        if expected == 0 {
            return Err(RenderError::EmptyMatrix);
        }
        let mut modules = Vec::with_capacity(expected * expected);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != expected {
                return Err(RenderError::NonSquareMatrix {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
            modules.extend(cells);
        }
        Ok(Self {
            size: expected,
            modules,
        })
    }

    /// Creates a light matrix with the standard locator pattern stamped into the three corners.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::EmptyMatrix`] when `size` is zero.
    pub fn with_finder_patterns(size: usize) -> Result<Self> {
        let mut matrix = Self::new(size)?;
        let far = size.saturating_sub(FINDER_SIZE);
        for (top, left) in [(0, 0), (0, far), (far, 0)] {
            for (dr, line) in FINDER_PATTERN.iter().enumerate() {
                for (dc, &dark) in line.iter().enumerate() {
                    matrix.set(top + dr, left + dc, dark);
                }
            }
        }
        Ok(matrix)
    }

    /// Returns the dimension N of this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the module at the given coordinates.
    ///
    /// Coordinates outside the matrix return `false`.
    ///
    /// # Arguments
    ///
    /// * `row` - Row index (0 is top).
    /// * `col` - Column index (0 is left).
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.modules[row * self.size + col]
    }

    /// Sets the module at the given coordinates. Coordinates outside the matrix are ignored.
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        if row < self.size && col < self.size {
            self.modules[row * self.size + col] = dark;
        }
    }

    /// Returns whether `(row, col)` is a finder cell of this matrix.
    pub fn is_finder(&self, row: usize, col: usize) -> bool {
        is_finder(row, col, self.size)
    }

    /// Number of dark modules.
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&dark| dark).count()
    }

    /// Iterates dark modules in row-major order as `(row, col)`.
    pub fn dark_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, &dark)| dark)
            .map(move |(index, _)| (index / size, index % size))
    }
}

/// Parses a textual grid: one row per line, `#` or `1` for dark, anything else (`.`, `0`, a
/// space) for light. Empty lines are skipped and a trailing `\r` is dropped; spaces are cells.
impl FromStr for ModuleMatrix {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<Vec<bool>> = s
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| c == '#' || c == '1').collect())
            .collect();
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finder_regions_cover_three_corners() {
        assert!(is_finder(0, 0, 25));
        assert!(is_finder(6, 6, 25));
        assert!(is_finder(0, 18, 25));
        assert!(is_finder(18, 0, 25));
        assert!(!is_finder(7, 7, 25));
        assert!(!is_finder(18, 18, 25));
        assert!(!is_finder(24, 24, 25));
        assert!(!is_finder(0, 17, 25));
    }

    #[test]
    fn test_finder_region_cell_count() {
        let n = 25;
        let count = (0..n)
            .flat_map(|r| (0..n).map(move |c| (r, c)))
            .filter(|&(r, c)| is_finder(r, c, n))
            .count();
        assert_eq!(count, 3 * FINDER_SIZE * FINDER_SIZE);
    }

    #[test]
    fn test_with_finder_patterns() {
        let m = ModuleMatrix::with_finder_patterns(25).unwrap();
        // 24 ring cells + 9 core cells per block
        assert_eq!(m.dark_count(), 3 * 33);
        assert!(m.get(0, 0));
        assert!(!m.get(1, 1));
        assert!(m.get(3, 3));
        assert!(m.get(0, 24));
        assert!(m.get(24, 0));
        assert!(!m.get(24, 24));
        assert!(m.dark_cells().all(|(r, c)| m.is_finder(r, c)));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = ModuleMatrix::with_finder_patterns(21).unwrap();
        assert!(!m.get(21, 0));
        assert!(!m.get(0, 100));
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert!(matches!(ModuleMatrix::from_rows(vec![]), Err(RenderError::EmptyMatrix)));
        let err = ModuleMatrix::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::NonSquareMatrix { row: 1, len: 1, expected: 2 }
        ));
    }

    #[test]
    fn test_parse_text_grid() {
        let m: ModuleMatrix = "#.1\n\n0#.\r\n..#\n".parse().unwrap();
        assert_eq!(m.size(), 3);
        assert!(m.get(0, 0) && m.get(0, 2) && m.get(1, 1) && m.get(2, 2));
        assert_eq!(m.dark_count(), 4);
        assert_eq!(m.dark_cells().collect::<Vec<_>>(), vec![(0, 0), (0, 2), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_parse_spaces_are_light_cells() {
        let m: ModuleMatrix = "#  \n # \n  #\n".parse().unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.dark_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 2)]);

        let m: ModuleMatrix = "# #\n   \n# #\n".parse().unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.dark_cells().collect::<Vec<_>>(), vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_new_rejects_overflowing_dimension() {
        assert!(matches!(
            ModuleMatrix::new(usize::MAX),
            Err(RenderError::MatrixTooLarge(usize::MAX))
        ));
        assert!(matches!(ModuleMatrix::new(0), Err(RenderError::EmptyMatrix)));
    }
}
