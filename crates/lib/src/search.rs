//! Word search over a grid of letters.

use arrayvec::ArrayVec;
use bstr::ByteSlice;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error("row {row} has {actual} columns, but expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// One of the eight directions a word can be read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every direction, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Row and column delta of a single step.
    #[inline]
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// A rectangular grid of letters.
///
/// # Examples
///
/// ```
/// use lib::search::WordSearch;
///
/// let grid = WordSearch::new(b"XMAS\nMMAA\nAAAA\nSAXS\n")?;
/// assert_eq!(grid.count_word(b"XMAS"), 3);
/// # Ok::<_, lib::search::SearchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WordSearch<'a> {
    rows: Vec<&'a [u8]>,
    columns: usize,
}

impl<'a> WordSearch<'a> {
    /// Construct a grid from newline separated rows.
    pub fn new(data: &'a [u8]) -> Result<Self, SearchError> {
        let mut rows = data.lines().collect::<Vec<_>>();

        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        let columns = rows.first().map(|row| row.len()).unwrap_or_default();

        for (row, data) in rows.iter().enumerate() {
            if data.len() != columns {
                return Err(SearchError::RaggedRow {
                    row,
                    expected: columns,
                    actual: data.len(),
                });
            }
        }

        Ok(Self { rows, columns })
    }

    /// Number of rows in the grid.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the grid.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Get the letter at the given position.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        self.rows.get(row)?.get(column).copied()
    }

    /// The position `n` steps away in the given direction, if it is inside
    /// of the grid.
    pub fn step(
        &self,
        row: usize,
        column: usize,
        direction: Direction,
        n: usize,
    ) -> Option<(usize, usize)> {
        let n = isize::try_from(n).ok()?;
        let (dr, dc) = direction.delta();
        let row = row.checked_add_signed(dr.checked_mul(n)?)?;
        let column = column.checked_add_signed(dc.checked_mul(n)?)?;

        if row >= self.rows.len() || column >= self.columns {
            return None;
        }

        Some((row, column))
    }

    /// Read `len` letters starting at the given position.
    ///
    /// Returns `None` if the letters don't fit in the grid, or in `N`.
    pub fn read<const N: usize>(
        &self,
        row: usize,
        column: usize,
        direction: Direction,
        len: usize,
    ) -> Option<ArrayVec<u8, N>> {
        let mut out = ArrayVec::new();

        for n in 0..len {
            let (row, column) = self.step(row, column, direction, n)?;
            out.try_push(self.get(row, column)?).ok()?;
        }

        Some(out)
    }

    /// Every position holding the given letter, row by row.
    pub fn positions(&self, letter: u8) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, data)| {
            memchr::memchr_iter(letter, data).map(move |column| (row, column))
        })
    }

    /// Number of directions in which `word` can be read from the given
    /// position.
    pub fn word_count(&self, word: &[u8], row: usize, column: usize) -> usize {
        if word.is_empty() {
            return 0;
        }

        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                word.iter().enumerate().all(|(n, expected)| {
                    self.step(row, column, direction, n)
                        .and_then(|(row, column)| self.get(row, column))
                        == Some(*expected)
                })
            })
            .count()
    }

    /// Count every occurrence of `word` in the grid.
    pub fn count_word(&self, word: &[u8]) -> usize {
        let Some(&first) = word.first() else {
            return 0;
        };

        self.positions(first)
            .map(|(row, column)| self.word_count(word, row, column))
            .sum()
    }

    /// Count every `MAS` crossed with another `MAS` in the shape of an X.
    pub fn x_mas_count(&self) -> usize {
        self.positions(b'A')
            .filter(|&(row, column)| {
                let (Some(top), Some(left)) = (row.checked_sub(1), column.checked_sub(1)) else {
                    return false;
                };

                let a = self.read::<3>(top, left, Direction::SouthEast, 3);
                let b = self.read::<3>(top, column + 1, Direction::SouthWest, 3);

                matches!(
                    (a.as_deref(), b.as_deref()),
                    (Some(b"MAS" | b"SAM"), Some(b"MAS" | b"SAM"))
                )
            })
            .count()
    }
}
