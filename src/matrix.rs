//!
//! Dense square matrix used as adjacency and distance matrix
//!
//! Cells are stored row-major in a single `Vec`, cell (i, j) at `n * i + j`.
//!
use crate::common::{Distance, Weight};
use crate::error::{Error, Result};

///
/// n x n matrix in row-major order
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    n: usize,
    cells: Vec<T>,
}

/// Adjacency matrix before transformation (0 = no edge)
pub type RawMatrix = SquareMatrix<Weight>;

/// Adjacency or distance matrix with explicit infinite entries
pub type DistanceMatrix = SquareMatrix<Distance>;

impl<T: Clone> SquareMatrix<T> {
    /// n x n matrix whose cells are all `value`
    pub fn filled(n: usize, value: T) -> Result<Self> {
        let len = Self::cell_count(n)?;
        let mut cells = Self::storage(n)?;
        cells.resize(len, value);
        Ok(SquareMatrix { n, cells })
    }

    ///
    /// Build from a list of rows.
    ///
    /// Every row must have exactly as many cells as there are rows.
    ///
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        if let Some((row, cols)) = rows.iter().enumerate().find(|(_, cols)| cols.len() != n) {
            return Err(Error::NotSquare {
                rows: n,
                row,
                len: cols.len(),
            });
        }
        let mut cells = Self::storage(n)?;
        for cols in rows {
            cells.extend(cols);
        }
        Ok(SquareMatrix { n, cells })
    }
}

impl<T> SquareMatrix<T> {
    ///
    /// Number of cells of an n x n matrix.
    ///
    /// `InvalidSize` if `n * n` cells of `T` exceed the address space.
    ///
    pub fn cell_count(n: usize) -> Result<usize> {
        n.checked_mul(n)
            .filter(|&len| {
                len.checked_mul(std::mem::size_of::<T>())
                    .map_or(false, |bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(Error::InvalidSize(n))
    }

    /// empty Vec with room for exactly n x n cells
    fn storage(n: usize) -> Result<Vec<T>> {
        let len = Self::cell_count(n)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::InvalidSize(n))?;
        Ok(cells)
    }

    /// n x n matrix with cell (i, j) set to `f(i, j)`
    pub fn from_fn<F: FnMut(usize, usize) -> T>(n: usize, mut f: F) -> Result<Self> {
        let mut cells = Self::storage(n)?;
        for i in 0..n {
            for j in 0..n {
                cells.push(f(i, j));
            }
        }
        Ok(SquareMatrix { n, cells })
    }

    /// number of vertices
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// reference to cell (i, j). panics when out of range
    pub fn get(&self, i: usize, j: usize) -> &T {
        assert!(i < self.n && j < self.n, "index ({}, {}) out of range", i, j);
        &self.cells[self.n * i + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.n && j < self.n, "index ({}, {}) out of range", i, j);
        self.cells[self.n * i + j] = value;
    }

    /// rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.n.max(1))
    }

    ///
    /// Iterator on all cells in row-major order
    ///
    /// item is `((row, col), &cell)`
    ///
    pub fn iter_cells(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let n = self.n;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| ((index / n, index % n), cell))
    }

    /// new matrix of the same size with `f` applied to every cell
    pub fn map<U, F: FnMut((usize, usize), &T) -> U>(&self, mut f: F) -> SquareMatrix<U> {
        SquareMatrix {
            n: self.n,
            cells: self.iter_cells().map(|(ij, cell)| f(ij, cell)).collect(),
        }
    }
}

//
// tests
//
