//!
//! Text rendering of matrices
//!
//! One line per row, each cell followed by a space, and one more space
//! before the newline. Infinite distances are written as `i`.
//!
use crate::matrix::SquareMatrix;
use std::fmt::Display;
use std::io::{self, Write};

///
/// Write the grid of `matrix` to `out`.
///
pub fn write_matrix<W: Write, T: Display>(out: &mut W, matrix: &SquareMatrix<T>) -> io::Result<()> {
    for row in matrix.rows() {
        for cell in row {
            write!(out, "{} ", cell)?;
        }
        writeln!(out, " ")?;
    }
    Ok(())
}

///
/// Render `matrix` to a String, in the same format as `write_matrix`
///
pub fn render_matrix<T: Display>(matrix: &SquareMatrix<T>) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    write_matrix(&mut buf, matrix).expect("in-memory write failed");
    String::from_utf8(buf).expect("Display output is utf8")
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Distance;
    use crate::floyd::floyd_warshall;
    use crate::matrix::RawMatrix;
    use crate::transform::transform;

    #[test]
    fn render_raw() {
        let raw = RawMatrix::from_rows(vec![vec![0, 5, 0], vec![0, 0, 3], vec![0, 0, 0]]).unwrap();
        assert_eq!(render_matrix(&raw), "0 5 0  \n0 0 3  \n0 0 0  \n");
    }

    #[test]
    fn render_distances() {
        let raw = RawMatrix::from_rows(vec![vec![0, 5, 0], vec![0, 0, 3], vec![0, 0, 0]]).unwrap();
        let dist = floyd_warshall(&transform(&raw)).unwrap();
        assert_eq!(render_matrix(&dist), "0 5 8  \ni 0 3  \ni i 0  \n");
    }

    #[test]
    fn render_disconnected() {
        let raw = RawMatrix::from_rows(vec![vec![0, 0], vec![0, 0]]).unwrap();
        let dist = floyd_warshall(&transform(&raw)).unwrap();
        assert_eq!(*dist.get(0, 1), Distance::Infinite);
        assert_eq!(render_matrix(&dist), "0 i  \ni 0  \n");
    }

    #[test]
    fn render_empty() {
        let raw = RawMatrix::from_rows(vec![]).unwrap();
        assert_eq!(render_matrix(&raw), "");
    }

    #[test]
    fn write_to_sink() {
        let raw = RawMatrix::from_rows(vec![vec![0, 7], vec![1, 0]]).unwrap();
        let mut out: Vec<u8> = Vec::new();
        write_matrix(&mut out, &raw).unwrap();
        assert_eq!(out, b"0 7  \n1 0  \n");
    }
}
