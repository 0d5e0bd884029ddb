use rand::Rng;

use crate::error::{ensure_len, NetworkError, Result};

/// Dense row-major weight matrix.
///
/// Row index is the source neuron, column index is the destination neuron,
/// so entry (i, j) connects neuron i of one layer to neuron j of the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix{
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Samples every entry independently from the half-open range `[0, upper)`.
    ///
    /// The generator is passed in so seeded runs reproduce the same weights.
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, upper: f64, rng: &mut R) -> Matrix {
        Matrix::from_fn(rows, cols, |_, _| rng.gen_range(0.0..upper))
    }

    /// Fills a `rows` × `cols` matrix with `f(i, j)`, visiting entries in
    /// row-major order.
    pub(crate) fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Matrix
    where
        F: FnMut(usize, usize) -> f64,
    {
        let data = (0..rows)
            .map(|i| (0..cols).map(|j| f(i, j)).collect())
            .collect();

        Matrix { rows, cols, data }
    }

    /// Builds a matrix from nested rows. Every row must have the same,
    /// non-zero length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = match data.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(NetworkError::InvalidDimension { context: "Matrix::from_data" }),
        };
        for row in &data {
            ensure_len("Matrix::from_data row length", cols, row.len())?;
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i][j]
    }

    /// Row `i`: the outgoing weights of source neuron `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    /// Iterates over every entry in row-major order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().flat_map(|row| row.iter().copied())
    }
}
