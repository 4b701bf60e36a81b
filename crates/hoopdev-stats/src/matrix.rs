//! Dense matrices with Gauss-Jordan inversion.
//!
//! A small, dependency-free matrix type sized for the regression tooling:
//! a few dozen columns and up to tens of thousands of rows.
//!
//! All operations are pure. [`Matrix::to_reduced_row_echelon_form`] and
//! [`Matrix::invert`] work on a private copy and return a new matrix.
//!
//! # Pivot selection
//!
//! Elimination walks down from the current row and takes the *first* row
//! whose entry in the lead column is non-zero. It does not search for the
//! largest magnitude.
//!
//! "Zero" is relative to the column: an entry counts as zero when
//! `|x| <= PIVOT_EPSILON * max|column|`, with the column maximum taken from
//! the matrix as it enters elimination.

use std::{fmt, ops::Index};

/// Entries at or below this fraction of their column's largest magnitude
/// are treated as zero when pivoting.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Height and width of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{height}x{width}")]
pub struct Shape {
    pub height: usize,
    pub width: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MatrixError {
    #[display("incompatible sizes: {left} and {right}")]
    DimensionMismatch { left: Shape, right: Shape },
    #[display("can't invert {shape} matrix: not square or not invertible")]
    SingularMatrix { shape: Shape },
}

/// Rectangular matrix of `f64` stored in row-major order.
///
/// # Example
///
/// ```
/// use hoopdev_stats::matrix::Matrix;
///
/// let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]])?;
/// let inv = m.invert()?;
/// let id = m.multiply(&inv)?;
/// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!(id[(0, 1)].abs() < 1e-12);
/// # Ok::<(), hoopdev_stats::matrix::MatrixError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    height: usize,
    width: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `height x width` matrix filled with zeros.
    #[must_use]
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            data: vec![0.0; height * width],
        }
    }

    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Creates a matrix from rows of equal length.
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] if the rows are ragged.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[f64]>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MatrixError::DimensionMismatch {
                    left: Shape { height: 1, width },
                    right: Shape {
                        height: 1,
                        width: row.len(),
                    },
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Creates an `n x 1` matrix.
    #[must_use]
    pub fn column_vector(values: &[f64]) -> Self {
        Self {
            height: values.len(),
            width: 1,
            data: values.to_vec(),
        }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape {
            height: self.height,
            width: self.width,
        }
    }

    /// Entry at row `i`, column `j`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.height && j < self.width).then(|| self.data[i * self.width + j])
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.width..(i + 1) * self.width]
    }

    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.height).map(move |i| self[(i, j)])
    }

    /// Returns a new matrix with rows and columns swapped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::zeros(self.width, self.height);
        for i in 0..self.height {
            for j in 0..self.width {
                transposed.data[j * self.height + i] = self[(i, j)];
            }
        }
        transposed
    }

    /// Matrix product `self * other`.
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] unless
    /// `self.width() == other.height()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Self, MatrixError> {
        if self.width != other.height {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut result = Self::zeros(self.height, other.width);
        for i in 0..self.height {
            for j in 0..other.width {
                let mut sum = 0.0;
                for k in 0..self.width {
                    sum += self[(i, k)] * other[(k, j)];
                }
                result.data[i * other.width + j] = sum;
            }
        }
        Ok(result)
    }

    /// Reduced row echelon form by Gauss-Jordan elimination.
    ///
    /// ```
    /// use hoopdev_stats::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[0.0, 2.0], [3.0, 0.0]])?;
    /// assert_eq!(m.to_reduced_row_echelon_form(), Matrix::identity(2));
    /// # Ok::<(), hoopdev_stats::matrix::MatrixError>(())
    /// ```
    #[must_use]
    pub fn to_reduced_row_echelon_form(&self) -> Self {
        let mut reduced = self.clone();
        reduced.reduce();
        reduced
    }

    /// Inverse of a square matrix.
    ///
    /// Reduces `[self | I]` and reads the inverse off the right half. Fails
    /// with [`MatrixError::SingularMatrix`] for non-square input or when some
    /// column of `self` yields no pivot.
    pub fn invert(&self) -> Result<Self, MatrixError> {
        let singular = MatrixError::SingularMatrix {
            shape: self.shape(),
        };
        if self.height != self.width {
            return Err(singular);
        }

        let n = self.height;
        let mut augmented = Self::zeros(n, 2 * n);
        for i in 0..n {
            augmented.data[i * 2 * n..i * 2 * n + n].copy_from_slice(self.row(i));
            augmented.data[i * 2 * n + n + i] = 1.0;
        }

        let pivots = augmented.reduce();
        let full_rank =
            pivots.len() >= n && pivots.iter().take(n).enumerate().all(|(i, &c)| i == c);
        if !full_rank {
            return Err(singular);
        }

        let mut inverse = Self::zeros(n, n);
        for i in 0..n {
            inverse.data[i * n..(i + 1) * n].copy_from_slice(&augmented.row(i)[n..]);
        }
        Ok(inverse)
    }

    /// Gauss-Jordan elimination in place; returns the pivot column of each
    /// reduced row.
    fn reduce(&mut self) -> Vec<usize> {
        let tolerances = (0..self.width)
            .map(|j| PIVOT_EPSILON * self.column(j).fold(0.0, |max, x| f64::max(max, x.abs())))
            .collect::<Vec<_>>();
        let mut pivots = Vec::with_capacity(self.height.min(self.width));
        let mut lead = 0;
        for r in 0..self.height {
            if self.width <= lead {
                break;
            }

            let mut i = r;
            while self[(i, lead)].abs() <= tolerances[lead] {
                i += 1;
                if i == self.height {
                    i = r;
                    lead += 1;
                    if lead == self.width {
                        return pivots;
                    }
                }
            }
            self.swap_rows(i, r);

            let val = self[(r, lead)];
            for x in self.row_mut(r) {
                *x /= val;
            }

            for i in 0..self.height {
                if i == r {
                    continue;
                }
                let val = self[(i, lead)];
                if val == 0.0 {
                    continue;
                }
                for j in 0..self.width {
                    let sub = val * self[(r, j)];
                    self.data[i * self.width + j] -= sub;
                }
            }

            pivots.push(lead);
            lead += 1;
        }
        pivots
    }

    fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.width..(i + 1) * self.width]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.width {
            self.data.swap(a * self.width + j, b * self.width + j);
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.height && j < self.width, "index out of bounds");
        &self.data[i * self.width + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.height {
            let row = self.row(i);
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{x}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
