// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Small square matrices and the free functions that accept raw buffers.
//!
//! # Layout
//! Cells are named `m<col><row>` and stored column-major: `m<c><r>` lives at
//! flat index `c * N + r`. Constructors nevertheless take their arguments in
//! row-major reading order, so source code looks like the matrix on paper:
//!
//! ```
//! use echo_math::Matrix2;
//! // | 12  2 |
//! // |  1  5 |
//! let m = Matrix2::new(12.0, 2.0, 1.0, 5.0);
//! assert_eq!(m.to_array(), [12.0, 1.0, 2.0, 5.0]);
//! assert_eq!(m.determinant(), 58.0);
//! ```
//!
//! # Raw buffers
//! The `*_m2`/`*_m3` free functions accept anything [`MatrixLike`] (a matrix
//! type, a fixed array, a slice, or a `Vec`) and check the cell count before
//! doing any arithmetic.

use crate::error::MathError;
use crate::vector::{self, Vector2, Vector3, VectorLike};

pub use mat2::Matrix2;
pub use mat3::Matrix3;
pub use mat4::Matrix4;

/// Anything readable as a column-major run of matrix cells.
pub trait MatrixLike {
    /// Cells in column-major order.
    fn elements(&self) -> &[f64];
}

impl<const N: usize> MatrixLike for [f64; N] {
    fn elements(&self) -> &[f64] {
        self
    }
}

impl MatrixLike for [f64] {
    fn elements(&self) -> &[f64] {
        self
    }
}

impl MatrixLike for Vec<f64> {
    fn elements(&self) -> &[f64] {
        self
    }
}

/// Returns the cells of `m` if it is a `dim`x`dim` matrix.
pub(crate) fn expect_dim<M: MatrixLike + ?Sized>(m: &M, dim: usize) -> Result<&[f64], MathError> {
    let cells = m.elements();
    if cells.len() == dim * dim {
        Ok(cells)
    } else {
        Err(MathError::invalid_matrix(dim, cells.len()))
    }
}

pub(crate) fn det2(e: &[f64]) -> f64 {
    // m00 * m11 - m10 * m01
    e[0] * e[3] - e[2] * e[1]
}

pub(crate) fn det3(e: &[f64]) -> f64 {
    // col0 · (col1 × col2)
    vector::dot(&e[0..3], &vector::cross(&e[3..6], &e[6..9]))
}

/// Column-major `a × b` for `dim`x`dim` matrices.
pub(crate) fn multiply_cells<const C: usize>(a: &[f64], b: &[f64], dim: usize) -> [f64; C] {
    let mut out = [0.0; C];
    for col in 0..dim {
        for row in 0..dim {
            out[col * dim + row] = (0..dim).map(|k| a[k * dim + row] * b[col * dim + k]).sum();
        }
    }
    out
}

/// Column-major `m × v` for a `dim`x`dim` matrix.
pub(crate) fn multiply_vector<const D: usize, V>(m: &[f64], v: &V) -> [f64; D]
where
    V: VectorLike + ?Sized,
{
    let mut out = [0.0; D];
    for (row, slot) in out.iter_mut().enumerate() {
        *slot = (0..D).map(|col| m[col * D + row] * v.component(col)).sum();
    }
    out
}

pub(crate) fn transpose_cells<const C: usize>(e: &[f64], dim: usize) -> [f64; C] {
    let mut out = [0.0; C];
    for col in 0..dim {
        for row in 0..dim {
            out[row * dim + col] = e[col * dim + row];
        }
    }
    out
}

/// Determinant of a 2x2 matrix-like buffer.
pub fn determinant_m2<M: MatrixLike + ?Sized>(m: &M) -> Result<f64, MathError> {
    expect_dim(m, 2).map(det2)
}

/// Determinant of a 3x3 matrix-like buffer.
pub fn determinant_m3<M: MatrixLike + ?Sized>(m: &M) -> Result<f64, MathError> {
    expect_dim(m, 3).map(det3)
}

/// `left × right` for 2x2 matrix-like buffers.
pub fn multiply_m2m2<L, R>(left: &L, right: &R) -> Result<Matrix2, MathError>
where
    L: MatrixLike + ?Sized,
    R: MatrixLike + ?Sized,
{
    let a = expect_dim(left, 2)?;
    let b = expect_dim(right, 2)?;
    Ok(Matrix2::from_column_major(multiply_cells(a, b, 2)))
}

/// `left × right` for 3x3 matrix-like buffers.
pub fn multiply_m3m3<L, R>(left: &L, right: &R) -> Result<Matrix3, MathError>
where
    L: MatrixLike + ?Sized,
    R: MatrixLike + ?Sized,
{
    let a = expect_dim(left, 3)?;
    let b = expect_dim(right, 3)?;
    Ok(Matrix3::from_column_major(multiply_cells(a, b, 3)))
}

/// Transforms a 2D vector-like by a 2x2 matrix-like.
pub fn multiply_m2v2<M, V>(m: &M, v: &V) -> Result<Vector2, MathError>
where
    M: MatrixLike + ?Sized,
    V: VectorLike + ?Sized,
{
    let cells = expect_dim(m, 2)?;
    let v = vector::expect_arity(v, 2)?;
    Ok(Vector2::from(multiply_vector::<2, _>(cells, v)))
}

/// Transforms a 3D vector-like by a 3x3 matrix-like.
pub fn multiply_m3v3<M, V>(m: &M, v: &V) -> Result<Vector3, MathError>
where
    M: MatrixLike + ?Sized,
    V: VectorLike + ?Sized,
{
    let cells = expect_dim(m, 3)?;
    let v = vector::expect_arity(v, 3)?;
    Ok(Vector3::from(multiply_vector::<3, _>(cells, v)))
}

/// Returns a transposed copy of a 2x2 matrix-like; the input is untouched.
/// Use [`Matrix2::transpose`] to transpose in place.
pub fn transpose2d<M: MatrixLike + ?Sized>(m: &M) -> Result<[f64; 4], MathError> {
    expect_dim(m, 2).map(|cells| transpose_cells(cells, 2))
}

/// Returns a transposed copy of a 3x3 matrix-like; the input is untouched.
/// Use [`Matrix3::transpose`] to transpose in place.
pub fn transpose3d<M: MatrixLike + ?Sized>(m: &M) -> Result<[f64; 9], MathError> {
    expect_dim(m, 3).map(|cells| transpose_cells(cells, 3))
}

/// Implements storage, conversions, and row/column views shared by every
/// matrix type.
macro_rules! impl_matrix_common {
    ($ty:ident, $vec:ident, $dim:literal, $cells:literal) => {
        impl $ty {
            /// Creates a matrix from cells already laid out column-major.
            pub const fn from_column_major(data: [f64; $cells]) -> Self {
                Self { data }
            }

            /// Returns the cells in column-major order.
            pub fn to_array(self) -> [f64; $cells] {
                self.data
            }

            /// Cell `m<col><row>`.
            ///
            /// # Panics
            /// If `col` or `row` is out of range.
            pub fn at(&self, col: usize, row: usize) -> f64 {
                assert!(col < $dim && row < $dim, "cell ({col}, {row}) out of range");
                self.data[col * $dim + row]
            }

            /// Writes cell `m<col><row>`.
            ///
            /// # Panics
            /// If `col` or `row` is out of range.
            pub fn set_at(&mut self, col: usize, row: usize, value: f64) -> &mut Self {
                assert!(col < $dim && row < $dim, "cell ({col}, {row}) out of range");
                self.data[col * $dim + row] = value;
                self
            }

            /// Row `index` as a new vector.
            ///
            /// # Panics
            /// If `index` is out of range.
            pub fn row(&self, index: usize) -> $crate::vector::$vec {
                assert!(index < $dim, "row {index} out of range");
                let mut out = [0.0; $dim];
                for (col, slot) in out.iter_mut().enumerate() {
                    *slot = self.data[col * $dim + index];
                }
                $crate::vector::$vec::from(out)
            }

            /// Column `index` as a new vector.
            ///
            /// # Panics
            /// If `index` is out of range.
            pub fn col(&self, index: usize) -> $crate::vector::$vec {
                assert!(index < $dim, "column {index} out of range");
                let mut out = [0.0; $dim];
                out.copy_from_slice(&self.data[index * $dim..(index + 1) * $dim]);
                $crate::vector::$vec::from(out)
            }

            /// Scatters `v` into row `index`; missing components write `0.0`.
            ///
            /// # Panics
            /// If `index` is out of range.
            pub fn set_row<V>(&mut self, index: usize, v: &V) -> &mut Self
            where
                V: $crate::vector::VectorLike + ?Sized,
            {
                assert!(index < $dim, "row {index} out of range");
                for col in 0..$dim {
                    self.data[col * $dim + index] = v.component(col);
                }
                self
            }

            /// Scatters `v` into column `index`; missing components write `0.0`.
            ///
            /// # Panics
            /// If `index` is out of range.
            pub fn set_col<V>(&mut self, index: usize, v: &V) -> &mut Self
            where
                V: $crate::vector::VectorLike + ?Sized,
            {
                assert!(index < $dim, "column {index} out of range");
                for row in 0..$dim {
                    self.data[index * $dim + row] = v.component(row);
                }
                self
            }

            /// `true` when every cell is within [`crate::scalar::EPSILON`].
            pub fn equal<M: $crate::matrix::MatrixLike + ?Sized>(&self, other: &M) -> bool {
                $crate::vector::equal(&self.data[..], other.elements())
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl $crate::matrix::MatrixLike for $ty {
            fn elements(&self) -> &[f64] {
                &self.data
            }
        }

        /// Interprets the array as column-major cells.
        impl From<[f64; $cells]> for $ty {
            fn from(value: [f64; $cells]) -> Self {
                Self::from_column_major(value)
            }
        }

        /// Interprets the slice as column-major cells.
        impl TryFrom<&[f64]> for $ty {
            type Error = $crate::error::MathError;

            fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
                let cells = $crate::matrix::expect_dim(value, $dim)?;
                let mut data = [0.0; $cells];
                data.copy_from_slice(cells);
                Ok(Self { data })
            }
        }
    };
}

pub(crate) use impl_matrix_common;

mod mat2;
mod mat3;
mod mat4;
