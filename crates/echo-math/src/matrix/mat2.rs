// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::matrix::{det2, multiply_cells, multiply_vector, transpose_cells};
use crate::vector::Vector2;

/// Column-major 2x2 matrix.
///
/// Flat layout `[m00, m01, m10, m11]`, where `m<col><row>`. The constructor
/// takes cells in row-major reading order; see the [module docs](crate::matrix).
/// The default value is the identity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix2 {
    data: [f64; 4],
}

impl Matrix2 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Creates a matrix from cells in row-major reading order:
    ///
    /// ```text
    /// | m00 m10 |
    /// | m01 m11 |
    /// ```
    pub const fn new(m00: f64, m10: f64, m01: f64, m11: f64) -> Self {
        Self {
            data: [m00, m01, m10, m11],
        }
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotate(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, s, c)
    }

    /// Axis-aligned scale.
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy)
    }

    /// `m00 * m11 - m10 * m01`.
    pub fn determinant(&self) -> f64 {
        det2(&self.data)
    }

    /// Transposes in place.
    pub fn transpose(&mut self) -> &mut Self {
        self.data.swap(1, 2);
        self
    }

    /// Returns a transposed copy.
    pub fn transposed(&self) -> Self {
        Self::from_column_major(transpose_cells(&self.data, 2))
    }

    /// Sets `self = self × other`.
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        self.data = multiply_cells(&self.data, &other.data, 2);
        self
    }

    /// Sets `self = other × self`, for composing in the opposite order.
    pub fn multiply_rtl(&mut self, other: &Self) -> &mut Self {
        self.data = multiply_cells(&other.data, &self.data, 2);
        self
    }

    /// Same as [`Matrix2::multiply_rtl`].
    pub fn post_multiply(&mut self, other: &Self) -> &mut Self {
        self.multiply_rtl(other)
    }

    /// Returns the inverse, `adjugate / determinant`.
    ///
    /// A singular matrix is not special-cased; its cells come back infinite
    /// or NaN.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        let [m00, m01, m10, m11] = self.data;
        Self::new(m11 / det, -m10 / det, -m01 / det, m00 / det)
    }

    /// Inverts in place; see [`Matrix2::inverse`].
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Returns `self × v`.
    pub fn transform(&self, v: &Vector2) -> Vector2 {
        Vector2::from(multiply_vector::<2, _>(&self.data, v))
    }
}

crate::matrix::impl_matrix_common!(Matrix2, Vector2, 2, 4);

impl core::ops::Mul for Matrix2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_column_major(multiply_cells(&self.data, &rhs.data, 2))
    }
}

impl core::ops::MulAssign for Matrix2 {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}

impl core::ops::Mul<Vector2> for Matrix2 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Vector2 {
        self.transform(&rhs)
    }
}
