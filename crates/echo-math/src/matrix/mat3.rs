// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::matrix::{det3, multiply_cells, multiply_vector, transpose_cells};
use crate::scalar::EPSILON;
use crate::vector::Vector3;

/// Column-major 3x3 matrix.
///
/// Flat layout `[m00, m01, m02, m10, m11, m12, m20, m21, m22]`, where
/// `m<col><row>`. The default value is the identity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix3 {
    data: [f64; 9],
}

impl Matrix3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);

    /// Creates a matrix from cells in row-major reading order:
    ///
    /// ```text
    /// | m00 m10 m20 |
    /// | m01 m11 m21 |
    /// | m02 m12 m22 |
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f64,
        m10: f64,
        m20: f64,
        m01: f64,
        m11: f64,
        m21: f64,
        m02: f64,
        m12: f64,
        m22: f64,
    ) -> Self {
        Self {
            data: [m00, m01, m02, m10, m11, m12, m20, m21, m22],
        }
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Axis-aligned scale.
    pub const fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, sz)
    }

    /// Right-handed rotation of `angle` radians about `axis`.
    ///
    /// The axis does not need to be normalized. A zero-length axis yields the
    /// identity.
    pub fn rotate(axis: Vector3, angle: f64) -> Self {
        let len = axis.length();
        if len <= EPSILON {
            return Self::IDENTITY;
        }
        let [x, y, z] = (axis / len).to_array();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Self::new(
            t * x * x + c,
            t * x * y - s * z,
            t * x * z + s * y,
            t * x * y + s * z,
            t * y * y + c,
            t * y * z - s * x,
            t * x * z - s * y,
            t * y * z + s * x,
            t * z * z + c,
        )
    }

    /// Rotation about the `x` axis.
    pub fn rotate_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
    }

    /// Rotation about the `y` axis.
    pub fn rotate_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
    }

    /// Rotation about the `z` axis.
    pub fn rotate_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// Scalar triple product of the columns.
    pub fn determinant(&self) -> f64 {
        det3(&self.data)
    }

    /// Transposes in place.
    pub fn transpose(&mut self) -> &mut Self {
        self.data = transpose_cells(&self.data, 3);
        self
    }

    /// Returns a transposed copy.
    pub fn transposed(&self) -> Self {
        Self::from_column_major(transpose_cells(&self.data, 3))
    }

    /// Sets `self = self × other`.
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        self.data = multiply_cells(&self.data, &other.data, 3);
        self
    }

    /// Sets `self = other × self`.
    pub fn multiply_rtl(&mut self, other: &Self) -> &mut Self {
        self.data = multiply_cells(&other.data, &self.data, 3);
        self
    }

    /// Same as [`Matrix3::multiply_rtl`].
    pub fn post_multiply(&mut self, other: &Self) -> &mut Self {
        self.multiply_rtl(other)
    }

    /// Returns the inverse.
    ///
    /// The rows of the inverse are the pairwise cross products of the columns
    /// divided by the determinant. Singular input yields non-finite cells.
    pub fn inverse(&self) -> Self {
        let c0 = self.col(0);
        let c1 = self.col(1);
        let c2 = self.col(2);
        let r0 = c1.cross(&c2);
        let r1 = c2.cross(&c0);
        let r2 = c0.cross(&c1);
        let det = c0.dot(&r0);
        let [a, b, c] = (r0 * (1.0 / det)).to_array();
        let [d, e, f] = (r1 * (1.0 / det)).to_array();
        let [g, h, i] = (r2 * (1.0 / det)).to_array();
        Self::new(a, b, c, d, e, f, g, h, i)
    }

    /// Inverts in place; see [`Matrix3::inverse`].
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Returns `self × v`.
    pub fn transform(&self, v: &Vector3) -> Vector3 {
        Vector3::from(multiply_vector::<3, _>(&self.data, v))
    }
}

crate::matrix::impl_matrix_common!(Matrix3, Vector3, 3, 9);

impl core::ops::Mul for Matrix3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_column_major(multiply_cells(&self.data, &rhs.data, 3))
    }
}

impl core::ops::MulAssign for Matrix3 {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}

impl core::ops::Mul<Vector3> for Matrix3 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform(&rhs)
    }
}
