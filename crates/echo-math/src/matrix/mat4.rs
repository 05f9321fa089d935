// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::warn;

use crate::error::MathError;
use crate::quat::Quaternion;
use crate::vector::Vector3;

/// Column-major 4x4 matrix.
///
/// Only construction is supported so far: identity, scale, and rotations
/// (including from a [`Quaternion`]). [`Matrix4::determinant`],
/// [`Matrix4::multiply`], [`Matrix4::invert`] and [`Matrix4::transpose`]
/// report [`MathError::NotImplemented`].
///
/// # Examples
/// ```
/// use core::f64::consts::FRAC_PI_2;
/// use echo_math::{Matrix4, Vector3};
/// // Yaw of 90°: +Z maps to +X.
/// let r = Matrix4::rotate_y(FRAC_PI_2);
/// assert!(r.transform_direction(&Vector3::FORWARD).equal(&Vector3::RIGHT));
/// assert!(Matrix4::IDENTITY.determinant().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4 {
    data: [f64; 16],
}

impl Matrix4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_column_major([
        1.0, 0.0, 0.0, 0.0, // col 0
        0.0, 1.0, 0.0, 0.0, // col 1
        0.0, 0.0, 1.0, 0.0, // col 2
        0.0, 0.0, 0.0, 1.0, // col 3
    ]);

    /// Creates a matrix from cells in row-major reading order (`m<col><row>`
    /// naming, as for the smaller matrices).
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f64,
        m10: f64,
        m20: f64,
        m30: f64,
        m01: f64,
        m11: f64,
        m21: f64,
        m31: f64,
        m02: f64,
        m12: f64,
        m22: f64,
        m32: f64,
        m03: f64,
        m13: f64,
        m23: f64,
        m33: f64,
    ) -> Self {
        Self::from_column_major([
            m00, m01, m02, m03, // col 0
            m10, m11, m12, m13, // col 1
            m20, m21, m22, m23, // col 2
            m30, m31, m32, m33, // col 3
        ])
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Axis-aligned scale; `w` is left at one.
    pub const fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self::from_column_major([
            sx, 0.0, 0.0, 0.0, // col 0
            0.0, sy, 0.0, 0.0, // col 1
            0.0, 0.0, sz, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Rotation of `angle` radians about `axis`; agrees with
    /// [`Quaternion::from_axis_angle`]. A zero-length axis yields the identity.
    pub fn rotate(axis: Vector3, angle: f64) -> Self {
        Quaternion::from_axis_angle(axis, angle).to_matrix4()
    }

    /// Rotation about the `x` axis.
    pub fn rotate_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_column_major([
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, c, s, 0.0, // col 1
            0.0, -s, c, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Rotation about the `y` axis.
    pub fn rotate_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_column_major([
            c, 0.0, -s, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            s, 0.0, c, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Rotation about the `z` axis.
    pub fn rotate_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_column_major([
            c, s, 0.0, 0.0, // col 0
            -s, c, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Forwards to [`Quaternion::to_matrix4`].
    pub fn from_quaternion(q: &Quaternion) -> Self {
        q.to_matrix4()
    }

    /// Applies the upper-left 3x3 block to a direction (`w = 0`).
    pub fn transform_direction(&self, v: &Vector3) -> Vector3 {
        let d = &self.data;
        let [x, y, z] = v.to_array();
        Vector3::new(
            d[0] * x + d[4] * y + d[8] * z,
            d[1] * x + d[5] * y + d[9] * z,
            d[2] * x + d[6] * y + d[10] * z,
        )
    }

    /// Not implemented yet.
    ///
    /// # Errors
    /// Always returns [`MathError::NotImplemented`].
    pub fn determinant(&self) -> Result<f64, MathError> {
        Err(unsupported("Matrix4::determinant"))
    }

    /// Not implemented yet; `self` is left unchanged.
    ///
    /// # Errors
    /// Always returns [`MathError::NotImplemented`].
    pub fn multiply(&mut self, _other: &Self) -> Result<&mut Self, MathError> {
        Err(unsupported("Matrix4::multiply"))
    }

    /// Not implemented yet; `self` is left unchanged.
    ///
    /// # Errors
    /// Always returns [`MathError::NotImplemented`].
    pub fn invert(&mut self) -> Result<&mut Self, MathError> {
        Err(unsupported("Matrix4::invert"))
    }

    /// Not implemented yet; `self` is left unchanged.
    ///
    /// # Errors
    /// Always returns [`MathError::NotImplemented`].
    pub fn transpose(&mut self) -> Result<&mut Self, MathError> {
        Err(unsupported("Matrix4::transpose"))
    }
}

fn unsupported(operation: &'static str) -> MathError {
    warn!(operation, "4x4 matrix operation is not implemented");
    MathError::NotImplemented(operation)
}

crate::matrix::impl_matrix_common!(Matrix4, Vector4, 4, 16);
