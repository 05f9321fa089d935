// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::MathError;
use crate::matrix::Matrix4;
use crate::scalar::EPSILON;
use crate::vector::{self, Vector3, VectorLike, VectorLikeMut};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * The default value is the identity rotation `(0, 0, 0, 1)`.
/// * All angles are expressed in radians.
/// * Structurally a 4-vector, so it takes part in the generic
///   [`crate::vector`] functions, but [`Quaternion::multiply`] is the
///   Hamilton product rather than a component-wise one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion {
    data: [f64; 4],
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    ///
    /// Components are taken verbatim; use [`Quaternion::from_axis_angle`] for
    /// axis/angle construction.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f64; 4] {
        self.data
    }

    /// The `x` component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// The `y` component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// The `z` component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// The scalar `w` component.
    pub const fn w(&self) -> f64 {
        self.data[3]
    }

    /// Sets the `x` component.
    pub fn set_x(&mut self, value: f64) -> &mut Self {
        self.data[0] = value;
        self
    }

    /// Sets the `y` component.
    pub fn set_y(&mut self, value: f64) -> &mut Self {
        self.data[1] = value;
        self
    }

    /// Sets the `z` component.
    pub fn set_z(&mut self, value: f64) -> &mut Self {
        self.data[2] = value;
        self
    }

    /// Sets the scalar `w` component.
    pub fn set_w(&mut self, value: f64) -> &mut Self {
        self.data[3] = value;
        self
    }

    /// Iterates over `x, y, z, w`.
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity when the axis length is ≤ `EPSILON`, since no
    /// orientation is defined for it.
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> Self {
        let len_sq = axis.length_sq();
        if len_sq <= EPSILON * EPSILON {
            return Self::identity();
        }
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let scaled = axis * (sin_half / len_sq.sqrt());
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Hamilton product `a × b`.
    ///
    /// Operand order matters: the result composes the rotation represented by
    /// `a` followed by the rotation represented by `b`.
    fn hamilton(a: &Self, b: &Self) -> Self {
        let [ax, ay, az, aw] = a.data;
        let [bx, by, bz, bw] = b.data;
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Sets `self = self × other` (Hamilton product).
    ///
    /// Quaternion multiplication is non-commutative; see
    /// [`Quaternion::premultiply`] for the opposite order. The `*` operator is
    /// the pure form.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use echo_math::{Quaternion, Vector3};
    /// let yaw = Quaternion::from_axis_angle(Vector3::UP, FRAC_PI_2);
    /// let pitch = Quaternion::from_axis_angle(Vector3::RIGHT, FRAC_PI_2);
    /// let mut composed = yaw;
    /// composed.multiply(&pitch);
    /// assert_eq!(composed, yaw * pitch);
    /// assert_ne!(composed.to_array(), (pitch * yaw).to_array());
    /// ```
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        *self = Self::hamilton(self, other);
        self
    }

    /// Sets `self = other × self`.
    pub fn premultiply(&mut self, other: &Self) -> &mut Self {
        *self = Self::hamilton(other, self);
        self
    }

    /// Negates the vector part, keeping `w`.
    pub fn conjugate(&self) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, w)
    }

    /// 4D dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        vector::dot(self, other)
    }

    /// Squared norm.
    pub fn length_sq(&self) -> f64 {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    /// `conjugate / dot(q, q)`. A zero quaternion yields NaN components.
    pub fn inverse(&self) -> Self {
        let norm_sq = self.length_sq();
        let [x, y, z, w] = self.conjugate().data;
        Self::new(x / norm_sq, y / norm_sq, z / norm_sq, w / norm_sq)
    }

    /// Replaces `self` with its inverse.
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Divides all four components by the norm. A zero quaternion yields NaN.
    pub fn normalize(&mut self) -> &mut Self {
        vector::normalize_into(&mut self.data);
        self
    }

    /// Returns a unit-length copy.
    pub fn normalized(&self) -> Self {
        vector::normalize(self)
    }

    /// Normalized linear interpolation: component lerp, then renormalize.
    ///
    /// Cheaper than [`Quaternion::slerp`] but without constant angular
    /// velocity.
    pub fn nlerp(a: &Self, b: &Self, t: f64) -> Self {
        let mut out = vector::lerp(a, b, t);
        out.normalize();
        out
    }

    /// Spherical linear interpolation between unit quaternions.
    ///
    /// Returns `a` at `t = 0` and `b` at `t = 1` exactly. In between, the
    /// path follows the short arc: when `a · b < 0` the interpolation heads
    /// toward `-b`, which is the same rotation. Once the inputs are parallel
    /// within `EPSILON` (antipodal included) the angle is too small to divide
    /// by and the result falls back to [`Quaternion::nlerp`].
    ///
    /// # Examples
    /// ```
    /// use echo_math::{Quaternion, Vector3};
    /// let a = Quaternion::from_axis_angle(Vector3::UP, 0.3);
    /// let b = Quaternion::new(-a.x(), -a.y(), -a.z(), -a.w());
    /// let mid = Quaternion::slerp(&a, &b, 0.5);
    /// assert!((mid.length() - 1.0).abs() < 1e-12);
    /// assert_eq!(Quaternion::slerp(&a, &b, 1.0), b);
    /// ```
    // Endpoints are returned bit-exact, so the exact comparisons are wanted.
    #[allow(clippy::float_cmp)]
    pub fn slerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return *a;
        }
        if t == 1.0 {
            return *b;
        }
        let mut cos_theta = a.dot(b);
        let mut target = *b;
        if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            vector::scale_into(&mut target.data, -1.0);
        }
        let cos_theta = cos_theta.min(1.0);
        if 1.0 - cos_theta < EPSILON {
            return Self::nlerp(a, &target, t);
        }
        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let wa = ((1.0 - t) * theta).sin() / sin_theta;
        let wb = (t * theta).sin() / sin_theta;
        let mut out = vector::scale(a, wa);
        vector::add_into(&mut out.data, &vector::scale(&target, wb));
        out
    }

    /// Rotates a 3D vector by this (unit) quaternion.
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        let u = Vector3::new(self.x(), self.y(), self.z());
        let t = u.cross(v) * 2.0;
        *v + t * self.w() + u.cross(&t)
    }

    /// Converts a unit quaternion to a rotation matrix (no scale or
    /// translation).
    pub fn to_matrix4(&self) -> Matrix4 {
        let [x, y, z, w] = self.data;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Matrix4::from_column_major([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Tolerant equality; see [`crate::vector::equal`].
    pub fn equal(&self, other: &Self) -> bool {
        vector::equal(self, other)
    }
}

impl VectorLike for Quaternion {
    fn components(&self) -> &[f64] {
        &self.data
    }
}

impl VectorLikeMut for Quaternion {
    fn components_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

/// Converts `(x, y, z, w)` verbatim; normalization is not enforced.
impl From<[f64; 4]> for Quaternion {
    fn from(value: [f64; 4]) -> Self {
        Self { data: value }
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = MathError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        let components = vector::expect_arity(value, 4)?;
        let mut data = [0.0; 4];
        data.copy_from_slice(components);
        Ok(Self { data })
    }
}

impl core::ops::Index<usize> for Quaternion {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl core::ops::IndexMut<usize> for Quaternion {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

impl<'a> IntoIterator for &'a Quaternion {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl core::ops::Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::hamilton(&self, &rhs)
    }
}

impl core::ops::MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}
