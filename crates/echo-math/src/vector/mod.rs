// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-arity vectors and the arithmetic shared between them.
//!
//! Every free function here is generic over [`VectorLike`], so the rich
//! [`Vector2`]/[`Vector3`]/[`Vector4`] types, [`crate::Quaternion`], and plain
//! `[f64; N]` arrays can be mixed freely.
//!
//! # Mixed arity
//! Binary operations take their arity from the first operand. Components of
//! the second operand past that arity are ignored; components it lacks read
//! as `0.0`:
//!
//! ```
//! use echo_math::vector;
//! assert_eq!(vector::add(&[2.0, 3.0, 4.0], &[0.0, 1.0]), [2.0, 4.0, 4.0]);
//! assert_eq!(vector::add(&[3.0, 4.0], &[0.0, 1.0, 2.0]), [3.0, 5.0]);
//! ```

use crate::error::MathError;
use crate::scalar;

pub use vec2::Vector2;
pub use vec3::Vector3;
pub use vec4::Vector4;

/// Anything readable as an ordered, fixed-length run of `f64` components.
pub trait VectorLike {
    /// Components in index order.
    fn components(&self) -> &[f64];

    /// Number of components.
    fn arity(&self) -> usize {
        self.components().len()
    }

    /// Component at `index`, or `0.0` past the end.
    fn component(&self, index: usize) -> f64 {
        self.components().get(index).copied().unwrap_or(0.0)
    }
}

/// A [`VectorLike`] whose components can be written in place.
///
/// Only existing components are writable; nothing in this crate can change
/// a vector's arity.
pub trait VectorLikeMut: VectorLike {
    /// Mutable components in index order.
    fn components_mut(&mut self) -> &mut [f64];
}

impl<const N: usize> VectorLike for [f64; N] {
    fn components(&self) -> &[f64] {
        self
    }
}

impl<const N: usize> VectorLikeMut for [f64; N] {
    fn components_mut(&mut self) -> &mut [f64] {
        self
    }
}

impl VectorLike for [f64] {
    fn components(&self) -> &[f64] {
        self
    }
}

impl VectorLikeMut for [f64] {
    fn components_mut(&mut self) -> &mut [f64] {
        self
    }
}

impl VectorLike for Vec<f64> {
    fn components(&self) -> &[f64] {
        self
    }
}

impl VectorLikeMut for Vec<f64> {
    fn components_mut(&mut self) -> &mut [f64] {
        self
    }
}

/// Returns the components of `v` if it has exactly `dim` of them.
pub(crate) fn expect_arity<V: VectorLike + ?Sized>(v: &V, dim: usize) -> Result<&[f64], MathError> {
    let components = v.components();
    if components.len() == dim {
        Ok(components)
    } else {
        Err(MathError::InvalidVector {
            dim,
            actual: components.len(),
        })
    }
}

// In-place kernels shared by the free functions and the vector methods.

pub(crate) fn add_into<B: VectorLike + ?Sized>(out: &mut [f64], b: &B) {
    for (i, c) in out.iter_mut().enumerate() {
        *c += b.component(i);
    }
}

pub(crate) fn sub_into<B: VectorLike + ?Sized>(out: &mut [f64], b: &B) {
    for (i, c) in out.iter_mut().enumerate() {
        *c -= b.component(i);
    }
}

pub(crate) fn add_scalar_into(out: &mut [f64], value: f64) {
    for c in out.iter_mut() {
        *c += value;
    }
}

pub(crate) fn scale_into(out: &mut [f64], factor: f64) {
    for c in out.iter_mut() {
        *c *= factor;
    }
}

/// Divides each component by `divisor`; a zero divisor zeroes the vector.
pub(crate) fn inv_scale_into(out: &mut [f64], divisor: f64) {
    if divisor == 0.0 {
        out.fill(0.0);
    } else {
        for c in out.iter_mut() {
            *c /= divisor;
        }
    }
}

pub(crate) fn normalize_into(out: &mut [f64]) {
    let len = out.iter().map(|c| c * c).sum::<f64>().sqrt();
    for c in out.iter_mut() {
        *c /= len;
    }
}

pub(crate) fn lerp_into<B: VectorLike + ?Sized>(out: &mut [f64], b: &B, t: f64) {
    for (i, c) in out.iter_mut().enumerate() {
        *c = scalar::lerp(*c, b.component(i), t);
    }
}

pub(crate) fn approach_into<T, A>(out: &mut [f64], target: &T, amount: &A)
where
    T: VectorLike + ?Sized,
    A: VectorLike + ?Sized,
{
    for (i, c) in out.iter_mut().enumerate() {
        *c = scalar::approach(*c, target.component(i), amount.component(i));
    }
}

pub(crate) fn clamp_into<L, H>(out: &mut [f64], min: &L, max: &H)
where
    L: VectorLike + ?Sized,
    H: VectorLike + ?Sized,
{
    for (i, c) in out.iter_mut().enumerate() {
        *c = scalar::clamp(*c, min.component(i), max.component(i));
    }
}

fn with<A, F>(a: &A, f: F) -> A
where
    A: VectorLikeMut + Clone,
    F: FnOnce(&mut [f64]),
{
    let mut out = a.clone();
    f(out.components_mut());
    out
}

/// `a + b`, with `a`'s arity (see the module docs for mixed arity).
pub fn add<A, B>(a: &A, b: &B) -> A
where
    A: VectorLikeMut + Clone,
    B: VectorLike + ?Sized,
{
    with(a, |out| add_into(out, b))
}

/// `a - b`, with `a`'s arity (see the module docs for mixed arity).
pub fn sub<A, B>(a: &A, b: &B) -> A
where
    A: VectorLikeMut + Clone,
    B: VectorLike + ?Sized,
{
    with(a, |out| sub_into(out, b))
}

/// Adds `value` to every component.
pub fn add_scalar<A: VectorLikeMut + Clone>(a: &A, value: f64) -> A {
    with(a, |out| add_scalar_into(out, value))
}

/// Multiplies every component by `factor`.
pub fn scale<A: VectorLikeMut + Clone>(a: &A, factor: f64) -> A {
    with(a, |out| scale_into(out, factor))
}

/// Divides every component by `divisor`. A zero divisor yields the zero
/// vector rather than infinities.
pub fn inv_scale<A: VectorLikeMut + Clone>(a: &A, divisor: f64) -> A {
    with(a, |out| inv_scale_into(out, divisor))
}

/// Dot product over `a`'s arity.
pub fn dot<A, B>(a: &A, b: &B) -> f64
where
    A: VectorLike + ?Sized,
    B: VectorLike + ?Sized,
{
    a.components()
        .iter()
        .enumerate()
        .map(|(i, c)| c * b.component(i))
        .sum()
}

/// 3D cross product; missing `z` components read as `0.0`.
pub fn cross<A, B>(a: &A, b: &B) -> Vector3
where
    A: VectorLike + ?Sized,
    B: VectorLike + ?Sized,
{
    let (ax, ay, az) = (a.component(0), a.component(1), a.component(2));
    let (bx, by, bz) = (b.component(0), b.component(1), b.component(2));
    Vector3::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
}

/// The 2D cross product: `z` of the 3D cross of the `xy` parts.
pub fn cross_z<A, B>(a: &A, b: &B) -> f64
where
    A: VectorLike + ?Sized,
    B: VectorLike + ?Sized,
{
    a.component(0) * b.component(1) - a.component(1) * b.component(0)
}

/// `true` iff both have the same arity and every component pair is within
/// [`scalar::EPSILON`].
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: VectorLike + ?Sized,
    B: VectorLike + ?Sized,
{
    a.arity() == b.arity()
        && a
            .components()
            .iter()
            .zip(b.components())
            .all(|(x, y)| scalar::equal(*x, *y))
}

/// Squared Euclidean norm.
pub fn length_sq<A: VectorLike + ?Sized>(a: &A) -> f64 {
    dot(a, a)
}

/// Euclidean norm.
pub fn length<A: VectorLike + ?Sized>(a: &A) -> f64 {
    length_sq(a).sqrt()
}

/// Squared distance between two points, over `a`'s arity.
pub fn distance_sq<A, B>(a: &A, b: &B) -> f64
where
    A: VectorLike + ?Sized,
    B: VectorLike + ?Sized,
{
    a.components()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let d = c - b.component(i);
            d * d
        })
        .sum()
}

/// Distance between two points, over `a`'s arity.
pub fn distance<A, B>(a: &A, b: &B) -> f64
where
    A: VectorLike + ?Sized,
    B: VectorLike + ?Sized,
{
    distance_sq(a, b).sqrt()
}

/// Unit vector in the direction of `a`.
///
/// The zero vector is not special-cased: its components come back NaN.
pub fn normalize<A: VectorLikeMut + Clone>(a: &A) -> A {
    with(a, normalize_into)
}

/// Component-wise [`scalar::lerp`]; `t` is not clamped.
pub fn lerp<A, B>(a: &A, b: &B, t: f64) -> A
where
    A: VectorLikeMut + Clone,
    B: VectorLike + ?Sized,
{
    with(a, |out| lerp_into(out, b, t))
}

/// Moves each axis of `v` toward `target` by at most the matching axis of
/// `amount`, never overshooting.
pub fn approach<V, T, A>(v: &V, target: &T, amount: &A) -> V
where
    V: VectorLikeMut + Clone,
    T: VectorLike + ?Sized,
    A: VectorLike + ?Sized,
{
    with(v, |out| approach_into(out, target, amount))
}

/// Component-wise [`scalar::clamp`].
pub fn clamp<V, L, H>(v: &V, min: &L, max: &H) -> V
where
    V: VectorLikeMut + Clone,
    L: VectorLike + ?Sized,
    H: VectorLike + ?Sized,
{
    with(v, |out| clamp_into(out, min, max))
}

/// `true` when `point` lies on the segment `start..=end`, within
/// [`scalar::EPSILON`].
pub fn is_point_on_line<P, S, E>(point: &P, start: &S, end: &E) -> bool
where
    P: VectorLike + ?Sized,
    S: VectorLike + ?Sized,
    E: VectorLike + ?Sized,
{
    let via_point = distance(start, point) + distance(point, end);
    scalar::equal(via_point, distance(start, end))
}

/// Half-open bounds test: every axis satisfies `start <= p < end`.
pub fn is_within_bounds<P, S, E>(point: &P, start: &S, end: &E) -> bool
where
    P: VectorLike + ?Sized,
    S: VectorLike + ?Sized,
    E: VectorLike + ?Sized,
{
    point
        .components()
        .iter()
        .enumerate()
        .all(|(i, p)| *p >= start.component(i) && *p < end.component(i))
}

/// Joins the components with `,` for use as a cache key.
///
/// ```
/// use echo_math::vector::hash_vector;
/// assert_eq!(hash_vector(&[1.0, -2.5, 0.0]), "1,-2.5,0");
/// ```
pub fn hash_vector<V: VectorLike + ?Sized>(v: &V) -> String {
    v.components()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Implements the arithmetic operators and slice views every fixed-size
/// vector type shares.
macro_rules! impl_vector_ops {
    ($ty:ident, $n:literal) => {
        impl $crate::vector::VectorLike for $ty {
            fn components(&self) -> &[f64] {
                &self.data
            }
        }

        impl $crate::vector::VectorLikeMut for $ty {
            fn components_mut(&mut self) -> &mut [f64] {
                &mut self.data
            }
        }

        impl From<[f64; $n]> for $ty {
            fn from(value: [f64; $n]) -> Self {
                Self { data: value }
            }
        }

        impl From<$ty> for [f64; $n] {
            fn from(value: $ty) -> Self {
                value.data
            }
        }

        impl TryFrom<&[f64]> for $ty {
            type Error = $crate::error::MathError;

            fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
                let components = $crate::vector::expect_arity(value, $n)?;
                let mut data = [0.0; $n];
                data.copy_from_slice(components);
                Ok(Self { data })
            }
        }

        impl core::ops::Index<usize> for $ty {
            type Output = f64;
            fn index(&self, index: usize) -> &f64 {
                &self.data[index]
            }
        }

        impl core::ops::IndexMut<usize> for $ty {
            fn index_mut(&mut self, index: usize) -> &mut f64 {
                &mut self.data[index]
            }
        }

        impl IntoIterator for $ty {
            type Item = f64;
            type IntoIter = core::array::IntoIter<f64, $n>;
            fn into_iter(self) -> Self::IntoIter {
                self.data.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $ty {
            type Item = &'a f64;
            type IntoIter = core::slice::Iter<'a, f64>;
            fn into_iter(self) -> Self::IntoIter {
                self.data.iter()
            }
        }

        impl core::ops::Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $crate::vector::add(&self, &rhs)
            }
        }

        impl core::ops::Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $crate::vector::sub(&self, &rhs)
            }
        }

        impl core::ops::Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                $crate::vector::scale(&self, -1.0)
            }
        }

        impl core::ops::Mul<f64> for $ty {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                $crate::vector::scale(&self, rhs)
            }
        }

        impl core::ops::Mul<$ty> for f64 {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                $crate::vector::scale(&rhs, self)
            }
        }

        /// Zero-guarded like [`crate::vector::inv_scale`].
        impl core::ops::Div<f64> for $ty {
            type Output = Self;
            fn div(self, rhs: f64) -> Self {
                $crate::vector::inv_scale(&self, rhs)
            }
        }

        impl core::ops::AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                $crate::vector::add_into(&mut self.data, &rhs);
            }
        }

        impl core::ops::SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                $crate::vector::sub_into(&mut self.data, &rhs);
            }
        }

        impl core::ops::MulAssign<f64> for $ty {
            fn mul_assign(&mut self, rhs: f64) {
                $crate::vector::scale_into(&mut self.data, rhs);
            }
        }

        impl core::ops::DivAssign<f64> for $ty {
            fn div_assign(&mut self, rhs: f64) {
                $crate::vector::inv_scale_into(&mut self.data, rhs);
            }
        }
    };
}

/// Implements the in-place, chainable methods shared by every vector type.
///
/// Methods named after a verb mutate `self` and return it for chaining;
/// the pure forms live on the free functions and operators.
macro_rules! impl_vector_methods {
    ($ty:ident) => {
        impl $ty {
            /// Returns an iterator over the components.
            pub fn iter(&self) -> core::slice::Iter<'_, f64> {
                self.data.iter()
            }

            /// Adds `other` component-wise (mixed arity allowed).
            pub fn add<V: $crate::vector::VectorLike + ?Sized>(&mut self, other: &V) -> &mut Self {
                $crate::vector::add_into(&mut self.data, other);
                self
            }

            /// Subtracts `other` component-wise (mixed arity allowed).
            pub fn sub<V: $crate::vector::VectorLike + ?Sized>(&mut self, other: &V) -> &mut Self {
                $crate::vector::sub_into(&mut self.data, other);
                self
            }

            /// Adds `value` to every component.
            pub fn add_scalar(&mut self, value: f64) -> &mut Self {
                $crate::vector::add_scalar_into(&mut self.data, value);
                self
            }

            /// Multiplies every component by `factor`.
            pub fn scale(&mut self, factor: f64) -> &mut Self {
                $crate::vector::scale_into(&mut self.data, factor);
                self
            }

            /// Divides every component by `divisor`; zero yields the zero vector.
            pub fn inv_scale(&mut self, divisor: f64) -> &mut Self {
                $crate::vector::inv_scale_into(&mut self.data, divisor);
                self
            }

            /// Scales to unit length. A zero vector becomes NaN.
            pub fn normalize(&mut self) -> &mut Self {
                $crate::vector::normalize_into(&mut self.data);
                self
            }

            /// Returns a unit-length copy. A zero vector becomes NaN.
            pub fn normalized(&self) -> Self {
                $crate::vector::normalize(self)
            }

            /// Interpolates toward `target` by `t` (unclamped).
            pub fn lerp<V: $crate::vector::VectorLike + ?Sized>(&mut self, target: &V, t: f64) -> &mut Self {
                $crate::vector::lerp_into(&mut self.data, target, t);
                self
            }

            /// Moves each axis toward `target` by at most the matching axis of
            /// `amount`.
            pub fn approach<T, A>(&mut self, target: &T, amount: &A) -> &mut Self
            where
                T: $crate::vector::VectorLike + ?Sized,
                A: $crate::vector::VectorLike + ?Sized,
            {
                $crate::vector::approach_into(&mut self.data, target, amount);
                self
            }

            /// Clamps each axis between the matching axes of `min` and `max`.
            pub fn clamp<L, H>(&mut self, min: &L, max: &H) -> &mut Self
            where
                L: $crate::vector::VectorLike + ?Sized,
                H: $crate::vector::VectorLike + ?Sized,
            {
                $crate::vector::clamp_into(&mut self.data, min, max);
                self
            }

            /// Dot product over this vector's arity.
            pub fn dot<V: $crate::vector::VectorLike + ?Sized>(&self, other: &V) -> f64 {
                $crate::vector::dot(self, other)
            }

            /// Euclidean norm.
            pub fn length(&self) -> f64 {
                $crate::vector::length(self)
            }

            /// Alias of [`Self::length`].
            pub fn magnitude(&self) -> f64 {
                self.length()
            }

            /// Squared Euclidean norm.
            pub fn length_sq(&self) -> f64 {
                $crate::vector::length_sq(self)
            }

            /// Distance to another point.
            pub fn distance<V: $crate::vector::VectorLike + ?Sized>(&self, other: &V) -> f64 {
                $crate::vector::distance(self, other)
            }

            /// Squared distance to another point.
            pub fn distance_sq<V: $crate::vector::VectorLike + ?Sized>(&self, other: &V) -> f64 {
                $crate::vector::distance_sq(self, other)
            }

            /// Tolerant equality; see [`crate::vector::equal`].
            pub fn equal<V: $crate::vector::VectorLike + ?Sized>(&self, other: &V) -> bool {
                $crate::vector::equal(self, other)
            }
        }
    };
}

pub(crate) use impl_vector_methods;
pub(crate) use impl_vector_ops;

mod vec2;
mod vec3;
mod vec4;
