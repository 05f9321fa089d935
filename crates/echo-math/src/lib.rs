// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-math: linear-algebra primitives for Echo tools and gameplay code.
//!
//! Fixed-size vectors ([`Vector2`], [`Vector3`], [`Vector4`]), [`Quaternion`]s,
//! small column-major matrices ([`Matrix2`], [`Matrix3`], [`Matrix4`]), scalar
//! helpers in [`scalar`], and a seeded [`Random`] generator. Everything is
//! `f64`; tolerant comparisons use [`EPSILON`].
//!
//! Mutating methods are named after a verb and return `&mut Self` so they
//! chain; pure variants are free functions, operators, or past-tense names
//! (`normalized`, `rotated`, `transposed`, `inverse`):
//!
//! ```
//! use echo_math::{vector, Vector3};
//! let mut v = Vector3::new(3.0, 0.0, 4.0);
//! let unit = v.normalized();
//! v.scale(2.0).add(&[1.0, 1.0]);
//! assert_eq!(v.to_array(), [7.0, 1.0, 8.0]);
//! assert!(vector::equal(&unit, &[0.6, 0.0, 0.8]));
//! ```
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod config;
/// Error type for fallible operations.
pub mod error;
pub mod matrix;
mod quat;
pub mod random;
pub mod scalar;
pub mod vector;

pub use config::{MathConfig, YAxis};
pub use error::MathError;
pub use matrix::{Matrix2, Matrix3, Matrix4, MatrixLike};
pub use quat::Quaternion;
pub use random::Random;
pub use scalar::EPSILON;
pub use vector::{Vector2, Vector3, Vector4, VectorLike, VectorLikeMut};
