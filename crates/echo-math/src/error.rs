// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors emitted by the math primitives.
///
/// Every variant describes a programmer error: a raw buffer of the wrong
/// shape, or an operation that does not exist yet. None of them is expected
/// at runtime in correct code, so callers typically propagate them with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A vector-like input did not have the expected number of components.
    #[error("not a valid {dim}D vector (got {actual} components)")]
    InvalidVector {
        /// Expected arity.
        dim: usize,
        /// Number of components actually supplied.
        actual: usize,
    },
    /// A matrix-like input did not have the expected number of cells.
    #[error("not a valid {dim}x{dim} matrix (expected {expected} elements, got {actual})")]
    InvalidMatrix {
        /// Expected dimension of the square matrix.
        dim: usize,
        /// Expected cell count (`dim * dim`).
        expected: usize,
        /// Number of cells actually supplied.
        actual: usize,
    },
    /// The operation exists in the API but has no implementation yet.
    #[error("{0} is not yet implemented")]
    NotImplemented(&'static str),
}

impl MathError {
    pub(crate) const fn invalid_matrix(dim: usize, actual: usize) -> Self {
        Self::InvalidMatrix {
            dim,
            expected: dim * dim,
            actual,
        }
    }
}
