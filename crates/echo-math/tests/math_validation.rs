// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Literal-value validation harness.
//!
//! Keeps scalar, vector, matrix, and quaternion results pinned to the
//! documented fixtures so behavioural drift shows up as a test failure.

use once_cell::sync::Lazy;
use serde::Deserialize;

use echo_math::matrix::{determinant_m2, determinant_m3};
use echo_math::{scalar, vector, Matrix2, Matrix3, Quaternion};

static RAW_FIXTURES: &str = include_str!("fixtures/math-fixtures.json");

static FIXTURES: Lazy<MathFixtures> = Lazy::new(|| {
    let fixtures: MathFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse math fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct MathFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    scalars: ScalarFixtures,
    vectors: VectorFixtures,
    matrices: MatrixFixtures,
    quaternions: QuaternionFixtures,
}

impl MathFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(!slice.is_empty(), "math fixtures set '{name}' must not be empty");
        }

        ensure("scalars.clamp", &self.scalars.clamp);
        ensure("scalars.lerp", &self.scalars.lerp);
        ensure("scalars.remap", &self.scalars.remap);
        ensure("scalars.deg_to_rad", &self.scalars.deg_to_rad);
        ensure("scalars.wrap_angle_deg", &self.scalars.wrap_angle_deg);
        ensure("vectors.add", &self.vectors.add);
        ensure("vectors.sub", &self.vectors.sub);
        ensure("vectors.length", &self.vectors.length);
        ensure("matrices.determinant2", &self.matrices.determinant2);
        ensure("matrices.determinant3", &self.matrices.determinant3);
        ensure("quaternions.inverse", &self.quaternions.inverse);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f64,
}

impl Tolerance {
    const fn default_absolute() -> f64 {
        1e-9
    }

    fn assert_close(&self, actual: f64, expected: f64, context: &str) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= self.absolute,
            "{context}: expected {expected}, got {actual} (diff {diff})"
        );
    }

    fn assert_close_all(&self, actual: &[f64], expected: &[f64], context: &str) {
        assert_eq!(actual.len(), expected.len(), "{context}: arity mismatch");
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            self.assert_close(*a, *e, &format!("{context}[{i}]"));
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScalarFixtures {
    clamp: Vec<ClampFixture>,
    lerp: Vec<LerpFixture>,
    remap: Vec<RemapFixture>,
    deg_to_rad: Vec<UnaryFixture>,
    wrap_angle_deg: Vec<UnaryFixture>,
}

#[derive(Debug, Deserialize)]
struct ClampFixture {
    value: f64,
    min: f64,
    max: f64,
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct LerpFixture {
    a: f64,
    b: f64,
    t: f64,
    expected: f64,
    clamped: f64,
}

#[derive(Debug, Deserialize)]
struct RemapFixture {
    value: f64,
    from: [f64; 2],
    to: [f64; 2],
    expected: f64,
    clamped: f64,
}

#[derive(Debug, Deserialize)]
struct UnaryFixture {
    value: f64,
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct VectorFixtures {
    add: Vec<VectorBinaryFixture>,
    sub: Vec<VectorBinaryFixture>,
    length: Vec<VectorLengthFixture>,
}

#[derive(Debug, Deserialize)]
struct VectorBinaryFixture {
    a: Vec<f64>,
    b: Vec<f64>,
    expected: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct VectorLengthFixture {
    v: Vec<f64>,
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct MatrixFixtures {
    determinant2: Vec<DeterminantFixture>,
    determinant3: Vec<DeterminantFixture>,
}

#[derive(Debug, Deserialize)]
struct DeterminantFixture {
    rows: Vec<Vec<f64>>,
    expected: f64,
}

impl DeterminantFixture {
    /// Flattens the row-major fixture into column-major cells.
    fn column_major(&self) -> Vec<f64> {
        let n = self.rows.len();
        let mut cells = vec![0.0; n * n];
        for (row, values) in self.rows.iter().enumerate() {
            assert_eq!(values.len(), n, "fixture matrix must be square");
            for (col, value) in values.iter().enumerate() {
                cells[col * n + row] = *value;
            }
        }
        cells
    }
}

#[derive(Debug, Deserialize)]
struct QuaternionFixtures {
    inverse: Vec<QuaternionInverseFixture>,
}

#[derive(Debug, Deserialize)]
struct QuaternionInverseFixture {
    q: [f64; 4],
    expected: [f64; 4],
}

#[test]
fn scalar_fixtures_all_match() {
    let fx = &*FIXTURES;
    let tol = &fx.tolerance;

    for case in &fx.scalars.clamp {
        let actual = scalar::clamp(case.value, case.min, case.max);
        tol.assert_close(actual, case.expected, &format!("clamp({case:?})"));
    }

    for case in &fx.scalars.lerp {
        let ctx = format!("lerp({case:?})");
        tol.assert_close(scalar::lerp(case.a, case.b, case.t), case.expected, &ctx);
        tol.assert_close(scalar::lerp_clamp(case.a, case.b, case.t), case.clamped, &ctx);
    }

    for case in &fx.scalars.remap {
        let ctx = format!("remap({case:?})");
        let [from_min, from_max] = case.from;
        let [to_min, to_max] = case.to;
        let plain = scalar::remap(case.value, from_min, from_max, to_min, to_max);
        let clamped = scalar::remap_clamp(case.value, from_min, from_max, to_min, to_max);
        tol.assert_close(plain, case.expected, &ctx);
        tol.assert_close(clamped, case.clamped, &ctx);
    }

    for case in &fx.scalars.deg_to_rad {
        let ctx = format!("deg_to_rad({case:?})");
        tol.assert_close(scalar::deg_to_rad(case.value), case.expected, &ctx);
        tol.assert_close(scalar::rad_to_deg(case.expected), case.value, &ctx);
    }

    for case in &fx.scalars.wrap_angle_deg {
        let actual = scalar::wrap_angle_deg(case.value);
        tol.assert_close(actual, case.expected, &format!("wrap_angle_deg({case:?})"));
    }
}

#[test]
fn vector_fixtures_follow_first_operand_arity() {
    let fx = &*FIXTURES;
    let tol = &fx.tolerance;

    for case in &fx.vectors.add {
        let actual = vector::add(&case.a, &case.b);
        tol.assert_close_all(&actual, &case.expected, &format!("add({case:?})"));
    }

    for case in &fx.vectors.sub {
        let actual = vector::sub(&case.a, &case.b);
        tol.assert_close_all(&actual, &case.expected, &format!("sub({case:?})"));
    }

    for case in &fx.vectors.length {
        let ctx = format!("length({case:?})");
        tol.assert_close(vector::length(&case.v), case.expected, &ctx);
        tol.assert_close(vector::length_sq(&case.v), case.expected * case.expected, &ctx);
    }
}

#[test]
fn matrix_determinant_fixtures() {
    let fx = &*FIXTURES;
    let tol = &fx.tolerance;

    for case in &fx.matrices.determinant2 {
        let ctx = format!("determinant2({case:?})");
        let cells = case.column_major();
        let raw = determinant_m2(&cells).expect("2x2 fixture");
        tol.assert_close(raw, case.expected, &ctx);
        let m = Matrix2::try_from(cells.as_slice()).expect("2x2 fixture");
        tol.assert_close(m.determinant(), case.expected, &ctx);
    }

    for case in &fx.matrices.determinant3 {
        let ctx = format!("determinant3({case:?})");
        let cells = case.column_major();
        let raw = determinant_m3(&cells).expect("3x3 fixture");
        tol.assert_close(raw, case.expected, &ctx);
        let m = Matrix3::try_from(cells.as_slice()).expect("3x3 fixture");
        tol.assert_close(m.determinant(), case.expected, &ctx);
    }
}

#[test]
fn quaternion_inverse_fixtures() {
    let fx = &*FIXTURES;
    let tol = &fx.tolerance;

    for case in &fx.quaternions.inverse {
        let ctx = format!("inverse({case:?})");
        let q = Quaternion::from(case.q);
        tol.assert_close_all(&q.inverse().to_array(), &case.expected, &ctx);

        let mut round_trip = q;
        round_trip.multiply(&q.inverse());
        assert!(round_trip.equal(&Quaternion::IDENTITY), "{ctx}: q × q⁻¹ != identity");
    }
}
