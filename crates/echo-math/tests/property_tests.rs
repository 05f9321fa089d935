// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use echo_math::{scalar, vector, Matrix2, Matrix3, Quaternion, Random, Vector2, Vector3};

fn component() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn vec2() -> impl Strategy<Value = Vector2> {
    prop::array::uniform2(component()).prop_map(Vector2::from)
}

fn vec3() -> impl Strategy<Value = Vector3> {
    prop::array::uniform3(component()).prop_map(Vector3::from)
}

fn unit_axis() -> impl Strategy<Value = Vector3> {
    vec3()
        .prop_filter("axis must not be degenerate", |v| v.length() > 1e-3)
        .prop_map(|v| v.normalized())
}

fn rotation() -> impl Strategy<Value = Quaternion> {
    (unit_axis(), -3.0f64..3.0).prop_map(|(axis, angle)| Quaternion::from_axis_angle(axis, angle))
}

fn invertible_m2() -> impl Strategy<Value = Matrix2> {
    prop::array::uniform4(-10.0f64..10.0)
        .prop_map(Matrix2::from)
        .prop_filter("matrix must be well conditioned", |m| m.determinant().abs() > 0.5)
}

fn invertible_m3() -> impl Strategy<Value = Matrix3> {
    prop::array::uniform9(-10.0f64..10.0)
        .prop_map(Matrix3::from)
        .prop_filter("matrix must be well conditioned", |m| m.determinant().abs() > 1.0)
}

proptest! {
    #[test]
    fn add_is_commutative(a in vec3(), b in vec3()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(vector::add(&a, &b), vector::add(&b, &a));
    }

    #[test]
    fn mixed_arity_follows_first_operand(a in vec3(), b in vec2()) {
        let [ax, ay, az] = a.to_array();
        let [bx, by] = b.to_array();

        prop_assert_eq!(vector::add(&a, &b).to_array(), [ax + bx, ay + by, az]);
        prop_assert_eq!(vector::sub(&a, &b).to_array(), [ax - bx, ay - by, az]);
        prop_assert_eq!(vector::add(&b, &a).to_array(), [bx + ax, by + ay]);
        prop_assert_eq!(vector::sub(&b, &a).to_array(), [bx - ax, by - ay]);
    }

    #[test]
    fn cross_is_anti_commutative(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.cross(&b), -b.cross(&a));
        prop_assert_eq!(vector::cross_z(&a, &b), -vector::cross_z(&b, &a));
    }

    #[test]
    fn matrix2_inverse_round_trips(m in invertible_m2()) {
        prop_assert!((m.inverse() * m).equal(&Matrix2::IDENTITY));
        prop_assert!((m * m.inverse()).equal(&Matrix2::IDENTITY));
    }

    #[test]
    fn matrix3_inverse_round_trips(m in invertible_m3()) {
        prop_assert!((m.inverse() * m).equal(&Matrix3::IDENTITY));
        prop_assert!((m * m.inverse()).equal(&Matrix3::IDENTITY));
    }

    #[test]
    fn transpose_is_an_involution(cells in prop::array::uniform9(component())) {
        let m = Matrix3::from(cells);
        let mut t = m.transposed();
        t.transpose();
        prop_assert_eq!(t, m);
    }

    #[test]
    fn quaternion_composition_matches_sequential_rotation(
        q in rotation(),
        p in rotation(),
        v in vec3()
    ) {
        let composed = (q * p).rotate_vector(&v);
        let sequential = q.rotate_vector(&p.rotate_vector(&v));
        prop_assert!(
            composed.distance(&sequential) < 1e-9 * (1.0 + v.length()),
            "{:?} vs {:?}", composed, sequential
        );
    }

    #[test]
    fn rotations_preserve_length(axis in unit_axis(), angle in -6.0f64..6.0, v in vec3()) {
        let by_matrix = Matrix3::rotate(axis, angle).transform(&v);
        let by_quat = Quaternion::from_axis_angle(axis, angle).rotate_vector(&v);
        prop_assert!((by_matrix.length() - v.length()).abs() < 1e-9 * (1.0 + v.length()));
        prop_assert!(by_matrix.distance(&by_quat) < 1e-9 * (1.0 + v.length()));
    }

    #[test]
    fn slerp_hits_both_endpoints(a in rotation(), b in rotation()) {
        prop_assert!(Quaternion::slerp(&a, &b, 0.0).equal(&a));
        prop_assert!(Quaternion::slerp(&a, &b, 1.0).equal(&b));
        let mid = Quaternion::slerp(&a, &b, 0.5);
        prop_assert!((mid.length() - 1.0).abs() < 1e-9);
        let flipped = Quaternion::new(-b.x(), -b.y(), -b.z(), -b.w());
        prop_assert!((Quaternion::slerp(&a, &flipped, 0.5).length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn slerp_from_negated_target_is_same_rotation(a in rotation(), b in rotation(), t in 0.01f64..0.99) {
        let flipped = Quaternion::new(-b.x(), -b.y(), -b.z(), -b.w());
        let v = Vector3::new(0.3, -1.0, 2.0);
        let direct = Quaternion::slerp(&a, &b, t).rotate_vector(&v);
        let via_flip = Quaternion::slerp(&a, &flipped, t).rotate_vector(&v);
        prop_assert!(direct.distance(&via_flip) < 1e-6, "{direct:?} vs {via_flip:?}");
    }

    #[test]
    fn wrapped_angles_stay_in_half_open_turn(angle in -1000.0f64..1000.0) {
        let wrapped = scalar::wrap_angle(angle);
        prop_assert!(wrapped > -core::f64::consts::PI - 1e-12);
        prop_assert!(wrapped <= core::f64::consts::PI + 1e-12);
        prop_assert!(scalar::equal(wrapped.sin(), angle.sin()));
        prop_assert!(scalar::equal(wrapped.cos(), angle.cos()));
    }
}

// Random-vector properties run under a pinned seed so a failure reproduces
// byte-for-byte on every machine. To explore other seeds locally, change
// `SEED_BYTES` or set PROPTEST_SEED.
#[test]
fn proptest_seed_pinned_random_vectors() {
    const SEED_BYTES: [u8; 32] = [
        0x5e, 0xed, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];

    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::default(), rng);

    let prop = (any::<u64>(), -50i64..50, 0i64..50);

    runner
        .run(&prop, |(seed, lo, width)| {
            let mut rng = Random::new(seed);
            for _ in 0..16 {
                let v2 = rng.vec2();
                prop_assert!((v2.length() - 1.0).abs() < 1e-9);
                let v3 = rng.vec3();
                prop_assert!((v3.length() - 1.0).abs() < 1e-9);
                let f = rng.float();
                prop_assert!((0.0..1.0).contains(&f));
                let i = rng.int(lo, lo + width);
                prop_assert!((lo..=lo + width).contains(&i));
            }
            let mut again = Random::new(seed);
            let mut first = Random::new(seed);
            prop_assert_eq!(again.float().to_bits(), first.float().to_bits());
            Ok(())
        })
        .expect("pinned-seed random vector properties");
}
