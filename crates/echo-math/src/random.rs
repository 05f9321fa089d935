// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Seeded pseudo-random numbers for gameplay and tooling.
//!
//! [`Random`] layers the useful distributions (ranges, integers, angles, unit
//! vectors) over any [`UniformSource`]; the default source is [`Xorshift`].
//! Nothing here is cryptographically secure.
//!
//! # Default generator
//! The free functions ([`float`], [`range`], [`int`], [`bool`], [`angle`],
//! [`vec2`], [`vec3`]) draw from a process-wide generator that is created
//! lazily with [`DEFAULT_SEED`] on first use and is only ever reseeded by
//! [`reset_default`] or [`reset_default_from`].
//!
//! The default generator sits behind a mutex, so calling it from several
//! threads is memory-safe, but the threads then share (and interleave) one
//! sequence in whatever order they happen to lock it. Code that needs
//! reproducible output must own its own [`Random`]; instances share no state.

use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::config::MathConfig;
use crate::vector::{Vector2, Vector3};

/// Seed of the process-wide default generator.
pub const DEFAULT_SEED: u64 = 0xec40_5eed;

/// Source of uniformly distributed `f64` samples.
pub trait UniformSource {
    /// Next sample in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

/// `xorshift64` generator seeded through SplitMix64.
///
/// Matching seeds yield identical sequences on every platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift {
    state: u64,
}

impl Xorshift {
    /// Expands `seed` through SplitMix64 so that nearby seeds (0, 1, 2, ...)
    /// start from unrelated states.
    pub fn new(seed: u64) -> Self {
        let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        // xorshift never leaves the all-zero state.
        if z == 0 {
            z = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state: z }
    }

    /// Next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl UniformSource for Xorshift {
    /// Uses the high 53 bits so every representable step of the mantissa is
    /// equally likely.
    #[allow(clippy::cast_precision_loss)]
    fn next_uniform(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
        (self.next_u64() >> 11) as f64 * SCALE
    }
}

/// Distributions over a [`UniformSource`].
///
/// # Examples
/// ```
/// use echo_math::Random;
/// let mut a = Random::new(42);
/// let mut b = Random::new(42);
/// assert_eq!(a.int(1, 6), b.int(1, 6));
/// let v = a.vec2();
/// assert!((v.length() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Random<S = Xorshift> {
    source: S,
}

impl Random {
    /// Generator over [`Xorshift`] seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::from_source(Xorshift::new(seed))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl<S: UniformSource> Random<S> {
    /// Wraps an arbitrary source.
    pub const fn from_source(source: S) -> Self {
        Self { source }
    }

    /// Mutable access to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Uniform in `[0, 1)`.
    pub fn float(&mut self) -> f64 {
        self.source.next_uniform()
    }

    /// Uniform in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.float()
    }

    /// Uniform integer in `[min, max]`, both inclusive. Reversed bounds are
    /// swapped.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = (i128::from(hi) - i128::from(lo) + 1) as f64;
        let offset = (self.float() * span).floor() as i128;
        // Rounding in `span` can land one past the end for very wide ranges.
        i64::try_from(i128::from(lo) + offset).map_or(hi, |v| v.min(hi))
    }

    /// Fair coin.
    pub fn bool(&mut self) -> bool {
        self.float() < 0.5
    }

    /// `true` with probability `p`; `p <= 0` never, `p >= 1` always.
    pub fn chance(&mut self, p: f64) -> bool {
        self.float() < p
    }

    /// Angle in radians, uniform in `[-π, π)`.
    pub fn angle(&mut self) -> f64 {
        self.range(-core::f64::consts::PI, core::f64::consts::PI)
    }

    /// Angle in degrees, uniform in `[-180, 180)`.
    pub fn angle_deg(&mut self) -> f64 {
        self.range(-180.0, 180.0)
    }

    /// Unit 2D vector with a uniformly distributed direction.
    pub fn vec2(&mut self) -> Vector2 {
        Vector2::RIGHT.rotated(self.angle())
    }

    /// Unit 3D vector from three independent `[-1, 1)` samples, normalized.
    ///
    /// Directions are not exactly uniform on the sphere (the cube's corners
    /// are favoured). An all-zero draw would normalize to NaN.
    pub fn vec3(&mut self) -> Vector3 {
        let v = Vector3::new(
            self.range(-1.0, 1.0),
            self.range(-1.0, 1.0),
            self.range(-1.0, 1.0),
        );
        v.normalized()
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let last = items.len().checked_sub(1)?;
        let index = (self.float() * items.len() as f64).floor() as usize;
        items.get(index.min(last))
    }
}

static DEFAULT: Lazy<Mutex<Random>> = Lazy::new(|| {
    debug!(seed = DEFAULT_SEED, "creating default random generator");
    Mutex::new(Random::new(DEFAULT_SEED))
});

/// Runs `f` against the process-wide default generator.
///
/// A panic inside another holder does not poison the generator; its state is
/// still a valid xorshift state.
pub fn with_default<R>(f: impl FnOnce(&mut Random) -> R) -> R {
    let mut guard = DEFAULT.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}

/// Reseeds the default generator. Instances built with [`Random::new`] are
/// unaffected.
pub fn reset_default(seed: u64) {
    debug!(seed, "resetting default random generator");
    with_default(|rng| *rng = Random::new(seed));
}

/// Reseeds the default generator from [`MathConfig::random_seed`].
pub fn reset_default_from(config: &MathConfig) {
    reset_default(config.random_seed);
}

/// [`Random::float`] on the default generator.
pub fn float() -> f64 {
    with_default(Random::float)
}

/// [`Random::range`] on the default generator.
pub fn range(min: f64, max: f64) -> f64 {
    with_default(|rng| rng.range(min, max))
}

/// [`Random::int`] on the default generator.
pub fn int(min: i64, max: i64) -> i64 {
    with_default(|rng| rng.int(min, max))
}

/// [`Random::bool`] on the default generator.
pub fn bool() -> bool {
    with_default(Random::bool)
}

/// [`Random::angle`] on the default generator.
pub fn angle() -> f64 {
    with_default(Random::angle)
}

/// [`Random::vec2`] on the default generator.
pub fn vec2() -> Vector2 {
    with_default(Random::vec2)
}

/// [`Random::vec3`] on the default generator.
pub fn vec3() -> Vector3 {
    with_default(Random::vec3)
}
