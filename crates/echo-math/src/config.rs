// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Crate-level configuration.
//!
//! The math itself is configuration-free; this only gathers the choices a
//! host application has to make once (which way is "up" in 2D, and how the
//! random generators it builds are seeded). With the `serde` feature the
//! struct can be stored alongside other tool preferences.

use crate::random::{Random, DEFAULT_SEED};
use crate::vector::Vector2;

/// Vertical convention for 2D directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum YAxis {
    /// Screen space: `y` grows downward, so up is `(0, -1)`.
    #[default]
    Down,
    /// Math space: `y` grows upward, so up is `(0, 1)`.
    Up,
}

/// Host-level math settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MathConfig {
    /// Vertical convention used by [`MathConfig::up`] and [`MathConfig::down`].
    pub y_axis: YAxis,
    /// Seed for generators built from this config.
    pub random_seed: u64,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            y_axis: YAxis::default(),
            random_seed: DEFAULT_SEED,
        }
    }
}

impl MathConfig {
    /// 2D up for the configured convention.
    pub const fn up(&self) -> Vector2 {
        Vector2::up(self.y_axis)
    }

    /// 2D down for the configured convention.
    pub const fn down(&self) -> Vector2 {
        Vector2::down(self.y_axis)
    }

    /// Builds a fresh generator seeded with [`MathConfig::random_seed`].
    pub fn random(&self) -> Random {
        Random::new(self.random_seed)
    }
}
