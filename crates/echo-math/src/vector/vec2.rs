// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::config::YAxis;
use crate::vector::cross_z;

/// 2D vector `(x, y)`.
///
/// * The default value is the zero vector.
/// * [`Vector2::UP`] and [`Vector2::DOWN`] follow screen space (`y` grows
///   downward). Callers working in math space use [`Vector2::MATH_UP`] /
///   [`Vector2::MATH_DOWN`], or pick by convention with [`Vector2::up`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector2 {
    data: [f64; 2],
}

impl Vector2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// `(1, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// `(-1, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0);

    /// Screen-space up, `(0, -1)`.
    pub const UP: Self = Self::new(0.0, -1.0);

    /// Screen-space down, `(0, 1)`.
    pub const DOWN: Self = Self::new(0.0, 1.0);

    /// Math-space up, `(0, 1)`.
    pub const MATH_UP: Self = Self::new(0.0, 1.0);

    /// Math-space down, `(0, -1)`.
    pub const MATH_DOWN: Self = Self::new(0.0, -1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 2] {
        self.data
    }

    /// Up for the given vertical convention.
    pub const fn up(axis: YAxis) -> Self {
        match axis {
            YAxis::Down => Self::UP,
            YAxis::Up => Self::MATH_UP,
        }
    }

    /// Down for the given vertical convention.
    pub const fn down(axis: YAxis) -> Self {
        match axis {
            YAxis::Down => Self::DOWN,
            YAxis::Up => Self::MATH_DOWN,
        }
    }

    /// The `x` component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// The `y` component.
    pub const fn y(&self) -> f64 {
        self.data[1]
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

    /// The 2D cross product: `z` of the 3D cross with `z = 0` inputs.
    pub fn cross(&self, other: &Self) -> f64 {
        cross_z(self, other)
    }

    /// Rotates counter-clockwise (in math space) by `angle` radians.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let [x, y] = self.data;
        self.data = [x * c - y * s, x * s + y * c];
        self
    }

    /// Returns a copy rotated by `angle` radians.
    pub fn rotated(&self, angle: f64) -> Self {
        let mut out = *self;
        out.rotate(angle);
        out
    }

    /// Angle of the vector from the positive `x` axis, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y().atan2(self.x())
    }
}

crate::vector::impl_vector_ops!(Vector2, 2);
crate::vector::impl_vector_methods!(Vector2);
