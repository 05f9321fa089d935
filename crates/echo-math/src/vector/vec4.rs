// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// 4D vector `(x, y, z, w)`.
///
/// Axis constants leave `w` at zero and share [`crate::Vector3`]'s y-up frame.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector4 {
    data: [f64; 4],
}

impl Vector4 {
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// `(1, 1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// `(1, 0, 0, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// `(-1, 0, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0, 0.0);

    /// `(0, 1, 0, 0)`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// `(0, -1, 0, 0)`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the components as an array.
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

    /// The `w` component.
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

    /// Sets the `w` component.
    pub fn set_w(&mut self, value: f64) -> &mut Self {
        self.data[3] = value;
        self
    }
}

crate::vector::impl_vector_ops!(Vector4, 4);
crate::vector::impl_vector_methods!(Vector4);
