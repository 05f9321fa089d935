// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// 3D vector `(x, y, z)` in a right-handed, y-up frame.
///
/// * Components may represent either points or directions depending on the
///   calling context; [`crate::Matrix3`] transforms both the same way.
/// * [`Vector3::FORWARD`] points along `+z`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector3 {
    data: [f64; 3],
}

impl Vector3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// `(1, 0, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    /// `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// `(0, 1, 0)`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// `(0, 0, 1)`.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// `(0, 0, -1)`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 3] {
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

    /// Cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        crate::vector::cross(self, other)
    }
}

crate::vector::impl_vector_ops!(Vector3, 3);
crate::vector::impl_vector_methods!(Vector3);
