// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Three-component vector algebra
//!
//! [`Vector3`] is a plain value type used for positions (m), velocities
//! (m/s), accelerations (m/s²) and forces (N). Every operation returns a new
//! vector; nothing mutates through a shared reference.
//!
//! # Angle convention
//!
//! A vector can be built from a length and two angles:
//!
//! ```text
//! x = len * sin(zy) * cos(xy)
//! y = len * sin(zy) * sin(xy)
//! z = len * cos(zy)
//! ```
//!
//! Recovering the angles uses a plain arctangent of the ratio, not `atan2`.
//! A zero denominator yields exactly π/2 regardless of the sign of the
//! numerator, so the recovered angles lose quadrant information.

use crate::real::{Real, PI};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// 3D vector with [`Real`] components
///
/// # Examples
///
/// ```
/// use sphere_physics::vector::Vector3;
///
/// let v = Vector3::new(3.0, 4.0, 0.0);
/// assert_eq!(v.length(), 5.0);
/// assert!(v.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// X component
    pub x: Real,
    /// Y component
    pub y: Real,
    /// Z component
    pub z: Real,
}

impl Vector3 {
    /// The zero vector
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a new vector from its components
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Vector3 { x, y, z }
    }

    /// Create a vector with all three components set to `value`
    pub const fn splat(value: Real) -> Self {
        Vector3::new(value, value, value)
    }

    /// Create a vector from a length, an XOY angle and a ZOY angle
    ///
    /// `zy_angle` is measured from the +Z axis, `xy_angle` from the +X axis
    /// within the XOY plane. Both are in radians.
    ///
    /// ```
    /// use sphere_physics::real::PI;
    /// use sphere_physics::vector::Vector3;
    ///
    /// let v = Vector3::from_spherical(2.0, 0.0, PI / 2.0);
    /// assert!((v.x - 2.0).abs() < 1e-6);
    /// assert!(v.z.abs() < 1e-6);
    /// ```
    pub fn from_spherical(length: Real, xy_angle: Real, zy_angle: Real) -> Self {
        Vector3 {
            x: length * zy_angle.sin() * xy_angle.cos(),
            y: length * zy_angle.sin() * xy_angle.sin(),
            z: length * zy_angle.cos(),
        }
    }

    /// Create a vector from an array
    pub fn from_array(arr: [Real; 3]) -> Self {
        Vector3::new(arr[0], arr[1], arr[2])
    }

    /// Get the vector as an array
    pub fn as_array(&self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length
    pub fn length(&self) -> Real {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Squared Euclidean length
    pub fn length_squared(&self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Distance between two points
    pub fn distance(a: Vector3, b: Vector3) -> Real {
        (a - b).length()
    }

    /// Dot product
    pub fn dot(&self, other: Vector3) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Angle of the projection onto the XOY plane, measured from +X
    ///
    /// Returns `atan(y / x)`, or exactly π/2 when `x == 0`.
    pub fn xy_angle(&self) -> Real {
        if self.x == 0.0 {
            return PI / 2.0;
        }
        (self.y / self.x).atan()
    }

    /// Angle from the +Z axis
    ///
    /// Returns `atan(sqrt(x² + y²) / z)`, or exactly π/2 when `z == 0`.
    pub fn zy_angle(&self) -> Real {
        if self.z == 0.0 {
            return PI / 2.0;
        }
        ((self.x * self.x + self.y * self.y).sqrt() / self.z).atan()
    }

    /// Check if all components are finite (not NaN or infinite)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Real> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Real) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<Real> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: Real) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<Real> for Vector3 {
    fn mul_assign(&mut self, rhs: Real) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}
