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
//! Physical object model
//!
//! A [`PhysicalObject`] is a point-like sphere: kinematic state (position,
//! velocity), mass, and geometry (radius with derived cross-section area and
//! volume). Geometry feeds drag (area) and buoyancy (volume).
//!
//! # Geometry setters
//!
//! Radius, area and volume are always set together. Whichever was set last
//! is authoritative:
//!
//! ```text
//! set_radius(r):  area = π·r²           volume = (4/3)·π·r³
//! set_area(a):    radius = √a / π       volume = a·(4/3)·radius
//! set_volume(v):  radius = ∛v·(3/4)/π   area = π·radius²
//! ```
//!
//! `set_area` and `set_volume` are not inverses of the sphere formulas used
//! by `set_radius`. Existing scenes depend on these exact relations.
//!
//! # Force accumulator
//!
//! `force` is scratch space owned by the object. The scene overwrites it at
//! the start of every step and integration reads it; its value between
//! steps is whatever the last force phase left behind.

use crate::error::PhysResult;
use crate::integration;
use crate::real::{Real, PI};
use crate::vector::Vector3;

/// A spherical body with kinematic and geometric state
///
/// # Examples
///
/// ```
/// use sphere_physics::object::PhysicalObject;
/// use sphere_physics::vector::Vector3;
///
/// let mut ball = PhysicalObject::new(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0), 2.0, 0.5);
/// ball.force = Vector3::new(2.0, 0.0, 0.0);
/// ball.integrate(1.0).unwrap();
///
/// // a = 1 m/s², so x = v·t + a·t²/2 = 1.5
/// assert_eq!(ball.position.x, 1.5);
/// assert_eq!(ball.velocity.x, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalObject {
    /// Position in meters
    pub position: Vector3,
    /// Velocity in meters per second
    pub velocity: Vector3,
    /// Mass in kilograms
    ///
    /// Zero is accepted at construction but fails integration.
    pub mass: Real,
    /// Net force in Newtons, valid only between the force phase and the
    /// integration phase of one step
    pub force: Vector3,
    radius: Real,
    area: Real,
    volume: Real,
}

impl PhysicalObject {
    /// Create a new object, deriving area and volume from `radius`
    ///
    /// The force accumulator starts at zero.
    pub fn new(position: Vector3, velocity: Vector3, mass: Real, radius: Real) -> Self {
        let mut object = PhysicalObject {
            position,
            velocity,
            mass,
            force: Vector3::ZERO,
            radius: 0.0,
            area: 0.0,
            volume: 0.0,
        };
        object.set_radius(radius);
        object
    }

    /// Radius in meters
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Cross-section area in m²
    pub fn area(&self) -> Real {
        self.area
    }

    /// Volume in m³
    pub fn volume(&self) -> Real {
        self.volume
    }

    /// Set the radius and recompute area and volume
    pub fn set_radius(&mut self, radius: Real) {
        self.radius = radius;
        self.area = PI * radius * radius;
        self.volume = (4.0 / 3.0) * PI * radius * radius * radius;
    }

    /// Set the area and recompute radius and volume
    pub fn set_area(&mut self, area: Real) {
        self.radius = area.sqrt() / PI;
        self.area = area;
        self.volume = area * (4.0 / 3.0) * self.radius;
    }

    /// Set the volume and recompute radius and area
    pub fn set_volume(&mut self, volume: Real) {
        self.radius = volume.powf(1.0 / 3.0) * (3.0 / 4.0) / PI;
        self.area = PI * self.radius * self.radius;
        self.volume = volume;
    }

    /// Advance position and velocity by `dt` under the current `force`
    ///
    /// See [`integration::integrate`] for the update rule.
    ///
    /// # Errors
    ///
    /// [`PhysError::ZeroMass`](crate::error::PhysError::ZeroMass) if the mass
    /// is exactly zero. The object is left untouched.
    pub fn integrate(&mut self, dt: Real) -> PhysResult<()> {
        integration::integrate(self, dt)
    }

    /// Kinetic energy in Joules: 0.5·m·|v|²
    pub fn kinetic_energy(&self) -> Real {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Linear momentum in kg⋅m/s
    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass
    }

    /// Check if position and velocity are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
