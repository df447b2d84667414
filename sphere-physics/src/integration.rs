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
//! Motion integration and whole-collection diagnostics
//!
//! The engine holds each object's net force constant for the duration of a
//! step, so motion within the step has constant acceleration and the
//! closed-form kinematic update is exact:
//!
//! ```text
//! a        = F / m
//! x(t+dt)  = x(t) + (v(t) + a·dt/2)·dt
//! v(t+dt)  = v(t) + a·dt
//! ```
//!
//! Accuracy across steps is therefore bounded only by how quickly the force
//! changes between steps (drag, mutual gravity), which callers control
//! through the step size.

use crate::error::{PhysError, PhysResult};
use crate::object::PhysicalObject;
use crate::real::Real;
use crate::vector::Vector3;

/// Advance one object by `dt` under its current force
///
/// The force accumulator is read but not cleared.
///
/// # Errors
///
/// Returns [`PhysError::ZeroMass`] with index 0 if the mass is exactly
/// zero, before any state is modified. Callers stepping a collection
/// replace the index with the object's position in it.
pub fn integrate(object: &mut PhysicalObject, dt: Real) -> PhysResult<()> {
    if object.mass == 0.0 {
        return Err(PhysError::ZeroMass { object: 0 });
    }

    let acceleration = object.force / object.mass;

    object.position += (object.velocity + acceleration * dt * 0.5) * dt;
    object.velocity += acceleration * dt;

    Ok(())
}

/// Total kinetic energy of a collection of objects
pub fn total_kinetic_energy(objects: &[PhysicalObject]) -> Real {
    objects.iter().map(PhysicalObject::kinetic_energy).sum()
}

/// Total linear momentum of a collection of objects
pub fn total_momentum(objects: &[PhysicalObject]) -> Vector3 {
    objects
        .iter()
        .fold(Vector3::ZERO, |acc, obj| acc + obj.momentum())
}

/// Mass-weighted mean position of a collection of objects
///
/// Returns `None` for an empty collection or one whose masses sum to zero.
pub fn center_of_mass(objects: &[PhysicalObject]) -> Option<Vector3> {
    let total_mass: Real = objects.iter().map(|obj| obj.mass).sum();
    if total_mass == 0.0 {
        return None;
    }

    let weighted = objects
        .iter()
        .fold(Vector3::ZERO, |acc, obj| acc + obj.position * obj.mass);
    Some(weighted / total_mass)
}
