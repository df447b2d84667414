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
//! Per-object net force computation
//!
//! The net force on an object is the sum of three terms:
//!
//! - **Drag**: `F = ½·ρ·|v_rel|²·A·Cd`, opposing the velocity relative to
//!   the wind. Skipped when the relative speed is exactly zero.
//! - **Background gravity**: `F = g·m_eff`, where the effective mass
//!   `m_eff = m − V·ρ` folds buoyancy in. A body denser than the fluid
//!   sinks, a matched one floats, a lighter one (negative `m_eff`) rises.
//! - **Mutual gravity** (optional): `F = G·m_eff₁·m_eff₂ / r²` toward every
//!   other object, summed over all of them in index order.
//!
//! There is no softening. Two coincident objects make the pairwise term
//! singular and abort the computation with [`PhysError::ZeroDistance`].

use super::Environment;
use crate::error::{PhysError, PhysResult};
use crate::object::PhysicalObject;
use crate::real::{Real, BALL_DRAG_COEF, G};
use crate::vector::Vector3;

/// Mass of `object` minus the mass of the fluid it displaces
pub fn effective_mass(object: &PhysicalObject, density: Real) -> Real {
    object.mass - object.volume() * density
}

/// Aerodynamic drag vector acting on `object`
///
/// Points along the velocity relative to the wind; the caller subtracts it.
fn drag(env: &Environment, object: &PhysicalObject) -> Vector3 {
    let relative_velocity = object.velocity - env.wind;
    let speed = relative_velocity.length();

    if speed == 0.0 {
        return Vector3::ZERO;
    }

    let magnitude = object.area() * env.density * speed * speed * 0.5 * BALL_DRAG_COEF;
    relative_velocity * (magnitude / speed)
}

/// Gravitational pull term between `object` and `other`
///
/// Returns the displacement-scaled vector to subtract from the object's
/// force, or `None` when the two positions coincide.
fn pairwise_gravity(
    env: &Environment,
    object: &PhysicalObject,
    object_effective_mass: Real,
    other: &PhysicalObject,
) -> Option<Vector3> {
    let displacement = object.position - other.position;
    let distance = displacement.length();

    if distance == 0.0 {
        return None;
    }

    let magnitude =
        object_effective_mass * effective_mass(other, env.density) * G / (distance * distance);
    Some(displacement * (magnitude / distance))
}

/// Compute the net force on `objects[index]` into `force`
///
/// `force` is reset to zero first, then drag, background gravity and the
/// pull of every other object are added in that order. Reads positions,
/// velocities and geometry from `objects` without modifying anything, so
/// every object in a step sees the same snapshot.
///
/// # Errors
///
/// [`PhysError::ZeroDistance`] for the first other object, in index order,
/// that shares this object's position while mutual gravity is enabled.
/// `force` then holds the sum accumulated up to that object.
pub(crate) fn accumulate_net_force(
    env: &Environment,
    objects: &[PhysicalObject],
    index: usize,
    force: &mut Vector3,
) -> PhysResult<()> {
    *force = Vector3::ZERO;

    let object = &objects[index];
    let object_effective_mass = effective_mass(object, env.density);

    *force -= drag(env, object);
    *force += env.background_gravity * object_effective_mass;

    if env.gravity_enabled && objects.len() > 1 {
        for (other_index, other) in objects.iter().enumerate() {
            if other_index == index {
                continue;
            }

            match pairwise_gravity(env, object, object_effective_mass, other) {
                Some(pull) => *force -= pull,
                None => {
                    return Err(PhysError::ZeroDistance {
                        object: index,
                        other: other_index,
                    })
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::real::PI;

    fn ball(position: Vector3, velocity: Vector3, mass: Real, radius: Real) -> PhysicalObject {
        PhysicalObject::new(position, velocity, mass, radius)
    }

    fn net_force(env: &Environment, objects: &[PhysicalObject], index: usize) -> PhysResult<Vector3> {
        let mut force = Vector3::splat(Real::NAN);
        accumulate_net_force(env, objects, index, &mut force).map(|()| force)
    }

    #[test]
    fn test_vacuum_background_gravity() {
        let env = Environment::vacuum().with_background_gravity(Vector3::new(0.0, -10.0, 0.0));
        let objects = [ball(Vector3::ZERO, Vector3::new(5.0, 0.0, 0.0), 2.0, 1.0)];

        let force = net_force(&env, &objects, 0).unwrap();
        assert_eq!(force, Vector3::new(0.0, -20.0, 0.0));
    }

    #[test]
    fn test_drag_opposes_relative_velocity() {
        let env = Environment::vacuum()
            .with_density(1.0)
            .with_wind(Vector3::new(1.0, 0.0, 0.0));
        // Weightless in the fluid, so only drag remains
        let mut obj = ball(Vector3::ZERO, Vector3::new(3.0, 0.0, 0.0), 0.0, 1.0);
        obj.mass = obj.volume();

        let force = net_force(&env, &[obj], 0).unwrap();
        let expected = PI * 1.0 * 2.0 * 2.0 * 0.5 * BALL_DRAG_COEF;
        assert!((force.x + expected).abs() < expected * 4.0 * Real::EPSILON, "drag = {:?}", force);
        assert_eq!(force.y, 0.0);
        assert_eq!(force.z, 0.0);
    }

    #[test]
    fn test_no_drag_when_moving_with_wind() {
        let wind = Vector3::new(2.0, -1.0, 0.5);
        let env = Environment::vacuum().with_density(1.225).with_wind(wind);
        let objects = [ball(Vector3::ZERO, wind, 1.0, 0.0)];

        assert_eq!(net_force(&env, &objects, 0).unwrap(), Vector3::ZERO);
    }

    #[test]
    fn test_buoyancy_inverts_gravity_for_light_objects() {
        let env = Environment::earth();
        // One cubic meter of something much lighter than air
        let mut obj = ball(Vector3::ZERO, Vector3::ZERO, 0.1, 0.0);
        obj.set_radius((3.0 / (4.0 * PI)).powf(1.0 / 3.0));

        let force = net_force(&env, &[obj], 0).unwrap();
        assert!(force.y > 0.0, "light object should rise, got {:?}", force);
    }

    #[test]
    fn test_mutual_gravity_is_attractive_and_symmetric() {
        let env = Environment::vacuum().with_mutual_gravity(true);
        let objects = [
            ball(Vector3::new(-1.0, 0.0, 0.0), Vector3::ZERO, 1e10, 0.0),
            ball(Vector3::new(1.0, 0.0, 0.0), Vector3::ZERO, 1e10, 0.0),
        ];

        let f0 = net_force(&env, &objects, 0).unwrap();
        let f1 = net_force(&env, &objects, 1).unwrap();
        let expected = G * 1e10 * 1e10 / 4.0;

        assert!((f0.x - expected).abs() < expected * 4.0 * Real::EPSILON);
        assert_eq!(f0.x, -f1.x);
    }

    #[test]
    fn test_mutual_gravity_disabled_ignores_coincidence() {
        let env = Environment::vacuum();
        let objects = [
            ball(Vector3::ZERO, Vector3::ZERO, 1.0, 0.0),
            ball(Vector3::ZERO, Vector3::ZERO, 1.0, 0.0),
        ];
        assert_eq!(net_force(&env, &objects, 0), Ok(Vector3::ZERO));
    }

    #[test]
    fn test_zero_distance_reports_first_pair() {
        let env = Environment::vacuum().with_mutual_gravity(true);
        let objects = [
            ball(Vector3::new(1.0, 0.0, 0.0), Vector3::ZERO, 1.0, 0.0),
            ball(Vector3::ZERO, Vector3::ZERO, 1.0, 0.0),
            ball(Vector3::ZERO, Vector3::ZERO, 1.0, 0.0),
        ];

        assert!(net_force(&env, &objects, 0).is_ok());
        assert_eq!(
            net_force(&env, &objects, 1),
            Err(PhysError::ZeroDistance { object: 1, other: 2 })
        );
        assert_eq!(
            net_force(&env, &objects, 2),
            Err(PhysError::ZeroDistance { object: 2, other: 1 })
        );
    }

    #[test]
    fn test_failed_computation_keeps_partial_sum() {
        let env = Environment::earth().with_mutual_gravity(true);
        let objects = [
            ball(Vector3::ZERO, Vector3::new(1.0, 2.0, 0.0), 5.0, 0.1),
            ball(Vector3::new(10.0, 0.0, 0.0), Vector3::ZERO, 1e12, 0.0),
            ball(Vector3::ZERO, Vector3::ZERO, 1.0, 0.0),
        ];

        // Drag, background gravity and the pull of object 1, but not object 2
        let expected = net_force(&env, &objects[..2], 0).unwrap();

        let mut force = Vector3::splat(123.0);
        assert_eq!(
            accumulate_net_force(&env, &objects, 0, &mut force),
            Err(PhysError::ZeroDistance { object: 0, other: 2 })
        );
        assert_eq!(force, expected);
    }

    #[test]
    fn test_accumulator_is_overwritten() {
        let env = Environment::vacuum().with_background_gravity(Vector3::new(0.0, -1.0, 0.0));
        let objects = [ball(Vector3::ZERO, Vector3::ZERO, 3.0, 0.0)];

        let mut force = Vector3::splat(50.0);
        accumulate_net_force(&env, &objects, 0, &mut force).unwrap();
        assert_eq!(force, Vector3::new(0.0, -3.0, 0.0));
    }
}
