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
//! Physical object tests
//!
//! Geometry setters and the single-object integration step

use approx::assert_relative_eq;
use sphere_physics::error::PhysError;
use sphere_physics::object::PhysicalObject;
use sphere_physics::real::{Real, PI};
use sphere_physics::vector::Vector3;

fn object_with_radius(radius: Real) -> PhysicalObject {
    PhysicalObject::new(Vector3::ZERO, Vector3::ZERO, 1.0, radius)
}

#[test]
fn test_set_radius_uses_sphere_formulas() {
    let mut obj = object_with_radius(1.0);
    obj.set_radius(0.25);

    assert_eq!(obj.radius(), 0.25);
    assert_relative_eq!(obj.area(), PI * 0.25 * 0.25);
    assert_relative_eq!(obj.volume(), 4.0 / 3.0 * PI * 0.25 * 0.25 * 0.25);
}

#[test]
fn test_set_area_relations() {
    let mut obj = object_with_radius(1.0);
    let area: Real = 2.0;
    obj.set_area(area);

    let radius = area.sqrt() / PI;
    assert_eq!(obj.area(), area);
    assert_eq!(obj.radius(), radius);
    assert_eq!(obj.volume(), area * (4.0 / 3.0) * radius);
}

#[test]
fn test_set_area_is_not_the_sphere_inverse() {
    let mut obj = object_with_radius(1.0);
    let area = obj.area();
    obj.set_area(area);

    // sqrt(π)/π rather than 1
    assert!((obj.radius() - 1.0).abs() > 0.1, "radius = {}", obj.radius());
}

#[test]
fn test_set_volume_relations() {
    let mut obj = object_with_radius(1.0);
    let volume: Real = 8.0;
    obj.set_volume(volume);

    let radius = volume.powf(1.0 / 3.0) * (3.0 / 4.0) / PI;
    assert_eq!(obj.volume(), volume);
    assert_eq!(obj.radius(), radius);
    assert_eq!(obj.area(), PI * radius * radius);
}

#[test]
fn test_setters_keep_kinematics() {
    let mut obj = PhysicalObject::new(Vector3::splat(1.0), Vector3::splat(2.0), 3.0, 1.0);
    obj.set_area(5.0);
    obj.set_volume(6.0);
    obj.set_radius(7.0);

    assert_eq!(obj.position, Vector3::splat(1.0));
    assert_eq!(obj.velocity, Vector3::splat(2.0));
    assert_eq!(obj.mass, 3.0);
}

#[test]
fn test_projectile_single_integration() {
    let mut obj = PhysicalObject::new(Vector3::ZERO, Vector3::new(100.0, 100.0, 100.0), 1.0, 0.1);
    obj.force = Vector3::new(0.0, -10.0, 0.0);
    obj.integrate(20.0).unwrap();

    let error = Vector3::distance(Vector3::new(2000.0, 0.0, 2000.0), obj.position);
    assert!(error < 1.0, "final position {:?}", obj.position);
    assert_relative_eq!(obj.velocity.y, -100.0);
}

#[test]
fn test_zero_mass_integration_fails() {
    let mut obj = PhysicalObject::new(Vector3::ZERO, Vector3::splat(1.0), 0.0, 0.0);
    assert_eq!(obj.integrate(1.0), Err(PhysError::ZeroMass { object: 0 }));
    assert_eq!(obj.position, Vector3::ZERO);
}

#[test]
fn test_integration_is_exact_for_constant_force() {
    // One big step and many small steps agree under a held force
    let start = PhysicalObject::new(Vector3::ZERO, Vector3::new(3.0, 0.0, -2.0), 2.0, 0.0);

    let mut once = start;
    once.force = Vector3::new(4.0, -6.0, 1.0);
    once.integrate(10.0).unwrap();

    let mut many = start;
    many.force = once.force;
    for _ in 0..1000 {
        many.integrate(0.01).unwrap();
    }

    // Rounding accumulated over 1000 steps stays far below sqrt(epsilon)
    let tolerance = Real::EPSILON.sqrt();
    assert_relative_eq!(once.position.x, many.position.x, max_relative = tolerance);
    assert_relative_eq!(once.position.y, many.position.y, max_relative = tolerance);
    assert_relative_eq!(once.position.z, many.position.z, max_relative = tolerance);
    assert_relative_eq!(once.velocity.y, many.velocity.y, max_relative = tolerance);
}
