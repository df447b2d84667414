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
//! Circular Orbit Example
//!
//! Two unit-mass satellites circle a heavy central body on opposite sides
//! of the same orbit. Prints positions, total kinetic energy and the
//! centre of mass at regular intervals over one full period.
//!
//! # Running
//!
//! ```bash
//! cargo run --example orbit --release
//! ```

use sphere_physics::integration::{center_of_mass, total_kinetic_energy};
use sphere_physics::object::PhysicalObject;
use sphere_physics::real::{Real, G, PI};
use sphere_physics::scene::{Environment, SimulationScene};
use sphere_physics::vector::Vector3;

/// Central body mass in kg
const CENTRAL_MASS: Real = 1.0e24;

/// Orbit radius in m
const ORBIT_RADIUS: Real = 10.0;

/// Steps per full orbit
const STEPS: u64 = 200_000;

/// Number of progress reports per orbit
const REPORTS: u64 = 8;

fn main() {
    println!("Sphere Physics - Circular Orbit Example");
    println!("=======================================\n");

    let speed = (G * CENTRAL_MASS / ORBIT_RADIUS).sqrt();
    let period = 2.0 * PI * ORBIT_RADIUS / speed;
    let step = period / STEPS as Real;

    println!("Orbital speed: {:.4} m/s", speed);
    println!("Period:        {:.4} s", period);
    println!("Step:          {:.3e} s\n", step);

    let mut objects = [
        PhysicalObject::new(Vector3::ZERO, Vector3::ZERO, CENTRAL_MASS, 0.0),
        PhysicalObject::new(
            Vector3::new(0.0, ORBIT_RADIUS, 0.0),
            Vector3::new(speed, 0.0, 0.0),
            1.0,
            0.0,
        ),
        PhysicalObject::new(
            Vector3::new(0.0, -ORBIT_RADIUS, 0.0),
            Vector3::new(-speed, 0.0, 0.0),
            1.0,
            0.0,
        ),
    ];

    let environment = Environment::vacuum().with_mutual_gravity(true);
    let mut scene = SimulationScene::with_environment(environment, &mut objects);
    let initial_energy = total_kinetic_energy(scene.objects());

    for report in 1..=REPORTS {
        if let Err(err) = scene.run_steps(step, STEPS / REPORTS) {
            eprintln!("Simulation failed: {}", err);
            return;
        }

        let objects = scene.objects();
        let energy = total_kinetic_energy(objects);
        let com = center_of_mass(objects).unwrap_or(Vector3::ZERO);

        println!("t = {:.4} s ({}/{})", scene.elapsed_time(), report, REPORTS);
        for (name, obj) in ["central", "sat A", "sat B"].iter().zip(objects) {
            println!(
                "  {:<8} ({:>9.4}, {:>9.4}, {:>9.4})",
                name, obj.position.x, obj.position.y, obj.position.z
            );
        }
        println!(
            "  kinetic energy drift: {:.3e}, centre of mass: ({:.2e}, {:.2e}, {:.2e})",
            (energy - initial_energy) / initial_energy,
            com.x,
            com.y,
            com.z
        );
    }

    println!("\nExample completed successfully!");
}
