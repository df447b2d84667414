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
//! Projectile Example
//!
//! Throws a tennis ball at 45° in still air and in a headwind, and compares
//! both flights against the same throw in vacuum.
//!
//! # Running
//!
//! ```bash
//! cargo run --example projectile --release
//! ```

use sphere_physics::object::PhysicalObject;
use sphere_physics::real::{Real, PI};
use sphere_physics::scene::{Environment, SimulationScene};
use sphere_physics::vector::Vector3;

/// Tennis ball mass in kg
const BALL_MASS: Real = 0.057;

/// Tennis ball radius in m
const BALL_RADIUS: Real = 0.0335;

/// Launch speed in m/s
const LAUNCH_SPEED: Real = 30.0;

/// Integration step in s
const STEP: Real = 0.001;

fn launch() -> PhysicalObject {
    // 45° above the XOZ plane, heading along +X
    let velocity = Vector3::from_spherical(LAUNCH_SPEED, PI / 4.0, PI / 2.0);
    let velocity = Vector3::new(velocity.x, velocity.y, 0.0);
    PhysicalObject::new(Vector3::ZERO, velocity, BALL_MASS, BALL_RADIUS)
}

/// Fly until the ball comes back down to y = 0, returning (range, apex, time)
fn fly(environment: Environment) -> (Real, Real, Real) {
    let mut objects = [launch()];
    let mut scene = SimulationScene::with_environment(environment, &mut objects);
    let mut apex: Real = 0.0;

    loop {
        if let Err(err) = scene.run_steps(STEP, 1) {
            eprintln!("Simulation failed: {}", err);
            break;
        }

        let position = scene.objects()[0].position;
        apex = apex.max(position.y);
        if position.y <= 0.0 {
            break;
        }
    }

    (scene.objects()[0].position.x, apex, scene.elapsed_time())
}

fn main() {
    println!("Sphere Physics - Projectile Example");
    println!("===================================\n");

    let vacuum = Environment::earth().with_density(0.0);
    let still_air = Environment::earth();
    let headwind = Environment::earth().with_wind(Vector3::new(-10.0, 0.0, 0.0));

    println!("{:<12} {:>10} {:>10} {:>10}", "conditions", "range (m)", "apex (m)", "time (s)");
    for (name, environment) in [("vacuum", vacuum), ("still air", still_air), ("headwind", headwind)] {
        let (range, apex, time) = fly(environment);
        println!("{:<12} {:>10.2} {:>10.2} {:>10.3}", name, range, apex, time);
    }

    println!("\nExample completed successfully!");
}
