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
//! # Sphere Physics
//!
//! A small-N simulation core for point-like spherical bodies moving through
//! a fluid under a uniform gravitational field, with optional mutual
//! Newtonian gravity between the bodies.
//!
//! ## Features
//!
//! - **Vector algebra**: [`Vector3`] with spherical-angle construction
//! - **Object model**: mass, radius-derived area and volume, kinematic state
//! - **Forces**: drag against the wind, buoyancy-adjusted background
//!   gravity, O(n²) pairwise gravity
//! - **Exact kinematics**: constant-acceleration closed-form update per step
//! - **Parallelization**: optional Rayon force phase for large scenes
//! - **Precision**: `f64` by default, `f32` with `single-precision`
//!
//! ## Example
//!
//! ```rust
//! use sphere_physics::{PhysicalObject, SimulationScene, Vector3};
//! use sphere_physics::scene::Environment;
//!
//! let mut objects = vec![
//!     PhysicalObject::new(Vector3::new(0.0, 100.0, 0.0), Vector3::ZERO, 1.0, 0.05),
//! ];
//!
//! let mut scene = SimulationScene::with_environment(Environment::earth(), &mut objects);
//! scene.run_steps(0.001, 1000).unwrap();
//!
//! assert!(scene.objects()[0].position.y < 100.0);
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade. Install any logger in the
//! application to see run summaries (`debug`), per-step progress (`trace`)
//! and aborted runs (`warn`).

#![warn(missing_docs)]

/// Numeric precision and physical constants
pub mod real;

/// Three-component vector algebra
pub mod vector;

/// Physical object model
pub mod object;

/// Motion integration and diagnostics
pub mod integration;

/// Scene, ambient parameters and the step loop
pub mod scene;

/// Error types
pub mod error;

pub use error::{PhysError, PhysResult};
pub use object::PhysicalObject;
pub use real::Real;
pub use scene::{Environment, SimulationScene};
pub use vector::Vector3;
