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
//! Simulation scene and the step loop
//!
//! A [`SimulationScene`] pairs ambient parameters ([`Environment`]) with a
//! caller-owned collection of [`PhysicalObject`]s. The scene borrows the
//! collection mutably for its whole lifetime and never copies, grows or
//! frees it.
//!
//! # Step structure
//!
//! Each step runs two phases over the collection:
//!
//! 1. **Force phase**: the net force of every object is computed from one
//!    unmodified snapshot of positions and velocities and stored in the
//!    object's force accumulator.
//! 2. **Integration phase**: every object is advanced by the step size
//!    under its stored force.
//!
//! No object is integrated until every force of the step is known, so the
//! result does not depend on iteration order.
//!
//! # Failure
//!
//! The first error aborts the whole run. Runs are not transactional:
//! objects handled before the failure keep their new state. Elapsed time
//! only advances when every requested step completed.
//!
//! # Parallel Computation
//!
//! With the `parallel` feature, scenes of at least [`PARALLEL_THRESHOLD`]
//! objects compute the force phase on the Rayon pool. Forces are written
//! back in index order and the first error in index order wins, so the
//! outcome is identical to the sequential path.

pub mod forces;

use crate::error::{PhysError, PhysResult};
use crate::integration;
use crate::object::PhysicalObject;
use crate::real::{Real, ACCEL_OF_FREE_FALL, AIR_DENSITY};
use crate::vector::Vector3;
use log::{debug, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum object count for which the force phase runs in parallel
pub const PARALLEL_THRESHOLD: usize = 64;

/// Ambient parameters shared by every object in a scene
///
/// # Examples
///
/// ```
/// use sphere_physics::scene::Environment;
/// use sphere_physics::vector::Vector3;
///
/// let windy = Environment::earth().with_wind(Vector3::new(5.0, 0.0, 0.0));
/// assert_eq!(windy.density, 1.225);
/// assert!(!windy.gravity_enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Fluid density in kg/m³, used for drag and buoyancy
    pub density: Real,
    /// Uniform acceleration applied to every object in m/s²
    pub background_gravity: Vector3,
    /// Fluid velocity in m/s; drag acts on velocity relative to it
    pub wind: Vector3,
    /// Whether objects attract each other
    pub gravity_enabled: bool,
}

impl Environment {
    /// Empty space: no fluid, no background field, no mutual gravity
    pub fn vacuum() -> Self {
        Environment {
            density: 0.0,
            background_gravity: Vector3::ZERO,
            wind: Vector3::ZERO,
            gravity_enabled: false,
        }
    }

    /// Still air at sea level with standard gravity along -Y
    pub fn earth() -> Self {
        Environment {
            density: AIR_DENSITY,
            background_gravity: Vector3::new(0.0, -ACCEL_OF_FREE_FALL, 0.0),
            wind: Vector3::ZERO,
            gravity_enabled: false,
        }
    }

    /// Set the fluid density
    pub fn with_density(mut self, density: Real) -> Self {
        self.density = density;
        self
    }

    /// Set the background gravitational acceleration
    pub fn with_background_gravity(mut self, background_gravity: Vector3) -> Self {
        self.background_gravity = background_gravity;
        self
    }

    /// Set the wind velocity
    pub fn with_wind(mut self, wind: Vector3) -> Self {
        self.wind = wind;
        self
    }

    /// Enable or disable mutual gravity between objects
    pub fn with_mutual_gravity(mut self, enabled: bool) -> Self {
        self.gravity_enabled = enabled;
        self
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::vacuum()
    }
}

/// A borrowed collection of objects stepped under shared ambient parameters
///
/// # Examples
///
/// ```
/// use sphere_physics::object::PhysicalObject;
/// use sphere_physics::scene::SimulationScene;
/// use sphere_physics::vector::Vector3;
///
/// let mut objects = vec![PhysicalObject::new(
///     Vector3::ZERO,
///     Vector3::new(100.0, 100.0, 100.0),
///     1.0,
///     0.1,
/// )];
///
/// let mut scene = SimulationScene::new(
///     0.0,
///     Vector3::new(0.0, -10.0, 0.0),
///     Vector3::ZERO,
///     &mut objects,
///     false,
/// );
/// scene.run_steps(0.1, 200).unwrap();
///
/// let pos = scene.objects()[0].position;
/// assert!((pos.x - 2000.0).abs() < 1.0);
/// assert!(pos.y.abs() < 1.0);
/// assert!((scene.elapsed_time() - 20.0).abs() < 1e-3);
/// ```
#[derive(Debug)]
pub struct SimulationScene<'a> {
    environment: Environment,
    objects: Option<&'a mut [PhysicalObject]>,
    object_count: usize,
    elapsed_time: Real,
    parallel: bool,
    #[cfg(feature = "parallel")]
    force_scratch: Vec<ForceSlot>,
}

impl<'a> SimulationScene<'a> {
    /// Create a scene over `objects` with the given ambient parameters
    ///
    /// Elapsed time starts at zero.
    pub fn new(
        density: Real,
        background_gravity: Vector3,
        wind: Vector3,
        objects: &'a mut [PhysicalObject],
        gravity_enabled: bool,
    ) -> Self {
        let environment = Environment {
            density,
            background_gravity,
            wind,
            gravity_enabled,
        };
        Self::with_environment(environment, objects)
    }

    /// Create a scene over `objects` from a prepared [`Environment`]
    pub fn with_environment(environment: Environment, objects: &'a mut [PhysicalObject]) -> Self {
        let count = objects.len();
        Self::from_parts(environment, Some(objects), count)
    }

    /// Create a scene from storage and a separately declared object count
    ///
    /// Only the first `count` objects of `objects` take part in stepping.
    /// Missing storage, or storage shorter than `count`, is reported by
    /// [`run_steps`](Self::run_steps) as [`PhysError::InvalidObjects`]
    /// unless `count` is zero.
    pub fn from_parts(
        environment: Environment,
        objects: Option<&'a mut [PhysicalObject]>,
        count: usize,
    ) -> Self {
        SimulationScene {
            environment,
            objects,
            object_count: count,
            elapsed_time: 0.0,
            parallel: cfg!(feature = "parallel"),
            #[cfg(feature = "parallel")]
            force_scratch: Vec::new(),
        }
    }

    /// Ambient parameters
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Mutable access to the ambient parameters
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// The borrowed object storage, empty if none was supplied
    pub fn objects(&self) -> &[PhysicalObject] {
        self.objects.as_deref().unwrap_or(&[])
    }

    /// Mutable access to the borrowed object storage
    pub fn objects_mut(&mut self) -> &mut [PhysicalObject] {
        self.objects.as_deref_mut().unwrap_or(&mut [])
    }

    /// Declared number of objects
    pub fn object_count(&self) -> usize {
        self.object_count
    }

    /// Total simulated time over all successful runs, in seconds
    pub fn elapsed_time(&self) -> Real {
        self.elapsed_time
    }

    /// Whether large scenes may compute forces in parallel
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Allow or forbid the parallel force phase
    ///
    /// Has no effect without the `parallel` feature.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel && cfg!(feature = "parallel");
    }

    /// Run `steps` steps of `step_time` seconds each
    ///
    /// A scene with no declared objects succeeds immediately without
    /// touching anything, including elapsed time.
    ///
    /// # Errors
    ///
    /// - [`PhysError::InvalidObjects`] if objects are declared but storage
    ///   is missing or too short. Checked before any stepping.
    /// - [`PhysError::ZeroDistance`] from the force phase when mutual
    ///   gravity is on and two objects coincide.
    /// - [`PhysError::ZeroMass`] from the integration phase.
    ///
    /// On error, elapsed time is unchanged but objects already processed
    /// keep their mutations.
    pub fn run_steps(&mut self, step_time: Real, steps: u64) -> PhysResult<()> {
        let count = self.object_count;
        if count == 0 {
            return Ok(());
        }

        let environment = self.environment;

        #[cfg(feature = "parallel")]
        let mut phase = if self.parallel && count >= PARALLEL_THRESHOLD {
            ForcePhase::Parallel(&mut self.force_scratch)
        } else {
            ForcePhase::Sequential
        };
        #[cfg(not(feature = "parallel"))]
        let mut phase = ForcePhase::Sequential;

        let objects = match self.objects.as_deref_mut() {
            Some(objects) if objects.len() >= count => &mut objects[..count],
            _ => {
                warn!("Declared {} objects without backing storage", count);
                return Err(PhysError::InvalidObjects);
            }
        };

        debug!(
            "Running {} steps of {}s over {} objects ({})",
            steps,
            step_time,
            count,
            phase_name(&phase)
        );

        for step in 0..steps {
            if let Err(err) = step_once(&environment, objects, step_time, &mut phase) {
                warn!("Run aborted at step {}: {}", step, err);
                return Err(err);
            }
            trace!("Completed step {}", step);
        }

        self.elapsed_time += step_time * steps as Real;
        Ok(())
    }
}

/// Per-object result of a parallel force computation
#[cfg(feature = "parallel")]
type ForceSlot = (Vector3, PhysResult<()>);

/// How the force phase of a run is executed
#[cfg(feature = "parallel")]
enum ForcePhase<'s> {
    Sequential,
    /// Rayon pool, with a scratch buffer kept on the scene between runs
    Parallel(&'s mut Vec<ForceSlot>),
}

/// How the force phase of a run is executed
#[cfg(not(feature = "parallel"))]
enum ForcePhase {
    Sequential,
}

fn phase_name(phase: &ForcePhase) -> &'static str {
    match phase {
        ForcePhase::Sequential => "sequential",
        #[cfg(feature = "parallel")]
        ForcePhase::Parallel(_) => "parallel",
    }
}

/// Run the force phase and then the integration phase once
fn step_once(
    environment: &Environment,
    objects: &mut [PhysicalObject],
    step_time: Real,
    phase: &mut ForcePhase,
) -> PhysResult<()> {
    match phase {
        ForcePhase::Sequential => compute_forces_sequential(environment, objects)?,
        #[cfg(feature = "parallel")]
        ForcePhase::Parallel(scratch) => compute_forces_parallel(environment, objects, scratch)?,
    }

    for (index, object) in objects.iter_mut().enumerate() {
        integration::integrate(object, step_time).map_err(|err| match err {
            PhysError::ZeroMass { .. } => PhysError::ZeroMass { object: index },
            other => other,
        })?;
    }

    Ok(())
}

fn compute_forces_sequential(
    environment: &Environment,
    objects: &mut [PhysicalObject],
) -> PhysResult<()> {
    for index in 0..objects.len() {
        let mut force = Vector3::ZERO;
        let result = forces::accumulate_net_force(environment, objects, index, &mut force);
        objects[index].force = force;
        result?;
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn compute_forces_parallel(
    environment: &Environment,
    objects: &mut [PhysicalObject],
    scratch: &mut Vec<ForceSlot>,
) -> PhysResult<()> {
    scratch.clear();
    scratch.resize(objects.len(), (Vector3::ZERO, Ok(())));

    {
        let snapshot: &[PhysicalObject] = objects;
        scratch
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, (force, result))| {
                *result = forces::accumulate_net_force(environment, snapshot, index, force);
            });
    }

    // Same partial-mutation set as the sequential path
    for (object, (force, result)) in objects.iter_mut().zip(scratch.iter()) {
        object.force = *force;
        (*result)?;
    }
    Ok(())
}
