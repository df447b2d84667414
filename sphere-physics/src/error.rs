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
//! Error types for simulation runs
//!
//! Every error is a physical degeneracy detected synchronously while
//! stepping. None of them are transient; retrying the same run on the same
//! state fails the same way.

use std::fmt;

/// Errors returned by [`integrate`](crate::object::PhysicalObject::integrate)
/// and [`run_steps`](crate::scene::SimulationScene::run_steps)
///
/// A failed run is not rolled back. Objects processed before the failure
/// keep their updated force, position and velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysError {
    /// A non-zero object count was declared without storage to back it
    InvalidObjects,
    /// Mutual gravity is enabled and two objects share the exact same position
    ZeroDistance {
        /// Index of the object whose force was being computed
        object: usize,
        /// Index of the coincident object
        other: usize,
    },
    /// An object with zero mass reached the integration phase
    ZeroMass {
        /// Index of the massless object
        object: usize,
    },
}

impl fmt::Display for PhysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysError::InvalidObjects => {
                write!(f, "object count is non-zero but no object storage was supplied")
            }
            PhysError::ZeroDistance { object, other } => write!(
                f,
                "objects {} and {} occupy the same position with mutual gravity enabled",
                object, other
            ),
            PhysError::ZeroMass { object } => write!(f, "object {} has zero mass", object),
        }
    }
}

impl std::error::Error for PhysError {}

/// Result alias for simulation operations
pub type PhysResult<T> = Result<T, PhysError>;
