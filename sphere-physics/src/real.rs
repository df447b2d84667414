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
//! Numeric precision and physical constants
//!
//! Every quantity in the engine is a [`Real`]. The width is a build-time
//! choice: `f64` by default, `f32` with the `single-precision` feature.
//! Behavior is identical across widths apart from rounding.

#[cfg(not(feature = "single-precision"))]
use std::f64::consts as float_consts;
#[cfg(feature = "single-precision")]
use std::f32::consts as float_consts;

/// Real-number type used for every physical quantity
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;

/// Real-number type used for every physical quantity
#[cfg(feature = "single-precision")]
pub type Real = f32;

/// Gravitational constant in m³/(kg⋅s²)
pub const G: Real = 6.6743015151515151514e-11;

/// Ratio of a circle's circumference to its diameter
pub const PI: Real = float_consts::PI;

/// Density of air at sea level and 15 °C in kg/m³
pub const AIR_DENSITY: Real = 1.225;

/// Standard acceleration of free fall in m/s²
pub const ACCEL_OF_FREE_FALL: Real = 9.80665;

/// Drag coefficient of a smooth sphere (dimensionless)
pub const BALL_DRAG_COEF: Real = 0.47;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(AIR_DENSITY, 1.225);
        assert_eq!(ACCEL_OF_FREE_FALL, 9.80665);
        assert_eq!(BALL_DRAG_COEF, 0.47);
        assert!((G - 6.6743e-11).abs() < 1e-15);
        assert!((PI - 3.14159265).abs() < 1e-6);
    }
}
