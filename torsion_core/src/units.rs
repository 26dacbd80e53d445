//! # Unit Types
//!
//! Thin newtype wrappers for the SI quantities a torsion run deals with.
//! Calculations store plain `f64` fields with a unit suffix (`length_m`,
//! `shear_modulus_pa`); these wrappers exist at the boundaries where a
//! conversion or a presentation scale is applied.
//!
//! ## Units
//!
//! - Length: meters (m), centimeters (cm, input only)
//! - Angle: radians (rad)
//! - Section properties: m⁴ (polar moment), m³ (section modulus)
//!
//! ## Example
//!
//! ```rust
//! use torsion_core::units::{Centimeters, Meters, M4};
//!
//! let diameter: Meters = Centimeters(5.0).into();
//! assert!((diameter.0 - 0.05).abs() < 1e-12);
//!
//! // Report J in units of 1e-8 m^4
//! let j = M4(6.1359e-7);
//! assert!((j.scaled(8) - 61.359).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

// ============================================================================
// Angle
// ============================================================================

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl Radians {
    /// Convert to degrees
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Polar moment of inertia in m⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M4(pub f64);

/// Section modulus in m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M3(pub f64);

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }

            /// Value expressed in units of `10^-exp`, e.g. `scaled(8)` on m⁴
            /// gives the number of 1e-8 m⁴.
            pub fn scaled(self, exp: i32) -> f64 {
                self.0 * 10f64.powi(exp)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Radians);
impl_arithmetic!(M4);
impl_arithmetic!(M3);
