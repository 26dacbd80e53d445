//! # Torsion Equations
//!
//! All closed-form formulas used by the calculations live here, kept as
//! plain `f64` functions so they can be checked against references in
//! isolation.
//!
//! ## Modules
//!
//! - [`section`] - Cross-section properties (J, r, W) for circle, rectangle, tube
//! - [`torsion`] - Segment response (moment distribution, twist, shear stress)
//!
//! ## Units
//!
//! Every function works in base SI units: m, m³, m⁴, Pa, N·m, rad.

pub mod section;
pub mod torsion;

// Re-export commonly used items
pub use section::{
    circle_outer_radius,
    circle_polar_moment,
    rectangle_corner_radius,
    rectangle_torsion_coefficient,
    rectangle_torsion_constant,
    section_modulus,
    tube_outer_radius,
    tube_polar_moment,
};

pub use torsion::{linear_moment, moment_slope, shear_stress, twist_angle};
