//! # Torsion Formulas
//!
//! Mechanical response of a single prismatic shaft segment under a torque
//! that varies linearly from `M0` at `x = 0` to `M_end` at `x = L`.
//!
//! ## Sign Convention
//!
//! - Torque is positive in the user's reference sense; a negative value is a
//!   moment applied in the opposite sense ("from yourself").
//! - Twist angle carries the sign of the end moment.

/// Linear torque decay rate along a segment
///
/// # Formula
/// m = (M0 − M_end) / L
///
/// # Example
/// ```rust
/// use torsion_core::equations::torsion::moment_slope;
///
/// assert_eq!(moment_slope(1000.0, 500.0, 1.0), 500.0);
/// ```
#[inline]
pub fn moment_slope(start_moment: f64, end_moment: f64, length: f64) -> f64 {
    (start_moment - end_moment) / length
}

/// Internal torque at axial position `x`
///
/// # Formula
/// M(x) = M0 − m·x
///
/// No bounds check: positions outside `[0, L]` extrapolate linearly.
#[inline]
pub fn linear_moment(start_moment: f64, slope: f64, x: f64) -> f64 {
    start_moment - slope * x
}

/// Angle of twist over a segment
///
/// # Formula
/// φ = M·L / (G·J)
///
/// All quantities in base SI units (N·m, m, Pa, m⁴), result in radians.
///
/// # Example
/// ```rust
/// use torsion_core::equations::torsion::twist_angle;
///
/// let phi = twist_angle(500.0, 1.0, 8.0e10, 6.135923e-7);
/// assert!((phi - 1.01859e-2).abs() < 1e-6);
/// ```
#[inline]
pub fn twist_angle(moment: f64, length: f64, shear_modulus: f64, polar_moment: f64) -> f64 {
    (moment * length) / (shear_modulus * polar_moment)
}

/// Peak shear stress τ = |M| / W
#[inline]
pub fn shear_stress(moment: f64, section_modulus: f64) -> f64 {
    moment.abs() / section_modulus
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_moment_slope_and_ends() {
        let m = moment_slope(1000.0, -250.0, 2.5);
        assert_relative_eq!(m, 500.0);
        assert_relative_eq!(linear_moment(1000.0, m, 0.0), 1000.0);
        assert_relative_eq!(linear_moment(1000.0, m, 2.5), -250.0);
    }

    #[test]
    fn test_linear_moment_extrapolates() {
        // Beyond the end the torque keeps falling at the same rate
        assert_relative_eq!(linear_moment(100.0, 10.0, 20.0), -100.0);
        assert_relative_eq!(linear_moment(100.0, 10.0, -5.0), 150.0);
    }

    #[test]
    fn test_twist_angle_proportionality() {
        let base = twist_angle(500.0, 1.0, 8.0e10, 6.0e-7);
        assert_relative_eq!(twist_angle(1000.0, 1.0, 8.0e10, 6.0e-7), 2.0 * base, max_relative = 1e-12);
        assert_relative_eq!(twist_angle(500.0, 3.0, 8.0e10, 6.0e-7), 3.0 * base, max_relative = 1e-12);
        assert_relative_eq!(twist_angle(500.0, 1.0, 16.0e10, 6.0e-7), base / 2.0, max_relative = 1e-12);
        assert_relative_eq!(twist_angle(500.0, 1.0, 8.0e10, 12.0e-7), base / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_twist_angle_sign_follows_moment() {
        assert!(twist_angle(-500.0, 1.0, 8.0e10, 6.0e-7) < 0.0);
    }

    #[test]
    fn test_shear_stress_uses_magnitude() {
        assert_relative_eq!(shear_stress(-200.0, 4.0e-6), 5.0e7);
    }
}
