//! # Cross-Section Torsion Properties
//!
//! Geometric properties of the three supported shaft cross-sections.
//! All inputs and outputs are in base SI units (m, m³, m⁴).
//!
//! ## Notation
//!
//! - `J` = Polar (torsional) moment of inertia
//! - `r` = Distance from the centroid to the stress point used for `W`
//! - `W` = Torsional section modulus (J/r)
//! - `d` = Diameter (solid circle) or inner diameter (tube)
//! - `D` = Outer diameter (tube)
//! - `a`, `b` = Long and short side of a rectangle
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 10.1
//! - Timoshenko & Goodier, Theory of Elasticity, Ch. 10

use std::f64::consts::PI;

// =============================================================================
// SOLID CIRCULAR SECTION
// =============================================================================

/// Polar moment of inertia for a solid circular section
///
/// # Formula
/// J = πd⁴/32
///
/// # Example
/// ```rust
/// use torsion_core::equations::section::circle_polar_moment;
///
/// // 50 mm shaft
/// let j = circle_polar_moment(0.05);
/// assert!((j - 6.13592e-7).abs() < 1e-11);
/// ```
#[inline]
pub fn circle_polar_moment(d: f64) -> f64 {
    PI * d.powi(4) / 32.0
}

/// Outer radius of a solid circular section, r = d/2
#[inline]
pub fn circle_outer_radius(d: f64) -> f64 {
    d / 2.0
}

// =============================================================================
// RECTANGULAR SECTION
// Approximate (non-circular) torsion theory
// =============================================================================

/// Torsion coefficient β for a rectangle with side ratio `r = b/a`
///
/// # Formula
/// β = 1/3 − 0.21·r·(1 − r⁴/12)
///
/// Valid for `r ≤ 1`; callers pass the short side over the long side.
#[inline]
pub fn rectangle_torsion_coefficient(ratio: f64) -> f64 {
    (1.0 / 3.0) - 0.21 * ratio * (1.0 - ratio.powi(4) / 12.0)
}

/// Torsion constant for a solid rectangular section
///
/// ```text
///     ┌───────────────┐
///   b │               │
///     └───────────────┘
///             a
/// ```
///
/// # Formula
/// J = a·b³·β, with β from [`rectangle_torsion_coefficient`] and r = b/a
///
/// The approximation only holds with `a` as the long side. The arguments are
/// ordered internally, so `rectangle_torsion_constant(a, b)` equals
/// `rectangle_torsion_constant(b, a)`.
///
/// # Example
/// ```rust
/// use torsion_core::equations::section::rectangle_torsion_constant;
///
/// let j = rectangle_torsion_constant(0.06, 0.03);
/// let beta = 1.0 / 3.0 - 0.21 * 0.5 * (1.0 - 0.0625 / 12.0);
/// assert!((j - 0.06 * 0.03f64.powi(3) * beta).abs() < 1e-15);
/// ```
#[inline]
pub fn rectangle_torsion_constant(width: f64, height: f64) -> f64 {
    let (a, b) = if width >= height { (width, height) } else { (height, width) };
    let ratio = b / a;
    a * b.powi(3) * rectangle_torsion_coefficient(ratio)
}

/// Stress-point radius for a rectangle: centroid to corner
///
/// # Formula
/// r = 0.5·√(a² + b²)
///
/// This is a conservative radius for the approximate theory, not the location
/// of the true peak shear stress (which sits mid-way along the long side).
#[inline]
pub fn rectangle_corner_radius(width: f64, height: f64) -> f64 {
    0.5 * (width * width + height * height).sqrt()
}

// =============================================================================
// HOLLOW CIRCULAR SECTION (TUBE)
// =============================================================================

/// Polar moment of inertia for a tube
///
/// # Formula
/// J = π(D⁴ − d⁴)/32
///
/// # Example
/// ```rust
/// use torsion_core::equations::section::tube_polar_moment;
///
/// let j = tube_polar_moment(0.08, 0.04);
/// assert!((j - 3.7699e-6).abs() < 1e-9);
/// ```
#[inline]
pub fn tube_polar_moment(outer_d: f64, inner_d: f64) -> f64 {
    PI * (outer_d.powi(4) - inner_d.powi(4)) / 32.0
}

/// Outer radius of a tube, r = D/2
#[inline]
pub fn tube_outer_radius(outer_d: f64) -> f64 {
    outer_d / 2.0
}

// =============================================================================
// SECTION MODULUS
// =============================================================================

/// Torsional section modulus W = J/r
///
/// Returns `+∞` or `NaN` when `r` is zero; validated sections never have a
/// zero radius.
#[inline]
pub fn section_modulus(polar_moment: f64, radius: f64) -> f64 {
    polar_moment / radius
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_polar_moment() {
        let j = circle_polar_moment(0.05);
        assert_relative_eq!(j, PI * 0.05f64.powi(4) / 32.0, max_relative = 1e-12);
        assert_relative_eq!(j, 6.13592e-7, max_relative = 1e-5);
    }

    #[test]
    fn test_circle_radius() {
        assert_relative_eq!(circle_outer_radius(0.05), 0.025);
    }

    #[test]
    fn test_rectangle_coefficient() {
        // r = 0.5: β = 1/3 - 0.105 * (1 - 0.0625/12)
        let beta = rectangle_torsion_coefficient(0.5);
        let expected = 1.0 / 3.0 - 0.21 * 0.5 * (1.0 - 0.0625 / 12.0);
        assert_relative_eq!(beta, expected, max_relative = 1e-12);

        // Thin strip limit: β → 1/3
        assert_relative_eq!(rectangle_torsion_coefficient(0.0), 1.0 / 3.0);
    }

    #[test]
    fn test_rectangle_torsion_constant() {
        let j = rectangle_torsion_constant(0.06, 0.03);
        let beta = 1.0 / 3.0 - 0.21 * 0.5 * (1.0 - 0.0625 / 12.0);
        assert_relative_eq!(j, 0.06 * 0.03f64.powi(3) * beta, max_relative = 1e-9);
    }

    #[test]
    fn test_rectangle_orientation_does_not_matter() {
        let wide = rectangle_torsion_constant(0.06, 0.03);
        let tall = rectangle_torsion_constant(0.03, 0.06);
        assert_eq!(wide, tall);

        assert_eq!(rectangle_corner_radius(0.06, 0.03), rectangle_corner_radius(0.03, 0.06));
    }

    #[test]
    fn test_square_torsion_constant() {
        // Square: β = 1/3 - 0.21 * (11/12) ≈ 0.14083 (Roark lists 0.141)
        let j = rectangle_torsion_constant(0.04, 0.04);
        assert_relative_eq!(j / 0.04f64.powi(4), 0.141, epsilon = 1e-3);
    }

    #[test]
    fn test_rectangle_corner_radius() {
        // 3-4-5 triangle
        assert_relative_eq!(rectangle_corner_radius(0.08, 0.06), 0.05, max_relative = 1e-12);
    }

    #[test]
    fn test_tube_polar_moment() {
        let j = tube_polar_moment(0.08, 0.04);
        assert_relative_eq!(j, PI * (0.08f64.powi(4) - 0.04f64.powi(4)) / 32.0, max_relative = 1e-12);
        assert_relative_eq!(j, 3.7699e-6, max_relative = 1e-4);
        assert_relative_eq!(tube_outer_radius(0.08), 0.04);
    }

    #[test]
    fn test_tube_with_no_bore_matches_circle() {
        assert_relative_eq!(tube_polar_moment(0.05, 0.0), circle_polar_moment(0.05), max_relative = 1e-12);
    }

    #[test]
    fn test_section_modulus() {
        let j = circle_polar_moment(0.05);
        let w = section_modulus(j, circle_outer_radius(0.05));
        // W = πd³/16
        assert_relative_eq!(w, PI * 0.05f64.powi(3) / 16.0, max_relative = 1e-12);
    }

    #[test]
    fn test_section_modulus_zero_radius() {
        assert!(section_modulus(1.0, 0.0).is_infinite());
        assert!(section_modulus(0.0, 0.0).is_nan());
    }
}
