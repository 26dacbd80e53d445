//! # Shaft Section Calculation
//!
//! One prismatic segment of a shaft: a cross-section, a length, a material
//! shear modulus and a torque that varies linearly from `M0` at the start to
//! `M_end` at the end of the segment.
//!
//! ## Assumptions
//!
//! - Linear elastic material, small rotations
//! - Uniform cross-section along the segment
//! - Rectangles use the approximate non-circular torsion formula, with the
//!   longer side always treated as `a`
//!
//! ## Example
//!
//! ```rust
//! use torsion_core::calculations::section::{calculate, CrossSection, SectionInput};
//!
//! let input = SectionInput {
//!     label: "Section #1".to_string(),
//!     section: CrossSection::circle_from_cm(5.0),
//!     length_m: 1.0,
//!     shear_modulus_pa: 8.0e10,
//!     start_moment_nm: 1000.0,
//!     end_moment_nm: 500.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.polar_moment_m4 - 6.13592e-7).abs() < 1e-11);
//! assert!((result.end_moment_nm - 500.0).abs() < 1e-9);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equations::{section as props, torsion};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Centimeters, Meters, Radians, M3, M4};

// =============================================================================
// SHAPES
// =============================================================================

/// The closed set of supported cross-section shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Solid circular shaft
    Circle,
    /// Solid rectangular bar
    Rectangle,
    /// Hollow circular shaft
    Tube,
}

impl ShapeKind {
    /// All shapes in prompt order
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Tube];

    /// Label used on input and in reports
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Tube => "tube",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = CalcError;

    /// Exact, case-sensitive match on `circle`, `rectangle` or `tube`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| CalcError::invalid_shape(s))
    }
}

/// Cross-section geometry in meters. Only the dimensions relevant to the
/// shape are carried.
///
/// ## JSON Example
///
/// ```json
/// { "shape": "tube", "outer_diameter_m": 0.08, "inner_diameter_m": 0.04 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum CrossSection {
    /// Solid circle of diameter d
    Circle { diameter_m: f64 },
    /// Rectangle with sides a (width) and b (height)
    Rectangle { width_m: f64, height_m: f64 },
    /// Tube with outer diameter D and inner diameter d
    Tube {
        outer_diameter_m: f64,
        inner_diameter_m: f64,
    },
}

impl CrossSection {
    /// Solid circle from a diameter entered in centimeters.
    pub fn circle_from_cm(diameter_cm: f64) -> Self {
        let d: Meters = Centimeters(diameter_cm).into();
        CrossSection::Circle { diameter_m: d.0 }
    }

    /// Rectangle from its small side `b` in centimeters and the ratio `h/b`.
    ///
    /// The small side becomes the height, `ratio × b` the width.
    pub fn rectangle_from_cm(small_side_cm: f64, ratio: f64) -> Self {
        let b: Meters = Centimeters(small_side_cm).into();
        CrossSection::Rectangle {
            width_m: (b * ratio).0,
            height_m: b.0,
        }
    }

    /// Tube from its outer diameter `D` in centimeters and the ratio `d/D`.
    pub fn tube_from_cm(outer_diameter_cm: f64, ratio: f64) -> Self {
        let outer: Meters = Centimeters(outer_diameter_cm).into();
        CrossSection::Tube {
            outer_diameter_m: outer.0,
            inner_diameter_m: (outer * ratio).0,
        }
    }

    /// Shape of this section
    pub fn kind(&self) -> ShapeKind {
        match self {
            CrossSection::Circle { .. } => ShapeKind::Circle,
            CrossSection::Rectangle { .. } => ShapeKind::Rectangle,
            CrossSection::Tube { .. } => ShapeKind::Tube,
        }
    }

    /// Polar (torsional) moment of inertia J in m⁴
    pub fn polar_moment_m4(&self) -> f64 {
        match *self {
            CrossSection::Circle { diameter_m } => props::circle_polar_moment(diameter_m),
            CrossSection::Rectangle { width_m, height_m } => {
                props::rectangle_torsion_constant(width_m, height_m)
            }
            CrossSection::Tube {
                outer_diameter_m,
                inner_diameter_m,
            } => props::tube_polar_moment(outer_diameter_m, inner_diameter_m),
        }
    }

    /// Radius of the stress point in m
    pub fn outer_radius_m(&self) -> f64 {
        match *self {
            CrossSection::Circle { diameter_m } => props::circle_outer_radius(diameter_m),
            CrossSection::Rectangle { width_m, height_m } => {
                props::rectangle_corner_radius(width_m, height_m)
            }
            CrossSection::Tube { outer_diameter_m, .. } => props::tube_outer_radius(outer_diameter_m),
        }
    }

    /// Torsional section modulus W = J/r in m³
    pub fn section_modulus_m3(&self) -> f64 {
        props::section_modulus(self.polar_moment_m4(), self.outer_radius_m())
    }

    /// Validate the geometry: every dimension finite and positive, and a
    /// tube bore smaller than its outside.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            CrossSection::Circle { diameter_m } => positive("diameter_m", diameter_m),
            CrossSection::Rectangle { width_m, height_m } => {
                positive("width_m", width_m)?;
                positive("height_m", height_m)
            }
            CrossSection::Tube {
                outer_diameter_m,
                inner_diameter_m,
            } => {
                positive("outer_diameter_m", outer_diameter_m)?;
                finite("inner_diameter_m", inner_diameter_m)?;
                if inner_diameter_m < 0.0 {
                    return Err(CalcError::invalid_input(
                        "inner_diameter_m",
                        inner_diameter_m.to_string(),
                        "Inner diameter cannot be negative",
                    ));
                }
                if inner_diameter_m >= outer_diameter_m {
                    return Err(CalcError::invalid_input(
                        "inner_diameter_m",
                        inner_diameter_m.to_string(),
                        format!("Inner diameter must be smaller than the outer diameter ({outer_diameter_m})"),
                    ));
                }
                Ok(())
            }
        }
    }
}

fn finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> CalcResult<()> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

// =============================================================================
// INPUT
// =============================================================================

/// Input parameters for one shaft section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Section #1",
///   "section": { "shape": "circle", "diameter_m": 0.05 },
///   "length_m": 1.0,
///   "shear_modulus_pa": 80000000000.0,
///   "start_moment_nm": 1000.0,
///   "end_moment_nm": 500.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInput {
    /// User label for this section (e.g., "Section #1", "Motor end")
    pub label: String,

    /// Cross-section geometry
    pub section: CrossSection,

    /// Section length L in meters
    pub length_m: f64,

    /// Shear modulus G in pascals
    pub shear_modulus_pa: f64,

    /// Torque at the start of the section M0 in N·m
    pub start_moment_nm: f64,

    /// Torque at the end of the section M_end in N·m (negative = opposite sense)
    pub end_moment_nm: f64,
}

impl SectionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        positive("length_m", self.length_m)?;
        positive("shear_modulus_pa", self.shear_modulus_pa)?;
        finite("start_moment_nm", self.start_moment_nm)?;
        finite("end_moment_nm", self.end_moment_nm)?;
        Ok(())
    }
}

// =============================================================================
// SECTION MODEL
// =============================================================================

/// A validated, immutable shaft section.
///
/// The moment slope is derived once at construction from the end moments and
/// the length; it cannot be set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaftSection {
    input: SectionInput,
    moment_slope: f64,
}

impl ShaftSection {
    /// Build a section from its input, rejecting degenerate values.
    pub fn new(input: SectionInput) -> CalcResult<Self> {
        input.validate()?;
        let moment_slope = torsion::moment_slope(input.start_moment_nm, input.end_moment_nm, input.length_m);
        Ok(ShaftSection { input, moment_slope })
    }

    /// Input this section was built from
    pub fn input(&self) -> &SectionInput {
        &self.input
    }

    /// Shape of the cross-section
    pub fn shape(&self) -> ShapeKind {
        self.input.section.kind()
    }

    /// Section length L (m)
    pub fn length(&self) -> f64 {
        self.input.length_m
    }

    /// Torque decay rate m = (M0 − M_end)/L (N·m per m)
    pub fn moment_slope(&self) -> f64 {
        self.moment_slope
    }

    /// Polar moment of inertia J (m⁴)
    pub fn inertia_moment(&self) -> f64 {
        self.input.section.polar_moment_m4()
    }

    /// Stress-point radius r (m)
    pub fn outer_radius(&self) -> f64 {
        self.input.section.outer_radius_m()
    }

    /// Section modulus W = J/r (m³)
    pub fn section_modulus(&self) -> f64 {
        props::section_modulus(self.inertia_moment(), self.outer_radius())
    }

    /// Internal torque at position `x` (m) from the start of the section.
    ///
    /// `moment_at(0.0)` is M0 and `moment_at(length)` is M_end; other values
    /// of `x`, including ones outside the section, follow the same line.
    pub fn moment_at(&self, x: f64) -> f64 {
        torsion::linear_moment(self.input.start_moment_nm, self.moment_slope, x)
    }

    /// Twist angle φ = M_end·L/(G·J) (rad)
    pub fn twist_angle(&self) -> f64 {
        torsion::twist_angle(
            self.input.end_moment_nm,
            self.input.length_m,
            self.input.shear_modulus_pa,
            self.inertia_moment(),
        )
    }

    /// Peak shear stress over the section, τ = max(|M0|, |M_end|)/W (Pa).
    ///
    /// The torque is linear in x, so its largest magnitude is at an end.
    pub fn max_shear_stress(&self) -> f64 {
        let peak = self.input.start_moment_nm.abs().max(self.input.end_moment_nm.abs());
        torsion::shear_stress(peak, self.section_modulus())
    }

    /// Evaluate every derived quantity.
    pub fn evaluate(&self) -> SectionResult {
        let result = SectionResult {
            label: self.input.label.clone(),
            shape: self.shape(),
            polar_moment_m4: self.inertia_moment(),
            outer_radius_m: self.outer_radius(),
            section_modulus_m3: self.section_modulus(),
            start_moment_nm: self.moment_at(0.0),
            end_moment_nm: self.moment_at(self.length()),
            moment_slope_nm_per_m: self.moment_slope,
            twist_angle_rad: self.twist_angle(),
            max_shear_stress_pa: self.max_shear_stress(),
        };
        log::debug!(
            "{} ({}): J={:.6e} m^4, W={:.6e} m^3, phi={:.6e} rad",
            result.label,
            result.shape,
            result.polar_moment_m4,
            result.section_modulus_m3,
            result.twist_angle_rad
        );
        result
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Results for one shaft section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Section #1",
///   "shape": "circle",
///   "polar_moment_m4": 6.135923e-7,
///   "outer_radius_m": 0.025,
///   "section_modulus_m3": 2.454369e-5,
///   "start_moment_nm": 1000.0,
///   "end_moment_nm": 500.0,
///   "moment_slope_nm_per_m": 500.0,
///   "twist_angle_rad": 0.010186,
///   "max_shear_stress_pa": 40743665.4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    /// Label copied from the input
    pub label: String,

    /// Cross-section shape
    pub shape: ShapeKind,

    /// Polar moment of inertia J (m⁴)
    pub polar_moment_m4: f64,

    /// Stress-point radius r (m)
    pub outer_radius_m: f64,

    /// Section modulus W = J/r (m³)
    pub section_modulus_m3: f64,

    /// Torque at x = 0 (N·m)
    pub start_moment_nm: f64,

    /// Torque at x = L (N·m)
    pub end_moment_nm: f64,

    /// Torque decay rate (N·m per m)
    pub moment_slope_nm_per_m: f64,

    /// Twist angle φ (rad)
    pub twist_angle_rad: f64,

    /// Peak shear stress τ (Pa)
    pub max_shear_stress_pa: f64,
}

impl SectionResult {
    /// J as a typed quantity
    pub fn polar_moment(&self) -> M4 {
        M4(self.polar_moment_m4)
    }

    /// W as a typed quantity
    pub fn section_modulus(&self) -> M3 {
        M3(self.section_modulus_m3)
    }

    /// φ as a typed quantity
    pub fn twist_angle(&self) -> Radians {
        Radians(self.twist_angle_rad)
    }
}

/// Calculate the response of a single section.
///
/// # Returns
///
/// * `Ok(SectionResult)` - Calculation results
/// * `Err(CalcError::InvalidInput)` - Degenerate length, modulus or geometry
pub fn calculate(input: &SectionInput) -> CalcResult<SectionResult> {
    Ok(ShaftSection::new(input.clone())?.evaluate())
}
