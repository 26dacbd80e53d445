//! # Text Report
//!
//! Renders shaft results as the plain-text block printed at the end of an
//! interactive run. Section properties are shown as multiples of a power of
//! ten (J in 1e-8 m⁴, W in 1e-6 m³ by default) and every number uses the same
//! fixed number of decimals.
//!
//! ## Example
//!
//! ```rust
//! use torsion_core::calculations::{shaft, CrossSection, SectionInput, ShaftInput};
//! use torsion_core::project::ReportSettings;
//! use torsion_core::report::render_report;
//!
//! let input = ShaftInput::new("Demo").with_section(SectionInput {
//!     label: "Section #1".to_string(),
//!     section: CrossSection::circle_from_cm(5.0),
//!     length_m: 1.0,
//!     shear_modulus_pa: 8.0e10,
//!     start_moment_nm: 1000.0,
//!     end_moment_nm: 500.0,
//! });
//! let result = shaft::calculate(&input).unwrap();
//! let text = render_report(&result, &ReportSettings::default());
//! assert!(text.contains("Inertia moment J     = 61.359232 x1e-8 m^4"));
//! ```

use std::fmt;

use crate::calculations::{SectionResult, ShaftResult};
use crate::project::ReportSettings;

/// Display adapter for a single section block.
pub struct SectionReport<'a> {
    /// 1-based position along the shaft
    pub number: usize,
    pub result: &'a SectionResult,
    pub settings: &'a ReportSettings,
}

impl fmt::Display for SectionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.settings.decimals;
        let r = self.result;
        let heading = format!("Section #{}", self.number);

        if r.label.is_empty() || r.label == heading {
            writeln!(f, "{heading}:")?;
        } else {
            writeln!(f, "{heading} ({}):", r.label)?;
        }
        writeln!(f, "  Shape                : {}", r.shape)?;
        writeln!(
            f,
            "  Inertia moment J     = {:.p$} x1e{} m^4",
            r.polar_moment().scaled(self.settings.inertia_scale_exp),
            -self.settings.inertia_scale_exp
        )?;
        writeln!(
            f,
            "  Section modulus W    = {:.p$} x1e{} m^3",
            r.section_modulus().scaled(self.settings.modulus_scale_exp),
            -self.settings.modulus_scale_exp
        )?;
        writeln!(f, "  Moment at start M0   = {:.p$} N·m", r.start_moment_nm)?;
        writeln!(f, "  Moment at end M(L)   = {:.p$} N·m", r.end_moment_nm)?;
        writeln!(f, "  Twist angle          = {:.p$} rad", r.twist_angle_rad)?;
        writeln!(f, "  Max shear stress     = {:.p$} Pa", r.max_shear_stress_pa)
    }
}

/// Display adapter for a whole shaft: results header, one block per section
/// in input order, then the run summary.
pub struct ShaftReport<'a> {
    pub result: &'a ShaftResult,
    pub settings: &'a ReportSettings,
}

impl fmt::Display for ShaftReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.settings.decimals;

        writeln!(f, "=== Results ===")?;
        for (i, section) in self.result.sections.iter().enumerate() {
            writeln!(f)?;
            write!(
                f,
                "{}",
                SectionReport {
                    number: i + 1,
                    result: section,
                    settings: self.settings,
                }
            )?;
        }

        let total = self.result.total_twist();
        writeln!(f)?;
        writeln!(f, "=== Summary ===")?;
        writeln!(f, "  Sections processed   : {}", self.result.section_count)?;
        writeln!(
            f,
            "  Total twist          = {:.p$} rad ({:.p$} deg)",
            total.value(),
            total.to_degrees()
        )
    }
}

/// Render the full report for a shaft.
#[must_use]
pub fn render_report(result: &ShaftResult, settings: &ReportSettings) -> String {
    ShaftReport { result, settings }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{shaft, CrossSection, SectionInput, ShaftInput};

    fn circle_shaft() -> ShaftResult {
        let input = ShaftInput::new("Demo").with_section(SectionInput {
            label: "Section #1".to_string(),
            section: CrossSection::circle_from_cm(5.0),
            length_m: 1.0,
            shear_modulus_pa: 8.0e10,
            start_moment_nm: 1000.0,
            end_moment_nm: 500.0,
        });
        shaft::calculate(&input).unwrap()
    }

    #[test]
    fn formats_section_block() {
        let report = render_report(&circle_shaft(), &ReportSettings::default());
        let expected = "\
Section #1:
  Shape                : circle
  Inertia moment J     = 61.359232 x1e-8 m^4
  Section modulus W    = 24.543693 x1e-6 m^3
  Moment at start M0   = 1000.000000 N·m
  Moment at end M(L)   = 500.000000 N·m
  Twist angle          = 0.010186 rad
";
        assert!(report.starts_with("=== Results ===\n\n"));
        assert!(report.contains(expected), "report was:\n{report}");
    }

    #[test]
    fn formats_summary() {
        let report = render_report(&circle_shaft(), &ReportSettings::default());
        assert!(report.contains("=== Summary ===\n  Sections processed   : 1\n"));
        assert!(report.contains("Total twist          = 0.010186 rad (0.583610 deg)"), "report was:\n{report}");
    }

    #[test]
    fn custom_labels_follow_heading() {
        let mut result = circle_shaft();
        result.sections[0].label = "Motor end".to_string();
        let report = render_report(&result, &ReportSettings::default());
        assert!(report.contains("Section #1 (Motor end):"));
    }

    #[test]
    fn honours_settings() {
        let settings = ReportSettings {
            decimals: 2,
            inertia_scale_exp: 9,
            modulus_scale_exp: 6,
        };
        let report = render_report(&circle_shaft(), &settings);
        assert!(report.contains("Inertia moment J     = 613.59 x1e-9 m^4"));
        assert!(report.contains("Moment at start M0   = 1000.00 N·m"));
    }

    #[test]
    fn scale_factor_sign_follows_exponent() {
        let settings = ReportSettings {
            decimals: 3,
            inertia_scale_exp: 0,
            modulus_scale_exp: -3,
        };
        let report = render_report(&circle_shaft(), &settings);
        assert!(report.contains("Inertia moment J     = 0.000 x1e0 m^4"), "report was:\n{report}");
        assert!(report.contains("Section modulus W    = 0.000 x1e3 m^3"), "report was:\n{report}");
        assert!(!report.contains("x1e-"));
    }

    #[test]
    fn empty_shaft_has_no_section_blocks() {
        let result = shaft::calculate(&ShaftInput::new("Empty")).unwrap();
        let report = render_report(&result, &ReportSettings::default());
        assert!(!report.contains("Section #"));
        assert!(report.contains("Sections processed   : 0"));
    }
}
