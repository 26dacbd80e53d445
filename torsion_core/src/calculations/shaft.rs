//! # Shaft Calculation
//!
//! A shaft is an ordered list of independent sections. Each section is
//! evaluated on its own; the only cross-section quantities are the tally of
//! sections processed and the plain sum of their twist angles.
//!
//! Every section is validated before any is evaluated, so a bad section
//! aborts the whole run without producing partial results.

use serde::{Deserialize, Serialize};

use super::section::{SectionInput, SectionResult, ShaftSection};
use crate::errors::CalcResult;
use crate::units::Radians;

/// Input for a whole shaft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShaftInput {
    /// User label for the shaft
    pub label: String,

    /// Sections in order along the shaft
    pub sections: Vec<SectionInput>,
}

impl ShaftInput {
    /// Create an empty shaft
    pub fn new(label: impl Into<String>) -> Self {
        ShaftInput {
            label: label.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section
    pub fn with_section(mut self, section: SectionInput) -> Self {
        self.sections.push(section);
        self
    }

    /// Validate and build every section, in order.
    ///
    /// Errors carry the offending section's index in the field path,
    /// e.g. `sections[1].length_m`.
    pub fn build(&self) -> CalcResult<Vec<ShaftSection>> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, input)| ShaftSection::new(input.clone()).map_err(|e| e.at(&format!("sections[{i}]"))))
            .collect()
    }
}

/// Results for a whole shaft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaftResult {
    /// Label copied from the input
    pub label: String,

    /// Per-section results in input order
    pub sections: Vec<SectionResult>,

    /// Number of sections processed
    pub section_count: usize,

    /// Sum of the section twist angles (rad). Informational only: no
    /// compatibility between sections is enforced.
    pub total_twist_rad: f64,
}

impl ShaftResult {
    /// Total twist as a typed quantity
    pub fn total_twist(&self) -> Radians {
        Radians(self.total_twist_rad)
    }
}

/// Calculate every section of a shaft.
pub fn calculate(input: &ShaftInput) -> CalcResult<ShaftResult> {
    let sections: Vec<SectionResult> = input.build()?.iter().map(ShaftSection::evaluate).collect();
    let total_twist = sections
        .iter()
        .fold(Radians::default(), |acc, s| acc + s.twist_angle());

    log::info!(
        "shaft '{}': {} section(s), total twist {:.6e} rad",
        input.label,
        sections.len(),
        total_twist.value()
    );

    Ok(ShaftResult {
        label: input.label.clone(),
        section_count: sections.len(),
        total_twist_rad: total_twist.value(),
        sections,
    })
}
