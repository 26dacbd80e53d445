//! # Project Data Structures
//!
//! The `Project` struct is the root container saved to `.shaft` files as
//! human-readable JSON. It holds the shaft's sections in order together with
//! the metadata and report settings of the run.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: ReportSettings (decimals, presentation scales)
//! └── sections: Vec<SectionEntry> (ordered, each with a UUID)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use torsion_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "Pump drive shaft");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("Pump drive shaft"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{SectionInput, ShaftInput};

/// Current schema version for .shaft files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Report presentation settings
    #[serde(default)]
    pub settings: ReportSettings,

    /// Shaft sections in order along the shaft
    pub sections: Vec<SectionEntry>,
}

/// A stored section and its stable identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// Identifier that survives reordering
    pub id: Uuid,

    /// Section input
    pub input: SectionInput,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use torsion_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Gearbox output");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// assert_eq!(project.section_count(), 0);
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, shaft_label: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                shaft_label: shaft_label.into(),
                created: now,
                modified: now,
            },
            settings: ReportSettings::default(),
            sections: Vec::new(),
        }
    }

    /// Create a project holding every section of `shaft`, in order.
    ///
    /// Engineer and job id start empty; the CLI fills them from `--engineer`
    /// and `--job`.
    pub fn from_shaft(shaft: &ShaftInput) -> Self {
        let mut project = Project::new("", "", shaft.label.clone());
        for section in &shaft.sections {
            project.add_section(section.clone());
        }
        project
    }

    /// Append a section to the end of the shaft.
    ///
    /// Returns the UUID assigned to the section.
    pub fn add_section(&mut self, input: SectionInput) -> Uuid {
        let id = Uuid::new_v4();
        self.sections.push(SectionEntry { id, input });
        self.touch();
        id
    }

    /// Remove a section by UUID, keeping the order of the others.
    ///
    /// Returns the removed section if it existed.
    pub fn remove_section(&mut self, id: &Uuid) -> Option<SectionInput> {
        let index = self.sections.iter().position(|entry| entry.id == *id)?;
        let entry = self.sections.remove(index);
        self.touch();
        Some(entry.input)
    }

    /// Get a section by UUID.
    pub fn get_section(&self, id: &Uuid) -> Option<&SectionInput> {
        self.sections.iter().find(|entry| entry.id == *id).map(|entry| &entry.input)
    }

    /// Number of sections in the project
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Shaft input for calculation, sections in stored order.
    pub fn shaft(&self) -> ShaftInput {
        ShaftInput {
            label: self.meta.shaft_label.clone(),
            sections: self.sections.iter().map(|entry| entry.input.clone()).collect(),
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Label of the shaft being analysed
    pub shaft_label: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// How numbers are presented in the text report.
///
/// Section properties are printed as multiples of a power of ten:
/// J in units of `10^-inertia_scale_exp` m⁴ and W in units of
/// `10^-modulus_scale_exp` m³.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Digits after the decimal point
    pub decimals: usize,

    /// J is printed in units of 10^-exp m⁴
    pub inertia_scale_exp: i32,

    /// W is printed in units of 10^-exp m³
    pub modulus_scale_exp: i32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            decimals: 6,
            inertia_scale_exp: 8,
            modulus_scale_exp: 6,
        }
    }
}
