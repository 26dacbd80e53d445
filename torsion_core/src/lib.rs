//! # torsion_core - Shaft Torsion Calculation Engine
//!
//! `torsion_core` computes the torsional response of a shaft made of
//! independent prismatic sections (solid circle, rectangle, tube): polar
//! moment of inertia, section modulus, torque distribution, twist angle and
//! peak shear stress. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Closed-form**: Every quantity is a direct formula, no iteration
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use torsion_core::calculations::{section, CrossSection, SectionInput};
//!
//! let result = section::calculate(&SectionInput {
//!     label: "Section #1".to_string(),
//!     section: CrossSection::tube_from_cm(8.0, 0.5),
//!     length_m: 1.0,
//!     shear_modulus_pa: 8.0e10,
//!     start_moment_nm: 1000.0,
//!     end_moment_nm: 500.0,
//! })
//! .unwrap();
//!
//! assert!((result.outer_radius_m - 0.04).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Section and shaft calculations
//! - [`equations`] - The underlying closed-form formulas
//! - [`project`] - Project container, metadata and report settings
//! - [`report`] - Plain-text report rendering
//! - [`units`] - SI unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic project saves and versioned loads

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod project;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use project::{Project, ProjectMetadata, ReportSettings};
