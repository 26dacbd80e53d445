//! # Torsion Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`section`] - A single shaft section (circle, rectangle, tube)
//! - [`shaft`] - An ordered list of sections with the run tally

pub mod section;
pub mod shaft;

// Re-export commonly used types
pub use section::{CrossSection, SectionInput, SectionResult, ShapeKind, ShaftSection};
pub use shaft::{ShaftInput, ShaftResult};
