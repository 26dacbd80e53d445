//! Prompt/response driver for the interactive calculator.
//!
//! Numbers are read as whitespace-separated tokens, so a value may be typed on
//! its own line or several values may share one line. The shape name is read
//! as a whole line and must match exactly, surrounding spaces included. Every
//! section is collected before anything is calculated.

use std::io::{BufRead, Write};

use torsion_core::calculations::{CrossSection, SectionInput, ShapeKind, ShaftInput};
use torsion_core::errors::{CalcError, CalcResult};

/// Interactive reader over any line source and prompt sink.
pub struct Session<R, W> {
    input: R,
    output: W,
    /// Unread remainder of the current line, terminator included
    pending: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            input,
            output,
            pending: String::new(),
        }
    }

    /// Give back the prompt sink.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read the section count and then every section, in order.
    ///
    /// Stops at the first bad token; nothing is returned for the sections
    /// already read.
    pub fn read_shaft(&mut self, label: &str) -> CalcResult<ShaftInput> {
        let count = self.read_count()?;
        let mut shaft = ShaftInput::new(label);
        for number in 1..=count {
            let section = self.read_section(number)?;
            shaft.sections.push(section);
        }
        Ok(shaft)
    }

    fn read_count(&mut self) -> CalcResult<usize> {
        self.prompt("Enter number of sections: ")?;
        let token = self.next_token("section_count")?;
        token
            .parse()
            .map_err(|_| CalcError::malformed_input("section_count", token))
    }

    /// Read one section: shape, shape geometry in centimeters, then length,
    /// shear modulus and the two end moments.
    ///
    /// Field names in errors are prefixed with the section's position,
    /// e.g. `sections[0].length_m`.
    pub fn read_section(&mut self, number: usize) -> CalcResult<SectionInput> {
        self.write_line(&format!("\n--- Section #{number} ---"))?;
        self.read_section_fields(number)
            .map_err(|e| e.at(&format!("sections[{}]", number - 1)))
    }

    fn read_section_fields(&mut self, number: usize) -> CalcResult<SectionInput> {
        self.prompt("Enter shape (circle, rectangle, tube): ")?;
        let shape: ShapeKind = self.next_line("shape")?.parse()?;

        let section = match shape {
            ShapeKind::Circle => {
                let d_cm = self.read_f64("Enter diameter d (cm): ", "diameter_cm")?;
                CrossSection::circle_from_cm(d_cm)
            }
            ShapeKind::Rectangle => {
                let b_cm = self.read_f64("Enter small side b (cm): ", "small_side_cm")?;
                let ratio = self.read_f64("Enter ratio h/b: ", "h_over_b")?;
                CrossSection::rectangle_from_cm(b_cm, ratio)
            }
            ShapeKind::Tube => {
                let outer_cm = self.read_f64("Enter outer diameter D (cm): ", "outer_diameter_cm")?;
                let ratio = self.read_f64("Enter ratio d/D: ", "d_over_D")?;
                CrossSection::tube_from_cm(outer_cm, ratio)
            }
        };

        let length_m = self.read_f64("Enter length L (m): ", "length_m")?;
        let shear_modulus_pa = self.read_f64("Enter shear modulus G (Pa): ", "shear_modulus_pa")?;
        let start_moment_nm = self.read_f64("Enter start moment M0 (N·m): ", "start_moment_nm")?;
        let end_moment_nm = self.read_f64(
            "Enter end moment M_L (N·m) (use negative for 'from yourself'): ",
            "end_moment_nm",
        )?;

        Ok(SectionInput {
            label: format!("Section #{number}"),
            section,
            length_m,
            shear_modulus_pa,
            start_moment_nm,
            end_moment_nm,
        })
    }

    fn read_f64(&mut self, prompt: &str, field: &str) -> CalcResult<f64> {
        self.prompt(prompt)?;
        let token = self.next_token(field)?;
        token.parse().map_err(|_| CalcError::malformed_input(field, token))
    }

    /// Next whitespace-separated token, reading more lines as needed.
    fn next_token(&mut self, field: &str) -> CalcResult<String> {
        loop {
            let rest = self.pending.trim_start();
            if !rest.is_empty() {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                let token = rest[..end].to_string();
                self.pending = rest[end..].to_string();
                return Ok(token);
            }
            if !self.fill()? {
                return Err(CalcError::missing_field(field));
            }
        }
    }

    /// A whole line of input without its terminator.
    ///
    /// If the previous token was followed by more text on its line, one
    /// separator character is skipped and the rest of that line is used.
    /// Otherwise the next line is read.
    fn next_line(&mut self, field: &str) -> CalcResult<String> {
        let mut line = if self.pending.trim().is_empty() {
            if !self.fill()? {
                return Err(CalcError::missing_field(field));
            }
            std::mem::take(&mut self.pending)
        } else {
            let mut rest = std::mem::take(&mut self.pending);
            rest.remove(0);
            rest
        };
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Replace the pending text with the next input line.
    ///
    /// Returns `false` at end of input.
    fn fill(&mut self) -> CalcResult<bool> {
        self.pending.clear();
        let read = self
            .input
            .read_line(&mut self.pending)
            .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
        Ok(read > 0)
    }

    fn prompt(&mut self, text: &str) -> CalcResult<()> {
        write!(self.output, "{text}")
            .and_then(|_| self.output.flush())
            .map_err(|e| CalcError::file_error("write", "<stdout>", e.to_string()))
    }

    fn write_line(&mut self, text: &str) -> CalcResult<()> {
        writeln!(self.output, "{text}").map_err(|e| CalcError::file_error("write", "<stdout>", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_circle_section() {
        let mut s = session("1\ncircle\n5\n1.0\n8e10\n1000\n500\n");
        let shaft = s.read_shaft("Test").unwrap();
        assert_eq!(shaft.sections.len(), 1);

        let section = &shaft.sections[0];
        assert_eq!(section.label, "Section #1");
        assert_eq!(section.section, CrossSection::Circle { diameter_m: 0.05 });
        assert_relative_eq!(section.length_m, 1.0);
        assert_relative_eq!(section.shear_modulus_pa, 8.0e10);
        assert_relative_eq!(section.start_moment_nm, 1000.0);
        assert_relative_eq!(section.end_moment_nm, 500.0);
    }

    #[test]
    fn reads_rectangle_and_tube_on_shared_lines() {
        let input = "2\nrectangle\n3 2\n0.5 8e10 100 -50\ntube\n8 0.5\n1 8e10 0 0\n";
        let shaft = session(input).read_shaft("Test").unwrap();

        match shaft.sections[0].section {
            CrossSection::Rectangle { width_m, height_m } => {
                assert_relative_eq!(width_m, 0.06, max_relative = 1e-12);
                assert_relative_eq!(height_m, 0.03, max_relative = 1e-12);
            }
            other => panic!("unexpected section {other:?}"),
        }
        assert_relative_eq!(shaft.sections[0].end_moment_nm, -50.0);

        match shaft.sections[1].section {
            CrossSection::Tube {
                outer_diameter_m,
                inner_diameter_m,
            } => {
                assert_relative_eq!(outer_diameter_m, 0.08, max_relative = 1e-12);
                assert_relative_eq!(inner_diameter_m, 0.04, max_relative = 1e-12);
            }
            other => panic!("unexpected section {other:?}"),
        }
    }

    #[test]
    fn prompts_follow_shape() {
        let mut s = session("1\ntube\n8\n0.5\n1\n8e10\n10\n5\n");
        s.read_shaft("Test").unwrap();
        let prompts = String::from_utf8(s.into_output()).unwrap();
        assert!(prompts.starts_with("Enter number of sections: "));
        assert!(prompts.contains("--- Section #1 ---"));
        assert!(prompts.contains("Enter outer diameter D (cm): Enter ratio d/D: "));
        assert!(!prompts.contains("Enter diameter d (cm)"));
    }

    #[test]
    fn unknown_shape_stops_reading() {
        let mut s = session("2\ncircle\n5\n1\n8e10\n10\n5\nsquare\n4\n");
        let err = s.read_shaft("Test").unwrap_err();
        assert_eq!(err, CalcError::invalid_shape("square"));

        // No geometry prompt after the bad shape
        let prompts = String::from_utf8(s.into_output()).unwrap();
        assert!(prompts.ends_with("Enter shape (circle, rectangle, tube): "));
    }

    #[test]
    fn shape_match_is_case_sensitive() {
        let err = session("1\nCircle\n").read_shaft("Test").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SHAPE");
    }

    #[test]
    fn shape_must_fill_its_line() {
        let err = session("1\ncircle \n5\n1\n8e10\n10\n5\n").read_shaft("Test").unwrap_err();
        assert_eq!(err, CalcError::invalid_shape("circle "));

        let err = session("1\n  circle 5 1 8e10 1000 500\n").read_shaft("Test").unwrap_err();
        assert_eq!(err, CalcError::invalid_shape("  circle 5 1 8e10 1000 500"));

        let err = session("1\n\ncircle\n").read_shaft("Test").unwrap_err();
        assert_eq!(err, CalcError::invalid_shape(""));
    }

    #[test]
    fn shape_may_follow_count_on_one_line() {
        let shaft = session("1 tube\r\n8 0.5 1 8e10 10 5\r\n").read_shaft("Test").unwrap();
        assert_eq!(shaft.sections[0].section.kind(), ShapeKind::Tube);
    }

    #[test]
    fn missing_shape_line() {
        let err = session("1\n").read_shaft("Test").unwrap_err();
        assert_eq!(err, CalcError::missing_field("sections[0].shape"));
    }

    #[test]
    fn malformed_number_is_reported_with_location() {
        let err = session("1\ncircle\n5\nabc\n").read_shaft("Test").unwrap_err();
        assert_eq!(
            err,
            CalcError::MalformedInput {
                field: "sections[0].length_m".to_string(),
                value: "abc".to_string(),
            }
        );
    }

    #[test]
    fn malformed_section_count() {
        let err = session("-3\n").read_shaft("Test").unwrap_err();
        assert_eq!(err, CalcError::malformed_input("section_count", "-3"));
    }

    #[test]
    fn truncated_input_is_missing_field() {
        let err = session("1\ncircle\n5\n1.0\n").read_shaft("Test").unwrap_err();
        assert_eq!(err, CalcError::missing_field("sections[0].shear_modulus_pa"));
    }

    #[test]
    fn zero_sections() {
        let shaft = session("0\n").read_shaft("Test").unwrap();
        assert!(shaft.sections.is_empty());
    }
}
