//! # Shaft Torsion CLI
//!
//! Line-oriented front end for `torsion_core`. Prompts for the number of
//! sections and each section's geometry and loading, then prints one report
//! block per section. A saved project can be used instead of prompting.
//!
//! Exit status is 0 after a complete run, 1 on any input or calculation
//! error (nothing is reported in that case), 2 on bad command-line flags.

mod args;
mod session;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use torsion_core::calculations::shaft;
use torsion_core::errors::{CalcError, CalcResult};
use torsion_core::project::{Project, ReportSettings};
use torsion_core::report::render_report;
use torsion_core::{load_project, save_project};

use args::{Args, USAGE};
use session::Session;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let result = run(&args, stdin.lock(), &mut stdout);
    ExitCode::from(finish(result, args.json, &mut stdout, &mut io::stderr()))
}

/// Collect every section, calculate, optionally save, then report.
///
/// All input is read before anything is calculated, so an error leaves the
/// output without any report block.
fn run<R: BufRead, W: Write>(args: &Args, input: R, mut out: W) -> CalcResult<()> {
    let loaded = args.load.as_deref().map(load_project).transpose()?;
    let (shaft_input, settings) = match &loaded {
        Some(project) => (project.shaft(), project.settings),
        None => {
            write_out(&mut out, "=== Shaft Torsion Calculator ===\n")?;
            let mut session = Session::new(input, &mut out);
            (session.read_shaft("Shaft")?, ReportSettings::default())
        }
    };

    let result = shaft::calculate(&shaft_input)?;

    if let Some(path) = &args.save {
        let mut project = loaded.unwrap_or_else(|| Project::from_shaft(&shaft_input));
        if let Some(engineer) = &args.engineer {
            project.meta.engineer = engineer.clone();
        }
        if let Some(job) = &args.job {
            project.meta.job_id = job.clone();
        }
        project.settings = settings;
        project.touch();
        save_project(&project, path)?;
    }

    write_out(&mut out, &format!("\n{}", render_report(&result, &settings)))?;

    if args.json {
        let json = serde_json::to_string_pretty(&result)?;
        write_out(&mut out, &format!("\nJSON Output:\n{json}\n"))?;
    }

    Ok(())
}

fn write_out<W: Write>(out: &mut W, text: &str) -> CalcResult<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| CalcError::file_error("write", "<stdout>", e.to_string()))
}

/// Map the outcome of a run to its exit status.
///
/// An unknown shape prints `Incorrect data entry` on `out`; every error is
/// described on `err`, followed by its JSON form when `json` is set.
fn finish<W: Write, E: Write>(result: CalcResult<()>, json: bool, out: &mut W, err: &mut E) -> u8 {
    let Err(e) = result else {
        return EXIT_SUCCESS;
    };

    if matches!(e, CalcError::InvalidShape { .. }) {
        let _ = writeln!(out, "Incorrect data entry");
        let _ = out.flush();
    }
    let _ = writeln!(err, "Error: {e}");
    log::debug!("run aborted with {}", e.error_code());

    if json {
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            let _ = writeln!(err, "\nError JSON:\n{json}");
        }
    }
    EXIT_FAILURE
}
