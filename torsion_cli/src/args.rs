//! Command-line flags.

use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: shaft-torsion [OPTIONS]

Options:
  --load <FILE>   Read sections from a saved project instead of prompting
  --save <FILE>   Save the entered sections as a project after calculating
  --engineer <NAME>
                  Engineer recorded in the saved project
  --job <ID>      Job number recorded in the saved project
  --json          Also print the results as JSON
  -h, --help      Print this help

Logging is controlled with RUST_LOG (e.g. RUST_LOG=debug).";

/// Parsed command-line options.
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub load: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub engineer: Option<String>,
    pub job: Option<String>,
    pub json: bool,
    pub help: bool,
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--load" => parsed.load = Some(value(&arg, "a file path", args.next())?.into()),
                "--save" => parsed.save = Some(value(&arg, "a file path", args.next())?.into()),
                "--engineer" => parsed.engineer = Some(value(&arg, "a name", args.next())?),
                "--job" => parsed.job = Some(value(&arg, "a job number", args.next())?),
                "--json" => parsed.json = true,
                "-h" | "--help" => parsed.help = true,
                other => return Err(format!("unrecognized argument '{other}'")),
            }
        }

        Ok(parsed)
    }
}

fn value(flag: &str, what: &str, next: Option<String>) -> Result<String, String> {
    match next {
        Some(v) if !v.starts_with("--") => Ok(v),
        _ => Err(format!("{flag} requires {what}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, String> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_arguments_is_interactive() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn parses_all_flags() {
        let args = parse(&["--load", "in.shaft", "--save", "out.shaft", "--json"]).unwrap();
        assert_eq!(args.load, Some(PathBuf::from("in.shaft")));
        assert_eq!(args.save, Some(PathBuf::from("out.shaft")));
        assert!(args.json);
        assert!(!args.help);
    }

    #[test]
    fn parses_project_metadata() {
        let args = parse(&["--save", "out.shaft", "--engineer", "J. Smith", "--job", "25-042"]).unwrap();
        assert_eq!(args.engineer.as_deref(), Some("J. Smith"));
        assert_eq!(args.job.as_deref(), Some("25-042"));

        let err = parse(&["--job"]).unwrap_err();
        assert_eq!(err, "--job requires a job number");
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(parse(&["--load"]).is_err());
        assert!(parse(&["--save", "--json"]).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert!(err.contains("--verbose"));
    }
}
