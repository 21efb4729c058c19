use crate::beep::exec::{Config, DEFAULT_MAX_STATEMENTS};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
/// Holds command line arguments.
pub struct Args {
    /// BEEP program to run.
    #[clap(parse(from_os_str), value_name = "FILE")]
    pub file: PathBuf,

    #[clap(short, long)]
    /// Print every line before executing it.
    pub verbose: bool,

    #[clap(short, long)]
    /// Skip the source listing and the variable and label tables.
    pub quiet: bool,

    #[clap(short, long, default_value_t = DEFAULT_MAX_STATEMENTS, value_name = "N")]
    /// Stop after this many statements.
    pub max_statements: usize,

    #[clap(short, long, parse(from_occurrences))]
    /// Increase log verbosity. Logs are written to the temporary directory.
    pub log_level: usize,
}

impl Args {
    /// Execution settings from the arguments.
    pub fn config(&self) -> Config {
        Config {
            verbose: self.verbose,
            max_statements: self.max_statements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_defaults() -> Result<()> {
        let args = Args::try_parse_from(["beep", "program.beep"])?;

        assert_eq!(args.file, PathBuf::from("program.beep"));
        assert_eq!(args.config(), Config::default());
        assert!(!args.quiet);
        assert_eq!(args.log_level, 0);

        Ok(())
    }

    #[test]
    fn test_switches() -> Result<()> {
        let args = Args::try_parse_from([
            "beep", "-v", "-q", "-lll", "-m", "20", "program.beep",
        ])?;

        assert_eq!(
            args.config(),
            Config {
                verbose: true,
                max_statements: 20,
            }
        );
        assert!(args.quiet);
        assert_eq!(args.log_level, 3);

        Ok(())
    }

    #[test]
    fn test_file_is_required() {
        assert!(Args::try_parse_from(["beep"]).is_err());
        assert!(Args::try_parse_from(["beep", "-x", "program.beep"]).is_err());
    }
}
