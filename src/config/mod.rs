//! Configuration management

use crate::types::CompareError;
use clap::{ArgAction, Parser};
use std::fmt;
use std::path::{Path, PathBuf};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "contentcmp",
    version,
    about = "Check whether two files have identical contents",
    long_about = "Compares two files byte for byte. Exits 0 if they are identical, \
                  1 if they differ and 2 on error. Use '-' to read one side from standard input."
)]
pub struct Cli {
    /// First file ('-' for standard input)
    pub left: PathBuf,

    /// Second file ('-' for standard input)
    pub right: PathBuf,

    /// Print nothing, report only through the exit status
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr (-vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,

    /// A file on disk
    File(PathBuf),
}

impl Input {
    /// Interpret a command-line path, treating `-` as standard input
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            Input::Stdin
        } else {
            Input::File(path.to_path_buf())
        }
    }

    /// Check if this side reads standard input
    pub fn is_stdin(&self) -> bool {
        matches!(self, Input::Stdin)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "-"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Validated configuration for one comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// First source
    pub left: Input,

    /// Second source
    pub right: Input,

    /// Suppress all output
    pub quiet: bool,

    /// Log verbosity (0 = warnings only)
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left: Input::File(PathBuf::new()),
            right: Input::File(PathBuf::new()),
            quiet: false,
            verbose: 0,
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), CompareError> {
        if self.left.is_stdin() && self.right.is_stdin() {
            return Err(CompareError::Config(
                "Standard input can only be used for one side".to_string(),
            ));
        }

        for input in [&self.left, &self.right] {
            if let Input::File(path) = input {
                if path.as_os_str().is_empty() {
                    return Err(CompareError::Config("Empty path".to_string()));
                }
            }
        }

        Ok(())
    }

    /// Default `tracing` filter directive for the configured verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = CompareError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Config {
            left: Input::from_arg(&cli.left),
            right: Input::from_arg(&cli.right),
            quiet: cli.quiet,
            verbose: cli.verbose,
        };
        config.validate()?;
        Ok(config)
    }
}
