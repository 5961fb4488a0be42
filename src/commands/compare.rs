//! Compare command

use crate::config::{Config, Input};
use crate::diff::{compare_files, compare_readers, open_for_read};
use crate::types::{CompareError, Verdict};
use crate::ui::describe_difference;
use std::io::{self, Read};
use tracing::debug;

/// Exit status when the sources are identical
pub const EXIT_IDENTICAL: u8 = 0;

/// Exit status when the sources differ
pub const EXIT_DIFFERENT: u8 = 1;

/// Exit status on any error
pub const EXIT_TROUBLE: u8 = 2;

/// Run one comparison, reading `-` from the process's standard input
pub fn run(config: &Config) -> Result<Verdict, CompareError> {
    run_with_stdin(config, io::stdin().lock())
}

/// Run one comparison with an explicit standard-input reader
///
/// Two files go through [`compare_files`] and get the length fast path.
/// When one side is standard input the stream comparator is used directly.
pub fn run_with_stdin<S: Read>(config: &Config, stdin: S) -> Result<Verdict, CompareError> {
    config.validate()?;
    debug!(left = %config.left, right = %config.right, "comparing");

    match (&config.left, &config.right) {
        (Input::File(left), Input::File(right)) => compare_files(left, right),
        (Input::Stdin, Input::File(right)) => compare_readers(stdin, open_for_read(right)?),
        (Input::File(left), Input::Stdin) => compare_readers(open_for_read(left)?, stdin),
        (Input::Stdin, Input::Stdin) => Err(CompareError::Config(
            "Standard input can only be used for one side".to_string(),
        )),
    }
}

/// Print the verdict unless quiet and map it to an exit status
pub fn report(config: &Config, verdict: Verdict) -> u8 {
    match verdict {
        Verdict::Identical => EXIT_IDENTICAL,
        Verdict::Different(difference) => {
            if !config.quiet {
                println!(
                    "{}",
                    describe_difference(&config.left, &config.right, difference)
                );
            }
            EXIT_DIFFERENT
        }
    }
}
