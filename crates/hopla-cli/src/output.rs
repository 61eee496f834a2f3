//! Terminal output and prompts.
//!
//! Results go to stdout as pretty-printed JSON so they can be piped into
//! `jq`. Prompts and explanations go to stderr.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::error::CliError;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}

/// Print a human readable message on stderr.
pub fn explain(message: &str) -> Result<(), CliError> {
    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")?;
    Ok(())
}

/// Ask a yes/no question on stderr and read the answer from stdin.
pub fn confirm(question: &str) -> Result<bool, CliError> {
    {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{question} [y/N]: ")?;
        stderr.flush()?;
    }
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        for answer in ["y", "Y\n", " yes ", "YES"] {
            assert!(is_yes(answer), "{answer:?}");
        }
        for answer in ["", "\n", "n", "no", "yep"] {
            assert!(!is_yes(answer), "{answer:?}");
        }
    }
}
