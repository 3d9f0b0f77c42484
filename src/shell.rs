//! Interactive prediction loop.
//!
//! Reads one line of ticket text at a time, asks the classifier for a
//! department and a confidence, and prints the result. The loop ends on the
//! `exit` command (case-insensitive, surrounding whitespace ignored) or on
//! end of input.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::ml::pipeline::TicketClassifier;

/// Minimum input length (in characters) accepted for prediction.
pub const MIN_INPUT_LEN: usize = 5;

/// Control token that terminates the session.
pub const EXIT_COMMAND: &str = "exit";

const PROMPT: &str = "Describe the issue: ";

/// Run the prediction loop over the given input and output streams.
///
/// Generic over the streams so tests can drive the shell with in-memory
/// buffers and a stub classifier.
pub fn run_shell<R, W>(classifier: &dyn TicketClassifier, mut input: R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input stream
            writeln!(output)?;
            break;
        }

        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case(EXIT_COMMAND) {
            writeln!(output, "Goodbye!")?;
            break;
        }

        if trimmed.chars().count() < MIN_INPUT_LEN {
            writeln!(output, "Please describe the problem in a full sentence.")?;
            writeln!(output)?;
            continue;
        }

        let department = classifier.predict(trimmed)?;
        let proba = classifier.predict_proba(trimmed)?;
        let confidence = proba.iter().map(|(_, p)| *p).fold(0.0, f64::max) * 100.0;

        writeln!(output, "Suggested department: [{department}]")?;
        writeln!(output, "Confidence: {confidence:.1}%")?;
        writeln!(output)?;
    }

    Ok(())
}
