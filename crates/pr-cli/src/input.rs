//! Interactive prompts and target validation.

use std::io::{self, BufRead, Write};

use pr_core::{PrError, ReducerConfig, Result};

pub const FILE_PROMPT: &str = "Enter the transcript file name: ";
pub const TARGET_PROMPT: &str = "Enter the target number of syllables: ";

/// Print `message` and read one trimmed line.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed before an answer was given").into());
    }
    Ok(line.trim().to_string())
}

pub fn parse_target(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| PrError::InvalidTarget(format!("{raw:?} is not an integer")))
}

/// Check `target` against `config.min_target`.
pub fn validate_target(target: i64, config: &ReducerConfig) -> Result<usize> {
    match usize::try_from(target) {
        Ok(n) if n >= config.min_target => Ok(n),
        _ => Err(PrError::InvalidTarget(format!(
            "{target} is below the minimum of {}",
            config.min_target
        ))),
    }
}
