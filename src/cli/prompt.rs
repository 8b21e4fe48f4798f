//! Validation-retry prompts: ask, parse, ask again until the answer parses.

use crate::errors::AppResult;
use std::io::{BufRead, Write};

/// Read one trimmed line. `None` on end of input.
/// Bytes that are not UTF-8 are replaced, so the parser rejects them.
pub fn read_answer<R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> AppResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{question}")?;
    output.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}

/// Keep asking `question` until `parse` accepts the answer.
/// `None` on end of input.
pub fn ask<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    question: &str,
    parse: F,
) -> AppResult<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let Some(answer) = read_answer(input, output, question)? else {
            writeln!(output)?;
            return Ok(None);
        };

        if let Some(value) = parse(&answer) {
            return Ok(Some(value));
        }
        writeln!(output, "Sorry, '{answer}' is not a valid choice. Please try again.")?;
    }
}

pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

pub fn ask_yes_no<R, W>(input: &mut R, output: &mut W, question: &str) -> AppResult<Option<bool>>
where
    R: BufRead,
    W: Write,
{
    ask(input, output, question, parse_yes_no)
}
