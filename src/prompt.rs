use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

/// Prompt user with a message and return their trimmed input,
/// or None once the input is closed.
pub fn prompt_or_eof<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{}", message).context("Failed to write prompt")?;
    out.flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt user with a message and return their trimmed input.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<String> {
    match prompt_or_eof(input, out, message)? {
        Some(answer) => Ok(answer),
        None => bail!("Input closed before an answer was given"),
    }
}

/// Prompt user with a message and a default value. Returns default if input is empty.
pub fn prompt_with_default<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
    default: &str,
) -> Result<String> {
    let answer = prompt(input, out, &format!("{} [{}]: ", message, default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
    default_yes: bool,
) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let answer = prompt(input, out, &format!("{} [{}]: ", message, hint))?.to_lowercase();
    if answer.is_empty() {
        Ok(default_yes)
    } else {
        Ok(answer == "y" || answer == "yes")
    }
}
