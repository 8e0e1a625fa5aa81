//! Prompt-and-read helpers for interactive commands.

use std::io::{BufRead, Write};

/// Write `prompt` (no newline), flush, and read one trimmed line.
///
/// Returns `Ok(None)` at end of input. Write and read failures are
/// propagated so a closed terminal ends the session with an error instead
/// of looping on empty input.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::io_utils::prompt_line;
/// let mut out = Vec::new();
/// let mut input = std::io::Cursor::new(b" stand \n".to_vec());
/// let line = prompt_line(&mut out, &mut input, "Action: ").unwrap();
/// assert_eq!(line.as_deref(), Some("stand"));
/// assert_eq!(out, b"Action: ");
/// ```
pub fn prompt_line(
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_lines_then_eof() {
        let mut out = Vec::new();
        let mut input = Cursor::new(b"  hit \n\nstand".to_vec());
        assert_eq!(prompt_line(&mut out, &mut input, "> ").unwrap().as_deref(), Some("hit"));
        assert_eq!(prompt_line(&mut out, &mut input, "> ").unwrap().as_deref(), Some(""));
        assert_eq!(prompt_line(&mut out, &mut input, "> ").unwrap().as_deref(), Some("stand"));
        assert_eq!(prompt_line(&mut out, &mut input, "> ").unwrap(), None);
        assert_eq!(String::from_utf8(out).unwrap(), "> > > > ");
    }
}
