//! Line-oriented prompts.

use anyhow::{Result, bail};
use gridduel_core::Coordinate;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Prints `prompt` and reads one line, without its line ending.
///
/// Bytes that are not UTF-8 become U+FFFD, so such a line is rejected by
/// the parser like any other bad answer. Fails once the input is exhausted.
#[instrument(skip(input, output))]
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        bail!("Input closed");
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Asks for `X,Y` until the answer parses onto the board.
#[instrument(skip(input, output))]
pub fn prompt_coordinate<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Coordinate> {
    loop {
        let line = prompt_line(input, output, "Move: ")?;
        match line.parse::<Coordinate>() {
            Ok(coord) => return Ok(coord),
            Err(e) => {
                debug!(%line, error = %e, "Rejected coordinate input");
                writeln!(output, "Invalid move: {}", e)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_line_strips_newline() {
        let mut input = Cursor::new("hard\r\n");
        let mut output = Vec::new();
        let line = prompt_line(&mut input, &mut output, "Difficulty: ").unwrap();
        assert_eq!(line, "hard");
        assert_eq!(String::from_utf8(output).unwrap(), "Difficulty: ");
    }

    #[test]
    fn test_prompt_line_fails_on_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(prompt_line(&mut input, &mut output, "> ").is_err());
    }

    #[test]
    fn test_prompt_line_replaces_invalid_utf8() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n']);
        let mut output = Vec::new();
        let line = prompt_line(&mut input, &mut output, "> ").unwrap();
        assert_eq!(line, "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_prompt_coordinate_skips_invalid_utf8() {
        let mut input = Cursor::new(b"\xff\xfe\n1,1\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(prompt_coordinate(&mut input, &mut output).unwrap(), Coordinate::CENTER);
        assert_eq!(String::from_utf8(output).unwrap().matches("Invalid move").count(), 1);
    }

    #[test]
    fn test_prompt_coordinate_retries_until_valid() {
        let mut input = Cursor::new("x\n1,2,3\n3,3\n2,1\n");
        let mut output = Vec::new();
        let coord = prompt_coordinate(&mut input, &mut output).unwrap();
        assert_eq!(coord, Coordinate::new(2, 1).unwrap());

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Move: ").count(), 4);
        assert_eq!(text.matches("Invalid move").count(), 3);
    }
}
