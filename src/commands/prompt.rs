//! Interactive filename prompt used when no file argument is given

use std::io::{BufRead, Write};
use std::path::PathBuf;

use movierank_core::error::Result;

const QUIT_WORD: &str = "quit";

/// Ask for a movie file until a non-empty answer is given.
///
/// Returns `None` when the user types `quit` or input ends.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<PathBuf>> {
    loop {
        write!(output, "Enter the movies file name (or '{}' to exit): ", QUIT_WORD)?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            writeln!(output)?;
            return Ok(None);
        }

        let answer = answer.trim();
        if answer.eq_ignore_ascii_case(QUIT_WORD) {
            return Ok(None);
        }
        if !answer.is_empty() {
            return Ok(Some(PathBuf::from(answer)));
        }

        writeln!(output, "Please enter a valid filename.")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Option<PathBuf>, String) {
        let mut output = Vec::new();
        let path = prompt_for_path(&mut Cursor::new(input), &mut output).unwrap();
        (path, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_returns_trimmed_path() {
        let (path, _) = run("  movies.txt \n");
        assert_eq!(path, Some(PathBuf::from("movies.txt")));
    }

    #[test]
    fn test_reprompts_on_empty() {
        let (path, output) = run("\n\nmovies.txt\n");
        assert_eq!(path, Some(PathBuf::from("movies.txt")));
        assert_eq!(output.matches("Please enter a valid filename.").count(), 2);
    }

    #[test]
    fn test_quit_and_eof() {
        assert_eq!(run("QUIT\n").0, None);
        assert_eq!(run("").0, None);
    }
}
