use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use snafu::{ResultExt, Snafu, ensure};

const ROOT_PROMPT: &str = "Enter the path to your notes directory: ";

/// Asks for the root directory on `output` and reads one line from `input`.
pub fn prompt_for_root(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PathBuf, PromptError> {
    write!(output, "{ROOT_PROMPT}").context(WriteSnafu)?;
    output.flush().context(WriteSnafu)?;

    let mut line = String::new();
    input.read_line(&mut line).context(ReadSnafu)?;

    let answer = line.trim();
    ensure!(!answer.is_empty(), EmptySnafu);
    Ok(PathBuf::from(answer))
}

#[derive(Debug, Snafu)]
pub enum PromptError {
    #[snafu(display("Failed to write the prompt"))]
    WriteError { source: io::Error },
    #[snafu(display("Failed to read the notes directory from stdin"))]
    ReadError { source: io::Error },
    #[snafu(display("No notes directory given"))]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_path_after_prompting() {
        let mut input = Cursor::new("  /home/me/notes \n");
        let mut output = Vec::new();

        let root = prompt_for_root(&mut input, &mut output).unwrap();

        assert_eq!(root, PathBuf::from("/home/me/notes"));
        assert_eq!(String::from_utf8(output).unwrap(), ROOT_PROMPT);
    }

    #[test]
    fn keeps_inner_spaces() {
        let mut input = Cursor::new("My Notes/3 - Archive\r\n");

        let root = prompt_for_root(&mut input, &mut Vec::new()).unwrap();

        assert_eq!(root, PathBuf::from("My Notes/3 - Archive"));
    }

    #[test]
    fn blank_answer_is_rejected() {
        let mut input = Cursor::new("   \n");

        let result = prompt_for_root(&mut input, &mut Vec::new());

        assert!(matches!(result, Err(PromptError::Empty)));
    }

    #[test]
    fn closed_stdin_is_rejected() {
        let mut input = Cursor::new("");

        let result = prompt_for_root(&mut input, &mut Vec::new());

        assert!(matches!(result, Err(PromptError::Empty)));
    }
}
